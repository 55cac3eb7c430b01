use std::io::{BufRead, Write};

use log::debug;

use crate::cli::{write_complexity, Prompter};
use crate::cs::compression::huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, encode, encode_packed,
};
use crate::cs::error::{Error, Result};

const COMPLEXITY: &str = "\
Time Complexity: O(n log n)  (due to heap operations while building the tree)
Space Complexity: O(n)       (for storing the tree and code dictionary)";

/// Reads a line of text and prints its Huffman code table and encoding.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<()> {
    let text = p.read_line("Enter a string to encode: ")?;
    if text.is_empty() {
        return Err(Error::empty_input("nothing to encode"));
    }

    let freqs = build_frequency_table(&text);
    let tree = build_huffman_tree(&freqs)?;
    let codes = build_code_table(&tree);
    let encoded = encode(&text, &codes)?;
    let packed = encode_packed(&text, &codes)?;
    debug!(
        "{} distinct characters, {} bits encoded",
        codes.len(),
        packed.len()
    );

    let out = p.output();
    writeln!(out)?;
    writeln!(out, "--- Huffman Codes for each character ---")?;
    for (ch, code) in &codes {
        writeln!(out, "{} : {}", ch, code)?;
    }

    writeln!(out)?;
    writeln!(out, "Encoded text: {}", encoded)?;

    let original_bits = text.len() * 8;
    writeln!(
        out,
        "Encoded size: {} bits ({} bytes packed) vs {} bits uncompressed",
        packed.len(),
        packed.as_raw_slice().len(),
        original_bits
    )?;

    write_complexity(out, "--- Time and Space Complexity ---", COMPLEXITY)
}
