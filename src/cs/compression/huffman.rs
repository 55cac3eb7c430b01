use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};

use bitvec::prelude::{BitVec, Msb0};
use log::{debug, trace};

use crate::cs::error::{Error, Result};

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A leaf node contains a character and its frequency.
    Leaf { ch: char, freq: usize },
    /// An internal node owns its two subtrees; `left` is reached with bit `0`.
    Internal {
        freq: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// Character to bit-string code, ordered by character.
pub type CodeTable = BTreeMap<char, String>;

/// Heap entry ordered so the lowest `(freq, seq)` pops first.
///
/// `seq` is the insertion number: leaves are numbered in first-occurrence order
/// and each merged node takes the next free number, which makes equal
/// frequencies resolve the same way on every run.
#[derive(Debug)]
struct HeapEntry {
    freq: usize,
    seq: usize,
    node: Box<HuffmanNode>,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: lower frequency, then earlier insertion, should come first.
        (other.freq, other.seq).cmp(&(self.freq, self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counts each character of `input`, listing characters in order of first appearance.
///
/// ```
/// use daa::cs::compression::huffman::build_frequency_table;
///
/// assert_eq!(build_frequency_table("abca"), vec![('a', 2), ('b', 1), ('c', 1)]);
/// ```
pub fn build_frequency_table(input: &str) -> Vec<(char, usize)> {
    let mut position: HashMap<char, usize> = HashMap::new();
    let mut table: Vec<(char, usize)> = Vec::new();
    for ch in input.chars() {
        match position.get(&ch) {
            Some(&idx) => table[idx].1 += 1,
            None => {
                position.insert(ch, table.len());
                table.push((ch, 1));
            }
        }
    }
    table
}

/// Builds the Huffman tree by repeatedly merging the two lowest-frequency nodes.
///
/// The first node popped becomes the left (`0`) child of the merged node.
///
/// # Errors
/// * `Error::EmptyInput` - if `freqs` is empty
/// * `Error::InvalidInput` - if a character appears more than once
///
/// # Complexity
/// * Time: O(k log k) for k distinct characters
/// * Space: O(k)
pub fn build_huffman_tree(freqs: &[(char, usize)]) -> Result<HuffmanNode> {
    let mut seen = HashSet::with_capacity(freqs.len());
    let mut heap = BinaryHeap::with_capacity(freqs.len());
    for (seq, &(ch, freq)) in freqs.iter().enumerate() {
        if !seen.insert(ch) {
            return Err(Error::invalid_input(format!(
                "character {:?} listed more than once",
                ch
            )));
        }
        heap.push(HeapEntry {
            freq,
            seq,
            node: Box::new(HuffmanNode::Leaf { ch, freq }),
        });
    }

    let mut next_seq = freqs.len();
    loop {
        let first = heap
            .pop()
            .ok_or_else(|| Error::empty_input("no characters to build a Huffman tree from"))?;
        let second = match heap.pop() {
            Some(entry) => entry,
            None => {
                debug!("huffman tree built from {} symbols", freqs.len());
                return Ok(*first.node);
            }
        };

        let freq = first.freq + second.freq;
        trace!("merging {} + {} -> {}", first.freq, second.freq, freq);
        heap.push(HeapEntry {
            freq,
            seq: next_seq,
            node: Box::new(HuffmanNode::Internal {
                freq,
                left: first.node,
                right: second.node,
            }),
        });
        next_seq += 1;
    }
}

/// Derives every leaf's code by depth-first traversal, appending `0` for the
/// left child and `1` for the right.
///
/// If the tree consists of a single leaf (i.e. one unique symbol), the code "0" is assigned.
pub fn build_code_table(node: &HuffmanNode) -> CodeTable {
    let mut table = CodeTable::new();
    generate_codes(node, String::new(), &mut table);
    table
}

fn generate_codes(node: &HuffmanNode, prefix: String, table: &mut CodeTable) {
    match node {
        HuffmanNode::Leaf { ch, .. } => {
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix
            };
            table.insert(*ch, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            generate_codes(left, left_prefix, table);
            let mut right_prefix = prefix;
            right_prefix.push('1');
            generate_codes(right, right_prefix, table);
        }
    }
}

fn code_for<'a>(code_table: &'a CodeTable, ch: char) -> Result<&'a str> {
    code_table
        .get(&ch)
        .map(String::as_str)
        .ok_or_else(|| Error::invalid_input(format!("no Huffman code for {:?}", ch)))
}

/// Encode the input string using the provided code table.
/// Each character is replaced with its Huffman code.
pub fn encode(input: &str, code_table: &CodeTable) -> Result<String> {
    input.chars().map(|ch| code_for(code_table, ch)).collect()
}

/// Encodes `input` straight into packed bits, most significant bit first.
pub fn encode_packed(input: &str, code_table: &CodeTable) -> Result<BitVec<u8, Msb0>> {
    let mut bits = BitVec::new();
    for ch in input.chars() {
        bits.extend(code_for(code_table, ch)?.bytes().map(|b| b == b'1'));
    }
    Ok(bits)
}

/// Decode an encoded bit string using the Huffman tree.
/// Traverses the tree according to each bit until a leaf is reached.
///
/// # Errors
/// * `Error::InvalidInput` - on a character other than `0`/`1`, or if the
///   bits stop partway through a code
pub fn decode(encoded: &str, tree: &HuffmanNode) -> Result<String> {
    // Special case: if tree is a leaf, each '0' represents one occurrence
    if let HuffmanNode::Leaf { ch, .. } = tree {
        return encoded
            .chars()
            .map(|bit| match bit {
                '0' => Ok(*ch),
                other => Err(Error::invalid_input(format!(
                    "unexpected bit {:?} for single-symbol tree",
                    other
                ))),
            })
            .collect();
    }

    let mut result = String::new();
    let mut current = tree;
    for bit in encoded.chars() {
        if let HuffmanNode::Internal { left, right, .. } = current {
            current = match bit {
                '0' => left.as_ref(),
                '1' => right.as_ref(),
                other => {
                    return Err(Error::invalid_input(format!("unexpected bit {:?}", other)))
                }
            };
        }
        if let HuffmanNode::Leaf { ch, .. } = current {
            result.push(*ch);
            current = tree;
        }
    }

    if !std::ptr::eq(current, tree) {
        return Err(Error::invalid_input("encoded bits end in the middle of a code"));
    }
    Ok(result)
}

/// Decodes by greedily matching accumulated bits against the code table.
///
/// Correct for any prefix-free table, without needing the tree.
pub fn decode_with_codes(encoded: &str, code_table: &CodeTable) -> Result<String> {
    let lookup: HashMap<&str, char> = code_table
        .iter()
        .map(|(&ch, code)| (code.as_str(), ch))
        .collect();

    let mut result = String::new();
    let mut start = 0;
    for (idx, bit) in encoded.char_indices() {
        if bit != '0' && bit != '1' {
            return Err(Error::invalid_input(format!("unexpected bit {:?}", bit)));
        }
        if let Some(&ch) = lookup.get(&encoded[start..=idx]) {
            result.push(ch);
            start = idx + 1;
        }
    }

    if start != encoded.len() {
        return Err(Error::invalid_input("encoded bits end in the middle of a code"));
    }
    Ok(result)
}

/// Returns true if no code in the table is a prefix of another.
pub fn is_prefix_free(code_table: &CodeTable) -> bool {
    let codes: Vec<&String> = code_table.values().collect();
    codes.iter().enumerate().all(|(i, a)| {
        codes
            .iter()
            .enumerate()
            .all(|(j, b)| i == j || !b.starts_with(a.as_str()))
    })
}

/// Convenience function: builds the Huffman tree from input, encodes the input,
/// and returns (encoded bit string, Huffman tree).
pub fn huffman_encode(input: &str) -> Result<(String, HuffmanNode)> {
    let freq_table = build_frequency_table(input);
    let tree = build_huffman_tree(&freq_table)?;
    let code_table = build_code_table(&tree);
    let encoded = encode(input, &code_table)?;
    Ok((encoded, tree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_table() {
        let freq = build_frequency_table("aabccc");
        assert_eq!(freq, vec![('a', 2), ('b', 1), ('c', 3)]);
    }

    #[test]
    fn test_known_codes() {
        let tree = build_huffman_tree(&build_frequency_table("aabcddd")).unwrap();
        let codes = build_code_table(&tree);
        assert_eq!(codes[&'a'], "10");
        assert_eq!(codes[&'b'], "110");
        assert_eq!(codes[&'c'], "111");
        assert_eq!(codes[&'d'], "0");
        let encoded = encode("aabcddd", &codes).unwrap();
        assert_eq!(encoded, "1010110111000");
        assert_eq!(decode(&encoded, &tree).unwrap(), "aabcddd");
        assert_eq!(tree.freq(), 7);
    }

    #[test]
    fn test_huffman_tree_and_code_table() {
        let input = "this is an example for huffman encoding";
        let tree = build_huffman_tree(&build_frequency_table(input)).unwrap();
        let code_table = build_code_table(&tree);
        // Each character in input must have a code.
        for ch in input.chars() {
            assert!(code_table.contains_key(&ch), "Missing code for '{}'", ch);
        }
        assert!(is_prefix_free(&code_table));
    }

    #[test]
    fn test_encode_decode() {
        let input = "huffman coding in rust is fun!";
        let (encoded, tree) = huffman_encode(input).unwrap();
        assert_eq!(decode(&encoded, &tree).unwrap(), input);

        let codes = build_code_table(&tree);
        assert_eq!(decode_with_codes(&encoded, &codes).unwrap(), input);
    }

    #[test]
    fn test_unicode_round_trip() {
        let input = "naïve café ☕☕";
        let (encoded, tree) = huffman_encode(input).unwrap();
        let codes = build_code_table(&tree);
        assert_eq!(decode_with_codes(&encoded, &codes).unwrap(), input);
    }

    #[test]
    fn test_single_character() {
        let input = "aaaaaaa";
        let (encoded, tree) = huffman_encode(input).unwrap();
        assert!(tree.is_leaf());
        // With a single symbol, the assigned code is "0" for each occurrence.
        assert_eq!(encoded, "0".repeat(input.len()));
        assert_eq!(decode(&encoded, &tree).unwrap(), input);
        assert_eq!(
            decode_with_codes(&encoded, &build_code_table(&tree)).unwrap(),
            input
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(huffman_encode(""), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn test_duplicate_character_rejected() {
        assert!(matches!(
            build_huffman_tree(&[('a', 1), ('a', 2)]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_bits() {
        let (_, tree) = huffman_encode("aabcddd").unwrap();
        let codes = build_code_table(&tree);
        assert!(decode("102", &tree).is_err());
        assert!(decode("11", &tree).is_err());
        assert!(decode_with_codes("11", &codes).is_err());
        assert!(decode_with_codes("0x", &codes).is_err());
    }

    #[test]
    fn test_encode_unknown_character() {
        let codes = build_code_table(&build_huffman_tree(&[('a', 1), ('b', 1)]).unwrap());
        assert!(matches!(encode("abc", &codes), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_packed_matches_string() {
        let input = "abracadabra";
        let tree = build_huffman_tree(&build_frequency_table(input)).unwrap();
        let codes = build_code_table(&tree);
        let text = encode(input, &codes).unwrap();
        let bits = encode_packed(input, &codes).unwrap();
        assert_eq!(bits.len(), text.len());
        let rendered: String = bits.iter().map(|b| if *b { '1' } else { '0' }).collect();
        assert_eq!(rendered, text);
    }

    #[test]
    fn test_weighted_length_is_optimal() {
        // Frequencies 5, 9, 12, 13, 16, 45 give a minimal weighted length of 224.
        let freqs = [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];
        let codes = build_code_table(&build_huffman_tree(&freqs).unwrap());
        let total: usize = freqs.iter().map(|(ch, f)| f * codes[ch].len()).sum();
        assert_eq!(total, 224);
        assert_eq!(codes[&'f'], "0");
    }
}
