//! Compression algorithms implementation.
//!
//! This module provides Huffman coding: a greedy, prefix-free, variable-length
//! code built from character frequencies.
//!
//! # Examples
//!
//! ```rust
//! use daa::cs::compression::{build_code_table, build_frequency_table, build_huffman_tree, encode};
//!
//! let text = "aabcddd";
//! let tree = build_huffman_tree(&build_frequency_table(text)).unwrap();
//! let codes = build_code_table(&tree);
//! assert_eq!(encode(text, &codes).unwrap(), "1010110111000");
//! ```

pub mod huffman;
pub use huffman::{
    build_code_table, build_frequency_table, build_huffman_tree, decode, decode_with_codes,
    encode, encode_packed, huffman_encode, is_prefix_free, CodeTable, HuffmanNode,
};
