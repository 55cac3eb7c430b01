//! Huffman-encodes one line of text read from stdin.

fn main() {
    daa::cli::main_with(daa::cli::huffman::run);
}
