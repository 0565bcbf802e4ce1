//! Huffman coding for text.
//!
//! Builds a prefix-free variable-length code from the character
//! frequencies of an input string, then encodes the input against it.
//! The encoded output is a bit-string reported as '0'/'1' text, not a
//! packed byte buffer, and there is no decoding path.
//!
//! ```
//! let encoded = huffcode::huffman_encode("aaaab")?;
//!
//! assert_eq!(encoded.frequencies.get('a'), Some(4));
//! assert_eq!(encoded.codes.get('a').unwrap().len(), 1);
//! assert_eq!(encoded.bits.len(), 5);
//! # Ok::<(), huffcode::EncodeError>(())
//! ```

mod bits;
mod code_table;
mod encode;
mod errors;
mod freq;
mod heap;
mod tree;

pub mod report;

pub use bits::BitString;
pub use code_table::CodeTable;
pub use encode::encode;
pub use errors::EncodeError;
pub use freq::FrequencyTable;

use tree::HuffmanTree;

/// Everything produced by one encode call.
///
/// Each call owns its own tables and bit-string; nothing is shared or
/// cached across calls.
#[derive(Debug, Clone)]
pub struct HuffmanEncoded {
    pub frequencies: FrequencyTable,
    pub codes: CodeTable,
    pub bits: BitString,
}

/// Run the whole pipeline over `input`: count character frequencies,
/// build the Huffman tree, derive the code table, and encode the input
/// against it.
///
/// Empty input is rejected with [`EncodeError::EmptyInput`]; the stages
/// past the counter have no defined behavior for an empty alphabet.
pub fn huffman_encode(input: &str) -> Result<HuffmanEncoded, EncodeError> {
    if input.is_empty() {
        return Err(EncodeError::EmptyInput);
    }

    let frequencies = FrequencyTable::count(input);
    let tree = HuffmanTree::build(&frequencies);
    let codes = CodeTable::derive(&tree);
    let bits = encode::encode(input, &codes)?;

    Ok(HuffmanEncoded {
        frequencies,
        codes,
        bits,
    })
}
