//! Presentation helpers for the encode result.
//!
//! None of this feeds back into the algorithm; it only shapes the
//! result for display. Kept out of the pipeline modules so the core
//! stays a pure in-memory transformation.

use crate::{BitString, HuffmanEncoded};

/// One row of the code/frequency display table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Human-readable symbol label; see [`display_symbol`].
    pub symbol: String,
    pub frequency: u64,
    /// The code as '0'/'1' text.
    pub code: String,
    pub length: usize,
}

/// Rows for every character, sorted ascending by code length (ties by
/// symbol label, so output is stable across runs).
pub fn table_rows(encoded: &HuffmanEncoded) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = encoded
        .codes
        .iter()
        .map(|(ch, code)| TableRow {
            symbol: display_symbol(ch),
            frequency: encoded.frequencies.get(ch).unwrap_or(0),
            code: code.to_string(),
            length: code.len(),
        })
        .collect();
    rows.sort_by(|a, b| a.length.cmp(&b.length).then_with(|| a.symbol.cmp(&b.symbol)));
    rows
}

/// Label for a character in the display table. Whitespace that would
/// render invisibly gets a name; the underlying character identity used
/// by the algorithm is untouched.
pub fn display_symbol(ch: char) -> String {
    match ch {
        ' ' => "Space".into(),
        '\n' => "New Line".into(),
        _ => ch.to_string(),
    }
}

/// Encoded size in whole bytes: `ceil(bits / 8)`.
pub fn encoded_bytes(bits: &BitString) -> usize {
    (bits.len() + 7) / 8
}

/// Encoded-bytes to input-characters ratio, as a percentage.
pub fn compression_ratio(encoded_bytes: usize, input_chars: usize) -> f64 {
    100.0 * encoded_bytes as f64 / input_chars as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman_encode;

    #[test]
    fn rows_are_sorted_by_code_length() {
        let encoded = huffman_encode("aaaabbc").unwrap();
        let rows = table_rows(&encoded);
        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|pair| pair[0].length <= pair[1].length));
        // 'a' dominates the input, so it comes first.
        assert_eq!(rows[0].symbol, "a");
        assert_eq!(rows[0].frequency, 4);
    }

    #[test]
    fn whitespace_gets_readable_labels() {
        assert_eq!(display_symbol(' '), "Space");
        assert_eq!(display_symbol('\n'), "New Line");
        assert_eq!(display_symbol('x'), "x");

        // The labels are display-only: the table itself is still keyed
        // by the real characters.
        let encoded = huffman_encode("a a\na").unwrap();
        assert!(encoded.codes.get(' ').is_some());
        assert!(encoded.codes.get('\n').is_some());
    }

    #[test]
    fn byte_count_rounds_up() {
        let encoded = huffman_encode("aaaa").unwrap();
        assert_eq!(encoded.bits.len(), 4);
        assert_eq!(encoded_bytes(&encoded.bits), 1);

        let encoded = huffman_encode("aaaaaaaaa").unwrap();
        assert_eq!(encoded.bits.len(), 9);
        assert_eq!(encoded_bytes(&encoded.bits), 2);
    }

    #[test]
    fn ratio_is_bytes_over_characters() {
        // 4 chars -> 4 bits -> 1 byte -> 25 %.
        let encoded = huffman_encode("aaaa").unwrap();
        let bytes = encoded_bytes(&encoded.bits);
        assert_eq!(compression_ratio(bytes, 4), 25.0);
    }
}
