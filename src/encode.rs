use log::debug;

use crate::{bits::BitString, code_table::CodeTable, errors::EncodeError};

/// Encode `input` by concatenating each character's code, in input order.
///
/// Every character of `input` must have an entry in `table` (guaranteed
/// when the table was derived from this same input). A miss aborts the
/// whole encode with [`EncodeError::MissingCode`]; no partial output is
/// returned.
pub fn encode(input: &str, table: &CodeTable) -> Result<BitString, EncodeError> {
    let mut bits = BitString::new();
    let mut chars = 0usize;
    for ch in input.chars() {
        let code = table.get(ch).ok_or(EncodeError::MissingCode(ch))?;
        bits.extend(code);
        chars += 1;
    }
    debug!("encoded {chars} characters into {} bits", bits.len());
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{freq::FrequencyTable, tree::HuffmanTree};

    fn table_for(input: &str) -> CodeTable {
        CodeTable::derive(&HuffmanTree::build(&FrequencyTable::count(input)))
    }

    #[test]
    fn concatenates_codes_in_input_order() {
        let table = table_for("aab");
        let bits = encode("aab", &table).unwrap();
        assert_eq!(bits.to_string(), "001");
    }

    #[test]
    fn output_length_is_the_sum_of_code_lengths() {
        let input = "compression ratio";
        let table = table_for(input);
        let bits = encode(input, &table).unwrap();
        let expected: usize = input
            .chars()
            .map(|ch| table.get(ch).map_or(0, BitString::len))
            .sum();
        assert_eq!(bits.len(), expected);
    }

    #[test]
    fn unknown_character_fails_fast() {
        let table = table_for("aab");
        let err = encode("abc", &table).unwrap_err();
        assert_eq!(err, EncodeError::MissingCode('c'));
    }
}
