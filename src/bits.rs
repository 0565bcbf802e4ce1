use std::fmt;

use bitvec::{order::Msb0, slice::BitSlice, vec::BitVec};

/// A growable sequence of bits.
///
/// This is the textual kind of bit-string: it renders as '0' and '1'
/// characters via [`Display`], and the encoded output is reported in
/// that form rather than as packed bytes.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: BitVec<u8, Msb0>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit (`false` = '0', `true` = '1').
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append all bits of `other`, in order.
    pub fn extend(&mut self, other: &BitString) {
        self.bits.extend_from_bitslice(&other.bits);
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Whether `self` is a (not necessarily proper) prefix of `other`.
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}
