/// An error from [`huffman_encode`].
///
/// [`huffman_encode`]: crate::huffman_encode
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The input had no characters. The stages past the frequency counter
    /// have no defined behavior for an empty alphabet, so this is
    /// rejected at the public boundary.
    #[error("input is empty")]
    EmptyInput,

    /// A character had no entry in the code table. Only reachable when a
    /// table is paired with input it was not derived from; a contract
    /// violation, not something to substitute a default for.
    #[error("no code for character {0:?}")]
    MissingCode(char),
}
