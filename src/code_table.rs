use std::collections::HashMap;

use crate::{bits::BitString, tree::HuffmanTree};

/// Per-character bit codes derived from one Huffman tree.
///
/// Codes are root-to-leaf paths, so no code is a prefix of another.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: HashMap<char, BitString>,
}

impl CodeTable {
    /// Walk the tree depth-first, recording each leaf's path as that
    /// character's code. A left edge appends '0', a right edge '1'.
    ///
    /// The walk uses an explicit stack: tree height is bounded only by
    /// alphabet size, and skewed frequency distributions (Fibonacci-like
    /// counts) reach that bound.
    pub(crate) fn derive(tree: &HuffmanTree) -> Self {
        let mut codes = HashMap::new();
        let mut stack = vec![(&tree.root, BitString::new())];

        while let Some((node, path)) = stack.pop() {
            if node.is_leaf() {
                if let Some(ch) = node.symbol() {
                    codes.insert(ch, path);
                }
                continue;
            }
            // Either child may be absent: the synthetic single-leaf root
            // has no right child.
            if let Some(right) = node.right.as_deref() {
                let mut branch = path.clone();
                branch.push(true);
                stack.push((right, branch));
            }
            if let Some(left) = node.left.as_deref() {
                let mut branch = path;
                branch.push(false);
                stack.push((left, branch));
            }
        }

        Self { codes }
    }

    pub fn get(&self, ch: char) -> Option<&BitString> {
        self.codes.get(&ch)
    }

    /// Number of characters with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &BitString)> {
        self.codes.iter().map(|(&ch, code)| (ch, code))
    }
}
