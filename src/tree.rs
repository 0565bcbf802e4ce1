use log::debug;

use crate::{freq::FrequencyTable, heap::MinHeap};

/// A node of the Huffman tree.
///
/// A node is a leaf exactly when both children are `None`. Internal
/// nodes carry the concatenated labels of the leaves beneath them; only
/// a leaf's label is ever looked up as a character.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub label: String,
    pub frequency: u64,
    /// Creation sequence number; the tie-break key for equal frequencies.
    seq: u64,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    fn leaf(ch: char, frequency: u64, seq: u64) -> Self {
        Self {
            label: ch.to_string(),
            frequency,
            seq,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The character of a leaf; `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        if self.is_leaf() {
            self.label.chars().next()
        } else {
            None
        }
    }
}

/// The single tree produced by the greedy merge. Owns every node; leaves
/// correspond 1:1 to the distinct characters of the input.
#[derive(Debug, Clone)]
pub(crate) struct HuffmanTree {
    pub root: Node,
}

impl HuffmanTree {
    /// Greedily merge the two lowest-frequency trees until one remains.
    ///
    /// Equal frequencies break toward the earlier-created node: leaves
    /// in first-occurrence order, then merge nodes in creation order.
    /// The second node dequeued in each round becomes the left child.
    ///
    /// Panics if `table` is empty; callers reject empty input upstream.
    pub fn build(table: &FrequencyTable) -> Self {
        assert!(!table.is_empty(), "cannot build a tree from an empty frequency table");

        let mut next_seq = 0u64;
        let mut queue = MinHeap::new(|a: &Node, b: &Node| {
            (a.frequency, a.seq).cmp(&(b.frequency, b.seq))
        });
        for (ch, frequency) in table.iter() {
            queue.push(Node::leaf(ch, frequency, next_seq));
            next_seq += 1;
        }

        while queue.len() > 1 {
            let (smaller, bigger) = match (queue.pop(), queue.pop()) {
                (Some(a), Some(b)) => (a, b),
                _ => unreachable!("queue holds at least two trees"),
            };
            let merged = Node {
                label: format!("{}{}", bigger.label, smaller.label),
                frequency: smaller.frequency + bigger.frequency,
                seq: next_seq,
                left: Some(Box::new(bigger)),
                right: Some(Box::new(smaller)),
            };
            next_seq += 1;
            queue.push(merged);
        }

        let root = match queue.pop() {
            Some(root) => root,
            None => unreachable!("frequency table is non-empty"),
        };

        // A lone leaf must still sit one edge below the root, so that the
        // traversal hands it a non-empty code ("0").
        let root = if root.is_leaf() {
            Node {
                label: root.label.clone(),
                frequency: root.frequency,
                seq: next_seq,
                left: Some(Box::new(root)),
                right: None,
            }
        } else {
            root
        };

        debug!("built huffman tree over {} distinct characters", table.len());
        Self { root }
    }
}
