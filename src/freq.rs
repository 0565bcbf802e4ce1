use std::collections::HashMap;

/// Character occurrence counts for one input.
///
/// Iteration order is first-occurrence order in the input that built the
/// table. That ordering is irrelevant to the code lengths produced
/// downstream, but it pins down the tie-break in the tree builder, so
/// the whole pipeline is reproducible.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<char, u64>,
    order: Vec<char>,
}

impl FrequencyTable {
    /// Scan `input` and count every character.
    pub fn count(input: &str) -> Self {
        let mut table = Self::default();
        for ch in input.chars() {
            let count = table.counts.entry(ch).or_insert(0);
            if *count == 0 {
                table.order.push(ch);
            }
            *count += 1;
        }
        table
    }

    pub fn get(&self, ch: char) -> Option<u64> {
        self.counts.get(&ch).copied()
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sum of all counts, i.e. the length of the original input.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.order.iter().map(move |&ch| (ch, self.counts[&ch]))
    }
}
