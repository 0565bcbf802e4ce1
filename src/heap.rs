use std::cmp::Ordering;

/// A binary min-heap ordered by a caller-supplied comparator.
///
/// `pop` removes whichever element the comparator ranks smallest. The
/// heap itself imposes no ordering beyond the comparator; callers that
/// need a deterministic pop sequence for equal elements must fold a
/// tie-break into the comparator.
pub struct MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    elements: Vec<T>,
    compare: C,
}

impl<T, C> MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> Self {
        Self {
            elements: Vec::new(),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The minimum element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Remove and return the minimum element.
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if (self.compare)(&self.elements[i], &self.elements[parent]) == Ordering::Less {
                self.elements.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < self.elements.len()
                && (self.compare)(&self.elements[left], &self.elements[smallest])
                    == Ordering::Less
            {
                smallest = left;
            }
            if right < self.elements.len()
                && (self.compare)(&self.elements[right], &self.elements[smallest])
                    == Ordering::Less
            {
                smallest = right;
            }

            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_order() {
        let mut heap = MinHeap::new(u32::cmp);
        for x in [5, 1, 4, 1, 5, 9, 2, 6] {
            heap.push(x);
        }
        assert_eq!(heap.len(), 8);

        let mut popped = vec![];
        while let Some(x) = heap.pop() {
            popped.push(x);
        }
        assert_eq!(popped, vec![1, 1, 2, 4, 5, 5, 6, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn comparator_controls_the_order() {
        // Reversed comparator turns it into a max-heap.
        let mut heap = MinHeap::new(|a: &u32, b: &u32| b.cmp(a));
        for x in [3, 7, 1] {
            heap.push(x);
        }
        assert_eq!(heap.pop(), Some(7));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn peek_leaves_the_minimum_in_place() {
        let mut heap = MinHeap::new(i32::cmp);
        assert!(heap.peek().is_none());
        heap.push(2);
        heap.push(-1);
        assert_eq!(heap.peek(), Some(&-1));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.pop(), Some(-1));
    }

    #[test]
    fn secondary_key_breaks_ties_deterministically() {
        // Pairs of (weight, insertion index), compared on both.
        let mut heap = MinHeap::new(<(u64, usize)>::cmp);
        for (i, w) in [2u64, 1, 2, 1].into_iter().enumerate() {
            heap.push((w, i));
        }
        assert_eq!(heap.pop(), Some((1, 1)));
        assert_eq!(heap.pop(), Some((1, 3)));
        assert_eq!(heap.pop(), Some((2, 0)));
        assert_eq!(heap.pop(), Some((2, 2)));
    }
}
