//! Array-backed binary min-heap over tree nodes.
//!
//! Ordering is by node weight alone. Equal weights carry no secondary key:
//! how ties land is exactly the sift mechanics below (sift-up stops at an
//! equal parent, sift-down prefers the left child on equal children), which
//! keeps the merge order identical to the reference encoder's and therefore
//! keeps the rebuilt tree bit-compatible with its output.

use crate::tree::Node;

/// Min-priority queue used by the tree builder.
#[derive(Debug, Default)]
pub struct MinHeap {
    arr: Vec<Box<Node>>,
}

impl MinHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { arr: Vec::new() }
    }

    /// Number of queued nodes.
    pub fn len(&self) -> usize {
        self.arr.len()
    }

    /// True if no nodes are queued.
    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    /// Insert a node, sifting it up while it is strictly lighter than its
    /// parent.
    pub fn push(&mut self, node: Box<Node>) {
        self.arr.push(node);
        let mut child = self.arr.len() - 1;
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.arr[parent].weight() <= self.arr[child].weight() {
                return;
            }
            self.arr.swap(parent, child);
            child = parent;
        }
    }

    /// Remove and return the minimum-weight node.
    ///
    /// The last element takes the root's slot and sifts down, swapping with
    /// the smaller child (left on ties) until the heap property holds again.
    ///
    /// # Panics
    ///
    /// Panics with an index-out-of-range if the heap is empty; popping an
    /// empty queue is a caller bug, not a recoverable state.
    pub fn pop(&mut self) -> Box<Node> {
        let top = self.arr.swap_remove(0);

        let mut parent = 0;
        loop {
            let mut child = 2 * parent + 1;
            if child >= self.arr.len() {
                break;
            }
            if child + 1 < self.arr.len()
                && self.arr[child + 1].weight() < self.arr[child].weight()
            {
                child += 1;
            }
            if self.arr[parent].weight() <= self.arr[child].weight() {
                break;
            }
            self.arr.swap(parent, child);
            parent = child;
        }

        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(symbol: u8, weight: u64) -> Box<Node> {
        Box::new(Node::Leaf { symbol, weight })
    }

    #[test]
    fn pops_in_ascending_weight_order() {
        let mut heap = MinHeap::new();
        for (symbol, weight) in [(b'a', 9), (b'b', 1), (b'c', 4), (b'd', 7), (b'e', 2)] {
            heap.push(leaf(symbol, weight));
        }

        let mut weights = Vec::new();
        while !heap.is_empty() {
            weights.push(heap.pop().weight());
        }
        assert_eq!(weights, vec![1, 2, 4, 7, 9]);
    }

    #[test]
    fn interleaved_push_pop() {
        let mut heap = MinHeap::new();
        heap.push(leaf(b'a', 5));
        heap.push(leaf(b'b', 3));
        assert_eq!(heap.pop().weight(), 3);

        heap.push(leaf(b'c', 1));
        heap.push(leaf(b'd', 8));
        assert_eq!(heap.pop().weight(), 1);
        assert_eq!(heap.pop().weight(), 5);
        assert_eq!(heap.pop().weight(), 8);
        assert!(heap.is_empty());
    }

    #[test]
    fn single_element() {
        let mut heap = MinHeap::new();
        heap.push(leaf(b'x', 42));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.pop().weight(), 42);
        assert!(heap.is_empty());
    }

    #[test]
    #[should_panic]
    fn pop_on_empty_panics() {
        let mut heap = MinHeap::new();
        heap.pop();
    }
}
