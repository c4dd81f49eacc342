//! Orderings of generated-but-unexpanded nodes.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use crate::puzzle::State;

/// Index of a node in the search's parent arena.
pub type NodeId = usize;

/// A frontier entry. `parent` links back into the arena the driver keeps,
/// so a path is rebuilt only once, for the goal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: State,
    pub depth: u32,
    pub id: NodeId,
    /// `heuristic + depth` for A*; zero for the blind strategies.
    pub priority: u32,
}

pub trait Frontier {
    fn push(&mut self, node: SearchNode);

    /// Next node to expand, without removing it.
    fn peek(&self) -> Option<&SearchNode>;

    fn pop(&mut self) -> Option<SearchNode>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Expands shallowest nodes first.
#[derive(Debug, Default)]
pub struct Fifo(VecDeque<SearchNode>);

impl Frontier for Fifo {
    fn push(&mut self, node: SearchNode) {
        self.0.push_back(node);
    }

    fn peek(&self) -> Option<&SearchNode> {
        self.0.front()
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out. Expands the most recently generated node first.
#[derive(Debug, Default)]
pub struct Lifo(Vec<SearchNode>);

impl Frontier for Lifo {
    fn push(&mut self, node: SearchNode) {
        self.0.push(node);
    }

    fn peek(&self) -> Option<&SearchNode> {
        self.0.last()
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Heap entry ordered by priority, then by insertion sequence.
#[derive(Debug)]
struct Ranked {
    priority: u32,
    seq: u64,
    node: SearchNode,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.seq).cmp(&(other.priority, other.seq))
    }
}

/// Lowest `priority` first; equal priorities leave in insertion order.
#[derive(Debug, Default)]
pub struct MinPriority {
    heap: BinaryHeap<Reverse<Ranked>>,
    next_seq: u64,
}

impl Frontier for MinPriority {
    fn push(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Ranked {
            priority: node.priority,
            seq,
            node,
        }));
    }

    fn peek(&self) -> Option<&SearchNode> {
        self.heap.peek().map(|Reverse(r)| &r.node)
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|Reverse(r)| r.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::GOAL;

    fn node(id: NodeId, priority: u32) -> SearchNode {
        SearchNode {
            state: GOAL,
            depth: 0,
            id,
            priority,
        }
    }

    fn drain(frontier: &mut impl Frontier) -> Vec<NodeId> {
        let mut order = Vec::new();
        while let Some(n) = frontier.pop() {
            order.push(n.id);
        }
        order
    }

    #[test]
    fn fifo_keeps_insertion_order() {
        let mut f = Fifo::default();
        for id in 0..4 {
            f.push(node(id, 0));
        }
        assert_eq!(f.peek().map(|n| n.id), Some(0));
        assert_eq!(drain(&mut f), vec![0, 1, 2, 3]);
        assert!(f.is_empty());
    }

    #[test]
    fn lifo_reverses_insertion_order() {
        let mut f = Lifo::default();
        for id in 0..4 {
            f.push(node(id, 0));
        }
        assert_eq!(f.peek().map(|n| n.id), Some(3));
        assert_eq!(drain(&mut f), vec![3, 2, 1, 0]);
    }

    #[test]
    fn min_priority_breaks_ties_by_arrival() {
        let mut f = MinPriority::default();
        f.push(node(0, 5));
        f.push(node(1, 3));
        f.push(node(2, 5));
        f.push(node(3, 3));
        f.push(node(4, 1));
        assert_eq!(f.len(), 5);
        assert_eq!(f.peek().map(|n| n.id), Some(4));
        assert_eq!(drain(&mut f), vec![4, 1, 3, 0, 2]);
    }
}
