//! The open set shared by both searchers: a binary min-heap over node indices keyed by F-cost.
//!
//! Nodes are never re-keyed in place. A node whose G-cost improves is pushed again and the
//! outdated entry is recognised and dropped when it surfaces (see [Frontier::pop]).
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::Cost;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialOrd> Eq for SmallestCostHolder<K> {}

impl<K: PartialOrd> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first. On a tie the larger cost (so the smaller remaining
        // estimate) goes first, then whichever entry was pushed earliest.
        match other
            .estimated_cost
            .partial_cmp(&self.estimated_cost)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => match self.cost.partial_cmp(&other.cost).unwrap_or(Ordering::Equal) {
                Ordering::Equal => other.sequence.cmp(&self.sequence),
                s => s,
            },
            s => s,
        }
    }
}

pub(crate) struct Frontier<C> {
    heap: BinaryHeap<SmallestCostHolder<C>>,
    pushed: usize,
}

impl<C: Cost> Frontier<C> {
    pub fn new() -> Frontier<C> {
        Frontier {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Queues `index` with G-cost `cost` and F-cost `estimated_cost`.
    pub fn push(&mut self, index: usize, cost: C, estimated_cost: C) {
        debug_assert!(
            estimated_cost.partial_cmp(&estimated_cost).is_some(),
            "cost {:?} is not comparable",
            estimated_cost
        );
        self.heap.push(SmallestCostHolder {
            estimated_cost,
            cost,
            sequence: self.pushed,
            index,
        });
        self.pushed += 1;
    }

    /// Pops the best entry as `(index, cost at push time)`. Callers compare the returned cost
    /// against the node's current G-cost to detect entries that have since been superseded.
    pub fn pop(&mut self) -> Option<(usize, C)> {
        self.heap.pop().map(|holder| (holder.index, holder.cost))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
