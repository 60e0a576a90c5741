use log::debug;
use std::cmp::Ordering;

use crate::labelling::{Label, LabelOrder};

/// Bounded, ordered multiset of candidate sink-reaching labels.
///
/// Labels are kept sorted under a `LabelOrder`; equal keys keep their
/// insertion order. After any insertion the tracker holds fewer than `k`
/// labels, so it settles on the `k - 1` best labels seen so far.
#[derive(Debug, Clone)]
pub struct KBestLabels {
    /// Sorted labels, best first
    labels: Vec<Label>,
    order: LabelOrder,
    k: usize,
}

impl KBestLabels {
    /// Creates an empty tracker with bound `k`
    pub fn new(order: LabelOrder, k: usize) -> Self {
        KBestLabels {
            labels: Vec::new(),
            order,
            k,
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Switches to another ordering, keeping insertion order among equal keys
    pub fn reorder(&mut self, order: LabelOrder) {
        self.order = order;
        self.labels.sort_by(|a, b| order.compare(a, b));
    }

    /// Inserts a label, then evicts the worst labels until fewer than `k` remain.
    ///
    /// A lone placeholder (a single-vertex label) is dropped before inserting.
    pub fn record(&mut self, label: Label) {
        if self.labels.len() == 1 && self.labels[0].path().len() == 1 {
            debug!("Dropping placeholder label {}", self.labels[0]);
            self.labels.clear();
        }

        let pos = self
            .labels
            .partition_point(|stored| self.order.compare(stored, &label) != Ordering::Greater);
        self.labels.insert(pos, label);

        while self.labels.len() >= self.k {
            if let Some(evicted) = self.labels.pop() {
                debug!("Evicting label {} from the k-best tracker (k = {})", evicted, self.k);
            }
        }
    }

    /// Best label tracked so far
    pub fn best(&self) -> Option<&Label> {
        self.labels.first()
    }

    /// Worst label still tracked
    pub fn worst(&self) -> Option<&Label> {
        self.labels.last()
    }

    /// Returns the `rank`-th best label (0-based)
    pub fn get(&self, rank: usize) -> Option<&Label> {
        self.labels.get(rank)
    }

    /// Iterates best to worst
    pub fn iter(&self) -> impl Iterator<Item = &Label> + '_ {
        self.labels.iter()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn into_vec(self) -> Vec<Label> {
        self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Direction, Params};
    use std::sync::Arc;

    fn label(path: Vec<usize>, value: f64) -> Label {
        Label::new(value, path, vec![value], Arc::new(Params::default()))
    }

    fn values(tracker: &KBestLabels) -> Vec<f64> {
        tracker.iter().map(|l| l.weight()).collect()
    }

    #[test]
    fn test_keeps_k_minus_one_best() {
        let mut tracker = KBestLabels::new(LabelOrder::new(Direction::Forward, 0).unwrap(), 3);
        for v in [5.0, 2.0, 8.0, 1.0] {
            tracker.record(label(vec![0, 1], v));
            assert!(tracker.len() < 3);
        }
        assert_eq!(values(&tracker), vec![1.0, 2.0]);
        assert_eq!(tracker.best().map(|l| l.weight()), Some(1.0));
        assert_eq!(tracker.worst().map(|l| l.weight()), Some(2.0));
    }

    #[test]
    fn test_backward_keeps_largest() {
        let mut tracker = KBestLabels::new(LabelOrder::new(Direction::Backward, 0).unwrap(), 3);
        for v in [5.0, 2.0, 8.0, 1.0] {
            tracker.record(label(vec![9, 1], v));
        }
        assert_eq!(values(&tracker), vec![8.0, 5.0]);
    }

    #[test]
    fn test_k_one_holds_nothing() {
        let mut tracker = KBestLabels::new(LabelOrder::new(Direction::Forward, 0).unwrap(), 1);
        tracker.record(label(vec![0, 1], 1.0));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_placeholder_is_dropped() {
        let mut tracker = KBestLabels::new(LabelOrder::new(Direction::Forward, 0).unwrap(), 4);
        tracker.record(label(vec![0], 0.0));
        assert_eq!(tracker.len(), 1);
        tracker.record(label(vec![0, 1], 3.0));
        assert_eq!(values(&tracker), vec![3.0]);
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let mut tracker = KBestLabels::new(LabelOrder::new(Direction::Forward, 0).unwrap(), 4);
        tracker.record(Label::new(1.0, vec![0, 1], vec![2.0], Arc::new(Params::default())));
        tracker.record(Label::new(2.0, vec![0, 2], vec![2.0], Arc::new(Params::default())));
        assert_eq!(tracker.get(0).map(|l| l.weight()), Some(1.0));
        assert_eq!(tracker.get(1).map(|l| l.weight()), Some(2.0));
    }
}
