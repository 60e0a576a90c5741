use crate::labelling::{Label, LabelOrder};

/// Binary heap of unprocessed labels kept in a plain vector.
///
/// The root is the label that comes first under the heap's `LabelOrder`, so a
/// forward heap behaves as a min-heap and a backward heap as a max-heap on the
/// critical resource. The vector layout is exposed through the explicit
/// `rebuild`/`sift_in_last` primitives for drivers that replace the frontier
/// in bulk.
#[derive(Debug, Clone)]
pub struct LabelHeap {
    /// Heap-ordered labels
    labels: Vec<Label>,
    order: LabelOrder,
}

impl LabelHeap {
    /// Creates a new empty heap
    pub fn new(order: LabelOrder) -> Self {
        LabelHeap {
            labels: Vec::new(),
            order,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the number of labels in the heap
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn order(&self) -> LabelOrder {
        self.order
    }

    /// Switches to another ordering and rebuilds the heap under it
    pub fn reorder(&mut self, order: LabelOrder) {
        self.order = order;
        self.rebuild();
    }

    /// Appends a label and restores heap order
    pub fn push(&mut self, label: Label) {
        self.labels.push(label);
        self.sift_in_last();
    }

    /// Restores heap order after a single append
    pub fn sift_in_last(&mut self) {
        if self.labels.len() > 1 {
            self.sift_up(self.labels.len() - 1);
        }
    }

    /// Re-establishes heap order over the whole vector
    pub fn rebuild(&mut self) {
        let len = self.labels.len();
        for idx in (0..len / 2).rev() {
            self.sift_down(idx);
        }
    }

    /// Replaces every label at once and rebuilds the heap
    pub fn replace_all(&mut self, labels: Vec<Label>) {
        self.labels = labels;
        self.rebuild();
    }

    /// Removes the root label
    pub fn pop(&mut self) -> Option<Label> {
        if self.labels.is_empty() {
            return None;
        }
        let root = self.labels.swap_remove(0);
        if !self.labels.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    /// Returns the root label without removing it
    pub fn peek(&self) -> Option<&Label> {
        self.labels.first()
    }

    /// Removes every label
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Iterates over the labels in heap (not sorted) order
    pub fn iter(&self) -> impl Iterator<Item = &Label> + '_ {
        self.labels.iter()
    }

    /// Read access to the heap layout
    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    /// Checks that no child comes before its parent
    pub fn is_heap(&self) -> bool {
        (1..self.labels.len()).all(|idx| {
            let parent = (idx - 1) / 2;
            !self.order.precedes(&self.labels[idx], &self.labels[parent])
        })
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.order.precedes(&self.labels[idx], &self.labels[parent]) {
                break;
            }
            self.labels.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.labels.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut first = left;
            if right < len && self.order.precedes(&self.labels[right], &self.labels[left]) {
                first = right;
            }
            if !self.order.precedes(&self.labels[first], &self.labels[idx]) {
                break;
            }
            self.labels.swap(idx, first);
            idx = first;
        }
    }
}
