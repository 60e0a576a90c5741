use log::{debug, trace, warn};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::algorithm::bidirectional::SearchFlags;
use crate::algorithm::statistics::SearchStatistics;
use crate::data_structures::{KBestLabels, LabelHeap};
use crate::labelling::{Label, LabelOrder};
use crate::params::{Direction, Params};
use crate::{Error, Result};

/// Default number of ranked paths a search is constructed with
pub const DEFAULT_K: usize = 4;

/// State of a single search direction of the bidirectional labelling algorithm.
///
/// A `Search` stores labels; it does not extend them or check dominance. An
/// external driver pops from the frontier, extends, checks dominance against
/// `efficient(vertex)` and feeds accepted labels back through the recording
/// operations below.
#[derive(Debug)]
pub struct Search {
    /// Direction of search
    direction: Direction,
    /// Bound of the k-best tracker
    k: usize,
    order: LabelOrder,
    /// Stopping criteria, written by the coordinator
    flags: Arc<SearchFlags>,
    stats: SearchStatistics,
    /// Lower bounds from any vertex to the opposite endpoint
    lower_bound_weight: Vec<f64>,
    visited_vertices: BTreeSet<usize>,
    current_label: Option<Label>,
    /// Best intermediate labels with possibly complete source-sink paths
    intermediate_labels: KBestLabels,
    /// Pareto optimal labels per vertex
    efficient_labels: HashMap<usize, Vec<Label>>,
    /// Last installed best label per vertex
    best_labels: HashMap<usize, Label>,
    /// Frontier, increasing in the critical resource forward and decreasing backward
    unprocessed_labels: LabelHeap,
}

impl Search {
    /// Creates a search for one direction, ordered on resource 0
    pub fn new(direction: Direction, k: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidK(k));
        }
        let order = LabelOrder::new(direction, 0)?;
        debug!("Creating {} search with k = {}", direction, k);

        Ok(Search {
            direction,
            k,
            order,
            flags: Arc::new(SearchFlags::new()),
            stats: SearchStatistics::default(),
            lower_bound_weight: Vec::new(),
            visited_vertices: BTreeSet::new(),
            current_label: None,
            intermediate_labels: KBestLabels::new(order, k),
            efficient_labels: HashMap::new(),
            best_labels: HashMap::new(),
            unprocessed_labels: LabelHeap::new(order),
        })
    }

    /// Creates a search for one direction from validated parameters
    pub fn from_params(direction: Direction, params: &Params) -> Result<Self> {
        params.validate()?;
        Ok(Search::new(direction, params.k)?.with_critical_resource(params.critical_res))
    }

    /// Orders the frontier and the tracker on another resource
    pub fn with_critical_resource(mut self, critical_res: usize) -> Self {
        self.order = self.order.with_critical_res(critical_res);
        self.unprocessed_labels.reorder(self.order);
        self.intermediate_labels.reorder(self.order);
        self
    }

    /// Reserves room in the per-vertex stores; they still accept any vertex id
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        let reserved = self
            .efficient_labels
            .try_reserve(vertex_count)
            .and_then(|_| self.best_labels.try_reserve(vertex_count));
        if let Err(err) = reserved {
            warn!("Could not reserve per-vertex stores for {} vertices: {}", vertex_count, err);
        }
        self
    }

    /// Injects the lower-bound table used for pruning
    pub fn with_lower_bounds(mut self, lower_bounds: Vec<f64>) -> Self {
        self.lower_bound_weight = lower_bounds;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn order(&self) -> LabelOrder {
        self.order
    }

    /* Frontier */

    /// Re-establishes the heap invariant over the whole frontier
    pub fn rebuild_heap(&mut self) {
        self.unprocessed_labels.rebuild();
    }

    /// Restores heap order after a single append
    pub fn sift_in_last_pushed(&mut self) {
        self.unprocessed_labels.sift_in_last();
    }

    /// Adds a label to the frontier. Counters are left to the driver.
    pub fn push_unprocessed(&mut self, label: Label) {
        trace!("{} push: {}", self.direction, label);
        self.unprocessed_labels.push(label);
    }

    /// Removes the next label to process
    pub fn pop_unprocessed(&mut self) -> Option<Label> {
        let label = self.unprocessed_labels.pop();
        if let Some(label) = &label {
            trace!("{} pop: {}", self.direction, label);
        }
        label
    }

    /// Replaces the whole frontier and rebuilds the heap
    pub fn replace_unprocessed(&mut self, labels: Vec<Label>) {
        debug!("{} frontier replaced with {} labels", self.direction, labels.len());
        self.unprocessed_labels.replace_all(labels);
    }

    pub fn unprocessed(&self) -> &LabelHeap {
        &self.unprocessed_labels
    }

    /* Per-vertex stores */

    /// Appends a label the caller found non-dominated at `vertex`
    pub fn record_efficient(&mut self, vertex: usize, label: Label) {
        self.efficient_labels.entry(vertex).or_default().push(label);
    }

    /// Efficient labels recorded at `vertex`, in insertion order
    pub fn efficient(&self, vertex: usize) -> &[Label] {
        self.efficient_labels
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Keeps only the efficient labels at `vertex` matching `keep`
    pub fn retain_efficient<F>(&mut self, vertex: usize, keep: F)
    where
        F: FnMut(&Label) -> bool,
    {
        if let Some(labels) = self.efficient_labels.get_mut(&vertex) {
            labels.retain(keep);
        }
    }

    /// Replaces the best label at `vertex` with a copy of `label`
    pub fn set_incumbent(&mut self, vertex: usize, label: &Label) {
        self.best_labels.insert(vertex, label.clone());
    }

    pub fn incumbent(&self, vertex: usize) -> Option<&Label> {
        self.best_labels.get(&vertex)
    }

    /// Replaces the label being processed with a copy of `label`
    pub fn set_current(&mut self, label: &Label) {
        self.current_label = Some(label.clone());
    }

    pub fn current(&self) -> Option<&Label> {
        self.current_label.as_ref()
    }

    /* k-best tracker */

    /// Records a copy of a candidate sink-reaching label
    pub fn record_intermediate(&mut self, label: &Label) {
        self.intermediate_labels.record(label.clone());
    }

    pub fn k_best(&self) -> &KBestLabels {
        &self.intermediate_labels
    }

    /* Visited vertices */

    /// Marks a vertex as visited, returns false if it already was
    pub fn mark_visited(&mut self, vertex: usize) -> bool {
        self.visited_vertices.insert(vertex)
    }

    pub fn is_visited(&self, vertex: usize) -> bool {
        self.visited_vertices.contains(&vertex)
    }

    pub fn visited(&self) -> &BTreeSet<usize> {
        &self.visited_vertices
    }

    pub fn lower_bounds(&self) -> &[f64] {
        &self.lower_bound_weight
    }

    pub fn lower_bound(&self, vertex: usize) -> Option<f64> {
        self.lower_bound_weight.get(vertex).copied()
    }

    /* Counters and flags */

    pub fn stats(&self) -> &SearchStatistics {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStatistics {
        &mut self.stats
    }

    /// Shared handle to the stopping flags
    pub fn flags(&self) -> &Arc<SearchFlags> {
        &self.flags
    }

    pub fn is_stopped(&self) -> bool {
        self.flags.is_stopped()
    }

    pub fn set_stop(&self, stop: bool) {
        self.flags.set_stop(stop);
    }

    pub fn is_bound_exceeded(&self) -> bool {
        self.flags.is_bound_exceeded()
    }

    pub fn set_bound_exceeded(&self, exceeded: bool) {
        self.flags.set_bound_exceeded(exceeded);
    }

    /// Clears all per-solve state, keeping direction, k, ordering and lower bounds
    pub fn reset(&mut self) {
        debug!("Resetting {} search ({})", self.direction, self.stats);
        self.unprocessed_labels.clear();
        self.intermediate_labels.clear();
        self.efficient_labels.clear();
        self.best_labels.clear();
        self.visited_vertices.clear();
        self.current_label = None;
        self.stats = SearchStatistics::default();
        self.flags.reset();
    }
}
