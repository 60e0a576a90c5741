use std::fmt;
use std::sync::Arc;

use crate::params::Params;

/// An immutable snapshot of a (partial) path and the resources it consumed.
///
/// Labels are produced by extension and never mutated afterwards; stores that
/// "update" a label replace it with a new one. Cloning copies the path and the
/// resource vector, only the search parameters are shared.
#[derive(Clone)]
pub struct Label {
    /// Accumulated cost along the path
    weight: f64,
    /// Visited vertices, the front is the endpoint the search started from
    path: Vec<usize>,
    /// Accumulated consumption, one entry per resource
    resource_consumption: Vec<f64>,
    params: Arc<Params>,
}

impl Label {
    /// Creates a label from its raw parts
    pub fn new(
        weight: f64,
        path: Vec<usize>,
        resource_consumption: Vec<f64>,
        params: Arc<Params>,
    ) -> Self {
        Label {
            weight,
            path,
            resource_consumption,
            params,
        }
    }

    /// Creates the sentinel label sitting at the origin of a search
    pub fn origin(vertex: usize, resource_consumption: Vec<f64>, params: Arc<Params>) -> Self {
        Label::new(0.0, vec![vertex], resource_consumption, params)
    }

    /// Returns a child label that reaches `vertex`.
    ///
    /// `resource_consumption` is the vector computed by the resource extension
    /// function for the traversed edge; `self` is left untouched.
    pub fn extend(
        &self,
        vertex: usize,
        weight_delta: f64,
        resource_consumption: Vec<f64>,
    ) -> Label {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(vertex);
        Label {
            weight: self.weight + weight_delta,
            path,
            resource_consumption,
            params: Arc::clone(&self.params),
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn resource_consumption(&self) -> &[f64] {
        &self.resource_consumption
    }

    pub fn params(&self) -> &Arc<Params> {
        &self.params
    }

    /// Vertex the label currently sits at
    pub fn vertex(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// A label that has not left its origin yet
    pub fn is_sentinel(&self) -> bool {
        self.path.len() <= 1
    }

    /// A label without a value for the critical resource
    pub fn is_malformed(&self, critical_res: usize) -> bool {
        self.resource_consumption.len() <= critical_res
    }

    /// Critical resource value, or `None` for sentinel and malformed labels
    pub fn critical_value(&self, critical_res: usize) -> Option<f64> {
        if self.is_sentinel() {
            return None;
        }
        self.resource_consumption.get(critical_res).copied()
    }

    /// Whether the path visits `vertex`
    pub fn contains(&self, vertex: usize) -> bool {
        self.path.contains(&vertex)
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
            && self.path == other.path
            && self.resource_consumption == other.resource_consumption
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("weight", &self.weight)
            .field("path", &self.path)
            .field("resource_consumption", &self.resource_consumption)
            .finish()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Label(weight: {}, path: {:?}, res: {:?})",
            self.weight, self.path, self.resource_consumption
        )
    }
}
