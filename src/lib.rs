//! Bidirectional RCSP - label-setting core for the Resource-Constrained Shortest Path Problem
//!
//! This library provides the per-direction search state of a bidirectional
//! labelling algorithm with a dynamic half-way point (Tilk et al. 2017), as
//! used for pricing subproblems in column generation.
//!
//! A [`Search`] holds the frontier of unprocessed labels, the efficient and
//! best labels per vertex, and a bounded tracker of the best sink-reaching
//! labels. Graph traversal, resource extension, dominance and the joining of
//! both directions are left to the caller.

pub mod algorithm;
pub mod data_structures;
pub mod labelling;
pub mod params;

pub use algorithm::{Search, SearchFlags, SearchPair, SearchStatistics};
/// Re-export main types for convenient use
pub use labelling::{Label, LabelOrder};
pub use params::{Direction, Method, Params};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid number of paths k = {0}, expected k >= 1")]
    InvalidK(usize),

    #[error("Invalid search direction: {0}")]
    InvalidDirection(Direction),

    #[error("Resource bounds differ in length: {max} upper bounds, {min} lower bounds")]
    ResourceBoundsMismatch { max: usize, min: usize },

    #[error("Critical resource {index} out of range for {len} resources")]
    CriticalResourceOutOfRange { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid JSON parameters: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
