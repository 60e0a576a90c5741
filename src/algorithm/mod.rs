pub mod bidirectional;
pub mod search;
pub mod statistics;

pub use bidirectional::{SearchFlags, SearchPair};
pub use search::{Search, DEFAULT_K};
pub use statistics::SearchStatistics;
