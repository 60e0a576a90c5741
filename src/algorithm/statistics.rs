use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress counters of a single search direction.
///
/// Counters only grow. The driver updates them; a `Search` never changes
/// them on its own when labels are pushed or popped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Labels generated, including infeasible extensions
    pub generated: u64,
    /// Labels processed
    pub processed: u64,
    /// Unprocessed labels generated
    pub unprocessed: u64,
}

impl SearchStatistics {
    #[inline]
    pub fn on_label_generated(&mut self) {
        self.generated = self.generated.saturating_add(1);
    }

    #[inline]
    pub fn on_label_processed(&mut self) {
        self.processed = self.processed.saturating_add(1);
    }

    #[inline]
    pub fn on_unprocessed_label(&mut self) {
        self.unprocessed = self.unprocessed.saturating_add(1);
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generated: {}, processed: {}, unprocessed: {}",
            self.generated, self.processed, self.unprocessed
        )
    }
}
