use ordered_float::OrderedFloat;
use std::cmp::Ordering;

use crate::labelling::Label;
use crate::params::Direction;
use crate::{Error, Result};

/// Direction-aware ordering of labels on the critical resource.
///
/// `compare` returns `Less` when the first label should be processed (or
/// ranked) before the second. Forward searches order ascending, backward
/// searches descending. Sentinel and malformed labels always sort last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelOrder {
    direction: Direction,
    critical_res: usize,
}

impl LabelOrder {
    /// Creates the ordering for a single search direction
    pub fn new(direction: Direction, critical_res: usize) -> Result<Self> {
        if !direction.is_single() {
            return Err(Error::InvalidDirection(direction));
        }
        Ok(LabelOrder {
            direction,
            critical_res,
        })
    }

    /// Same direction, ordered on another resource
    pub fn with_critical_res(self, critical_res: usize) -> Self {
        LabelOrder { critical_res, ..self }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn critical_res(&self) -> usize {
        self.critical_res
    }

    /// Scalar the ordering is based on; `f64::MAX` for incomplete or malformed labels
    pub fn scalar(&self, label: &Label) -> f64 {
        label.critical_value(self.critical_res).unwrap_or(f64::MAX)
    }

    fn key(&self, label: &Label) -> Option<OrderedFloat<f64>> {
        label.critical_value(self.critical_res).map(OrderedFloat)
    }

    /// Compares two labels, `Less` meaning `a` comes first
    pub fn compare(&self, a: &Label, b: &Label) -> Ordering {
        match (self.key(a), self.key(b)) {
            (Some(x), Some(y)) => match self.direction {
                Direction::Backward => y.cmp(&x),
                _ => x.cmp(&y),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Whether `a` strictly comes before `b`
    pub fn precedes(&self, a: &Label, b: &Label) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}
