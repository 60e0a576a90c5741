use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Direction of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// From the source towards the sink
    Forward,
    /// From the sink towards the source
    Backward,
    /// Both directions
    #[default]
    Both,
    /// No direction
    #[serde(rename = "nodir")]
    NoDirection,
}

impl Direction {
    /// Returns the opposite search direction. `Both` and `NoDirection` map to themselves.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            other => other,
        }
    }

    /// Whether a single `Search` can run in this direction
    pub fn is_single(self) -> bool {
        matches!(self, Direction::Forward | Direction::Backward)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Both => "both",
            Direction::NoDirection => "nodir",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            "both" => Ok(Direction::Both),
            "nodir" => Ok(Direction::NoDirection),
            _ => Err(Error::Parse(format!("unknown direction '{}'", s))),
        }
    }
}

/// Method the external coordinator uses to pick the next direction to expand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Direction with the least number of unprocessed labels
    #[default]
    Unprocessed,
    /// Direction with the least number of processed labels
    Processed,
    /// Direction with the least number of generated labels
    Generated,
    /// Random direction
    Random,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "unprocessed" => Ok(Method::Unprocessed),
            "processed" => Ok(Method::Processed),
            "generated" => Ok(Method::Generated),
            "random" => Ok(Method::Random),
            _ => Err(Error::Parse(format!("unknown method '{}'", s))),
        }
    }
}

/// Search-wide parameters.
///
/// Labels hold a shared `Arc<Params>`; a single instance is read by every label
/// of a solve and is never mutated once the search starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Direction for search
    pub direction: Direction,
    /// How the coordinator picks the next direction
    pub method: Method,
    /// Time limit in seconds
    pub time_limit: Option<f64>,
    /// Stop once a path with total cost <= threshold is found
    pub threshold: Option<f64>,
    /// Whether output paths must be elementary
    pub elementary: bool,
    /// Whether 2-cycles are eliminated for the non-elementary problem
    pub two_cycle_elimination: bool,
    /// Whether shortest path lower bounds are used to prune labels
    pub bounds_pruning: bool,
    /// Whether the critical resource is chosen while preprocessing. Overrides `critical_res`.
    pub find_critical_res: bool,
    /// Index of the monotone resource used for ordering and the half-way point
    pub critical_res: usize,
    /// Number of ranked paths to track
    pub k: usize,
    /// Upper bounds per resource; index 0 is the initial forward half-way point
    pub max_res: Vec<f64>,
    /// Lower bounds per resource; index 0 is the initial backward half-way point
    pub min_res: Vec<f64>,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            direction: Direction::Both,
            method: Method::Unprocessed,
            time_limit: None,
            threshold: None,
            elementary: false,
            two_cycle_elimination: false,
            bounds_pruning: false,
            find_critical_res: false,
            critical_res: 0,
            k: 4,
            max_res: Vec::new(),
            min_res: Vec::new(),
        }
    }
}

impl Params {
    /// Creates parameters with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses parameters from JSON, missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Params = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Sets the search direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the direction-scheduling method
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the time limit in seconds
    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = Some(seconds);
        self
    }

    /// Sets the early-termination threshold on the path weight
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Restricts the search to elementary paths
    pub fn with_elementary(mut self, elementary: bool) -> Self {
        self.elementary = elementary;
        self
    }

    /// Enables or disables 2-cycle elimination
    pub fn with_two_cycle_elimination(mut self, enabled: bool) -> Self {
        self.two_cycle_elimination = enabled;
        self
    }

    /// Enables or disables pruning with lower bounds
    pub fn with_bounds_pruning(mut self, enabled: bool) -> Self {
        self.bounds_pruning = enabled;
        self
    }

    /// Lets the solver pick the critical resource itself
    pub fn with_find_critical_res(mut self, enabled: bool) -> Self {
        self.find_critical_res = enabled;
        self
    }

    /// Sets the index of the critical resource
    pub fn with_critical_res(mut self, critical_res: usize) -> Self {
        self.critical_res = critical_res;
        self
    }

    /// Sets the bound of the k-best tracker
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets both resource bound vectors
    pub fn with_resource_bounds(mut self, max_res: Vec<f64>, min_res: Vec<f64>) -> Self {
        self.max_res = max_res;
        self.min_res = min_res;
        self
    }

    /// Checks the parameters for contract violations
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidK(self.k));
        }
        if self.max_res.len() != self.min_res.len() {
            return Err(Error::ResourceBoundsMismatch {
                max: self.max_res.len(),
                min: self.min_res.len(),
            });
        }
        if !self.max_res.is_empty() && self.critical_res >= self.max_res.len() {
            return Err(Error::CriticalResourceOutOfRange {
                index: self.critical_res,
                len: self.max_res.len(),
            });
        }
        if let Some(limit) = self.time_limit {
            if limit.is_nan() || limit < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "time limit {} is not a valid duration",
                    limit
                )));
            }
        }
        Ok(())
    }

    /// Initial half-way point of the given direction, if bounds were supplied
    pub fn halfway_point(&self, direction: Direction) -> Option<f64> {
        match direction {
            Direction::Forward => self.max_res.first().copied(),
            Direction::Backward => self.min_res.first().copied(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = Params::default();
        assert_eq!(params.direction, Direction::Both);
        assert_eq!(params.method, Method::Unprocessed);
        assert_eq!(params.critical_res, 0);
        assert_eq!(params.k, 4);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("forward".parse::<Direction>().unwrap(), Direction::Forward);
        assert_eq!("Backward".parse::<Direction>().unwrap(), Direction::Backward);
        assert_eq!("both".parse::<Direction>().unwrap(), Direction::Both);
        assert_eq!("nodir".parse::<Direction>().unwrap(), Direction::NoDirection);
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::Forward.opposite(), Direction::Backward);
    }

    #[test]
    fn test_direction_display_parses_back() {
        for direction in [
            Direction::Forward,
            Direction::Backward,
            Direction::Both,
            Direction::NoDirection,
        ] {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
            let json = serde_json::to_string(&direction).unwrap();
            assert_eq!(json, format!("\"{}\"", direction));
        }
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let params = Params::from_json_str(
            r#"{"direction": "forward", "k": 3, "max_res": [10.0, 5.0], "min_res": [0.0, 0.0]}"#,
        )
        .unwrap();
        assert_eq!(params.direction, Direction::Forward);
        assert_eq!(params.k, 3);
        assert_eq!(params.method, Method::Unprocessed);
        assert_eq!(params.halfway_point(Direction::Forward), Some(10.0));
        assert_eq!(params.halfway_point(Direction::Backward), Some(0.0));
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(Params::new().with_k(0).validate(), Err(Error::InvalidK(0))));

        let mismatched = Params::new().with_resource_bounds(vec![1.0, 2.0], vec![0.0]);
        assert!(matches!(
            mismatched.validate(),
            Err(Error::ResourceBoundsMismatch { max: 2, min: 1 })
        ));

        let out_of_range = Params::new()
            .with_resource_bounds(vec![1.0], vec![0.0])
            .with_critical_res(1);
        assert!(matches!(
            out_of_range.validate(),
            Err(Error::CriticalResourceOutOfRange { index: 1, len: 1 })
        ));

        assert!(Params::new().with_time_limit(-1.0).validate().is_err());
        assert!(Params::from_json_str("{\"k\": \"three\"}").is_err());
    }
}
