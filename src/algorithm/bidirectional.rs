use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::algorithm::search::Search;
use crate::params::{Direction, Params};
use crate::{Error, Result};

/// Stopping flags of one search direction.
///
/// Only the coordinator writes them; a `Search` never changes them while
/// expanding labels. They are atomic so that a coordinator spanning both
/// directions can write them while the owning search runs on another thread.
#[derive(Debug, Default)]
pub struct SearchFlags {
    stop: AtomicBool,
    bound_exceeded: AtomicBool,
}

impl SearchFlags {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set_stop(&self, stop: bool) {
        self.stop.store(stop, Ordering::Release);
    }

    #[inline]
    pub fn is_bound_exceeded(&self) -> bool {
        self.bound_exceeded.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set_bound_exceeded(&self, exceeded: bool) {
        self.bound_exceeded.store(exceeded, Ordering::Release);
    }

    pub fn reset(&self) {
        self.set_stop(false);
        self.set_bound_exceeded(false);
    }
}

/// The forward and backward searches of one solve.
///
/// The two directions share no mutable state. Joining labels and deciding
/// when each side stops is left to the caller.
#[derive(Debug)]
pub struct SearchPair {
    forward: Search,
    backward: Search,
}

impl SearchPair {
    /// Creates both searches from validated parameters
    pub fn new(params: &Params) -> Result<Self> {
        Ok(SearchPair {
            forward: Search::from_params(Direction::Forward, params)?,
            backward: Search::from_params(Direction::Backward, params)?,
        })
    }

    /// Pairs two existing searches
    pub fn from_searches(forward: Search, backward: Search) -> Result<Self> {
        if forward.direction() != Direction::Forward {
            return Err(Error::InvalidDirection(forward.direction()));
        }
        if backward.direction() != Direction::Backward {
            return Err(Error::InvalidDirection(backward.direction()));
        }
        Ok(SearchPair { forward, backward })
    }

    pub fn forward(&self) -> &Search {
        &self.forward
    }

    pub fn backward(&self) -> &Search {
        &self.backward
    }

    pub fn forward_mut(&mut self) -> &mut Search {
        &mut self.forward
    }

    pub fn backward_mut(&mut self) -> &mut Search {
        &mut self.backward
    }

    /// Search running in `direction`, `None` for combined directions
    pub fn get(&self, direction: Direction) -> Option<&Search> {
        match direction {
            Direction::Forward => Some(&self.forward),
            Direction::Backward => Some(&self.backward),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> Option<&mut Search> {
        match direction {
            Direction::Forward => Some(&mut self.forward),
            Direction::Backward => Some(&mut self.backward),
            _ => None,
        }
    }

    /// Mutable access to both directions at once
    pub fn split_mut(&mut self) -> (&mut Search, &mut Search) {
        (&mut self.forward, &mut self.backward)
    }

    /// Runs one closure per direction concurrently, each owning its search exclusively
    pub fn run_both<F, B, RF, RB>(&mut self, forward_work: F, backward_work: B) -> (RF, RB)
    where
        F: FnOnce(&mut Search) -> RF + Send,
        B: FnOnce(&mut Search) -> RB + Send,
        RF: Send,
        RB: Send,
    {
        let SearchPair { forward, backward } = self;
        rayon::join(move || forward_work(forward), move || backward_work(backward))
    }

    /// Whether the coordinator stopped both directions
    pub fn all_stopped(&self) -> bool {
        self.forward.is_stopped() && self.backward.is_stopped()
    }

    pub fn reset(&mut self) {
        debug!("Resetting search pair");
        self.forward.reset();
        self.backward.reset();
    }

    pub fn into_inner(self) -> (Search, Search) {
        (self.forward, self.backward)
    }
}
