//! Randomized workloads for timing a [`Tree`].
//!
//! A workload runs three phases against a tree of `i32`s: inserting random values, searching for
//! random values, and removing random values. Every phase draws its values up front from the
//! injected [`Rng`] so only the tree operations themselves are timed.
//!
//! # Examples
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use searchtree::unbalanced::Tree;
//! use searchtree::workload::{Workload, WorkloadConfig};
//!
//! let config = WorkloadConfig::new(1_000, 1, 100).unwrap();
//! let mut workload = Workload::new(config, StdRng::seed_from_u64(42));
//! let mut tree = Tree::new();
//!
//! let [insert, search, delete] = workload.run(&mut tree).unwrap();
//!
//! assert!(insert.hits <= 100);
//! assert!(search.hits <= search.operations);
//! assert!(delete.hits <= insert.hits);
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::error::WorkloadError;
use crate::unbalanced::Tree;

/// Draws a uniformly distributed integer from `min..=max`.
///
/// # Errors
///
/// Returns [`WorkloadError::EmptyRange`] if `min` is greater than `max`.
pub fn random_in_range<R>(rng: &mut R, min: i32, max: i32) -> Result<i32, WorkloadError>
where
    R: Rng + ?Sized,
{
    if min > max {
        return Err(WorkloadError::EmptyRange { min, max });
    }

    Ok(rng.random_range(min..=max))
}

/// How many operations each phase performs and which values it draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkloadConfig {
    operations: usize,
    min: i32,
    max: i32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            operations: Self::DEFAULT_OPERATIONS,
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl WorkloadConfig {
    /// Operations per phase when none are given.
    pub const DEFAULT_OPERATIONS: usize = 100_000;
    /// Smallest value drawn when no range is given.
    pub const DEFAULT_MIN: i32 = 1;
    /// Largest value drawn when no range is given.
    pub const DEFAULT_MAX: i32 = 100_000;

    /// Validates and builds a config running `operations` operations per phase on values drawn
    /// from `min..=max`.
    ///
    /// # Errors
    ///
    /// [`WorkloadError::NoOperations`] if `operations` is zero and
    /// [`WorkloadError::EmptyRange`] if `min` is greater than `max`.
    pub fn new(operations: usize, min: i32, max: i32) -> Result<Self, WorkloadError> {
        if operations == 0 {
            return Err(WorkloadError::NoOperations);
        }
        if min > max {
            return Err(WorkloadError::EmptyRange { min, max });
        }

        Ok(Self {
            operations,
            min,
            max,
        })
    }

    /// Operations performed by each phase.
    pub fn operations(&self) -> usize {
        self.operations
    }

    /// Smallest value that can be drawn.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Largest value that can be drawn.
    pub fn max(&self) -> i32 {
        self.max
    }
}

/// The phases of a workload, in the order [`Workload::run`] performs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Insert every drawn value.
    Insert,
    /// Look up every drawn value.
    Search,
    /// Remove every drawn value.
    Delete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Insert => "insertion",
            Self::Search => "search",
            Self::Delete => "deletion",
        })
    }
}

/// Timing and outcome of a single phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseReport {
    /// Which phase this reports on.
    pub phase: Phase,
    /// How many operations were timed.
    pub operations: usize,
    /// How many operations had an effect: values newly inserted, values found, or values removed.
    pub hits: usize,
    /// Total time spent in tree operations.
    pub elapsed: Duration,
}

impl PhaseReport {
    /// Mean time per operation in nanoseconds.
    pub fn average_nanos(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / self.operations as f64
    }
}

/// Runs timed phases against a tree using values drawn from `R`.
pub struct Workload<R> {
    config: WorkloadConfig,
    rng: R,
}

impl<R> Workload<R>
where
    R: Rng,
{
    /// Builds a workload drawing its values from `rng`.
    pub fn new(config: WorkloadConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// The config this workload runs with.
    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Runs the insert, search, and delete phases in that order.
    ///
    /// # Errors
    ///
    /// Only if the value range can't be drawn from, which a validated [`WorkloadConfig`] rules
    /// out.
    pub fn run(&mut self, tree: &mut Tree<i32>) -> Result<[PhaseReport; 3], WorkloadError> {
        Ok([
            self.insert_phase(tree)?,
            self.search_phase(tree)?,
            self.delete_phase(tree)?,
        ])
    }

    /// Inserts freshly drawn values. Hits count values that weren't already in the tree.
    ///
    /// # Errors
    ///
    /// See [`Workload::run`].
    pub fn insert_phase(&mut self, tree: &mut Tree<i32>) -> Result<PhaseReport, WorkloadError> {
        let values = self.draw()?;

        let start = Instant::now();
        let hits = values.into_iter().filter(|x| tree.insert(*x)).count();
        let elapsed = start.elapsed();

        Ok(self.report(Phase::Insert, hits, elapsed))
    }

    /// Searches for freshly drawn values. Hits count values found in the tree.
    ///
    /// # Errors
    ///
    /// See [`Workload::run`].
    pub fn search_phase(&mut self, tree: &Tree<i32>) -> Result<PhaseReport, WorkloadError> {
        let values = self.draw()?;

        let start = Instant::now();
        let mut hits = 0;
        for x in values {
            if tree.contains(&x) {
                hits += 1;
                debug!(key = x, "key found");
            }
        }
        let elapsed = start.elapsed();

        Ok(self.report(Phase::Search, hits, elapsed))
    }

    /// Removes freshly drawn values. Hits count values that were present and got removed.
    ///
    /// # Errors
    ///
    /// See [`Workload::run`].
    pub fn delete_phase(&mut self, tree: &mut Tree<i32>) -> Result<PhaseReport, WorkloadError> {
        let values = self.draw()?;

        let start = Instant::now();
        let hits = values
            .into_iter()
            .filter(|x| tree.remove(x).is_some())
            .count();
        let elapsed = start.elapsed();

        Ok(self.report(Phase::Delete, hits, elapsed))
    }

    fn draw(&mut self) -> Result<Vec<i32>, WorkloadError> {
        let WorkloadConfig {
            operations,
            min,
            max,
        } = self.config;
        let rng = &mut self.rng;
        (0..operations)
            .map(|_| random_in_range(rng, min, max))
            .collect()
    }

    fn report(&self, phase: Phase, hits: usize, elapsed: Duration) -> PhaseReport {
        let report = PhaseReport {
            phase,
            operations: self.config.operations,
            hits,
            elapsed,
        };
        info!(
            %phase,
            operations = report.operations,
            hits,
            elapsed = ?report.elapsed,
            "phase complete"
        );

        report
    }
}
