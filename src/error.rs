//! Errors for building and running workloads. Tree operations themselves never fail.

use thiserror::Error;

/// Reasons a workload can't be run.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadError {
    /// The inclusive range `min..=max` holds no values.
    #[error("empty value range: min {min} is greater than max {max}")]
    EmptyRange {
        /// Lower bound that was asked for.
        min: i32,
        /// Upper bound that was asked for.
        max: i32,
    },

    /// A phase must perform at least one operation.
    #[error("a workload needs at least one operation per phase")]
    NoOperations,
}
