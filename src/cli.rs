//! CLI argument definitions using clap

use clap::{ArgAction, Parser};

use crate::error::WorkloadError;
use crate::workload::WorkloadConfig;

/// Time insertion, search, and deletion on an unbalanced binary search tree of random integers
#[derive(Parser, Debug)]
#[command(name = "searchtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operations performed by each phase
    #[arg(short = 'n', long, env = "SEARCHTREE_OPERATIONS", default_value_t = WorkloadConfig::DEFAULT_OPERATIONS)]
    pub operations: usize,

    /// Smallest value drawn (inclusive)
    #[arg(long, default_value_t = WorkloadConfig::DEFAULT_MIN, allow_hyphen_values = true)]
    pub min: i32,

    /// Largest value drawn (inclusive)
    #[arg(long, default_value_t = WorkloadConfig::DEFAULT_MAX, allow_hyphen_values = true)]
    pub max: i32,

    /// Seed for the random values; drawn from the OS when absent
    #[arg(long, env = "SEARCHTREE_SEED")]
    pub seed: Option<u64>,

    /// Print the tree in sorted order after the insertion phase
    #[arg(short, long)]
    pub print: bool,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// Validates the workload options.
    ///
    /// # Errors
    ///
    /// See [`WorkloadConfig::new`].
    pub fn workload_config(&self) -> Result<WorkloadConfig, WorkloadError> {
        WorkloadConfig::new(self.operations, self.min, self.max)
    }
}
