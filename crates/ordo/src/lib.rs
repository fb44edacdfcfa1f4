//! ordo — command-line demonstrations of the routines in `ordo-algo`.
//!
//! This crate is the harness layer: algorithm selection enums, sequence
//! parsing and formatting. The algorithmic cores live in `ordo-algo` and are
//! re-exported here for convenience.

use clap::ValueEnum;
use std::fmt::Write as _;

// Re-export key types for convenience
pub use anyhow::{Context, Result};
pub use ordo_algo::{
    bubble_sort, fibonacci_search, heap_sort, insertion_sort, jump_search, sequential_search,
    shell_sort,
};

/// Selectable sorting routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortAlgo {
    Bubble,
    Insertion,
    Shell,
    Heap,
}

impl SortAlgo {
    /// Sort `data` in place with the selected routine.
    pub fn run(self, data: &mut [i64]) {
        match self {
            SortAlgo::Bubble => bubble_sort(data),
            SortAlgo::Insertion => insertion_sort(data),
            SortAlgo::Shell => shell_sort(data),
            SortAlgo::Heap => heap_sort(data),
        }
    }
}

/// Selectable search routine.
///
/// `Jump` and `Fibonacci` require the input sorted non-decreasing;
/// `Sequential` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchAlgo {
    Sequential,
    Jump,
    Fibonacci,
}

impl SearchAlgo {
    /// Look up `target` in `data` with the selected routine.
    pub fn run(self, data: &[i64], target: i64) -> Option<usize> {
        match self {
            SearchAlgo::Sequential => sequential_search(data, target),
            SearchAlgo::Jump => jump_search(data, target),
            SearchAlgo::Fibonacci => fibonacci_search(data, target),
        }
    }
}

/// Parse a whitespace-separated list of integers.
///
/// Used for sequences piped on stdin; positional arguments go through clap's
/// own value parser instead.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>> {
    input
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid integer {token:?}"))
        })
        .collect()
}

/// Render a sequence as a single space-separated line.
pub fn format_sequence(data: &[i64]) -> String {
    let mut line = String::new();
    for (i, value) in data.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(line, "{value}");
    }
    line
}
