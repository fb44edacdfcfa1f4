//! `ordo-algo` — classic sort and search routines over integer sequences.
//!
//! This crate is `#![no_std]` and dependency-free. It provides:
//! - in-place ascending sorts over `&mut [i64]`: bubble, insertion, shell, heap
//! - index lookups over `&[i64]`: sequential, jump, fibonacci
//!
//! Every routine is a synchronous, re-entrant free function with no shared
//! state. The sorts reorder their input slice to non-decreasing order and
//! cannot fail; the searches return `Some(index)` of an occurrence of the
//! target or `None`. Jump and Fibonacci search require the input to already
//! be sorted non-decreasing; that precondition is the caller's and is not
//! checked (see the individual function docs).

#![no_std]

pub mod search;
pub mod sort;

pub use search::{fibonacci_search, jump_search, sequential_search};
pub use sort::{bubble_sort, heap_sort, insertion_sort, shell_sort};
