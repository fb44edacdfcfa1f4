//! Index lookups over `&[i64]`.
//!
//! ## Sortedness precondition
//!
//! `jump_search` and `fibonacci_search` assume the slice is already sorted
//! non-decreasing. Neither routine verifies this: on unsorted input the
//! result is unspecified (some index, or `None`), though never a panic or an
//! out-of-bounds read. `sequential_search` has no precondition.
//!
//! ## Eliminated-prefix marker
//!
//! The textbook Fibonacci search tracks the already-ruled-out prefix with a
//! signed `offset` starting at `-1`. Here that sentinel is an
//! `Option<usize>` holding the highest eliminated index, which keeps all
//! probe arithmetic in `usize` without an artificial lower bound.

// ── Sequential search ────────────────────────────────────────────────────────

/// First index whose element equals `target`, scanning left to right.
///
/// Works on unsorted input; O(n) comparisons.
pub fn sequential_search(data: &[i64], target: i64) -> Option<usize> {
    data.iter().position(|&value| value == target)
}

// ── Jump search ──────────────────────────────────────────────────────────────

/// Block-skipping search over a sorted slice, O(√n) comparisons.
///
/// Jumps in blocks of `⌊√n⌋` until the block that could hold `target` is
/// found, then scans that block linearly. Requires `data` sorted
/// non-decreasing (unchecked, see module docs).
pub fn jump_search(data: &[i64], target: i64) -> Option<usize> {
    let n = data.len();
    if n == 0 {
        return None;
    }

    // n >= 1 keeps the block size >= 1, so `step.min(n) - 1` cannot underflow.
    let block = n.isqrt();
    let mut step = block;
    let mut prev = 0;

    // Jump forward until the element closing the current block reaches the
    // target, meaning the target can only live inside this block.
    while data[step.min(n) - 1] < target {
        prev = step;
        step += block;
        if prev >= n {
            return None;
        }
    }

    // Linear scan inside the located block.
    while prev < step.min(n) {
        if data[prev] == target {
            return Some(prev);
        }
        prev += 1;
    }
    None
}

// ── Fibonacci search ─────────────────────────────────────────────────────────

/// Fibonacci search over a sorted slice, O(log n) comparisons using only
/// addition and subtraction.
///
/// Classically motivated by architectures where division is costly: unlike
/// binary search, narrowing the range never divides. Requires `data` sorted
/// non-decreasing (unchecked, see module docs).
pub fn fibonacci_search(data: &[i64], target: i64) -> Option<usize> {
    let n = data.len();

    // Grow the Fibonacci triple (F(k-2), F(k-1), F(k)) until F(k) covers
    // the slice. For n <= 1 this leaves fib at 1 and the probe loop is
    // never entered, so no index is touched.
    let mut fib_m2: usize = 0;
    let mut fib_m1: usize = 1;
    let mut fib: usize = fib_m2 + fib_m1;
    while fib < n {
        fib_m2 = fib_m1;
        fib_m1 = fib;
        fib = fib_m2 + fib_m1;
    }

    // Highest index already ruled out; None until a probe eliminates the
    // lower partition for the first time.
    let mut eliminated: Option<usize> = None;

    while fib > 1 {
        // fib > 1 implies the triple is a consecutive Fibonacci triple with
        // fib_m2 >= 1, so the subtraction cannot underflow.
        let base = eliminated.map_or(0, |e| e + 1);
        let probe = (base + fib_m2 - 1).min(n - 1);

        if data[probe] < target {
            // Target is above the probe: everything up to and including it
            // is out. Continue in the upper sub-range of size F(k-1).
            fib = fib_m1;
            fib_m1 = fib_m2;
            fib_m2 = fib - fib_m1;
            eliminated = Some(probe);
        } else if data[probe] > target {
            // Target is below the probe: continue in the lower sub-range of
            // size F(k-2), keeping the eliminated prefix unchanged.
            fib = fib_m2;
            fib_m1 -= fib_m2;
            fib_m2 = fib - fib_m1;
        } else {
            return Some(probe);
        }
    }

    // One residual candidate may remain just above the eliminated prefix.
    // The short-circuit order is load-bearing: the bounds test must run
    // before the element is read.
    let candidate = eliminated.map_or(0, |e| e + 1);
    if fib_m1 != 0 && candidate < n && data[candidate] == target {
        return Some(candidate);
    }
    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────


// ── Kani proofs ───────────────────────────────────────────────────────────────
// Bounded verification that the ordered searches never index out of bounds,
// even when the sortedness precondition is violated.
// Run with: cargo kani -p ordo-algo

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: fibonacci_search never panics for any 4-element content and
    /// any target, sorted or not, and a found index is always in bounds.
    #[kani::proof]
    #[kani::unwind(8)]
    fn fibonacci_search_never_out_of_bounds() {
        let data: [i64; 4] = kani::any();
        let target: i64 = kani::any();
        if let Some(index) = fibonacci_search(&data, target) {
            kani::assert(index < data.len(), "found index must be in bounds");
        }
    }

    /// Proof: jump_search never panics for any 4-element content and any
    /// target, sorted or not.
    #[kani::proof]
    #[kani::unwind(8)]
    fn jump_search_never_out_of_bounds() {
        let data: [i64; 4] = kani::any();
        let target: i64 = kani::any();
        if let Some(index) = jump_search(&data, target) {
            kani::assert(index < data.len(), "found index must be in bounds");
        }
    }
}
