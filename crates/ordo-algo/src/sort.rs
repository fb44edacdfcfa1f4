//! In-place ascending sorts over `&mut [i64]`.
//!
//! All four routines share the same contract: the slice afterwards holds the
//! same multiset of values, in non-decreasing order. None of them allocates,
//! none can fail, and an empty or single-element slice is a no-op. Stability
//! is not guaranteed by any of them (equal elements may swap relative order).
//!
//! Index arithmetic note: the pass bounds below are computed as `n - 1 - i`
//! and `n / 2 - 1` style expressions in `usize`. Every such subtraction sits
//! behind an `n <= 1` guard or a range that is empty for small `n`, so none
//! of them can underflow.

// ── Exchange sorts ───────────────────────────────────────────────────────────

/// Bubble sort: repeated adjacent-pair passes, O(n²) worst case.
///
/// A pass that performs zero exchanges proves the slice is sorted and
/// terminates the outer loop early, so already-sorted input costs a single
/// O(n) pass.
pub fn bubble_sort(data: &mut [i64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let mut swapped = false;
        // After pass i, the largest i+1 elements sit in their final slots,
        // so each pass scans one element fewer.
        for j in 0..n - 1 - i {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Insertion sort: grows a sorted prefix one element at a time, O(n²) worst
/// case but O(n) on nearly-sorted input.
pub fn insertion_sort(data: &mut [i64]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        // Shift the sorted prefix right until the insertion slot for `key`
        // opens up.
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

/// Shell sort: gapped insertion sort with the halving gap schedule
/// (`gap = n/2`, then `gap /= 2` down to 1).
///
/// The final gap-1 pass is a plain insertion sort, which establishes full
/// order; the earlier passes only exist to make that last pass cheap.
pub fn shell_sort(data: &mut [i64]) {
    let n = data.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let key = data[i];
            let mut j = i;
            while j >= gap && data[j - gap] > key {
                data[j] = data[j - gap];
                j -= gap;
            }
            data[j] = key;
        }
        gap /= 2;
    }
}

// ── Heap sort ────────────────────────────────────────────────────────────────

/// Heap sort: bottom-up max-heap construction followed by repeated root
/// extraction, O(n log n) regardless of input order.
pub fn heap_sort(data: &mut [i64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    // Phase 1: heapify bottom-up. Leaves are trivially heaps, so start at
    // the last parent (n/2 - 1) and sift down towards the root.
    for root in (0..n / 2).rev() {
        sift_down(data, n, root);
    }

    // Phase 2: the root is the maximum of the active prefix. Swap it to the
    // end of the prefix, shrink the bound, and restore the heap property.
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, end, 0);
    }
}

/// Restore the max-heap property for the subtree rooted at `root`, treating
/// `data[..bound]` as the active heap (children at `2i+1` / `2i+2`).
fn sift_down(data: &mut [i64], bound: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        let mut largest = root;
        if left < bound && data[left] > data[largest] {
            largest = left;
        }
        if right < bound && data[right] > data[largest] {
            largest = right;
        }

        if largest == root {
            return;
        }
        data.swap(root, largest);
        root = largest;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(data: &[i64]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    /// Shared battery run against each routine: boundary sizes, sorted and
    /// reverse-sorted input, duplicates.
    fn check_sorts(sort: fn(&mut [i64])) {
        let mut empty: [i64; 0] = [];
        sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = [42];
        sort(&mut single);
        assert_eq!(single, [42]);

        let mut sorted = [1, 2, 3, 4, 5];
        sort(&mut sorted);
        assert_eq!(sorted, [1, 2, 3, 4, 5]);

        let mut reversed = [5, 4, 3, 2, 1];
        sort(&mut reversed);
        assert_eq!(reversed, [1, 2, 3, 4, 5]);

        let mut duplicates = [7, 7, 7, 7];
        sort(&mut duplicates);
        assert_eq!(duplicates, [7, 7, 7, 7]);

        let mut negative = [0, -3, 8, -3, 1];
        sort(&mut negative);
        assert!(is_sorted(&negative));
    }

    // ── bubble_sort ──────────────────────────────────────────────────────────

    #[test]
    fn bubble_battery() {
        check_sorts(bubble_sort);
    }

    #[test]
    fn bubble_sample() {
        let mut data = [5, 2, 9, 1, 5, 6];
        bubble_sort(&mut data);
        assert_eq!(data, [1, 2, 5, 5, 6, 9]);
    }

    #[test]
    fn bubble_idempotent() {
        let mut data = [3, 1, 2];
        bubble_sort(&mut data);
        let once = data;
        bubble_sort(&mut data);
        assert_eq!(data, once);
    }

    // ── insertion_sort ───────────────────────────────────────────────────────

    #[test]
    fn insertion_battery() {
        check_sorts(insertion_sort);
    }

    #[test]
    fn insertion_sample() {
        let mut data = [64, 34, 25, 12, 22, 11, 90];
        insertion_sort(&mut data);
        assert_eq!(data, [11, 12, 22, 25, 34, 64, 90]);
    }

    // ── shell_sort ───────────────────────────────────────────────────────────

    #[test]
    fn shell_battery() {
        check_sorts(shell_sort);
    }

    #[test]
    fn shell_sample() {
        let mut data = [64, 34, 25, 12, 22, 11, 90];
        shell_sort(&mut data);
        assert_eq!(data, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn shell_two_elements() {
        // Smallest input where the gap schedule starts above 1.
        let mut data = [2, 1];
        shell_sort(&mut data);
        assert_eq!(data, [1, 2]);
    }

    // ── heap_sort ────────────────────────────────────────────────────────────

    #[test]
    fn heap_battery() {
        check_sorts(heap_sort);
    }

    #[test]
    fn heap_sample() {
        let mut data = [12, 3, 5, 7, 19, 1];
        heap_sort(&mut data);
        assert_eq!(data, [1, 3, 5, 7, 12, 19]);
    }

    #[test]
    fn heap_extremes() {
        let mut data = [i64::MAX, 0, i64::MIN];
        heap_sort(&mut data);
        assert_eq!(data, [i64::MIN, 0, i64::MAX]);
    }

    #[test]
    fn sift_down_respects_bound() {
        // With the bound shrunk to 3, the trailing elements must not move.
        let mut data = [1, 9, 8, 99, 98];
        sift_down(&mut data, 3, 0);
        assert_eq!(&data[3..], [99, 98]);
        assert_eq!(data[0], 9);
    }
}

// ── Kani proofs ───────────────────────────────────────────────────────────────
// Bounded verification of the sort contract for small symbolic inputs.
// Run with: cargo kani -p ordo-algo

#[cfg(kani)]
mod proofs {
    use super::*;

    /// Proof: bubble_sort never panics and leaves the slice non-decreasing
    /// for every possible 4-element input.
    #[kani::proof]
    #[kani::unwind(6)]
    fn bubble_sort_sorts_any_four() {
        let mut data: [i64; 4] = kani::any();
        bubble_sort(&mut data);
        kani::assert(
            data[0] <= data[1] && data[1] <= data[2] && data[2] <= data[3],
            "bubble_sort output must be non-decreasing",
        );
    }

    /// Proof: heap_sort never panics and leaves the slice non-decreasing
    /// for every possible 4-element input.
    #[kani::proof]
    #[kani::unwind(8)]
    fn heap_sort_sorts_any_four() {
        let mut data: [i64; 4] = kani::any();
        heap_sort(&mut data);
        kani::assert(
            data[0] <= data[1] && data[1] <= data[2] && data[2] <= data[3],
            "heap_sort output must be non-decreasing",
        );
    }
}
