//! Shared fixtures and reference helpers for the ordo integration tests
//! and benchmarks.

/// The sorted probe sequence used throughout the search scenarios.
pub const SORTED_PROBE: [i64; 11] = [10, 22, 35, 40, 45, 50, 80, 82, 85, 90, 100];

/// True when `data` is non-decreasing at every adjacent pair.
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// True when `a` and `b` hold the same multiset of values.
///
/// Reference implementation on purpose: compares std-sorted copies instead
/// of trusting any routine under test.
pub fn is_permutation(a: &[i64], b: &[i64]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_sorted_accepts_duplicates() {
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
        assert!(is_sorted(&[]));
    }

    #[test]
    fn is_permutation_counts_multiplicity() {
        assert!(is_permutation(&[1, 2, 2], &[2, 1, 2]));
        assert!(!is_permutation(&[1, 2, 2], &[1, 1, 2]));
        assert!(!is_permutation(&[1], &[1, 1]));
    }
}
