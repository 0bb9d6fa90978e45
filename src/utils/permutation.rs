/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use sux::bits::BitVec;

/// Returns `true` if the slice `vec` of length *n* contains every value in
/// [1 . . *n*] exactly once.
///
/// # Examples
/// ```
/// # use kosaraju_scc::utils::math::is_permutation;
/// assert!(is_permutation(&[3, 1, 2]));
/// assert!(!is_permutation(&[3, 3, 2]));
/// assert!(!is_permutation(&[0, 1, 2]));
/// ```
pub fn is_permutation(vec: &[usize]) -> bool {
    let mut seen = BitVec::new(vec.len() + 1);
    for &value in vec {
        if value == 0 || value > vec.len() || seen.get(value) {
            return false;
        }
        seen.set(value, true);
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(is_permutation(&[]));
    }

    #[test]
    fn test_out_of_range() {
        assert!(!is_permutation(&[1, 3]));
    }

    #[test]
    fn test_identity() {
        let v: Vec<usize> = (1..=100).collect();
        assert!(is_permutation(&v));
    }
}
