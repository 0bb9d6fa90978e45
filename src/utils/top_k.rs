/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Returns the `k` largest values of the slice `vec` in decreasing order.
///
/// If `vec` contains fewer than `k` elements, the result is padded with
/// [default](Default::default) values (i.e., zeroes for numbers).
///
/// # Arguments
/// - `vec`: the slice of elements.
/// - `k`: the number of values to return.
///
/// # Examples
/// ```
/// # use kosaraju_scc::utils::math::top_k;
/// let v = vec![1, 4, 5, 2, 1];
/// assert_eq!(top_k(&v, 3), vec![5, 4, 2]);
/// assert_eq!(top_k(&v, 7), vec![5, 4, 2, 1, 1, 0, 0]);
/// ```
pub fn top_k<T: Ord + Copy + Default>(vec: &[T], k: usize) -> Vec<T> {
    let mut top = vec.to_vec();
    if k < top.len() {
        // Move the k largest elements to the front
        top.select_nth_unstable_by(k, |x, y| y.cmp(x));
        top.truncate(k);
    }
    top.sort_unstable_by(|x, y| y.cmp(x));
    top.resize(k, T::default());
    top
}
