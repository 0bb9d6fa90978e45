/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sizes of strongly connected components.

mod dfs_pass;
pub use dfs_pass::*;

mod kosaraju;
pub use kosaraju::*;

use crate::utils::math::top_k;
use std::fmt;

/// The sizes of the strongly connected components of a graph, in decreasing
/// order.
///
/// The [`Display`](fmt::Display) implementation writes the sizes of the five
/// largest components, separated by spaces and padded with zeroes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccSizes(Box<[usize]>);

impl SccSizes {
    /// Creates the sizes from a leader tally, that is, a slice whose nonzero
    /// elements are the sizes of the components.
    pub fn from_leader_tally(leader_tally: &[usize]) -> Self {
        let mut sizes: Vec<usize> = leader_tally
            .iter()
            .copied()
            .filter(|&size| size != 0)
            .collect();
        sizes.sort_unstable_by(|x, y| y.cmp(x));
        Self(sizes.into_boxed_slice())
    }

    /// The number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.0.len()
    }

    /// The sizes of the components, in decreasing order.
    pub fn sizes(&self) -> &[usize] {
        &self.0
    }

    /// The number of nodes of the graph, that is, the sum of the sizes.
    pub fn num_nodes(&self) -> usize {
        self.0.iter().sum()
    }

    /// Returns the sizes of the `k` largest components, padded with zeroes if
    /// there are fewer than `k` components.
    pub fn largest(&self, k: usize) -> Vec<usize> {
        top_k(&self.0, k)
    }

    /// Returns the sizes of the five largest components, padded with zeroes.
    pub fn top_five(&self) -> [usize; 5] {
        let mut top = [0; 5];
        top.copy_from_slice(&self.largest(5));
        top
    }
}

impl fmt::Display for SccSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.top_five();
        for (i, size) in top.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", size)?;
        }
        Ok(())
    }
}
