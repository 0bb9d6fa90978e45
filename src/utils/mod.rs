/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod permutation;
mod top_k;

/// Module containing mathematical utilities.
pub mod math {
    pub use super::permutation::*;
    pub use super::top_k::*;
}
