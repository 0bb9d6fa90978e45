/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Module containing all algorithms implementations.

pub mod visits;

pub mod sccs;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    use super::*;

    pub use visits::Sequential;
}
