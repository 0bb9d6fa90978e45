/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sizes of the strongly connected components of large directed graphs,
//! computed with Kosaraju's two-pass algorithm on graphs whose successor
//! lists are consumed by the visits.
//!
//! ```
//! use kosaraju_scc::prelude::*;
//! use dsi_progress_logger::no_logging;
//!
//! let (graph, transpose) =
//!     GraphBuilder::from_arcs(6, [(1, 2), (2, 3), (3, 1), (4, 5), (5, 4)])?;
//! let components = sccs::kosaraju(graph, transpose, no_logging![]);
//! assert_eq!(components.top_five(), [3, 2, 1, 0, 0]);
//! # Ok::<(), kosaraju_scc::graph::GraphError>(())
//! ```

pub mod algo;
pub mod graph;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
}

/// Use `use kosaraju_scc::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::sccs;
    pub use algo::visits::depth_first;
    pub use graph::{ArcStack, GraphBuilder, GraphError, StackGraph};
    pub use traits::*;
}
