/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graphs with consumable successor lists and their construction.

mod arc_stack;
pub use arc_stack::ArcStack;

mod stack_graph;
pub use stack_graph::StackGraph;

mod builder;
pub use builder::GraphBuilder;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An arc endpoint is not in `[1, num_nodes]`.
    #[error("node {node} is out of range [1, {num_nodes}]")]
    NodeOutOfRange { node: usize, num_nodes: usize },
    /// A line of an arc list is not made of two unsigned integers.
    #[error("malformed arc at line {line}: {content:?}")]
    MalformedArc { line: usize, content: String },
    /// The arc list could not be opened.
    #[error("cannot open arc list {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The arc list could not be read.
    #[error("cannot read arc list")]
    Read(#[from] std::io::Error),
}
