/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::ArcStack;
use std::fmt;

/// A directed graph whose successor lists are [consumable
/// stacks](ArcStack).
///
/// Nodes are numbered from 1 to [`num_nodes`](StackGraph::num_nodes),
/// inclusive. Slot 0 exists but is never used, so that node identifiers can
/// index the successor array directly.
#[derive(Debug, Clone)]
pub struct StackGraph {
    name: String,
    successors: Box<[ArcStack]>,
}

impl StackGraph {
    /// Creates a graph with `num_nodes` nodes and no arcs.
    ///
    /// # Arguments
    /// * `num_nodes`: the number of nodes.
    /// * `name`: a display name for the graph.
    pub fn new(num_nodes: usize, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            successors: vec![ArcStack::new(); num_nodes + 1].into_boxed_slice(),
        }
    }

    /// Returns the number of nodes.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.successors.len() - 1
    }

    /// Returns the display name of the graph.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of arcs that have not been consumed yet.
    pub fn num_arcs(&self) -> usize {
        self.successors.iter().map(ArcStack::len).sum()
    }

    /// Returns the successors of `node`.
    ///
    /// # Panics
    /// If `node` is zero or greater than [`num_nodes`](StackGraph::num_nodes).
    #[inline(always)]
    pub fn successors(&self, node: usize) -> &ArcStack {
        self.check_node(node);
        &self.successors[node]
    }

    /// Returns the successors of `node` as a mutable reference.
    ///
    /// # Panics
    /// If `node` is zero or greater than [`num_nodes`](StackGraph::num_nodes).
    #[inline(always)]
    pub fn successors_mut(&mut self, node: usize) -> &mut ArcStack {
        self.check_node(node);
        &mut self.successors[node]
    }

    /// Moves the successors of `node` out of the graph, leaving `node`
    /// without successors.
    pub fn take_successors(&mut self, node: usize) -> ArcStack {
        std::mem::take(self.successors_mut(node))
    }

    #[inline(always)]
    fn check_node(&self, node: usize) {
        debug_assert!(
            node != 0 && node <= self.num_nodes(),
            "node {} out of range [1, {}]",
            node,
            self.num_nodes()
        );
    }
}

impl fmt::Display for StackGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name:  {} has {} Nodes", self.name, self.num_nodes())?;
        for tail in 1..=self.num_nodes() {
            write!(f, "T({})->", tail)?;
            let mut heads = self.successors[tail].iter().peekable();
            while let Some(head) = heads.next() {
                if heads.peek().is_some() {
                    write!(f, "H({})->", head)?;
                } else {
                    write!(f, "H({})", head)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
