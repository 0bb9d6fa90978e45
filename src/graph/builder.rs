/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GraphError, StackGraph};
use dsi_progress_logger::ProgressLog;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use webgraph::traits::RandomAccessGraph;

/// Builds a graph and its transpose from a list of arcs.
///
/// Every arc `(tail, head)` is added to the successors of `tail` in the
/// forward graph and to the successors of `head` in the reverse graph.
/// Endpoints are checked against the number of nodes, so the resulting
/// graphs only contain node identifiers in `[1, num_nodes]`.
///
/// Self-loops and duplicate arcs are accepted.
///
/// # Examples
///
/// ```
/// use kosaraju_scc::graph::GraphBuilder;
///
/// let (forward, reverse) = GraphBuilder::from_arcs(3, [(1, 2), (2, 3)])?;
/// assert_eq!(forward.successors(1).iter().collect::<Vec<_>>(), vec![2]);
/// assert_eq!(reverse.successors(3).iter().collect::<Vec<_>>(), vec![2]);
/// # Ok::<(), kosaraju_scc::graph::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    forward: StackGraph,
    reverse: StackGraph,
}

impl GraphBuilder {
    /// Creates a builder for graphs with `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            forward: StackGraph::new(num_nodes, "Forward Graph"),
            reverse: StackGraph::new(num_nodes, "Reverse Graph"),
        }
    }

    /// Returns the number of nodes of the graphs being built.
    pub fn num_nodes(&self) -> usize {
        self.forward.num_nodes()
    }

    /// Adds an arc from `tail` to `head`.
    ///
    /// Returns [`GraphError::NodeOutOfRange`] if either endpoint is zero or
    /// greater than the number of nodes; in this case the graphs are left
    /// untouched.
    pub fn add_arc(&mut self, tail: usize, head: usize) -> Result<(), GraphError> {
        let num_nodes = self.num_nodes();
        for node in [tail, head] {
            if node == 0 || node > num_nodes {
                return Err(GraphError::NodeOutOfRange { node, num_nodes });
            }
        }
        self.push_arc(tail, head);
        Ok(())
    }

    #[inline(always)]
    fn push_arc(&mut self, tail: usize, head: usize) {
        self.forward.successors_mut(tail).push(head);
        self.reverse.successors_mut(head).push(tail);
    }

    /// Returns the forward graph and the reverse graph.
    pub fn build(self) -> (StackGraph, StackGraph) {
        (self.forward, self.reverse)
    }

    /// Builds a graph and its transpose from an iterator of arcs.
    pub fn from_arcs(
        num_nodes: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<(StackGraph, StackGraph), GraphError> {
        let mut builder = Self::new(num_nodes);
        for (tail, head) in arcs {
            builder.add_arc(tail, head)?;
        }
        Ok(builder.build())
    }

    /// Builds a graph and its transpose from a textual arc list.
    ///
    /// Each line must contain a tail and a head, separated by whitespace.
    /// Empty lines and lines starting with `#` or `%` are skipped.
    ///
    /// # Arguments
    /// * `num_nodes`: the number of nodes.
    /// * `reader`: the source of the arc list.
    /// * `pl`: a progress logger, updated once per arc.
    pub fn from_reader(
        num_nodes: usize,
        reader: impl BufRead,
        pl: &mut impl ProgressLog,
    ) -> Result<(StackGraph, StackGraph), GraphError> {
        pl.item_name("arc");
        pl.start("Reading arcs...");

        let mut builder = Self::new(num_nodes);
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') || content.starts_with('%') {
                continue;
            }
            let (tail, head) = parse_arc(content).ok_or_else(|| GraphError::MalformedArc {
                line: index + 1,
                content: content.to_owned(),
            })?;
            builder.add_arc(tail, head)?;
            pl.light_update();
        }

        pl.done();
        Ok(builder.build())
    }

    /// Builds a graph and its transpose from a file containing a textual arc
    /// list.
    ///
    /// See [`from_reader`](GraphBuilder::from_reader) for the format.
    pub fn from_path(
        num_nodes: usize,
        path: impl AsRef<Path>,
        pl: &mut impl ProgressLog,
    ) -> Result<(StackGraph, StackGraph), GraphError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GraphError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_reader(num_nodes, BufReader::new(file), pl)
    }

    /// Builds a graph and its transpose from a WebGraph graph.
    ///
    /// Node `x` of `graph` becomes node `x + 1`.
    ///
    /// # Arguments
    /// * `graph`: the graph.
    /// * `pl`: a progress logger, updated once per node.
    pub fn from_graph(
        graph: impl RandomAccessGraph,
        pl: &mut impl ProgressLog,
    ) -> (StackGraph, StackGraph) {
        let num_nodes = graph.num_nodes();
        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start("Reading arcs...");

        let mut builder = Self::new(num_nodes);
        for node in 0..num_nodes {
            for succ in graph.successors(node) {
                builder.push_arc(node + 1, succ + 1);
            }
            pl.light_update();
        }

        pl.done();
        builder.build()
    }
}

/// Parses a line made of exactly two unsigned integers.
fn parse_arc(content: &str) -> Option<(usize, usize)> {
    let mut tokens = content.split_whitespace();
    let tail = tokens.next()?.parse().ok()?;
    let head = tokens.next()?.parse().ok()?;
    match tokens.next() {
        None => Some((tail, head)),
        Some(_) => None,
    }
}
