/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Event;
use crate::{algo::visits::Sequential, graph::StackGraph};
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// A sequential depth-first visit that consumes the arcs of the graph.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit path is kept in a heap-allocated stack containing, for each node
/// on the path except the last one, the node itself. Since successors are
/// [popped](crate::graph::ArcStack::pop) from the graph as they are
/// enumerated, resuming a node after returning from a child simply means
/// popping its next successor, and no iterator needs to be stored.
///
/// The visit uses one bit per node to remember known nodes.
///
/// Since arcs are consumed, after a complete visit all successor lists of the
/// graph are empty. A second visit on the same graph (after a
/// [reset](Sequential::reset), or with a new instance) will see no arcs, and
/// every node will form a tree by itself.
///
/// [`visit_all`](Sequential::visit_all) starts visits from all nodes in
/// decreasing order, from [`num_nodes`](StackGraph::num_nodes) down to 1.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// each [postvisit event](Event::Postvisit).
///
/// If the callback interrupts the visit, the visit must be
/// [reset](Sequential::reset) before being used again.
///
/// # Examples
///
/// Let us compute the finishing order of the nodes:
///
/// ```
/// use kosaraju_scc::algo::visits::Sequential;
/// use kosaraju_scc::algo::visits::depth_first::*;
/// use kosaraju_scc::graph::GraphBuilder;
/// use dsi_progress_logger::no_logging;
/// use no_break::{NoBreak, Unbreakable};
/// use std::ops::ControlFlow::Continue;
///
/// let (mut graph, _) = GraphBuilder::from_arcs(3, [(1, 2), (2, 3)])?;
/// let mut visit = SeqConsuming::new(&mut graph);
/// let mut finished = vec![];
///
/// visit
///     .visit_all(
///         |event| {
///             if let Event::Postvisit { curr, .. } = event {
///                 finished.push(curr);
///             }
///             Continue::<Unbreakable, ()>(())
///         },
///         no_logging![],
///     )
///     .continue_value_no_break();
///
/// assert_eq!(finished, vec![3, 2, 1]);
/// # Ok::<(), kosaraju_scc::graph::GraphError>(())
/// ```
pub struct SeqConsuming<'a> {
    graph: &'a mut StackGraph,
    /// The nodes on the visit path, except the current one.
    stack: Vec<usize>,
    known: BitVec,
}

impl<'a> SeqConsuming<'a> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: a mutable reference to the graph to visit; its arcs will be
    ///   consumed by the visit.
    pub fn new(graph: &'a mut StackGraph) -> SeqConsuming<'a> {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            known: BitVec::new(num_nodes + 1),
        }
    }

    /// Returns whether `node` has been discovered by the visit.
    #[inline(always)]
    pub fn known(&self, node: usize) -> bool {
        self.known.get(node)
    }
}

impl Sequential<Event> for SeqConsuming<'_> {
    fn visit<E, C: FnMut(Event) -> ControlFlow<E, ()>>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<E, ()> {
        if self.known.get(root) {
            // The node belongs to a tree that has already been visited
            return Continue(());
        }

        callback(Event::Init { root })?;

        self.known.set(root, true);

        callback(Event::Previsit {
            curr: root,
            root,
            depth: 0,
        })?;

        // The node whose successors are being enumerated; its ancestors on the
        // visit path are on the stack.
        let mut curr = root;

        loop {
            match self.graph.successors_mut(curr).pop() {
                None => {
                    callback(Event::Postvisit {
                        curr,
                        root,
                        depth: self.stack.len(),
                    })?;

                    pl.light_update();

                    // Resume the parent, if any
                    match self.stack.pop() {
                        Some(parent) => curr = parent,
                        None => break,
                    }
                }
                Some(succ) if self.known.get(succ) => {
                    callback(Event::Revisit {
                        curr: succ,
                        root,
                        depth: self.stack.len() + 1,
                    })?;
                }
                Some(succ) => {
                    self.known.set(succ, true);
                    self.stack.push(curr);
                    curr = succ;

                    callback(Event::Previsit {
                        curr,
                        root,
                        depth: self.stack.len(),
                    })?;
                }
            }
        }

        callback(Event::Done { root })
    }

    fn visit_all<E, C: FnMut(Event) -> ControlFlow<E, ()>>(
        &mut self,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<E, ()> {
        for node in (1..=self.graph.num_nodes()).rev() {
            self.visit(node, &mut callback, pl)?;
        }

        Continue(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.known.reset();
    }
}
