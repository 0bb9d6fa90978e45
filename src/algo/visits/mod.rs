/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on [stack graphs](crate::graph::StackGraph).

pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow;

/// A sequential visit.
///
/// Implementations of this trait must provide the
/// [`visit`](Sequential::visit) method, which should perform a visit of a
/// graph starting from a given node, and the
/// [`visit_all`](Sequential::visit_all) method, which should perform a visit
/// of the whole graph.
///
/// For each node, the visit invokes a callback with argument of type `A`. The
/// callback returns a [`ControlFlow`]: if it returns
/// [`Break`](ControlFlow::Break), the visit is interrupted and the value is
/// returned to the caller. Callbacks that never interrupt the visit can use
/// [`Unbreakable`](no_break::Unbreakable) as break type, and the caller can
/// then unwrap the result using
/// [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break).
pub trait Sequential<A> {
    /// Visits the graph from the specified node.
    ///
    /// If the node has already been visited, nothing happens and the
    /// callback is not invoked.
    ///
    /// # Arguments:
    /// * `root`: The node to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `pl`: A progress logger that implements
    ///   [`dsi_progress_logger::ProgressLog`] may be passed to the method to
    ///   log the progress of the visit. If `no_logging![]` is passed, logging
    ///   code should be optimized away by the compiler.
    fn visit<E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<E, ()>;

    /// Visits the whole graph.
    ///
    /// See [`visit`](Sequential::visit) for more details.
    fn visit_all<E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<E, ()>;

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
