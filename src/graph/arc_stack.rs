/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// The successors of a node, stored as a LIFO stack.
///
/// Arcs are consumed as they are popped: once [`pop`](ArcStack::pop) has
/// returned a successor, the stack will never return it again. This makes it
/// possible for a visit to enumerate each arc exactly once without keeping a
/// per-node cursor.
///
/// # Examples
///
/// ```
/// use kosaraju_scc::graph::ArcStack;
///
/// let mut arcs = ArcStack::new();
/// arcs.push(2);
/// arcs.push(3);
/// assert_eq!(arcs.pop(), Some(3));
/// assert_eq!(arcs.pop(), Some(2));
/// assert_eq!(arcs.pop(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcStack(Vec<usize>);

impl ArcStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Pushes a successor on top of the stack.
    #[inline(always)]
    pub fn push(&mut self, head: usize) {
        self.0.push(head);
    }

    /// Removes and returns the most recently pushed successor, or [`None`] if
    /// all arcs have been consumed.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    /// Returns the number of arcs not yet consumed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if all arcs have been consumed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the successors in pop order, without
    /// consuming them.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().rev().copied()
    }

    /// Replaces in place every successor `head` with `map(head)`.
    ///
    /// The order of the stack is preserved.
    pub fn relabel(&mut self, mut map: impl FnMut(usize) -> usize) {
        for head in self.0.iter_mut() {
            *head = map(*head);
        }
    }
}

impl FromIterator<usize> for ArcStack {
    /// Pushes the successors in iteration order, so the last one will be
    /// popped first.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
