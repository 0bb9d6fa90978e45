/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{
    algo::visits::{depth_first::*, Sequential},
    graph::StackGraph,
};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// The result of a [depth-first pass](dfs_pass) over a graph.
///
/// Both arrays have length `num_nodes + 1` and are indexed by node; slot 0 is
/// always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsPass {
    finishing_time: Box<[usize]>,
    leader_tally: Box<[usize]>,
}

impl DfsPass {
    /// Returns the finishing time of each node, that is, the position (from
    /// 1) of the node in the order in which the enumeration of successors was
    /// completed.
    pub fn finishing_time(&self) -> &[usize] {
        &self.finishing_time
    }

    /// Returns, for each node, the number of nodes in the visit tree it is
    /// the root of, or zero if the node is not a root.
    pub fn leader_tally(&self) -> &[usize] {
        &self.leader_tally
    }

    /// Returns the number of visit trees.
    pub fn num_trees(&self) -> usize {
        self.leader_tally.iter().filter(|&&size| size != 0).count()
    }

    /// Returns the finishing times and the leader tally.
    pub fn into_parts(self) -> (Box<[usize]>, Box<[usize]>) {
        (self.finishing_time, self.leader_tally)
    }
}

/// Performs a complete depth-first visit of a graph, starting new visit trees
/// from nodes in decreasing order, and computes finishing times and the size
/// of each visit tree.
///
/// All arcs of `graph` are consumed.
///
/// # Arguments
/// * `graph`: the graph.
/// * `pl`: a progress logger.
pub fn dfs_pass(graph: &mut StackGraph, pl: &mut impl ProgressLog) -> DfsPass {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    let msg = format!("Visiting {}...", graph.name());
    pl.start(&msg);

    let mut finishing_time = vec![0; num_nodes + 1].into_boxed_slice();
    let mut leader_tally = vec![0; num_nodes + 1].into_boxed_slice();
    let mut time = 0;
    let mut visit = SeqConsuming::new(graph);

    visit
        .visit_all(
            |event| {
                if let Event::Postvisit { curr, root, .. } = event {
                    time += 1;
                    finishing_time[curr] = time;
                    leader_tally[root] += 1;
                }
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    pl.done();

    DfsPass {
        finishing_time,
        leader_tally,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{graph::GraphBuilder, utils::math::is_permutation};
    use anyhow::Result;
    use dsi_progress_logger::prelude::*;

    #[test]
    fn test_cycle() -> Result<()> {
        let (mut graph, _) = GraphBuilder::from_arcs(3, [(1, 2), (2, 3), (3, 1)])?;
        let pass = dfs_pass(&mut graph, no_logging![]);
        // 3 -> 1 -> 2, then back
        assert_eq!(pass.finishing_time(), &[0, 2, 1, 3]);
        assert_eq!(pass.leader_tally(), &[0, 0, 0, 3]);
        assert_eq!(pass.num_trees(), 1);
        Ok(())
    }

    #[test]
    fn test_path() -> Result<()> {
        let (mut graph, _) = GraphBuilder::from_arcs(4, [(1, 2), (2, 3), (3, 4)])?;
        let pass = dfs_pass(&mut graph, no_logging![]);
        // Every tree is a single node, as successors are visited first
        assert_eq!(pass.finishing_time(), &[0, 4, 3, 2, 1]);
        assert_eq!(pass.leader_tally(), &[0, 1, 1, 1, 1]);
        Ok(())
    }

    #[test]
    fn test_consumed_graph() -> Result<()> {
        let (mut graph, _) = GraphBuilder::from_arcs(3, [(1, 2), (2, 3), (3, 1)])?;
        dfs_pass(&mut graph, no_logging![]);
        assert_eq!(graph.num_arcs(), 0);

        // No arcs left: every node is a tree by itself
        let pass = dfs_pass(&mut graph, no_logging![]);
        assert_eq!(pass.finishing_time(), &[0, 3, 2, 1]);
        assert_eq!(pass.leader_tally(), &[0, 1, 1, 1]);
        assert!(is_permutation(&pass.finishing_time()[1..]));
        Ok(())
    }
}
