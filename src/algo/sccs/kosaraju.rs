/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{dfs_pass, SccSizes};
use crate::graph::StackGraph;
use dsi_progress_logger::ProgressLog;

/// Renumbers the nodes of a graph using the given finishing times.
///
/// Node `x` becomes node `finishing_time[x]`; successor lists are relabelled
/// in place and moved to their new position, so no arc is copied.
///
/// # Arguments
/// * `graph`: the graph, which is consumed.
/// * `finishing_time`: a slice of length `num_nodes + 1` whose elements from
///   index 1 onwards are a permutation of [1 . . `num_nodes`].
/// * `pl`: a progress logger.
///
/// # Panics
/// If the length of `finishing_time` does not match the number of nodes.
pub fn renumber(
    mut graph: StackGraph,
    finishing_time: &[usize],
    pl: &mut impl ProgressLog,
) -> StackGraph {
    let num_nodes = graph.num_nodes();
    assert_eq!(
        finishing_time.len(),
        num_nodes + 1,
        "finishing times must have length num_nodes + 1"
    );
    debug_assert!(crate::utils::math::is_permutation(&finishing_time[1..]));

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Renumbering by finishing time...");

    let mut renumbered = StackGraph::new(num_nodes, format!("{} Renumbered", graph.name()));
    for tail in 1..=num_nodes {
        let mut arcs = graph.take_successors(tail);
        arcs.relabel(|head| finishing_time[head]);
        *renumbered.successors_mut(finishing_time[tail]) = arcs;
        pl.light_update();
    }

    pl.done();
    renumbered
}

/// Computes the sizes of the strongly connected components of a graph using
/// Kosaraju's algorithm.
///
/// A first [depth-first pass](dfs_pass) on `transpose` computes finishing
/// times; `graph` is then [renumbered](renumber) by finishing time, and a
/// second depth-first pass on the renumbered graph grows exactly one
/// component per visit tree.
///
/// Both graphs are consumed.
///
/// # Arguments
/// * `graph`: the graph.
/// * `transpose`: the transpose of `graph`.
/// * `pl`: a progress logger.
///
/// # Panics
/// If the two graphs have a different number of nodes.
pub fn kosaraju(
    graph: StackGraph,
    mut transpose: StackGraph,
    pl: &mut impl ProgressLog,
) -> SccSizes {
    assert_eq!(
        graph.num_nodes(),
        transpose.num_nodes(),
        "a graph and its transpose must have the same number of nodes"
    );

    let finishing_time = dfs_pass(&mut transpose, pl).into_parts().0;
    drop(transpose);

    let mut renumbered = renumber(graph, &finishing_time, pl);
    drop(finishing_time);

    let components = SccSizes::from_leader_tally(dfs_pass(&mut renumbered, pl).leader_tally());
    pl.info(format_args!(
        "Found {} strongly connected components",
        components.num_components()
    ));

    components
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::GraphBuilder;
    use anyhow::Result;
    use dsi_progress_logger::prelude::*;

    #[test]
    fn test_renumber() -> Result<()> {
        let (graph, _) = GraphBuilder::from_arcs(3, [(1, 2), (1, 3), (3, 2)])?;
        // 1 -> 3, 2 -> 1, 3 -> 2
        let renumbered = renumber(graph, &[0, 3, 1, 2], no_logging![]);
        assert_eq!(renumbered.name(), "Forward Graph Renumbered");
        assert_eq!(renumbered.num_arcs(), 3);
        assert_eq!(
            renumbered.successors(3).iter().collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert!(renumbered.successors(1).is_empty());
        assert_eq!(renumbered.successors(2).iter().collect::<Vec<_>>(), vec![1]);
        Ok(())
    }

    #[test]
    #[should_panic]
    fn test_mismatched_sizes() {
        let forward = StackGraph::new(3, "Forward Graph");
        let reverse = StackGraph::new(4, "Reverse Graph");
        kosaraju(forward, reverse, no_logging![]);
    }

    #[test]
    fn test_two_cycles() -> Result<()> {
        let (graph, transpose) =
            GraphBuilder::from_arcs(5, [(1, 2), (2, 1), (2, 3), (3, 4), (4, 5), (5, 3)])?;
        let components = kosaraju(graph, transpose, no_logging![]);
        assert_eq!(components.sizes(), &[3, 2]);
        assert_eq!(components.top_five(), [3, 2, 0, 0, 0]);
        Ok(())
    }
}
