/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use kosaraju_scc::prelude::*;
use kosaraju_scc::{algo::visits::depth_first::*, utils::math::is_permutation};
use no_break::{NoBreak, Unbreakable};
use std::ops::ControlFlow::Continue;

#[test]
fn test_roots_in_decreasing_order() -> Result<()> {
    let (mut graph, _) = GraphBuilder::from_arcs(5, [(1, 2), (4, 3)])?;
    let mut visit = SeqConsuming::new(&mut graph);
    let mut roots = vec![];
    visit
        .visit_all(
            |event| {
                if let Event::Init { root } = event {
                    roots.push(root);
                }
                Continue::<Unbreakable, ()>(())
            },
            no_logging![],
        )
        .continue_value_no_break();
    assert_eq!(roots, vec![5, 4, 2, 1]);
    Ok(())
}

#[test]
fn test_postvisit_order() -> Result<()> {
    let (mut graph, _) = GraphBuilder::from_arcs(4, [(4, 1), (4, 2), (2, 3), (3, 4)])?;
    let mut visit = SeqConsuming::new(&mut graph);
    let mut postvisits = vec![];
    visit
        .visit_all(
            |event| {
                if let Event::Postvisit { curr, root, .. } = event {
                    postvisits.push((curr, root));
                }
                Continue::<Unbreakable, ()>(())
            },
            no_logging![],
        )
        .continue_value_no_break();
    // 4 -> 2 -> 3 (back arc to 4), then 4 -> 1
    assert_eq!(postvisits, vec![(3, 4), (2, 4), (1, 4), (4, 4)]);
    Ok(())
}

#[test]
fn test_consumed_twice() -> Result<()> {
    let arcs = [(1, 2), (2, 3), (3, 1), (3, 4)];
    let (mut graph, _) = GraphBuilder::from_arcs(4, arcs)?;

    let pass = sccs::dfs_pass(&mut graph, no_logging![]);
    // 4 has no successors, so it is a tree by itself
    assert_eq!(pass.num_trees(), 2);
    assert_eq!(pass.leader_tally(), &[0, 0, 0, 3, 1]);
    assert_eq!(graph.num_arcs(), 0);

    let pass = sccs::dfs_pass(&mut graph, no_logging![]);
    assert_eq!(pass.num_trees(), 4);
    assert_eq!(pass.leader_tally(), &[0, 1, 1, 1, 1]);
    assert!(is_permutation(&pass.finishing_time()[1..]));
    Ok(())
}

#[test]
fn test_reset() -> Result<()> {
    let (mut graph, _) = GraphBuilder::from_arcs(3, [(3, 2), (2, 1)])?;
    let mut visit = SeqConsuming::new(&mut graph);
    let mut count = 0;
    visit
        .visit(
            3,
            |event| {
                if let Event::Previsit { .. } = event {
                    count += 1;
                }
                Continue::<Unbreakable, ()>(())
            },
            no_logging![],
        )
        .continue_value_no_break();
    assert_eq!(count, 3);

    visit.reset();
    assert!(!visit.known(2));
    let mut count = 0;
    visit
        .visit(
            3,
            |event| {
                if let Event::Previsit { .. } = event {
                    count += 1;
                }
                Continue::<Unbreakable, ()>(())
            },
            no_logging![],
        )
        .continue_value_no_break();
    // Arcs have been consumed by the first visit
    assert_eq!(count, 1);
    Ok(())
}
