/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use dsi_progress_logger::prelude::*;
use kosaraju_scc::prelude::*;
use webgraph::prelude::BvGraph;

fn usage() -> ! {
    eprintln!("Usage: kosaraju-scc <num_nodes> <filename>");
    eprintln!("       kosaraju-scc bvgraph <basename>");
    std::process::exit(1);
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        usage();
    }

    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut total_pl = progress_logger![display_memory = true];
    total_pl.start("Computing sizes of strongly connected components...");
    let mut main_pl = progress_logger![display_memory = true];

    let (graph, transpose) = match args[1].as_str() {
        "bvgraph" => {
            let basename = &args[2];
            let graph = BvGraph::with_basename(basename)
                .load()
                .with_context(|| format!("Cannot load graph {}", basename))?;
            main_pl.info(format_args!("Loaded graph {}", basename));
            GraphBuilder::from_graph(&graph, &mut main_pl)
        }
        num_nodes => {
            let num_nodes = num_nodes
                .parse::<usize>()
                .with_context(|| format!("Invalid number of nodes {:?}", num_nodes))?;
            GraphBuilder::from_path(num_nodes, &args[2], &mut main_pl)
                .with_context(|| format!("Cannot read arc list {}", args[2]))?
        }
    };

    let components = sccs::kosaraju(graph, transpose, &mut main_pl);

    println!("Top 5 leaders have this many nodes:  {}", components);

    total_pl.done();
    Ok(())
}
