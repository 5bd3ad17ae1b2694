/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::{GirthArgs, GlobalArgs, GraphArg, NumThreadsArg};
use anyhow::{Context, Result};
use clap::Parser;
use vcgraph_algo::distances::diameter::{self, Metric};
use vcgraph_algo::girth;

#[derive(Parser, Debug)]
#[command(
    name = "girth",
    about = "Computes the girth of a graph by bounded-BFS interval narrowing (the girth is printed on stdout).",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub graph: GraphArg,

    #[clap(flatten)]
    pub girth: GirthArgs,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let thread_pool = crate::get_thread_pool(args.num_threads.num_threads)?;
    let mut graph = args.graph.load()?;
    let mut pl = crate::new_progress_logger(&global_args);

    let hops = diameter::run(&mut graph, Metric::Hops, &thread_pool, &mut pl);
    let output = girth::run(
        &mut graph,
        hops,
        &args.girth.to_config(),
        &thread_pool,
        &mut pl,
    )
    .with_context(|| format!("Could not compute the girth of {}", args.graph.path.display()))?;

    if output.cycle_found {
        println!("Girth: {}", output.girth);
    } else {
        println!(
            "Girth: {} (no cycle found within the exploration radius)",
            output.girth
        );
    }
    println!("Interval: [{} . . {}]", output.alpha, output.beta);
    println!("Phases: {}", output.phases);
    println!("Rounds: {}", output.rounds);

    Ok(())
}
