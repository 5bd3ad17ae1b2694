/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::{GlobalArgs, GraphArg, MetricArg, NumThreadsArg};
use anyhow::Result;
use clap::Parser;
use vcgraph_algo::distances::diameter;

#[derive(Parser, Debug)]
#[command(
    name = "diameter",
    about = "Computes the diameter of a graph by a bounded flood (the diameter is printed on stdout).",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub graph: GraphArg,

    #[arg(long, value_enum, default_value_t = MetricArg::Hops)]
    /// The metric used to measure paths.
    pub metric: MetricArg,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let thread_pool = crate::get_thread_pool(args.num_threads.num_threads)?;
    let mut graph = args.graph.load()?;
    let mut pl = crate::new_progress_logger(&global_args);

    let diameter = diameter::run(&mut graph, args.metric.into(), &thread_pool, &mut pl);
    println!("Diameter: {}", diameter);
    println!("Rounds: {}", graph.round());

    Ok(())
}
