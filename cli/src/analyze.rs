/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::{GirthArgs, GlobalArgs, GraphArg, MetricArg, NumThreadsArg};
use anyhow::Result;
use clap::Parser;
use vcgraph::report::Report;
use vcgraph_algo::distances::diameter::{self, Metric};
use vcgraph_algo::girth;

#[derive(Parser, Debug)]
#[command(
    name = "analyze",
    about = "Computes the diameter and then the girth of a graph, and prints a summary on stdout.",
    long_about = None
)]
pub struct CliArgs {
    #[clap(flatten)]
    pub graph: GraphArg,

    #[arg(long, value_enum, default_value_t = MetricArg::Hops)]
    /// The metric of the reported diameter (the girth search always uses the
    /// hop diameter).
    pub metric: MetricArg,

    #[clap(flatten)]
    pub girth: GirthArgs,

    #[arg(long)]
    /// Print the final state of every vertex after the summary.
    pub dump_vertices: bool,

    #[arg(long)]
    /// Print the summary in JSON format.
    pub json: bool,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let thread_pool = crate::get_thread_pool(args.num_threads.num_threads)?;
    let mut graph = args.graph.load()?;
    let mut pl = crate::new_progress_logger(&global_args);

    let hops = diameter::run(&mut graph, Metric::Hops, &thread_pool, &mut pl);
    let metric = Metric::from(args.metric);
    if metric != Metric::Hops {
        diameter::run(&mut graph, metric, &thread_pool, &mut pl);
    }
    let output = girth::run(
        &mut graph,
        hops,
        &args.girth.to_config(),
        &thread_pool,
        &mut pl,
    )?;

    let report = Report::new(&graph).cycle_found(output.cycle_found);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    if args.dump_vertices {
        for v in graph.vertices() {
            println!("{}", v);
        }
    }

    Ok(())
}
