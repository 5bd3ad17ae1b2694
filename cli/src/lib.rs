/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

use anyhow::{Context, Result, anyhow, bail, ensure};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dsi_progress_logger::ProgressLogger;
use dsi_progress_logger::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use std::time::SystemTime;
use vcgraph::graph::Graph;
use vcgraph_algo::distances::diameter::Metric;
use vcgraph_algo::girth::GirthConfig;

pub mod analyze;
pub mod diameter;
pub mod girth;

/// Parses the number of threads from a string.
///
/// This function is meant to be used with `#[arg(...,  value_parser =
/// num_threads_parser)]`.
pub fn num_threads_parser(arg: &str) -> Result<usize> {
    let num_threads = arg.parse::<usize>()?;
    ensure!(num_threads > 0, "Number of threads must be greater than 0");
    Ok(num_threads)
}

/// Shared CLI arguments for commands that specify a number of threads.
#[derive(Args, Debug)]
pub struct NumThreadsArg {
    #[arg(short = 'j', long, default_value_t = rayon::current_num_threads().max(1), value_parser = num_threads_parser)]
    /// The number of threads to use.
    pub num_threads: usize,
}

/// Shared CLI argument for commands reading a graph.
#[derive(Args, Debug)]
pub struct GraphArg {
    /// The edge list of the graph: one line per edge containing source,
    /// destination, and weight, separated by whitespace; "-" reads from
    /// standard input. Reading stops at the first line that is not a triple.
    pub path: PathBuf,
}

impl GraphArg {
    /// Loads the graph, which must have at least one vertex.
    pub fn load(&self) -> Result<Graph> {
        let graph = if self.path.as_os_str() == "-" {
            log::info!("Reading edges from stdin...");
            Graph::from_reader(std::io::stdin().lock())
                .context("Could not read edges from stdin")?
        } else {
            log::info!("Reading edges from {}...", self.path.display());
            Graph::from_path(&self.path)
                .with_context(|| format!("Could not read edges from {}", self.path.display()))?
        };
        ensure!(!graph.is_empty(), "No edges read from {}", self.path.display());
        Ok(graph)
    }
}

/// The metric used to measure the diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MetricArg {
    /// Number of edges.
    #[default]
    Hops,
    /// Sum of edge weights.
    Weighted,
}

impl From<MetricArg> for Metric {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Hops => Metric::Hops,
            MetricArg::Weighted => Metric::Weighted,
        }
    }
}

/// Parses a positive integer from a string.
fn positive_parser(arg: &str) -> Result<usize> {
    let value = arg.parse::<usize>()?;
    ensure!(value > 0, "The value must be greater than 0");
    Ok(value)
}

/// Shared CLI arguments for commands computing the girth.
#[derive(Args, Debug)]
pub struct GirthArgs {
    #[arg(long, value_parser = positive_parser)]
    /// The maximum number of messages a vertex sends in a round (default: the
    /// hop diameter).
    pub budget: Option<usize>,

    #[arg(long)]
    /// Fail if the girth interval has not narrowed after this many phases.
    pub max_phases: Option<usize>,

    #[arg(long)]
    /// Fail if the computation has not completed after this many rounds.
    pub max_rounds: Option<usize>,
}

impl GirthArgs {
    pub fn to_config(&self) -> GirthConfig {
        GirthConfig::new()
            .message_budget(self.budget)
            .max_phases(self.max_phases)
            .max_rounds(self.max_rounds)
    }
}

/// Creates a [`ThreadPool`](rayon::ThreadPool) with the given number of threads.
pub fn get_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to create thread pool")?;
    log::info!("Using {} threads", thread_pool.current_num_threads());
    Ok(thread_pool)
}

/// Parses a duration from a string.
/// If no suffix is given, the value is in milliseconds.
/// You can use suffixes, the available ones are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` this is parsed as: 1 day, 2 hours, 3 minutes, 4 seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

/// Initializes the `env_logger` logger with a custom format including
/// timestamps with elapsed time since initialization.
pub fn init_env_logger() -> Result<()> {
    use jiff::SpanRound;
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span_round = SpanRound::new()
        .largest(jiff::Unit::Day)
        .smallest(jiff::Unit::Millisecond)
        .days_are_24_hours();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        let span = jiff::Span::new()
            .seconds(elapsed.as_secs() as i64)
            .milliseconds(elapsed.subsec_millis() as i64);
        let span = span.round(span_round).map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes "s"
    /// for seconds, "m" for minutes, "h" for hours, and "d" for days. If no
    /// suffix is provided it is assumed to be in milliseconds.
    /// Example: "1d2h3m4s567" is parsed as 1 day + 2 hours + 3 minutes + 4
    /// seconds + 567 milliseconds = 93784567 milliseconds.
    pub log_interval: Option<Duration>,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    Analyze(analyze::CliArgs),
    Diameter(diameter::CliArgs),
    Girth(girth::CliArgs),
}

#[derive(Parser, Debug)]
#[command(name = "vcgraph", version)]
/// Vertex-centric tools computing the diameter and the girth of undirected
/// weighted graphs.
///
/// Noteworthy environment variables:
///
/// - RUST_LOG: configuration for env_logger
///   <https://docs.rs/env_logger/latest/env_logger/>
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::Analyze(args) => {
            analyze::main(cli.args, args)?;
        }
        SubCommands::Diameter(args) => {
            diameter::main(cli.args, args)?;
        }
        SubCommands::Girth(args) => {
            girth::main(cli.args, args)?;
        }
    }

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty-prints seconds in a human-readable format.
fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let days = elapsed_seconds / (60 * 60 * 24);
    elapsed_seconds %= 60 * 60 * 24;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    for (value, unit) in [(days, "day"), (hours, "hour"), (minutes, "minute")] {
        match value {
            0 => {}
            1 => result.push_str(&format!("1 {} ", unit)),
            _ => result.push_str(&format!("{} {}s ", value, unit)),
        }
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}

/// Creates a progress logger honoring the global arguments.
fn new_progress_logger(global_args: &GlobalArgs) -> ProgressLogger {
    let mut pl = progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }
    pl
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("10s").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration("250").unwrap(), Duration::from_millis(250));
        assert_eq!(
            parse_duration("1d2h3m4s567").unwrap(),
            Duration::from_millis(93_784_567)
        );
        assert!(parse_duration("").is_err());
        assert!(parse_duration("3w").is_err());
    }

    #[test]
    fn test_pretty_print_elapsed() {
        assert_eq!(pretty_print_elapsed(1.5), "1.500 seconds (1.5s)");
        assert_eq!(
            pretty_print_elapsed(90061.0),
            "1 day 1 hour 1 minute 1.000 seconds (90061s)"
        );
        assert_eq!(
            pretty_print_elapsed(7320.0),
            "2 hours 2 minutes 0.000 seconds (7320s)"
        );
    }

    #[test]
    fn test_positive_parser() {
        assert_eq!(positive_parser("3").unwrap(), 3);
        assert!(positive_parser("0").is_err());
        assert!(positive_parser("-1").is_err());
        assert!(num_threads_parser("0").is_err());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "vcgraph",
            "analyze",
            "--metric",
            "weighted",
            "--budget",
            "2",
            "--json",
            "-j",
            "1",
            "--log-interval",
            "1m",
            "graph.txt",
        ]);
        assert_eq!(cli.args.log_interval, Some(Duration::from_secs(60)));
        let SubCommands::Analyze(args) = cli.command else {
            panic!("Expected the analyze subcommand");
        };
        assert_eq!(args.metric, MetricArg::Weighted);
        assert_eq!(args.girth.budget, Some(2));
        assert_eq!(args.girth.to_config(), GirthConfig::new().message_budget(Some(2)));
        assert!(args.json);
        assert_eq!(args.num_threads.num_threads, 1);
        assert_eq!(args.graph.path, Path::new("graph.txt"));
    }

    #[test]
    fn test_commands() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "1 2 1\n2 3 1\n3 4 1\n4 1 1")?;
        file.flush()?;
        let path = file.path().as_os_str().to_owned();

        for command in ["analyze", "diameter", "girth"] {
            cli_main(["vcgraph".into(), command.into(), "-j".into(), "2".into(), path.clone()])?;
        }
        cli_main([
            "vcgraph".into(),
            "analyze".into(),
            "--json".into(),
            "--dump-vertices".into(),
            path.clone(),
        ])?;
        assert!(
            cli_main([
                "vcgraph".into(),
                "girth".into(),
                "--max-phases".into(),
                "1".into(),
                path
            ])
            .is_err()
        );
        Ok(())
    }

    #[test]
    fn test_missing_graph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        assert!(GraphArg { path }.load().is_err());
    }
}
