/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Girth by bounded-BFS interval narrowing.
//!
//! The girth (the length of a shortest cycle) is searched in an interval
//! [α . . β] that is narrowed by a sequence of *phases*. In each phase every
//! vertex starts a wave of messages that is not forwarded beyond a
//! threshold *T*, and the graph performs [supersteps](superstep) until
//!
//! - some vertex receives for the second time a message from the same
//!   source, which shows a closed walk of length at most 2*T*: β becomes at
//!   most 2*T*; or
//! - no vertex has messages left to send: if no cycle was
//!   [estimated](estimate) within 2*T*, α becomes 2*T*, otherwise β becomes
//!   at most the estimate.
//!
//! The next threshold is (α + β) / 4, or the previous threshold plus one if
//! this value would not change it. When β − α ≤ 2, β is the girth.
//!
//! The initial interval is [0 . . (2*D* + 1)*W*], where *D* is the hop
//! diameter and *W* the maximum edge weight. If no phase ever witnesses a
//! cycle, for example on a tree, the girth reported is the initial upper
//! bound, and [`GirthOutput::cycle_found`] is false.
//!
//! # Examples
//!
//! ```
//! use dsi_progress_logger::no_logging;
//! use vcgraph::{graph::Graph, thread_pool};
//! use vcgraph_algo::distances::diameter::{self, Metric};
//! use vcgraph_algo::girth::{self, GirthConfig};
//!
//! let mut graph = Graph::from_edges([(1, 2, 1), (2, 3, 1), (3, 4, 1), (4, 1, 1)]);
//! let thread_pool = thread_pool![];
//! let diameter = diameter::run(&mut graph, Metric::Hops, &thread_pool, no_logging![]);
//! assert_eq!(diameter, 2);
//!
//! let output = girth::run(
//!     &mut graph,
//!     diameter,
//!     &GirthConfig::new(),
//!     &thread_pool,
//!     no_logging![],
//! )?;
//! assert_eq!(output.girth, 4);
//! assert!(output.cycle_found);
//! assert_eq!(graph.girth(), Some(4));
//! # Ok::<(), girth::GirthError>(())
//! ```

mod estimator;
pub use estimator::estimate;

mod phase;
pub use phase::*;

mod superstep;
pub use superstep::superstep;

use dsi_progress_logger::prelude::*;
use rayon::ThreadPool;
use thiserror::Error;
use vcgraph::graph::Graph;

/// Options of a girth computation.
///
/// The ceilings on phases and rounds are a safety net for the caller; they
/// are unbounded by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GirthConfig {
    message_budget: Option<usize>,
    max_phases: Option<usize>,
    max_rounds: Option<usize>,
}

impl GirthConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of messages a vertex sends in a round.
    ///
    /// If [`None`] (the default), the budget is the hop diameter, or one if
    /// the diameter is zero.
    pub fn message_budget(mut self, message_budget: Option<usize>) -> Self {
        self.message_budget = message_budget;
        self
    }

    /// Sets the maximum number of phases.
    pub fn max_phases(mut self, max_phases: Option<usize>) -> Self {
        self.max_phases = max_phases;
        self
    }

    /// Sets the maximum number of rounds, summed over all phases.
    pub fn max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

/// The error returned when a girth computation hits a configured ceiling.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GirthError {
    #[error(
        "The girth interval [{alpha} . . {beta}] did not narrow within {max_phases} phase(s)"
    )]
    PhaseLimit {
        max_phases: usize,
        alpha: u64,
        beta: u64,
    },
    #[error(
        "The girth computation did not complete within {max_rounds} round(s) (phase {phase}, interval [{alpha} . . {beta}])"
    )]
    RoundLimit {
        max_rounds: usize,
        phase: usize,
        alpha: u64,
        beta: u64,
    },
}

/// The result of a girth computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GirthOutput {
    /// The girth, that is, the final upper bound.
    pub girth: u64,
    /// The final lower bound.
    pub alpha: u64,
    /// The final upper bound.
    pub beta: u64,
    /// The threshold the next phase would have used.
    pub threshold: u64,
    /// The number of rounds performed.
    pub rounds: usize,
    /// The number of phases performed.
    pub phases: usize,
    /// Whether some phase witnessed a cycle. If false, [`girth`](Self::girth)
    /// is the initial upper bound, and no cycle was found within the
    /// exploration radius.
    pub cycle_found: bool,
    /// The interval (α, β) after each phase.
    pub bounds: Vec<(u64, u64)>,
}

/// Computes the girth of `graph`, stores it in the graph, and returns the
/// details of the computation.
///
/// `diameter` must be the hop diameter of the graph, as computed by
/// [`diameter::run`](crate::distances::diameter::run) with
/// [`Metric::Hops`](crate::distances::diameter::Metric::Hops). The graph is
/// assumed to be connected, and its edge weights positive.
///
/// # Errors
///
/// If one of the ceilings of `config` is hit; in this case the girth is not
/// stored.
pub fn run(
    graph: &mut Graph,
    diameter: u64,
    config: &GirthConfig,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Result<GirthOutput, GirthError> {
    let message_budget = config
        .message_budget
        .unwrap_or_else(|| usize::try_from(diameter).unwrap_or(usize::MAX).max(1));
    let mut state = PhaseState::new(diameter, graph.max_edge_weight(), message_budget);
    let mut cycle_found = false;
    let mut bounds = Vec::new();

    pl.item_name("round");
    pl.expected_updates(None);
    pl.start(format!(
        "Narrowing the girth interval [{} . . {}] with a message budget of {}...",
        state.alpha, state.beta, state.message_budget
    ));

    while !state.is_narrowed() {
        if let Some(max_phases) = config.max_phases {
            if state.phase >= max_phases {
                return Err(GirthError::PhaseLimit {
                    max_phases,
                    alpha: state.alpha,
                    beta: state.beta,
                });
            }
        }

        graph.clear();
        graph.seed();
        state.terminated = false;

        let termination = loop {
            if let Some(max_rounds) = config.max_rounds {
                if state.round >= max_rounds {
                    return Err(GirthError::RoundLimit {
                        max_rounds,
                        phase: state.phase + 1,
                        alpha: state.alpha,
                        beta: state.beta,
                    });
                }
            }
            let termination = superstep(graph, &mut state, thread_pool);
            pl.light_update();
            if let Some(termination) = termination {
                break termination;
            }
        };

        state.phase += 1;
        cycle_found |= termination.witnessed_cycle();
        bounds.push((state.alpha, state.beta));
        log::debug!(
            "Phase {} with threshold {}: {:?}, interval now [{} . . {}]",
            state.phase,
            state.threshold,
            termination,
            state.alpha,
            state.beta
        );
        state.next_threshold();
    }

    pl.done();
    pl.info(format_args!(
        "The girth is {} ({} phase(s), {} round(s){})",
        state.beta,
        state.phase,
        state.round,
        if cycle_found {
            ""
        } else {
            "; no cycle found within the exploration radius"
        }
    ));

    graph.set_girth(state.beta);
    Ok(GirthOutput {
        girth: state.beta,
        alpha: state.alpha,
        beta: state.beta,
        threshold: state.threshold,
        rounds: state.round,
        phases: state.phase,
        cycle_found,
        bounds,
    })
}
