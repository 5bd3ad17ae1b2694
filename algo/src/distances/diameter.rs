/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Diameter by a bounded flood.
//!
//! Every vertex is seeded with its own message, and then the graph performs
//! as many rounds as it has vertices. In each round every vertex drains its
//! outbox, forwarding the messages it accepts to all neighbors but the one
//! the message came from, and then every vertex processes its inbox. Since a
//! shortest path has at most *n* − 1 edges, when the rounds are over the
//! record of each vertex contains, for each source reaching it, the message
//! of a shortest path.
//!
//! The [`Metric`] decides what "shortest" means: with [`Metric::Hops`] the
//! first message from a source is kept, and the diameter is the maximum
//! number of hops; with [`Metric::Weighted`] a message replaces the recorded
//! one if it is strictly shorter, and the diameter is the maximum weighted
//! distance.
//!
//! The send half of each round has no early exit, so it runs in parallel:
//! each vertex buffers its deliveries, and the buffers are merged into the
//! inboxes at the barrier.
//!
//! # Examples
//!
//! ```
//! use dsi_progress_logger::no_logging;
//! use vcgraph::{graph::Graph, thread_pool};
//! use vcgraph_algo::distances::diameter::{self, Metric};
//!
//! let mut graph = Graph::from_edges([(1, 2, 5)]);
//! assert_eq!(diameter::run(&mut graph, Metric::Hops, &thread_pool![], no_logging![]), 1);
//! assert_eq!(diameter::run(&mut graph, Metric::Weighted, &thread_pool![], no_logging![]), 5);
//! assert_eq!(graph.diameter(), Some(5));
//! ```

use dsi_progress_logger::prelude::*;
use rayon::{ThreadPool, prelude::*};
use std::fmt;
use vcgraph::{VertexId, graph::Graph, message::Message, vertex::Retention};

/// The length of a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// The number of edges.
    #[default]
    Hops,
    /// The sum of the weights of the edges.
    Weighted,
}

impl Metric {
    fn retention(self) -> Retention {
        match self {
            Metric::Hops => Retention::First,
            Metric::Weighted => Retention::Shortest,
        }
    }

    /// Returns the length of the path that brought `msg` to its holder.
    #[inline(always)]
    pub fn length(self, msg: &Message) -> u64 {
        match self {
            Metric::Hops => msg.hop as u64,
            Metric::Weighted => msg.distance,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Hops => f.write_str("hop"),
            Metric::Weighted => f.write_str("weighted"),
        }
    }
}

/// Performs one flood round: a parallel send phase, the delivery of the
/// buffered messages, and the parallel processing of the inboxes.
///
/// Returns the number of messages accepted by the vertices.
fn round(graph: &mut Graph, retention: Retention, thread_pool: &ThreadPool) -> usize {
    let (accepted, deliveries): (Vec<usize>, Vec<Vec<(VertexId, Message)>>) =
        thread_pool.install(|| {
            graph
                .vertices_mut()
                .par_iter_mut()
                .map(|v| {
                    let mut out = Vec::with_capacity(v.degree());
                    let accepted = v.flood(retention, |k, msg| out.push((k, msg)));
                    (accepted, out)
                })
                .unzip()
        });
    graph.deliver_all(deliveries.into_iter().flatten());
    graph.process_inboxes(thread_pool);
    graph.next_round();
    accepted.into_iter().sum()
}

/// Computes the diameter of `graph` using the given metric, stores it in
/// the graph, and returns it.
///
/// The pending state of all vertices is reset at the start, and the round
/// counter of the graph is increased by the number of vertices. On a
/// disconnected graph the result is the maximum over pairs of connected
/// vertices; the diameter of an empty graph, or of a graph without edges, is
/// zero.
pub fn run(
    graph: &mut Graph,
    metric: Metric,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> u64 {
    let num_vertices = graph.num_vertices();
    let retention = metric.retention();

    graph.clear();
    graph.seed();

    pl.item_name("round");
    pl.expected_updates(Some(num_vertices));
    pl.start(format!(
        "Computing the {} diameter of {} vertices and {} edges...",
        metric,
        num_vertices,
        graph.num_edges()
    ));

    for r in 0..num_vertices {
        let accepted = round(graph, retention, thread_pool);
        log::trace!("Round {}: {} messages accepted", r + 1, accepted);
        pl.light_update();
    }

    let diameter = graph
        .vertices()
        .iter()
        .flat_map(|v| v.best_per_source().values())
        .map(|msg| metric.length(msg))
        .max()
        .unwrap_or(0);

    pl.done();
    pl.info(format_args!("The {} diameter is {}", metric, diameter));

    graph.set_diameter(diameter);
    diameter
}
