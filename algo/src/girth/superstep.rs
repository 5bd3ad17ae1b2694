/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{PhaseState, Termination, estimate};
use rayon::ThreadPool;
use vcgraph::graph::Graph;

/// Performs one synchronous round of a girth phase.
///
/// Vertices with pending messages send at most
/// [`message_budget`](PhaseState::message_budget) of them, in the order of
/// [`Graph::vertices`]. The sweep stops at the first vertex that pops a
/// message from a source it had already recorded; if instead every outbox is
/// empty, the phase terminates by exhaustion. In both cases the messages
/// delivered in this round are processed anyway.
///
/// When the phase terminates, the shortest cycle is
/// [estimated](super::estimate), the interval in `state` is
/// [narrowed](PhaseState::narrow), and the termination is returned.
pub fn superstep(
    graph: &mut Graph,
    state: &mut PhaseState,
    thread_pool: &ThreadPool,
) -> Option<Termination> {
    let num_vertices = graph.num_vertices();
    let mut deliveries = Vec::new();
    let mut num_empty = 0;
    let mut duplicate = false;

    for v in graph.vertices_mut() {
        if v.outbox().is_empty() {
            num_empty += 1;
            continue;
        }
        if v.send(state.threshold, state.message_budget, |k, msg| {
            deliveries.push((k, msg))
        }) {
            log::trace!("Vertex {} found a duplicate in round {}", v.id(), state.round + 1);
            duplicate = true;
            break;
        }
    }

    if duplicate || num_empty == num_vertices {
        state.terminated = true;
    }

    graph.deliver_all(deliveries);
    graph.process_inboxes(thread_pool);
    graph.next_round();
    state.round += 1;

    if !state.terminated {
        return None;
    }

    let estimate = estimate(graph, thread_pool);
    let termination = if duplicate {
        Termination::Duplicate { estimate }
    } else {
        Termination::Exhaustion { estimate }
    };
    state.narrow(termination);
    Some(termination)
}
