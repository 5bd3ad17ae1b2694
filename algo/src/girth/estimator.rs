/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rayon::{ThreadPool, prelude::*};
use vcgraph::{graph::Graph, vertex::Vertex};

/// Returns the length of the shortest cycle closed by an edge of `v`.
fn estimate_at(graph: &Graph, v: &Vertex) -> u64 {
    let mut best = u64::MAX;
    for (k, w) in v.edges() {
        let Some(u) = graph.vertex(k) else {
            panic!("Vertex {} has unknown neighbor {}", v.id(), k);
        };
        for (&source, at_v) in v.best_per_source() {
            let Some(at_u) = u.best(source) else {
                continue;
            };
            // Paths through the edge itself do not close a cycle
            if at_v.predecessor == Some(k) || at_u.predecessor == Some(v.id()) {
                continue;
            }
            best = best.min(at_v.distance.saturating_add(at_u.distance).saturating_add(w));
        }
    }
    best
}

/// Estimates the length of the shortest cycle from the messages recorded by
/// the vertices.
///
/// If the adjacent vertices `v` and `k` both recorded a message from the same
/// source, and neither message crossed the edge between them, the two paths
/// followed by the messages and the edge form a closed walk whose length is
/// the sum of the two distances and of the weight of the edge. The estimate
/// is the minimum such length, or [`u64::MAX`] if there is none.
pub fn estimate(graph: &Graph, thread_pool: &ThreadPool) -> u64 {
    thread_pool.install(|| {
        graph
            .vertices()
            .par_iter()
            .map(|v| estimate_at(graph, v))
            .min()
            .unwrap_or(u64::MAX)
    })
}
