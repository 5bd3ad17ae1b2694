/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random weighted graphs.

use crate::{VertexId, graph::Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Provides weighted Erdös-Rényi random graphs.
///
/// The model is parameterized by the number of vertices `n` and the
/// probability `p` of an edge between any two distinct vertices. Each edge
/// gets a weight chosen uniformly in [1 . . `max_weight`]. Loops are never
/// included.
///
/// Iterating over the edges takes time quadratic in `n`. Since isolated
/// vertices have no edges, they are not part of the [`Graph`] built by
/// [`graph`](Self::graph).
///
/// # Examples
///
/// ```
/// use vcgraph::graphs::random::ErdosRenyi;
///
/// let er = ErdosRenyi::new(10, 0.5, 1, 0);
/// assert!(er.edges().all(|(u, v, w)| u < v && v < 10 && w == 1));
/// // Same seed, same graph
/// assert!(er.edges().eq(ErdosRenyi::new(10, 0.5, 1, 0).edges()));
/// ```
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    max_weight: u64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of vertices,
    /// the probability of an edge between any two vertices, the maximum
    /// weight of an edge, and a seed for the [pseudorandom number
    /// generator](SmallRng).
    pub fn new(n: usize, p: f64, max_weight: u64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        assert!(max_weight > 0, "The maximum weight must be positive");
        Self {
            n,
            p,
            max_weight,
            seed,
        }
    }

    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.n
    }

    /// Returns the edges as triples (source, destination, weight), with
    /// source smaller than destination, in lexicographical order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, u64)> + '_ {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..self.n).flat_map(move |u| {
            (u + 1..self.n)
                .filter_map(|v| {
                    rng.random_bool(self.p)
                        .then(|| (u, v, rng.random_range(1..=self.max_weight)))
                })
                .collect::<Vec<_>>()
        })
    }

    /// Builds the graph induced by the edges.
    pub fn graph(&self) -> Graph {
        Graph::from_edges(self.edges())
    }
}
