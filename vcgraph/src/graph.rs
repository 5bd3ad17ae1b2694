/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The graph owning all vertices.

use crate::{VertexId, message::Message, vertex::Vertex};
use rayon::{ThreadPool, prelude::*};
use std::collections::HashMap;

/// An undirected, positively weighted graph of [vertices](Vertex).
///
/// Vertices are created lazily by [`add_edge`](Self::add_edge) and stored in
/// the order in which their identifiers first appear; every sweep over the
/// vertices performed by this crate and by the algorithms built on it follows
/// that order.
///
/// Besides the vertices, the graph keeps the diagnostic round counter and the
/// final outputs of the algorithms, which are written once when an algorithm
/// completes.
///
/// # Examples
///
/// ```
/// use vcgraph::graph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 1);
/// graph.add_edge(2, 3, 4);
/// graph.add_edge(3, 2, 7); // Ignored, the first weight wins
///
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.max_edge_weight(), 7);
/// assert_eq!(graph.vertex(3).and_then(|v| v.weight(2)), Some(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<VertexId, usize>,
    num_edges: usize,
    max_edge_weight: u64,
    round: usize,
    diameter: Option<u64>,
    girth: Option<u64>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from triples (source, destination, weight).
    pub fn from_edges(edges: impl IntoIterator<Item = (VertexId, VertexId, u64)>) -> Self {
        let mut graph = Self::new();
        for (i, j, w) in edges {
            graph.add_edge(i, j, w);
        }
        graph
    }

    /// Returns the position of `id`, creating the vertex if necessary.
    fn position_or_insert(&mut self, id: VertexId) -> usize {
        *self.index.entry(id).or_insert_with(|| {
            self.vertices.push(Vertex::new(id));
            self.vertices.len() - 1
        })
    }

    /// Adds an undirected edge of weight `w` between `i` and `j`.
    ///
    /// Unseen endpoints are created. If the edge already exists it is left
    /// unchanged, but the maximum edge weight is updated in any case. Loops
    /// create their vertex but no edge.
    pub fn add_edge(&mut self, i: VertexId, j: VertexId, w: u64) {
        let pos_i = self.position_or_insert(i);
        let pos_j = self.position_or_insert(j);
        self.max_edge_weight = self.max_edge_weight.max(w);

        if pos_i == pos_j {
            log::warn!("Ignoring loop on vertex {}", i);
            return;
        }

        let new_i = self.vertices[pos_i].add_neighbor(j, w);
        let new_j = self.vertices[pos_j].add_neighbor(i, w);
        debug_assert_eq!(new_i, new_j, "Adjacency of {} and {} is not symmetric", i, j);
        if new_i {
            self.num_edges += 1;
        }
    }

    /// Returns the number of distinct vertices ever inserted.
    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct undirected edges.
    #[inline(always)]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the maximum weight among the inserted edges (zero if there are
    /// none).
    #[inline(always)]
    pub fn max_edge_weight(&self) -> u64 {
        self.max_edge_weight
    }

    /// Returns the vertex with identifier `id`, if any.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.index.get(&id).map(|&pos| &self.vertices[pos])
    }

    /// Returns the position of the vertex with identifier `id` in
    /// [`vertices`](Self::vertices), if any.
    #[inline(always)]
    pub fn position(&self, id: VertexId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns the vertices in first-appearance order.
    #[inline(always)]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertices in first-appearance order.
    ///
    /// Structural information (identifiers and edges) cannot be modified
    /// through this slice; only pending messages can.
    #[inline(always)]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Returns an iterator over the undirected edges as triples (source,
    /// destination, weight), each edge being returned once.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, u64)> + '_ {
        self.vertices.iter().flat_map(move |v| {
            let pos = self.index[&v.id()];
            v.edges()
                .filter(move |&(k, _)| pos < self.index[&k])
                .map(move |(k, w)| (v.id(), k, w))
        })
    }

    /// Resets the pending state of every vertex.
    ///
    /// Round counter and algorithm outputs are not affected.
    pub fn clear(&mut self) {
        for v in &mut self.vertices {
            v.reset_for_phase();
        }
    }

    /// Pushes into the outbox of every vertex its self-originating message.
    pub fn seed(&mut self) {
        for v in &mut self.vertices {
            v.seed();
        }
    }

    /// Delivers messages into the inboxes of their targets.
    ///
    /// # Panics
    ///
    /// If a target is not a vertex of the graph.
    pub fn deliver_all(&mut self, deliveries: impl IntoIterator<Item = (VertexId, Message)>) {
        for (target, msg) in deliveries {
            let Some(&pos) = self.index.get(&target) else {
                panic!("Message {} delivered to unknown vertex {}", msg, target);
            };
            self.vertices[pos].deliver(msg);
        }
    }

    /// Processes in parallel the inbox of every vertex.
    ///
    /// This is the receive half of a superstep: when the method returns,
    /// every message delivered in the current round is in the outbox of its
    /// target.
    pub fn process_inboxes(&mut self, thread_pool: &ThreadPool) {
        thread_pool.install(|| {
            self.vertices
                .par_iter_mut()
                .for_each(|v| v.process_inbox())
        });
    }

    /// Returns the number of rounds performed so far.
    #[inline(always)]
    pub fn round(&self) -> usize {
        self.round
    }

    /// Increments the round counter.
    #[inline(always)]
    pub fn next_round(&mut self) {
        self.round += 1;
    }

    /// Returns the diameter, if it has been computed.
    #[inline(always)]
    pub fn diameter(&self) -> Option<u64> {
        self.diameter
    }

    pub fn set_diameter(&mut self, diameter: u64) {
        self.diameter = Some(diameter);
    }

    /// Returns the girth, if it has been computed.
    #[inline(always)]
    pub fn girth(&self) -> Option<u64> {
        self.girth
    }

    pub fn set_girth(&mut self, girth: u64) {
        self.girth = Some(girth);
    }
}
