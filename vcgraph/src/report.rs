/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Human-readable and serializable renderings of graphs and vertices.
//!
//! The [`Display`](fmt::Display) implementation of [`Graph`] prints a short
//! summary (rounds, girth, number of vertices, diameter), while the one of
//! [`Vertex`] prints a diagnostic dump of the vertex state. [`Report`] collects
//! the same summary in a structure that can be serialized when the `serde`
//! feature is enabled.

use crate::{graph::Graph, vertex::Vertex};
use itertools::Itertools;
use std::fmt;

struct OrUnknown<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrUnknown<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("not computed"),
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds: {}", self.round())?;
        writeln!(f, "Girth: {}", OrUnknown(self.girth()))?;
        writeln!(f, "Vertices: {}", self.num_vertices())?;
        write!(f, "Diameter: {}", OrUnknown(self.diameter()))
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "id: {}", self.id())?;
        writeln!(f, "Neighbors: {}", self.neighbors().join(" "))?;
        writeln!(f, "inMsg: {}", self.inbox().iter().join(" "))?;
        write!(
            f,
            "msgList: {}",
            self.best_per_source()
                .iter()
                .map(|(source, msg)| format!("{}, {}", source, msg))
                .join(" ")
        )
    }
}

/// A summary of the results computed on a graph.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub rounds: usize,
    pub girth: Option<u64>,
    pub vertices: usize,
    pub edges: usize,
    pub diameter: Option<u64>,
    pub max_edge_weight: u64,
    /// Whether the girth search witnessed a cycle; [`None`] if unknown.
    pub cycle_found: Option<bool>,
}

impl Report {
    /// Collects the summary of `graph`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            rounds: graph.round(),
            girth: graph.girth(),
            vertices: graph.num_vertices(),
            edges: graph.num_edges(),
            diameter: graph.diameter(),
            max_edge_weight: graph.max_edge_weight(),
            cycle_found: None,
        }
    }

    /// Sets whether the girth search witnessed a cycle.
    pub fn cycle_found(mut self, cycle_found: bool) -> Self {
        self.cycle_found = Some(cycle_found);
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds: {}", self.rounds)?;
        match (self.girth, self.cycle_found) {
            (Some(girth), Some(false)) => writeln!(
                f,
                "Girth: {} (no cycle found within the exploration radius)",
                girth
            )?,
            (girth, _) => writeln!(f, "Girth: {}", OrUnknown(girth))?,
        }
        writeln!(f, "Vertices: {}", self.vertices)?;
        writeln!(f, "Edges: {}", self.edges)?;
        write!(f, "Diameter: {}", OrUnknown(self.diameter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{message::Message, vertex::Retention};

    #[test]
    fn test_graph_summary() {
        let mut graph = Graph::from_edges([(1, 2, 1), (2, 3, 1)]);
        assert_eq!(
            graph.to_string(),
            "Rounds: 0\nGirth: not computed\nVertices: 3\nDiameter: not computed"
        );
        graph.set_diameter(2);
        graph.set_girth(5);
        assert!(graph.to_string().contains("Girth: 5\n"));
        assert!(graph.to_string().ends_with("Diameter: 2"));
    }

    #[test]
    fn test_vertex_dump() {
        let mut v = Vertex::new(1);
        v.add_neighbor(3, 1);
        v.add_neighbor(2, 1);
        v.seed();
        v.deliver(Message::seed(3).forwarded(3));
        v.deliver(Message::seed(2).forwarded(2));
        v.flood(Retention::First, |_, _| {});
        assert_eq!(
            v.to_string(),
            "id: 1\nNeighbors: 2 3\n\
             inMsg: {hop: 0, src: 3, dist: 0, pre: 3} {hop: 0, src: 2, dist: 0, pre: 2}\n\
             msgList: 1, {hop: 0, src: 1, dist: 0, pre: -}"
        );
        v.process_inbox();
        assert!(v.inbox().is_empty());
        assert_eq!(v.outbox().len(), 2);
    }

    #[test]
    fn test_report_no_cycle() {
        let mut graph = Graph::from_edges([(1, 2, 1)]);
        graph.set_girth(3);
        let report = Report::new(&graph).cycle_found(false);
        assert!(
            report
                .to_string()
                .contains("Girth: 3 (no cycle found within the exploration radius)")
        );
    }
}
