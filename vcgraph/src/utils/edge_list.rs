/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{VertexId, graph::Graph};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// An iterator over the weighted edges of a textual edge list.
///
/// Each line must contain three whitespace-separated unsigned integers:
/// source, destination, and weight, and nothing else. The first line that is
/// not such a triple (including lines that are not valid UTF-8) ends the edge
/// list: this is not considered an error, and a warning is logged. I/O errors
/// are returned.
///
/// # Examples
///
/// ```
/// use vcgraph::utils::EdgeList;
///
/// let input = "1 2 3\n2 3 1\nnot an edge\n3 4 1\n";
/// let edges = EdgeList::new(input.as_bytes())
///     .collect::<std::io::Result<Vec<_>>>()
///     .unwrap();
/// assert_eq!(edges, vec![(1, 2, 3), (2, 3, 1)]);
/// ```
#[derive(Debug)]
pub struct EdgeList<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    line_num: usize,
    done: bool,
}

impl<R: BufRead> EdgeList<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            line_num: 0,
            done: false,
        }
    }

    /// Returns the number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_num
    }
}

/// Parses a line made of exactly three whitespace-separated unsigned integers.
fn parse_triple(line: &str) -> Option<(VertexId, VertexId, u64)> {
    let mut tokens = line.split_whitespace();
    let src = tokens.next()?.parse().ok()?;
    let dst = tokens.next()?.parse().ok()?;
    let weight = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((src, dst, weight))
}

impl<R: BufRead> Iterator for EdgeList<R> {
    type Item = io::Result<(VertexId, VertexId, u64)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.line.clear();
        match self.reader.read_until(b'\n', &mut self.line) {
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_num += 1;
                let triple = std::str::from_utf8(&self.line)
                    .ok()
                    .and_then(parse_triple);
                if triple.is_none() {
                    self.done = true;
                    let line = String::from_utf8_lossy(&self.line);
                    if !line.trim().is_empty() {
                        log::warn!(
                            "Line {}: {:?} is not a triple (source, destination, weight); stopping here",
                            self.line_num,
                            line.trim_end()
                        );
                    }
                }
                triple.map(Ok)
            }
        }
    }
}

impl Graph {
    /// Builds a graph from a textual [edge list](EdgeList).
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut graph = Self::new();
        for edge in EdgeList::new(reader) {
            let (i, j, w) = edge?;
            graph.add_edge(i, j, w);
        }
        log::info!(
            "Read {} vertices and {} edges (maximum weight {})",
            graph.num_vertices(),
            graph.num_edges(),
            graph.max_edge_weight()
        );
        Ok(graph)
    }

    /// Builds a graph from a file containing a textual [edge list](EdgeList).
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }
}
