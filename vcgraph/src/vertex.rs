/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Vertices as independent computational units.

use crate::{VertexId, message::Message, queue::OutQueue};
use std::collections::{BTreeMap, btree_map::Entry};

/// How a vertex retains messages from the same source.
///
/// Retention decides whether a message popped from the
/// [outbox](Vertex::outbox) is accepted into the
/// [best-per-source](Vertex::best_per_source) record; during a
/// [flood](Vertex::flood) only accepted messages are forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// The first message from a source is kept, and later ones are ignored.
    #[default]
    First,
    /// A later message from a source replaces the recorded one if its
    /// distance is strictly smaller.
    Shortest,
}

/// A vertex of a [`Graph`](crate::graph::Graph).
///
/// A vertex knows only its own edges. It receives messages in its
/// [inbox](Self::inbox); [processing the inbox](Self::process_inbox) advances
/// them across the edge they came from and moves them to the
/// [outbox](Self::outbox), from which [`send`](Self::send) and
/// [`flood`](Self::flood) pick the messages to forward to the neighbors.
///
/// Neighbors and edge weights are stored in a single map, so a weight is
/// defined exactly for the neighbors, and neighbors are always enumerated in
/// ascending order.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    neighbors: BTreeMap<VertexId, u64>,
    inbox: Vec<Message>,
    best_per_source: BTreeMap<VertexId, Message>,
    outbox: OutQueue,
}

impl Vertex {
    /// Creates an isolated vertex with no pending state.
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            neighbors: BTreeMap::new(),
            inbox: Vec::new(),
            best_per_source: BTreeMap::new(),
            outbox: OutQueue::new(),
        }
    }

    #[inline(always)]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the number of neighbors.
    #[inline(always)]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns the neighbors in ascending order.
    pub fn neighbors(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.neighbors.keys().copied()
    }

    /// Returns the pairs (neighbor, weight) in ascending neighbor order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (VertexId, u64)> + '_ {
        self.neighbors.iter().map(|(&k, &w)| (k, w))
    }

    /// Returns the weight of the edge to `neighbor`, if it exists.
    #[inline(always)]
    pub fn weight(&self, neighbor: VertexId) -> Option<u64> {
        self.neighbors.get(&neighbor).copied()
    }

    /// Returns true if `id` is a neighbor of this vertex.
    #[inline(always)]
    pub fn has_neighbor(&self, id: VertexId) -> bool {
        self.neighbors.contains_key(&id)
    }

    /// Adds an edge to `id` with the given weight, and returns true if the
    /// edge is new.
    ///
    /// If `id` is already a neighbor, the edge is left unchanged: the first
    /// weight wins. The reverse edge must be added to `id` by the caller.
    pub fn add_neighbor(&mut self, id: VertexId, weight: u64) -> bool {
        match self.neighbors.entry(id) {
            Entry::Vacant(entry) => {
                entry.insert(weight);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Clears the inbox, the outbox, and the best-per-source record.
    pub fn reset_for_phase(&mut self) {
        self.inbox.clear();
        self.best_per_source.clear();
        self.outbox.clear();
    }

    /// Pushes the self-originating seed message into the outbox.
    pub fn seed(&mut self) {
        self.outbox.push(Message::seed(self.id));
    }

    /// Appends a message to the inbox.
    #[inline(always)]
    pub fn deliver(&mut self, msg: Message) {
        self.inbox.push(msg);
    }

    pub fn inbox(&self) -> &[Message] {
        &self.inbox
    }

    pub fn outbox(&self) -> &OutQueue {
        &self.outbox
    }

    /// Returns the recorded messages, indexed by source.
    pub fn best_per_source(&self) -> &BTreeMap<VertexId, Message> {
        &self.best_per_source
    }

    /// Returns the recorded message from `source`, if any.
    #[inline(always)]
    pub fn best(&self, source: VertexId) -> Option<&Message> {
        self.best_per_source.get(&source)
    }

    /// Sends at most `batch_size` messages of minimum distance from the
    /// outbox, returning true if one of them comes from a source that had
    /// already been recorded.
    ///
    /// Each popped message is delivered, through `deliver`, to every neighbor
    /// other than its predecessor, provided that its distance plus the weight
    /// of the edge does not exceed `threshold`; messages that would exceed the
    /// threshold are dropped silently. After the fan-out the message is
    /// recorded as the best one from its source unless a message from the
    /// same source is already recorded: in that case a second independent
    /// path back to the source has been found, and the method will return
    /// true. The whole batch is sent in any case.
    pub fn send(
        &mut self,
        threshold: u64,
        batch_size: usize,
        mut deliver: impl FnMut(VertexId, Message),
    ) -> bool {
        let mut duplicate = false;
        for _ in 0..batch_size {
            let Some(msg) = self.outbox.pop() else {
                break;
            };
            let out = msg.forwarded(self.id);
            for (&k, &w) in &self.neighbors {
                if Some(k) != msg.predecessor && msg.distance.saturating_add(w) <= threshold {
                    deliver(k, out);
                }
            }
            match self.best_per_source.entry(msg.source) {
                Entry::Vacant(entry) => {
                    entry.insert(msg);
                }
                Entry::Occupied(_) => duplicate = true,
            }
        }
        duplicate
    }

    /// Drains the outbox, forwarding each accepted message to every neighbor
    /// other than its predecessor, and returns the number of accepted
    /// messages.
    ///
    /// Acceptance into the best-per-source record follows `retention`;
    /// messages that are not accepted are discarded.
    pub fn flood(
        &mut self,
        retention: Retention,
        mut deliver: impl FnMut(VertexId, Message),
    ) -> usize {
        let mut accepted = 0;
        while let Some(msg) = self.outbox.pop() {
            let accept = match self.best_per_source.entry(msg.source) {
                Entry::Vacant(entry) => {
                    entry.insert(msg);
                    true
                }
                Entry::Occupied(mut entry) => match retention {
                    Retention::First => false,
                    Retention::Shortest if msg.distance < entry.get().distance => {
                        entry.insert(msg);
                        true
                    }
                    Retention::Shortest => false,
                },
            };
            if !accept {
                continue;
            }
            accepted += 1;
            let out = msg.forwarded(self.id);
            for &k in self.neighbors.keys() {
                if Some(k) != msg.predecessor {
                    deliver(k, out);
                }
            }
        }
        accepted
    }

    /// Advances every message in the inbox across the edge it arrived from
    /// and moves it to the outbox, leaving the inbox empty.
    ///
    /// # Panics
    ///
    /// If a message in the inbox was not forwarded by a neighbor.
    pub fn process_inbox(&mut self) {
        for msg in self.inbox.drain(..) {
            let weight = msg
                .predecessor
                .and_then(|pred| self.neighbors.get(&pred).copied())
                .unwrap_or_else(|| {
                    panic!(
                        "Vertex {} received {} from a vertex that is not a neighbor",
                        self.id, msg
                    )
                });
            self.outbox.push(msg.advanced(weight));
        }
    }
}
