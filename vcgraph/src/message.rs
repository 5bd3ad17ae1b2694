/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Messages exchanged between vertices.

use crate::VertexId;
use std::fmt;

/// A message traveling along the edges of a [`Graph`](crate::graph::Graph).
///
/// A message belongs to the wave originated by [`source`](Self::source), and
/// it records how many forwards it went through ([`hop`](Self::hop)), the
/// weight accumulated along the way ([`distance`](Self::distance)), and the
/// vertex that handed it to its current holder
/// ([`predecessor`](Self::predecessor)).
///
/// Messages are values: forwarding and inbox processing build new messages
/// with [`forwarded`](Self::forwarded) and [`advanced`](Self::advanced), so a
/// message held by a vertex is never observed by another vertex while it
/// changes.
///
/// The derived order compares fields in declaration order; it is used only to
/// break ties between messages with the same distance in an
/// [`OutQueue`](crate::queue::OutQueue).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Message {
    /// The number of vertex-to-vertex forwards since origination.
    pub hop: usize,
    /// The vertex that originated the message.
    pub source: VertexId,
    /// The sum of the weights of the edges traversed from the source.
    pub distance: u64,
    /// The vertex that forwarded the message to its current holder, or
    /// [`None`] for a message still at its source.
    pub predecessor: Option<VertexId>,
}

impl Message {
    /// Creates a message from its four fields.
    pub fn new(
        hop: usize,
        source: VertexId,
        distance: u64,
        predecessor: Option<VertexId>,
    ) -> Self {
        Self {
            hop,
            source,
            distance,
            predecessor,
        }
    }

    /// Creates the self-originating message a vertex is seeded with at the
    /// start of a phase.
    pub fn seed(source: VertexId) -> Self {
        Self::new(0, source, 0, None)
    }

    /// Overwrites the hop, source, and distance of the message.
    #[inline(always)]
    pub fn update(&mut self, hop: usize, source: VertexId, distance: u64) {
        self.hop = hop;
        self.source = source;
        self.distance = distance;
    }

    /// Returns the copy of this message that `sender` delivers to a neighbor.
    ///
    /// Hop and distance are left unchanged: they are advanced by the receiver
    /// when it processes its inbox.
    #[inline(always)]
    pub fn forwarded(&self, sender: VertexId) -> Self {
        Self {
            predecessor: Some(sender),
            ..*self
        }
    }

    /// Returns this message after it crossed an edge of the given weight.
    #[inline(always)]
    pub fn advanced(&self, weight: u64) -> Self {
        Self {
            hop: self.hop + 1,
            distance: self.distance.saturating_add(weight),
            ..*self
        }
    }

    /// Returns true if this message has not left its source yet.
    #[inline(always)]
    pub fn is_seed(&self) -> bool {
        self.predecessor.is_none()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.predecessor {
            Some(pred) => write!(
                f,
                "{{hop: {}, src: {}, dist: {}, pre: {}}}",
                self.hop, self.source, self.distance, pred
            ),
            None => write!(
                f,
                "{{hop: {}, src: {}, dist: {}, pre: -}}",
                self.hop, self.source, self.distance
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_then_advance() {
        let seed = Message::seed(3);
        assert!(seed.is_seed());

        let sent = seed.forwarded(3);
        assert_eq!(sent.hop, 0);
        assert_eq!(sent.distance, 0);
        assert_eq!(sent.predecessor, Some(3));

        let received = sent.advanced(7);
        assert_eq!(received, Message::new(1, 3, 7, Some(3)));
        assert!(!received.is_seed());
    }

    #[test]
    fn test_advance_saturates() {
        let m = Message::new(4, 0, u64::MAX - 1, Some(1));
        assert_eq!(m.advanced(10).distance, u64::MAX);
    }

    #[test]
    fn test_update() {
        let mut m = Message::new(1, 2, 3, Some(4));
        m.update(5, 6, 7);
        assert_eq!(m, Message::new(5, 6, 7, Some(4)));
    }
}
