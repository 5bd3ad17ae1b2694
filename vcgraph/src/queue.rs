/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The per-vertex queue of pending outgoing messages.

use crate::message::Message;
use dary_heap::QuaternaryHeap;
use std::cmp::Reverse;

/// A min-heap of pending messages ordered by ascending distance.
///
/// The queue is a [quaternary heap](dary_heap::QuaternaryHeap) of `(distance,
/// message)` pairs wrapped in [`Reverse`]. Messages with the same distance
/// come out in the order of [`Message`], which makes every run reproducible,
/// but callers must not rely on a specific tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct OutQueue {
    heap: QuaternaryHeap<Reverse<(u64, Message)>>,
}

impl OutQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message to the queue.
    #[inline(always)]
    pub fn push(&mut self, msg: Message) {
        self.heap.push(Reverse((msg.distance, msg)));
    }

    /// Removes and returns a message of minimum distance, or [`None`] if the
    /// queue is empty.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<Message> {
        self.heap.pop().map(|Reverse((_, msg))| msg)
    }

    /// Returns the number of pending messages.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if there are no pending messages.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes all pending messages.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns the pending messages in the order they would be popped.
    ///
    /// This method allocates, and it is meant for diagnostics only.
    pub fn iter_sorted(&self) -> Vec<Message> {
        let mut msgs = self
            .heap
            .iter()
            .map(|Reverse(entry)| *entry)
            .collect::<Vec<_>>();
        msgs.sort_unstable();
        msgs.into_iter().map(|(_, msg)| msg).collect()
    }
}

impl Extend<Message> for OutQueue {
    fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
        for msg in iter {
            self.push(msg);
        }
    }
}
