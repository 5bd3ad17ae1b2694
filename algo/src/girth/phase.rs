/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// The reason a phase terminated, together with the estimate of the shortest
/// cycle computed on termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A vertex popped a message from a source it had already recorded.
    Duplicate { estimate: u64 },
    /// No vertex had messages left to send.
    Exhaustion { estimate: u64 },
}

impl Termination {
    /// Returns the [estimate](super::estimate) of the shortest cycle, or
    /// [`u64::MAX`] if no candidate cycle was found.
    pub fn estimate(&self) -> u64 {
        match *self {
            Termination::Duplicate { estimate } | Termination::Exhaustion { estimate } => estimate,
        }
    }

    /// Returns true if the phase witnessed a cycle.
    pub fn witnessed_cycle(&self) -> bool {
        matches!(self, Termination::Duplicate { .. }) || self.estimate() != u64::MAX
    }
}

/// The state of a girth computation.
///
/// The girth lies in the interval [`alpha` . . `beta`]; each phase explores
/// the graph up to distance `threshold` from every vertex and narrows the
/// interval accordingly. All updates preserve `alpha` ≤ `beta`, and they
/// never decrease `alpha` nor increase `beta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseState {
    /// The lower bound of the interval.
    pub alpha: u64,
    /// The upper bound of the interval.
    pub beta: u64,
    /// The maximum distance a forwarded message may reach in this phase.
    pub threshold: u64,
    /// The maximum number of messages a vertex sends in a round.
    pub message_budget: usize,
    /// Whether the current phase has terminated.
    pub terminated: bool,
    /// The number of rounds performed so far.
    pub round: usize,
    /// The number of phases completed so far.
    pub phase: usize,
}

impl PhaseState {
    /// Creates the initial state for a graph with the given hop diameter and
    /// maximum edge weight.
    ///
    /// A cycle of minimum length in a connected graph with hop diameter *D*
    /// has at most 2*D* + 1 edges, so the initial upper bound is 2*D* + 1
    /// times the maximum edge weight. This is also the girth reported if no
    /// cycle is ever found.
    pub fn new(diameter: u64, max_edge_weight: u64, message_budget: usize) -> Self {
        assert!(message_budget > 0, "The message budget must be positive");
        let beta = diameter
            .saturating_mul(2)
            .saturating_add(1)
            .saturating_mul(max_edge_weight);
        Self {
            alpha: 0,
            beta,
            threshold: beta / 4,
            message_budget,
            terminated: false,
            round: 0,
            phase: 0,
        }
    }

    /// Returns true if the interval is too narrow for another phase.
    #[inline(always)]
    pub fn is_narrowed(&self) -> bool {
        self.beta - self.alpha <= 2
    }

    #[inline(always)]
    fn midpoint(&self) -> u64 {
        self.alpha / 4 + self.beta / 4 + (self.alpha % 4 + self.beta % 4) / 4
    }

    /// Narrows the interval after a phase terminated.
    ///
    /// A duplicate means that a closed walk of length at most twice the
    /// threshold exists; otherwise, if no cycle shorter than twice the
    /// threshold was estimated, the girth is at least twice the threshold.
    pub fn narrow(&mut self, termination: Termination) {
        let double = self.threshold.saturating_mul(2);
        match termination {
            Termination::Duplicate { estimate } => {
                self.beta = self.beta.min(double).min(estimate).max(self.alpha);
            }
            Termination::Exhaustion { estimate } if estimate > double => {
                self.alpha = double.min(self.beta);
            }
            Termination::Exhaustion { estimate } => {
                self.beta = self.beta.min(estimate).max(self.alpha);
            }
        }
        debug_assert!(self.alpha <= self.beta);
    }

    /// Sets the threshold for the next phase to a quarter of the sum of the
    /// bounds, or increments it if it would not change.
    pub fn next_threshold(&mut self) {
        let mid = self.midpoint();
        self.threshold = if self.threshold == mid {
            self.threshold + 1
        } else {
            mid
        };
    }
}
