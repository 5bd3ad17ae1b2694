/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod graph;
pub mod graphs;
pub mod message;
pub mod queue;
pub mod report;
pub mod vertex;

#[macro_use]
pub mod utils;

/// The type of vertex identifiers.
pub type VertexId = usize;

pub mod prelude {
    pub use crate::VertexId;
    pub use crate::graph::Graph;
    pub use crate::graphs::prelude::*;
    pub use crate::message::Message;
    pub use crate::queue::OutQueue;
    pub use crate::report::Report;
    pub use crate::utils::*;
    pub use crate::vertex::{Retention, Vertex};
}
