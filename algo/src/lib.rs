/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod distances;
pub mod girth;

pub mod prelude {
    pub use crate::distances::diameter;
    pub use crate::girth;
}
