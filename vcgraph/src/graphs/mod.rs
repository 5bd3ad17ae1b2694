/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph generators.

pub mod random;

pub mod prelude {
    pub use super::random::ErdosRenyi;
}
