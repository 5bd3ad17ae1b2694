/*
 * SPDX-FileCopyrightText: 2025 The vcgraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Miscellaneous utilities.

mod edge_list;
pub use edge_list::*;

/// Creates a [`ThreadPool`](rayon::ThreadPool) with default settings, or with
/// the given number of threads.
///
/// # Examples
///
/// ```
/// use vcgraph::thread_pool;
///
/// let pool = thread_pool![];
/// assert!(pool.current_num_threads() >= 1);
/// let single = thread_pool![1];
/// assert_eq!(single.current_num_threads(), 1);
/// ```
#[macro_export]
macro_rules! thread_pool {
    () => {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Cannot build a ThreadPool with default parameters")
    };
    ($num_threads:expr) => {
        rayon::ThreadPoolBuilder::new()
            .num_threads($num_threads)
            .build()
            .unwrap_or_else(|_| {
                panic!(
                    "Cannot build a ThreadPool with default parameters and {} threads",
                    $num_threads,
                )
            })
    };
}
