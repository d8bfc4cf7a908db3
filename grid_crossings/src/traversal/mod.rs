/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Traversing polylines across the unit grid
//!
//! `GridCrossings` walks a polyline one segment at a time. Each segment is classified by the axes that
//! change along it: segments that go nowhere are skipped, segments that move along a single axis use
//! `MonoTraversal` and segments that move along several axes use `MultiTraversal`, which merges the
//! crossings from each axis in order.
//!
//! Traversals can be split in two for parallel processing: the points from the first half followed by
//! the points from the second half are always the same as the points from the original traversal.
//!

mod grid_crossings;
mod mono;
mod multi;
#[cfg(feature = "multithreading")]
mod parallel;
mod segment;

pub use self::grid_crossings::*;
pub use self::mono::*;
pub use self::multi::*;
#[cfg(feature = "multithreading")]
pub use self::parallel::*;
pub use self::segment::*;
