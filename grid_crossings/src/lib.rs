/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_grid_crossings
//!
//! Expands a polyline into the points where it crosses the lines of a unit grid anchored at the origin.
//! The result describes exactly which grid cells (pixels, tiles, index cells) the polyline passes
//! through and in what order, which is what's needed for rasterizing lines, choosing resampling
//! boundaries or finding the tiles touched by a shape.
//!
//! ```
//! # use flo_grid_crossings::*;
//! let polyline    = FlatPointList::new(vec![0.5, 0.5, 2.5, 0.5], 2).unwrap();
//! let crossings   = GridCrossings::new(&polyline).unwrap().collect::<Vec<_>>();
//!
//! assert!(crossings.iter().map(|point| point[0]).collect::<Vec<_>>() == vec![0.5, 1.0, 2.0, 2.5]);
//! ```
//!
//! Points can have any number of dimensions. The points generated are the first point of the polyline,
//! followed by every grid line crossing and every vertex, in the order they're travelled through. Where a
//! segment passes exactly through a grid corner, a single point is generated for all the axes crossed there.
//!
//! With the `multithreading` feature (on by default), `GridCrossings` can be turned into a rayon parallel
//! iterator with `into_par_iter()`. It divides itself with `split_prefix()`, which can also be called
//! directly to process parts of a long polyline independently.
//!

#[macro_use]
mod test_assert;

mod consts;
mod error;
mod settings;

pub mod numeric;
pub mod point_list;
pub mod traversal;

pub use self::consts::*;
pub use self::error::*;
pub use self::point_list::*;
pub use self::settings::*;
pub use self::traversal::*;
