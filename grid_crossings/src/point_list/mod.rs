/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Lists of points to traverse
//!
//! The `PointList` trait provides random access to a list of points of a fixed dimension. `FlatPointList`
//! implements it for a flat buffer of ordinates, and slices or `Vec`s of `[f64; N]` arrays implement it
//! directly.
//!

mod array_point_list;
mod flat_point_list;
mod point_list_trait;

pub use self::flat_point_list::*;
pub use self::point_list_trait::*;
