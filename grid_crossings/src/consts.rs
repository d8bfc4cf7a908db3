/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Distance we consider to be zero (ordinates closer than this to a grid line are considered to be on it)
pub const EPSILON: f64 = 1e-7;

/// Remaining distance (in grid units) along a segment before its traversal will agree to be split in two
pub const MIN_SPLIT_DISTANCE: f64 = 3.0;

/// Smallest minimum split distance that still guarantees both halves of a split contain a grid crossing
pub const SMALLEST_SPLIT_DISTANCE: f64 = 2.0;

/// Ordinates must be smaller than this in magnitude (2^52): beyond it, adding 1.0 no longer moves to the next grid line
pub const MAX_ORDINATE: f64 = 4503599627370496.0;
