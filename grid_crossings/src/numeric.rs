/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Numeric helpers for walking a unit grid
//!
//! A coordinate that is within `tolerance` of a grid line is treated as if it were on that line. The
//! rounding functions here use this to guarantee that a traversal always makes progress: when moving
//! away from a coordinate that is already on a grid line, the next grid line is the one beyond it.
//!

///
/// True if a value is within `tolerance` of zero
///
#[inline]
pub fn is_near_zero(value: f64, tolerance: f64) -> bool {
    value.abs() < tolerance
}

///
/// Returns the next grid line above `value`
///
/// This is `value.ceil()`, except where that would be within `tolerance` of `value`, where the grid line
/// after that is returned instead.
///
#[inline]
pub fn ceil_or_increment(value: f64, tolerance: f64) -> f64 {
    let next = value.ceil();

    if is_near_zero(next - value, tolerance) {
        next + 1.0
    } else {
        next
    }
}

///
/// Returns the next grid line below `value`
///
/// This is `value.floor()`, except where that would be within `tolerance` of `value`, where the grid line
/// before that is returned instead.
///
#[inline]
pub fn floor_or_decrement(value: f64, tolerance: f64) -> f64 {
    let next = value.floor();

    if is_near_zero(value - next, tolerance) {
        next - 1.0
    } else {
        next
    }
}

///
/// Returns the next grid line from `value` in the direction indicated by the sign of `direction`
///
#[inline]
pub fn next_grid_line(value: f64, direction: f64, tolerance: f64) -> f64 {
    if direction >= 0.0 {
        ceil_or_increment(value, tolerance)
    } else {
        floor_or_decrement(value, tolerance)
    }
}
