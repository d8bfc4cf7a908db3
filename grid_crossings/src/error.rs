/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Errors that can occur while setting up a grid crossing traversal
///
/// These are all configuration errors: once a traversal has been created it always runs to completion.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum CrossingError {
    /// Points must have at least one dimension
    ZeroDimension,

    /// The number of ordinates supplied is not a multiple of the dimension of the points
    MismatchedOrdinates { ordinates: usize, dimension: usize },

    /// A point was requested from beyond the end of a point list
    PointOutOfRange { index: usize, len: usize },

    /// An ordinate in the polyline is infinite or NaN
    NonFiniteOrdinate { index: usize, axis: usize },

    /// An ordinate in the polyline is too large for consecutive grid lines to be told apart
    OrdinateOutOfRange { index: usize, axis: usize },

    /// The tolerance in the traversal settings is not a finite value between 0 and 0.5
    InvalidTolerance(f64),

    /// The minimum split distance in the traversal settings is too small or not finite
    InvalidSplitDistance(f64),
}

impl fmt::Display for CrossingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CrossingError::ZeroDimension => write!(f, "points must have at least one dimension"),
            CrossingError::MismatchedOrdinates {
                ordinates,
                dimension,
            } => write!(
                f,
                "{} ordinates cannot be divided into points of dimension {}",
                ordinates, dimension
            ),
            CrossingError::PointOutOfRange { index, len } => write!(
                f,
                "point {} is out of range for a list of {} points",
                index, len
            ),
            CrossingError::NonFiniteOrdinate { index, axis } => write!(
                f,
                "ordinate {} of point {} is not a finite number",
                axis, index
            ),
            CrossingError::OrdinateOutOfRange { index, axis } => write!(
                f,
                "ordinate {} of point {} is too large to locate on the unit grid",
                axis, index
            ),
            CrossingError::InvalidTolerance(tolerance) => {
                write!(f, "{} is not a usable tolerance", tolerance)
            }
            CrossingError::InvalidSplitDistance(distance) => {
                write!(f, "{} is not a usable minimum split distance", distance)
            }
        }
    }
}

impl Error for CrossingError {}
