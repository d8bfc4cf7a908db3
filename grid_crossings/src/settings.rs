/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::error::*;

///
/// Settings used when walking a polyline across the unit grid
///
/// ```
/// # use flo_grid_crossings::*;
/// let settings = CrossingSettings::default()
///     .with_tolerance(1e-9)
///     .with_min_split_distance(16.0);
/// ```
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CrossingSettings {
    /// Ordinates within this distance of a grid line are treated as being on that line
    pub tolerance: f64,

    /// Axis distance that must remain in a segment before its traversal can be split
    pub min_split_distance: f64,
}

impl Default for CrossingSettings {
    fn default() -> Self {
        CrossingSettings {
            tolerance: EPSILON,
            min_split_distance: MIN_SPLIT_DISTANCE,
        }
    }
}

impl CrossingSettings {
    ///
    /// Updates the tolerance used to decide if an ordinate is on a grid line
    ///
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        CrossingSettings { tolerance, ..self }
    }

    ///
    /// Updates the distance that must remain along a segment before it can be split
    ///
    pub fn with_min_split_distance(self, min_split_distance: f64) -> Self {
        CrossingSettings {
            min_split_distance,
            ..self
        }
    }

    ///
    /// Checks that these settings can be used for a traversal
    ///
    pub fn validate(&self) -> Result<(), CrossingError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 || self.tolerance >= 0.5 {
            return Err(CrossingError::InvalidTolerance(self.tolerance));
        }

        if !self.min_split_distance.is_finite() || self.min_split_distance < SMALLEST_SPLIT_DISTANCE {
            return Err(CrossingError::InvalidSplitDistance(self.min_split_distance));
        }

        Ok(())
    }
}
