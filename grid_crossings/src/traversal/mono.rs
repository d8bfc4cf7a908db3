/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::numeric::*;
use crate::point_list::*;

use std::mem;

///
/// Generates the grid crossings for a segment that moves along a single axis
///
/// Every grid line crossed on the moving axis is generated, followed by the end point of the segment. The
/// other axes keep the values they have at the start of the segment.
///
#[derive(Clone, Debug)]
pub struct MonoTraversal {
    /// The point that generated points are copied from
    template: GridPoint,

    /// The point to return once the target is reached
    final_point: GridPoint,

    /// The axis that's changing along this segment
    axis: usize,

    /// The position of the last point generated along the axis
    current: f64,

    /// Where this traversal stops along the axis
    target: f64,

    /// Distance from a grid line that's considered to be on the grid line
    tolerance: f64,

    /// Set once the final point has been generated
    finished: bool,
}

impl MonoTraversal {
    ///
    /// Creates a traversal between two points that differ along the specified axis
    ///
    pub fn new(start: GridPoint, end: GridPoint, axis: usize, tolerance: f64) -> MonoTraversal {
        let current = start[axis];
        let target = end[axis];

        MonoTraversal {
            template: start,
            final_point: end,
            axis,
            current,
            target,
            tolerance,
            finished: false,
        }
    }

    ///
    /// The axis that this traversal moves along
    ///
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    ///
    /// The signed distance left to travel along the axis
    ///
    #[inline]
    pub fn remaining(&self) -> f64 {
        if self.finished {
            0.0
        } else {
            self.target - self.current
        }
    }

    ///
    /// Estimates how many more points this traversal will generate
    ///
    pub fn size_estimate(&self) -> usize {
        self.remaining().abs().ceil() as usize
    }

    ///
    /// Splits off the first half of the remaining distance as a new traversal
    ///
    /// The split happens on a grid line, which becomes the last point generated by the returned traversal.
    /// This traversal continues from the point after that. Nothing is split off if less than
    /// `min_split_distance` remains.
    ///
    pub fn split_prefix(&mut self, min_split_distance: f64) -> Option<MonoTraversal> {
        let remaining = self.remaining();
        if remaining.abs() < min_split_distance {
            return None;
        }

        let split_at = (self.current + remaining / 2.0).round();
        test_assert!((split_at - self.current) * remaining > 0.0);
        test_assert!((self.target - split_at) * remaining > 0.0);

        let mut split_point = self.template.clone();
        split_point[self.axis] = split_at;

        let prefix = MonoTraversal {
            template: self.template.clone(),
            final_point: split_point,
            axis: self.axis,
            current: self.current,
            target: split_at,
            tolerance: self.tolerance,
            finished: false,
        };

        self.current = split_at;

        Some(prefix)
    }
}

impl Iterator for MonoTraversal {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.finished {
            return None;
        }

        let direction = self.target - self.current;
        let next = next_grid_line(self.current, direction, self.tolerance);

        if (self.target - next) * direction.signum() < self.tolerance {
            // Reached (or passed) the end of the traversal: the end point is exact, so it's generated in place of any grid line close to it
            self.finished = true;
            Some(mem::take(&mut self.final_point))
        } else {
            self.current = next;

            let mut point = self.template.clone();
            point[self.axis] = next;
            Some(point)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}
