/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::numeric::*;
use crate::point_list::*;

use smallvec::*;

use std::mem;

///
/// The next grid line that will be crossed on a single axis
///
#[derive(Copy, Clone, Debug)]
struct AxisCrossing {
    /// The axis that this is tracking
    axis: usize,

    /// The grid line that will be crossed next
    value: f64,

    /// 1.0 or -1.0 depending on the direction of travel along the axis
    step: f64,

    /// The position along the segment where the grid line is crossed
    t: f64,
}

impl AxisCrossing {
    ///
    /// Moves on to the grid line after the current one
    ///
    #[inline]
    fn advance(&mut self, start: &[f64], direction: &[f64]) {
        self.value += self.step;
        self.t = crossing_t(self.value, self.axis, start, direction);
    }

    ///
    /// Moves to the first grid line crossed after the position `t` along the segment
    ///
    fn skip_past(&mut self, t: f64, start: &[f64], direction: &[f64]) {
        let axis = self.axis;
        let position = start[axis] + t * direction[axis];

        // Jump straight to the grid line just behind the position, then walk forward from there
        let mut value = if self.step > 0.0 {
            position.floor()
        } else {
            position.ceil()
        };
        if (value - self.value) * self.step < 0.0 {
            value = self.value;
        }

        while crossing_t(value, axis, start, direction) <= t {
            value += self.step;
        }

        self.value = value;
        self.t = crossing_t(value, axis, start, direction);
    }
}

///
/// The position along a segment where the grid line `value` on `axis` is crossed
///
#[inline]
fn crossing_t(value: f64, axis: usize, start: &[f64], direction: &[f64]) -> f64 {
    (value - start[axis]) / direction[axis]
}

///
/// Generates the grid crossings for a segment that moves along two or more axes
///
/// The crossings on each axis are merged in order of their position along the segment. Crossings on
/// different axes that are within the tolerance of each other are generated as a single point (this
/// happens where the segment passes through a grid corner). The end point of the segment is generated last.
///
#[derive(Clone, Debug)]
pub struct MultiTraversal {
    /// Where the segment starts
    start: GridPoint,

    /// The vector from the start to the end of the segment
    direction: GridPoint,

    /// The end point, generated when the traversal completes
    end: GridPoint,

    /// The next crossing on each axis with a significant movement
    crossings: SmallVec<[AxisCrossing; 4]>,

    /// Index into `crossings` of the axis with the largest movement
    major: usize,

    /// The tolerance, converted to a distance along the segment
    t_tolerance: f64,

    /// Position along the segment of the last point generated
    current_t: f64,

    /// The last position along the segment covered by this traversal, 1.0 if it runs to the end point
    limit: f64,

    /// Set once the last point has been generated
    finished: bool,
}

impl MultiTraversal {
    ///
    /// Creates a traversal between two points
    ///
    /// Axes that move by less than the tolerance are interpolated but never produce crossings of their own.
    ///
    pub fn new(start: GridPoint, end: GridPoint, tolerance: f64) -> MultiTraversal {
        let direction = start
            .iter()
            .zip(end.iter())
            .map(|(start, end)| end - start)
            .collect::<GridPoint>();

        let crossings = direction
            .iter()
            .enumerate()
            .filter(|(_, distance)| !is_near_zero(**distance, tolerance))
            .map(|(axis, distance)| {
                let value = next_grid_line(start[axis], *distance, tolerance);

                AxisCrossing {
                    axis,
                    value,
                    step: distance.signum(),
                    t: crossing_t(value, axis, &start, &direction),
                }
            })
            .collect::<SmallVec<[_; 4]>>();

        let mut major = 0;
        for idx in 1..crossings.len() {
            if direction[crossings[idx].axis].abs() > direction[crossings[major].axis].abs() {
                major = idx;
            }
        }

        let major_distance = crossings
            .get(major)
            .map(|crossing| direction[crossing.axis].abs())
            .unwrap_or(1.0);
        test_assert!(crossings.len() >= 2);

        MultiTraversal {
            start,
            direction,
            end,
            crossings,
            major,
            t_tolerance: tolerance / major_distance,
            current_t: 0.0,
            limit: 1.0,
            finished: false,
        }
    }

    ///
    /// True if this traversal generates the end point of its segment when it completes
    ///
    #[inline]
    fn reaches_end(&self) -> bool {
        self.limit >= 1.0
    }

    ///
    /// The position along the segment of the next crossing on any axis
    ///
    #[inline]
    fn next_t(&self) -> f64 {
        self.crossings
            .iter()
            .map(|crossing| crossing.t)
            .fold(f64::INFINITY, f64::min)
    }

    ///
    /// Estimates how many more points this traversal will generate
    ///
    pub fn size_estimate(&self) -> usize {
        if self.finished {
            return 0;
        }

        let remaining_t = self.limit - self.current_t;
        let crossings = self
            .crossings
            .iter()
            .map(|crossing| (self.direction[crossing.axis] * remaining_t).abs().ceil() as usize)
            .sum::<usize>();

        crossings + 1
    }

    ///
    /// True if no grid line on any axis is crossed after `t` and within the merge tolerance of it
    ///
    /// Crossings on either side of a position like this can't be merged into a single point, so the
    /// segment can be split there.
    ///
    fn is_clear_after(&self, t: f64) -> bool {
        let window_end = t + 2.0 * self.t_tolerance;

        self.crossings.iter().all(|crossing| {
            let axis = crossing.axis;
            let position = self.start[axis] + t * self.direction[axis];
            let nearest = position.round();

            [nearest - crossing.step, nearest, nearest + crossing.step]
                .iter()
                .map(|value| crossing_t(*value, axis, &self.start, &self.direction))
                .all(|value_t| value_t <= t || value_t > window_end)
        })
    }

    ///
    /// Splits off the first half of the remaining crossings as a new traversal
    ///
    /// The split happens at a grid line on the axis with the largest movement, which becomes the last
    /// crossing generated by the returned traversal. Nothing is split off if less than
    /// `min_split_distance` remains along that axis, or if no grid line near the middle is far enough away
    /// from the crossings on the other axes.
    ///
    pub fn split_prefix(&mut self, min_split_distance: f64) -> Option<MultiTraversal> {
        if self.finished {
            return None;
        }

        let major = *self.crossings.get(self.major)?;
        let axis = major.axis;
        let remaining = self.direction[axis].abs() * (self.limit - self.current_t);
        if remaining < min_split_distance {
            return None;
        }

        // Try the grid line nearest the middle first, then its neighbours
        let mid_t = self.current_t + (self.limit - self.current_t) / 2.0;
        let mid_value = (self.start[axis] + mid_t * self.direction[axis]).round();

        let split_t = [mid_value, mid_value + major.step, mid_value - major.step]
            .iter()
            .map(|value| crossing_t(*value, axis, &self.start, &self.direction))
            .filter(|t| *t > self.current_t + self.t_tolerance)
            .filter(|t| *t < self.limit - 2.0 * self.t_tolerance)
            .find(|t| self.is_clear_after(*t))?;

        let mut prefix = self.clone();
        prefix.limit = split_t;
        prefix.end = GridPoint::new();

        let (start, direction) = (&self.start, &self.direction);
        for crossing in self.crossings.iter_mut() {
            crossing.skip_past(split_t, start, direction);
        }
        self.current_t = split_t;

        Some(prefix)
    }
}

impl Iterator for MultiTraversal {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.finished {
            return None;
        }

        let leader_t = self.next_t();
        let end_t = 1.0 - self.t_tolerance;

        if self.reaches_end() {
            if leader_t >= end_t {
                // Crossings within the tolerance of the end are generated as the end point
                self.finished = true;
                return Some(mem::take(&mut self.end));
            }
        } else if leader_t > self.limit {
            self.finished = true;
            return None;
        }

        let mut point = self
            .start
            .iter()
            .zip(self.direction.iter())
            .map(|(start, direction)| start + leader_t * direction)
            .collect::<GridPoint>();

        // Every axis crossing a grid line here is snapped to that grid line
        let group_end_t = leader_t + self.t_tolerance;
        let (start, direction) = (&self.start, &self.direction);

        for crossing in self.crossings.iter_mut() {
            if crossing.t < group_end_t && crossing.t < end_t {
                point[crossing.axis] = crossing.value;
                crossing.advance(start, direction);
            }
        }

        test_assert!(leader_t > self.current_t);
        self.current_t = leader_t;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else if self.reaches_end() {
            (1, None)
        } else {
            (0, None)
        }
    }
}
