/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::mono::*;
use super::multi::*;
use crate::numeric::*;
use crate::point_list::*;

///
/// How a segment moves relative to the grid
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum SegmentKind {
    /// The start and end of the segment are the same point
    Degenerate,

    /// Only the specified axis changes along the segment
    AxisAligned(usize),

    /// Two or more axes change along the segment
    General,
}

///
/// Decides how a segment moves by looking at which axes change by at least the tolerance
///
pub fn classify_segment(start: &[f64], end: &[f64], tolerance: f64) -> SegmentKind {
    let mut moving_axes = start
        .iter()
        .zip(end.iter())
        .enumerate()
        .filter(|(_, (start, end))| !is_near_zero(*end - *start, tolerance))
        .map(|(axis, _)| axis);

    match (moving_axes.next(), moving_axes.next()) {
        (None, _) => SegmentKind::Degenerate,
        (Some(axis), None) => SegmentKind::AxisAligned(axis),
        (Some(_), Some(_)) => SegmentKind::General,
    }
}

///
/// Generates the grid crossings for a single segment of a polyline
///
/// The start point of the segment is never generated (it's the end point of the previous segment), but the
/// end point always is.
///
#[derive(Clone, Debug)]
pub enum SegmentTraversal {
    /// Segment moving along a single axis
    Mono(MonoTraversal),

    /// Segment moving along more than one axis
    Multi(MultiTraversal),
}

impl SegmentTraversal {
    ///
    /// Creates the traversal for the segment between two points, or `None` if the segment doesn't go anywhere
    ///
    pub fn for_segment(start: GridPoint, end: GridPoint, tolerance: f64) -> Option<SegmentTraversal> {
        match classify_segment(&start, &end, tolerance) {
            SegmentKind::Degenerate => None,
            SegmentKind::AxisAligned(axis) => Some(SegmentTraversal::Mono(MonoTraversal::new(
                start, end, axis, tolerance,
            ))),
            SegmentKind::General => Some(SegmentTraversal::Multi(MultiTraversal::new(
                start, end, tolerance,
            ))),
        }
    }

    ///
    /// Splits off the first part of this traversal, leaving this traversal to generate the rest
    ///
    pub fn split_prefix(&mut self, min_split_distance: f64) -> Option<SegmentTraversal> {
        match self {
            SegmentTraversal::Mono(mono) => mono
                .split_prefix(min_split_distance)
                .map(SegmentTraversal::Mono),
            SegmentTraversal::Multi(multi) => multi
                .split_prefix(min_split_distance)
                .map(SegmentTraversal::Multi),
        }
    }

    ///
    /// Estimates how many points are left to generate
    ///
    pub fn size_estimate(&self) -> usize {
        match self {
            SegmentTraversal::Mono(mono) => mono.size_estimate(),
            SegmentTraversal::Multi(multi) => multi.size_estimate(),
        }
    }
}

impl Iterator for SegmentTraversal {
    type Item = GridPoint;

    #[inline]
    fn next(&mut self) -> Option<GridPoint> {
        match self {
            SegmentTraversal::Mono(mono) => mono.next(),
            SegmentTraversal::Multi(multi) => multi.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SegmentTraversal::Mono(mono) => mono.size_hint(),
            SegmentTraversal::Multi(multi) => multi.size_hint(),
        }
    }
}
