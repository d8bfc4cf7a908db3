/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::segment::*;
use crate::consts::*;
use crate::error::*;
use crate::point_list::*;
use crate::settings::*;

use std::iter::FusedIterator;

///
/// Iterator that expands a polyline into the points where it crosses the lines of a unit grid
///
/// The first point of the polyline is generated first, followed by every point where a segment crosses
/// a grid line on any axis and every vertex of the polyline, in the order they're travelled through.
/// Where a segment passes through a grid corner, the crossings on each axis are generated as a single
/// point. Segments that don't go anywhere are skipped.
///
/// ```
/// # use flo_grid_crossings::*;
/// let polyline = vec![[0.0, 0.0], [2.0, 2.0]];
/// let points = GridCrossings::new(&polyline).unwrap().collect::<Vec<_>>();
///
/// assert!(points.len() == 3);
/// assert!(points[1][..] == [1.0, 1.0]);
/// ```
///
/// `split_prefix()` divides the remaining points between two iterators, which is how the points can be
/// generated in parallel.
///
#[derive(Debug)]
pub struct GridCrossings<'a, Points: ?Sized> {
    /// The polyline that's being traversed
    points: &'a Points,

    /// The settings for this traversal
    settings: CrossingSettings,

    /// The first point of the polyline, if it hasn't been generated yet
    first_point: Option<GridPoint>,

    /// The traversal for the segment being generated, or None once all the segments are finished
    segment: Option<SegmentTraversal>,

    /// The index of the next segment to traverse after the current one
    next_segment: usize,

    /// The index of the segment where this traversal stops (exclusive)
    end_segment: usize,
}

impl<'a, Points: ?Sized> Clone for GridCrossings<'a, Points> {
    fn clone(&self) -> Self {
        GridCrossings {
            points: self.points,
            settings: self.settings,
            first_point: self.first_point.clone(),
            segment: self.segment.clone(),
            next_segment: self.next_segment,
            end_segment: self.end_segment,
        }
    }
}

impl<'a, Points> GridCrossings<'a, Points>
where
    Points: PointList + ?Sized,
{
    ///
    /// Creates a traversal of all the segments in a polyline using the default settings
    ///
    pub fn new(points: &'a Points) -> Result<Self, CrossingError> {
        Self::with_settings(points, CrossingSettings::default())
    }

    ///
    /// Creates a traversal of all the segments in a polyline
    ///
    pub fn with_settings(
        points: &'a Points,
        settings: CrossingSettings,
    ) -> Result<Self, CrossingError> {
        settings.validate()?;

        let dimension = points.dimension();
        if dimension == 0 {
            return Err(CrossingError::ZeroDimension);
        }

        // Grid lines can't be found for NaN or infinite ordinates, or stepped between for huge ones
        let len = points.len();
        for index in 0..len {
            for axis in 0..dimension {
                let ordinate = points.ordinate(index, axis);

                if !ordinate.is_finite() {
                    return Err(CrossingError::NonFiniteOrdinate { index, axis });
                } else if ordinate.abs() >= MAX_ORDINATE {
                    return Err(CrossingError::OrdinateOutOfRange { index, axis });
                }
            }
        }
        let first_point = if len > 0 { Some(points.point(0)?) } else { None };

        log::trace!(
            "Traversing grid crossings for {} points of dimension {}",
            len,
            dimension
        );

        let mut crossings = GridCrossings {
            points,
            settings,
            first_point,
            segment: None,
            next_segment: 0,
            end_segment: len.saturating_sub(1),
        };
        crossings.prepare_segment();

        Ok(crossings)
    }

    ///
    /// The settings used for this traversal
    ///
    pub fn settings(&self) -> &CrossingSettings {
        &self.settings
    }

    ///
    /// True if this traversal has no more points to generate
    ///
    pub fn is_exhausted(&self) -> bool {
        self.first_point.is_none() && self.segment.is_none()
    }

    ///
    /// Moves on to the next segment that goes somewhere, or marks the traversal as finished if there is none
    ///
    fn prepare_segment(&mut self) {
        self.segment = None;

        while self.next_segment < self.end_segment {
            let index = self.next_segment;
            self.next_segment += 1;

            let (start, end) = match (self.points.point(index), self.points.point(index + 1)) {
                (Ok(start), Ok(end)) => (start, end),
                _ => {
                    self.next_segment = self.end_segment;
                    break;
                }
            };

            if let Some(segment) =
                SegmentTraversal::for_segment(start, end, self.settings.tolerance)
            {
                self.segment = Some(segment);
                break;
            }
        }
    }

    ///
    /// Estimates how many points are left to generate
    ///
    /// This is only intended as a hint for deciding how to divide up work: it's exact for the segment
    /// currently being traversed but only counts one point for each of the segments after it.
    ///
    pub fn size_estimate(&self) -> usize {
        let first = if self.first_point.is_some() { 1 } else { 0 };
        let current = self
            .segment
            .as_ref()
            .map(|segment| segment.size_estimate())
            .unwrap_or(0);

        first + current + (self.end_segment - self.next_segment)
    }

    ///
    /// Splits off the first part of the points left to generate as a new traversal
    ///
    /// The points generated by the returned traversal followed by the points generated by this one are
    /// the same as the points this traversal would have generated without the split. Returns `None` if the
    /// remaining points can't be divided.
    ///
    pub fn split_prefix(&mut self) -> Option<GridCrossings<'a, Points>> {
        let segment = self.segment.as_mut()?;
        let current_segment = self.next_segment - 1;

        if self.end_segment - current_segment > 1 {
            // Divide up the whole segments, the prefix takes over the current segment
            let mid = current_segment + (self.end_segment - current_segment) / 2;

            let prefix = GridCrossings {
                points: self.points,
                settings: self.settings,
                first_point: self.first_point.take(),
                segment: self.segment.take(),
                next_segment: self.next_segment,
                end_segment: mid,
            };

            self.next_segment = mid;
            self.prepare_segment();

            log::trace!(
                "Split grid crossings into segments {}..{} and {}..{}",
                current_segment,
                mid,
                mid,
                self.end_segment
            );

            Some(prefix)
        } else {
            // Only the current segment is left, so it has to be divided itself
            match segment.split_prefix(self.settings.min_split_distance) {
                Some(prefix_segment) => {
                    log::trace!("Split grid crossings within segment {}", current_segment);

                    Some(GridCrossings {
                        points: self.points,
                        settings: self.settings,
                        first_point: self.first_point.take(),
                        segment: Some(prefix_segment),
                        next_segment: self.end_segment,
                        end_segment: self.end_segment,
                    })
                }

                None => {
                    log::debug!(
                        "Segment {} is too short to split its grid crossings",
                        current_segment
                    );
                    None
                }
            }
        }
    }
}

impl<'a, Points> Iterator for GridCrossings<'a, Points>
where
    Points: PointList + ?Sized,
{
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if let Some(first_point) = self.first_point.take() {
            return Some(first_point);
        }

        loop {
            let segment = self.segment.as_mut()?;

            if let Some(point) = segment.next() {
                return Some(point);
            }

            self.prepare_segment();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let first = if self.first_point.is_some() { 1 } else { 0 };

        if self.segment.is_none() {
            (first, Some(first))
        } else {
            (first, None)
        }
    }
}

impl<'a, Points> FusedIterator for GridCrossings<'a, Points> where Points: PointList + ?Sized {}

///
/// Expands a polyline, supplied as a flat buffer of ordinates, into the points where it crosses the unit grid
///
/// ```
/// # use flo_grid_crossings::*;
/// let points = grid_crossings(&[0.0, 2.3], 1).unwrap();
///
/// assert!(points.iter().map(|point| point[0]).collect::<Vec<_>>() == vec![0.0, 1.0, 2.0, 2.3]);
/// ```
///
pub fn grid_crossings(ordinates: &[f64], dimension: usize) -> Result<Vec<GridPoint>, CrossingError> {
    let points = FlatPointList::new(ordinates, dimension)?;
    let crossings = GridCrossings::new(&points)?;

    Ok(crossings.collect())
}
