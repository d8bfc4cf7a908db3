/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;

use smallvec::*;

///
/// A point generated by a grid traversal
///
/// Points of up to 4 dimensions are stored inline. Every point returned by a traversal is a separate copy.
///
pub type GridPoint = SmallVec<[f64; 4]>;

///
/// Trait implemented by types that can supply a list of n-dimensional points to a grid traversal
///
/// All of the points in a list have the same dimension.
///
pub trait PointList {
    ///
    /// The number of ordinates in each point in this list
    ///
    fn dimension(&self) -> usize;

    ///
    /// The number of points in this list
    ///
    fn len(&self) -> usize;

    ///
    /// Reads a single ordinate from this list
    ///
    /// The index must be less than `len()` and the axis less than `dimension()`: this will panic
    /// otherwise, in the same way that indexing a slice does.
    ///
    fn ordinate(&self, index: usize, axis: usize) -> f64;

    ///
    /// True if there are no points in this list
    ///
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Retrieves a copy of the point at the specified index
    ///
    fn point(&self, index: usize) -> Result<GridPoint, CrossingError> {
        let len = self.len();

        if index >= len {
            return Err(CrossingError::PointOutOfRange { index, len });
        }

        Ok((0..self.dimension())
            .map(|axis| self.ordinate(index, axis))
            .collect())
    }
}

impl<'a, List> PointList for &'a List
where
    List: PointList + ?Sized,
{
    #[inline]
    fn dimension(&self) -> usize {
        <List as PointList>::dimension(*self)
    }

    #[inline]
    fn len(&self) -> usize {
        <List as PointList>::len(*self)
    }

    #[inline]
    fn ordinate(&self, index: usize, axis: usize) -> f64 {
        <List as PointList>::ordinate(*self, index, axis)
    }

    #[inline]
    fn point(&self, index: usize) -> Result<GridPoint, CrossingError> {
        <List as PointList>::point(*self, index)
    }
}
