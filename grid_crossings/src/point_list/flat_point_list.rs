/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::point_list_trait::*;
use crate::error::*;

///
/// A point list backed by a flat buffer of ordinates
///
/// Point `i` is stored in the ordinates `[i*dimension, i*dimension+dimension)`. Any type that can be viewed
/// as a slice of `f64` values can be used as the storage.
///
/// ```
/// # use flo_grid_crossings::*;
/// let points = FlatPointList::new(vec![0.0, 0.0, 2.5, 1.0], 2).unwrap();
///
/// assert!(points.len() == 2);
/// assert!(points.point(1).unwrap()[..] == [2.5, 1.0]);
/// ```
///
#[derive(Clone, Debug, PartialEq)]
pub struct FlatPointList<Ordinates = Vec<f64>> {
    /// The ordinates for the points in this list
    ordinates: Ordinates,

    /// Number of ordinates in each point
    dimension: usize,
}

impl<Ordinates> FlatPointList<Ordinates>
where
    Ordinates: AsRef<[f64]>,
{
    ///
    /// Creates a point list from a buffer of ordinates and the number of ordinates per point
    ///
    pub fn new(ordinates: Ordinates, dimension: usize) -> Result<Self, CrossingError> {
        if dimension == 0 {
            return Err(CrossingError::ZeroDimension);
        }

        let num_ordinates = ordinates.as_ref().len();
        if num_ordinates % dimension != 0 {
            return Err(CrossingError::MismatchedOrdinates {
                ordinates: num_ordinates,
                dimension,
            });
        }

        Ok(FlatPointList {
            ordinates,
            dimension,
        })
    }

    ///
    /// The ordinates making up the points in this list
    ///
    pub fn ordinates(&self) -> &[f64] {
        self.ordinates.as_ref()
    }

    ///
    /// Returns the storage for this list
    ///
    pub fn into_ordinates(self) -> Ordinates {
        self.ordinates
    }
}

impl<Ordinates> PointList for FlatPointList<Ordinates>
where
    Ordinates: AsRef<[f64]>,
{
    #[inline]
    fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn len(&self) -> usize {
        self.ordinates.as_ref().len() / self.dimension
    }

    #[inline]
    fn ordinate(&self, index: usize, axis: usize) -> f64 {
        test_assert!(axis < self.dimension);

        self.ordinates.as_ref()[index * self.dimension + axis]
    }

    fn point(&self, index: usize) -> Result<GridPoint, CrossingError> {
        let len = self.len();

        if index >= len {
            return Err(CrossingError::PointOutOfRange { index, len });
        }

        let start = index * self.dimension;
        Ok(GridPoint::from_slice(
            &self.ordinates.as_ref()[start..start + self.dimension],
        ))
    }
}
