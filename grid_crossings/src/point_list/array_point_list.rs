/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::point_list_trait::*;
use crate::error::*;

impl<const N: usize> PointList for [[f64; N]] {
    #[inline]
    fn dimension(&self) -> usize {
        N
    }

    #[inline]
    fn len(&self) -> usize {
        <[[f64; N]]>::len(self)
    }

    #[inline]
    fn ordinate(&self, index: usize, axis: usize) -> f64 {
        self[index][axis]
    }

    fn point(&self, index: usize) -> Result<GridPoint, CrossingError> {
        self.get(index)
            .map(|point| GridPoint::from_slice(point))
            .ok_or(CrossingError::PointOutOfRange {
                index,
                len: <[[f64; N]]>::len(self),
            })
    }
}

impl<const N: usize> PointList for Vec<[f64; N]> {
    #[inline]
    fn dimension(&self) -> usize {
        N
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn ordinate(&self, index: usize, axis: usize) -> f64 {
        self[index][axis]
    }

    #[inline]
    fn point(&self, index: usize) -> Result<GridPoint, CrossingError> {
        self.as_slice().point(index)
    }
}
