/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::grid_crossings::*;
use crate::error::*;
use crate::point_list::*;

use rayon::iter::plumbing::*;
use rayon::prelude::*;

///
/// Parallel iterator that generates the grid crossings for a polyline using rayon
///
/// The work is divided up using `GridCrossings::split_prefix()`, so collecting the points from this
/// iterator produces the same sequence as the sequential iterator.
///
#[derive(Clone, Debug)]
pub struct ParGridCrossings<'a, Points: ?Sized> {
    crossings: GridCrossings<'a, Points>,
}

impl<'a, Points> UnindexedProducer for GridCrossings<'a, Points>
where
    Points: PointList + Sync + ?Sized,
{
    type Item = GridPoint;

    fn split(mut self) -> (Self, Option<Self>) {
        match self.split_prefix() {
            Some(prefix) => (prefix, Some(self)),
            None => (self, None),
        }
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(self)
    }
}

impl<'a, Points> ParallelIterator for ParGridCrossings<'a, Points>
where
    Points: PointList + Sync + ?Sized,
{
    type Item = GridPoint;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(self.crossings, consumer)
    }
}

impl<'a, Points> IntoParallelIterator for GridCrossings<'a, Points>
where
    Points: PointList + Sync + ?Sized,
{
    type Iter = ParGridCrossings<'a, Points>;
    type Item = GridPoint;

    fn into_par_iter(self) -> ParGridCrossings<'a, Points> {
        ParGridCrossings { crossings: self }
    }
}

///
/// Expands a polyline into its grid crossings, dividing the work between rayon's threads
///
/// The result is the same as `grid_crossings()`.
///
pub fn par_grid_crossings(
    ordinates: &[f64],
    dimension: usize,
) -> Result<Vec<GridPoint>, CrossingError> {
    let points = FlatPointList::new(ordinates, dimension)?;
    let crossings = GridCrossings::new(&points)?;

    Ok(crossings.into_par_iter().collect())
}
