/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![cfg(feature = "multithreading")]

use flo_grid_crossings::*;

use rand::prelude::*;
use rayon::prelude::*;

fn random_ordinates(seed: u64, num_points: usize, dimension: usize, range: f64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..num_points * dimension)
        .map(|_| rng.gen_range(-range..range))
        .collect()
}

#[test]
fn parallel_matches_sequential() {
    let ordinates = random_ordinates(1, 500, 2, 100.0);

    let sequential = grid_crossings(&ordinates, 2).unwrap();
    let parallel = par_grid_crossings(&ordinates, 2).unwrap();

    assert!(sequential.len() > 500);
    assert!(parallel == sequential);
}

#[test]
fn parallel_matches_sequential_3d() {
    let ordinates = random_ordinates(2, 200, 3, 50.0);

    let sequential = grid_crossings(&ordinates, 3).unwrap();
    let parallel = par_grid_crossings(&ordinates, 3).unwrap();

    assert!(parallel == sequential);
}

#[test]
fn parallel_single_long_segment() {
    let points = vec![[0.5, 0.25], [10000.5, 3000.75]];

    let sequential = GridCrossings::new(&points).unwrap().collect::<Vec<_>>();
    let parallel = GridCrossings::new(&points)
        .unwrap()
        .into_par_iter()
        .collect::<Vec<_>>();

    assert!(sequential.len() > 13000);
    assert!(parallel == sequential);
}

#[test]
fn parallel_count() {
    let points = vec![[0.0], [1000.0], [-1000.0]];

    let count = GridCrossings::new(&points).unwrap().into_par_iter().count();

    assert!(count == 3001, "{}", count);
}

#[test]
fn parallel_empty() {
    let points = FlatPointList::new(Vec::<f64>::new(), 2).unwrap();

    let count = GridCrossings::new(&points).unwrap().into_par_iter().count();

    assert!(count == 0);
}
