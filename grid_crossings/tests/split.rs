/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_grid_crossings::*;

use itertools::*;
use rand::prelude::*;

///
/// Generates a polyline with a mixture of general segments, axis-aligned segments, repeated points and
/// points on grid corners
///
fn random_polyline(rng: &mut StdRng, num_points: usize, dimension: usize) -> Vec<f64> {
    let mut ordinates = Vec::<f64>::new();
    let mut last_point = vec![0.0; dimension];

    for _ in 0..num_points {
        let point = match rng.gen_range(0..5) {
            0 => last_point.clone(),
            1 => {
                let mut point = last_point.clone();
                let axis = rng.gen_range(0..dimension);
                point[axis] = rng.gen_range(-20.0..20.0);
                point
            }
            2 => (0..dimension)
                .map(|_| rng.gen_range(-20..20) as f64)
                .collect(),
            _ => (0..dimension)
                .map(|_| rng.gen_range(-20.0..20.0))
                .collect(),
        };

        ordinates.extend(point.iter().cloned());
        last_point = point;
    }

    ordinates
}

///
/// Collects the points from a traversal after splitting it recursively
///
fn collect_split<Points: PointList + ?Sized>(
    mut crossings: GridCrossings<'_, Points>,
    depth: usize,
) -> Vec<Vec<f64>> {
    if depth == 0 {
        return crossings.map(|point| point.to_vec()).collect();
    }

    match crossings.split_prefix() {
        Some(prefix) => {
            let mut points = collect_split(prefix, depth - 1);
            points.extend(collect_split(crossings, depth - 1));
            points
        }

        None => crossings.map(|point| point.to_vec()).collect(),
    }
}

fn collect_unsplit<Points: PointList + ?Sized>(points: &Points) -> Vec<Vec<f64>> {
    GridCrossings::new(points)
        .unwrap()
        .map(|point| point.to_vec())
        .collect()
}

#[test]
fn split_whole_segments() {
    let points = FlatPointList::new(vec![0.5, 3.5, 0.5, 3.5, 3.5, 0.25, 1.75, -2.5], 2).unwrap();

    let unsplit = collect_unsplit(&points);

    let mut remainder = GridCrossings::new(&points).unwrap();
    let prefix = remainder.split_prefix().unwrap();

    let mut joined = prefix.map(|point| point.to_vec()).collect::<Vec<_>>();
    joined.extend(remainder.map(|point| point.to_vec()));

    assert!(joined == unsplit, "{:?} != {:?}", joined, unsplit);
}

#[test]
fn split_single_long_segment() {
    let points = FlatPointList::new(vec![0.5, 100.5], 1).unwrap();

    let unsplit = collect_unsplit(&points);
    let split = collect_split(GridCrossings::new(&points).unwrap(), 6);

    assert!(unsplit.len() == 102);
    assert!(split == unsplit);
}

#[test]
fn split_after_partial_traversal() {
    let points = FlatPointList::new(vec![0.5, 0.5, 20.5, 7.25, 20.5, -3.0, 0.0, 0.0], 2).unwrap();
    let unsplit = collect_unsplit(&points);

    for consumed in 0..unsplit.len() {
        let mut crossings = GridCrossings::new(&points).unwrap();
        let mut joined = crossings
            .by_ref()
            .take(consumed)
            .map(|point| point.to_vec())
            .collect::<Vec<_>>();

        joined.extend(collect_split(crossings, 4));

        assert!(joined == unsplit, "Mismatch after consuming {} points", consumed);
    }
}

#[test]
fn single_point_does_not_split() {
    let points = FlatPointList::new(vec![5.0, 5.0], 2).unwrap();
    let mut crossings = GridCrossings::new(&points).unwrap();

    assert!(crossings.split_prefix().is_none());
    assert!(crossings.count() == 1);
}

#[test]
fn exhausted_traversal_does_not_split() {
    let points = FlatPointList::new(vec![0.0, 10.0], 1).unwrap();
    let mut crossings = GridCrossings::new(&points).unwrap();

    crossings.by_ref().for_each(|_| {});
    assert!(crossings.split_prefix().is_none());
}

#[test]
fn prefix_takes_first_point() {
    let points = FlatPointList::new(vec![0.25, 10.25], 1).unwrap();
    let mut remainder = GridCrossings::new(&points).unwrap();
    let mut prefix = remainder.split_prefix().unwrap();

    assert!(prefix.next().unwrap()[..] == [0.25]);
    assert!(remainder.next().unwrap()[0] != 0.25);
}

#[test]
fn size_estimate_counts_remaining_points() {
    let points = FlatPointList::new(vec![0.5, 10.5], 1).unwrap();
    let mut crossings = GridCrossings::new(&points).unwrap();

    assert!(crossings.size_estimate() == 11, "{}", crossings.size_estimate());

    crossings.by_ref().for_each(|_| {});
    assert!(crossings.size_estimate() == 0);
}

#[test]
fn random_split_concatenation() {
    let mut rng = StdRng::seed_from_u64(42);

    for dimension in 1..=4 {
        for _ in 0..25 {
            let ordinates = random_polyline(&mut rng, 12, dimension);
            let points = FlatPointList::new(ordinates, dimension).unwrap();

            let unsplit = collect_unsplit(&points);
            let split = collect_split(GridCrossings::new(&points).unwrap(), 8);

            assert!(split == unsplit, "Split traversal differs for {:?}", points);
        }
    }
}

#[test]
fn random_crossings_are_complete() {
    let mut rng = StdRng::seed_from_u64(7);

    for dimension in 1..=4 {
        for _ in 0..25 {
            let ordinates = random_polyline(&mut rng, 12, dimension);
            let points = FlatPointList::new(ordinates, dimension).unwrap();
            let crossings = collect_unsplit(&points);

            assert!(!crossings.is_empty());

            for (from, to) in crossings.iter().tuple_windows() {
                for axis in 0..dimension {
                    let low = from[axis].min(to[axis]);
                    let high = from[axis].max(to[axis]);

                    // The first grid line after 'low' must not be before 'high'
                    let next_line = (low + 1e-6).floor() + 1.0;
                    assert!(
                        next_line >= high - 1e-6,
                        "Skipped a grid line between {:?} and {:?}",
                        from,
                        to
                    );
                }
            }
        }
    }
}

#[test]
fn random_crossings_have_no_duplicates() {
    let mut rng = StdRng::seed_from_u64(1234);

    for dimension in 1..=4 {
        for _ in 0..25 {
            let ordinates = random_polyline(&mut rng, 12, dimension);
            let points = FlatPointList::new(ordinates, dimension).unwrap();
            let crossings = collect_unsplit(&points);

            for (from, to) in crossings.iter().tuple_windows() {
                let distance = from
                    .iter()
                    .zip(to.iter())
                    .map(|(a, b)| (a - b).abs())
                    .fold(0.0, f64::max);

                assert!(
                    distance >= EPSILON * 0.5,
                    "Duplicate points {:?} and {:?}",
                    from,
                    to
                );
            }
        }
    }
}

#[test]
fn random_crossings_include_vertices() {
    let mut rng = StdRng::seed_from_u64(99);

    for dimension in 1..=4 {
        let ordinates = random_polyline(&mut rng, 20, dimension);
        let points = FlatPointList::new(ordinates.clone(), dimension).unwrap();
        let crossings = collect_unsplit(&points);

        for vertex in ordinates.chunks(dimension) {
            assert!(
                crossings.iter().any(|point| &point[..] == vertex),
                "Vertex {:?} is missing",
                vertex
            );
        }

        assert!(crossings.last().map(|point| &point[..]) == ordinates.chunks(dimension).last());
    }
}

#[test]
fn crossings_are_snapped_to_grid() {
    let points = FlatPointList::new(vec![0.1, 0.2, 0.3, 7.3, 9.1, 2.9], 3).unwrap();
    let crossings = collect_unsplit(&points);

    // Every interior point must have at least one ordinate that's exactly on the grid
    for point in crossings[1..crossings.len() - 1].iter() {
        assert!(
            point.iter().any(|ordinate| ordinate.fract() == 0.0),
            "{:?} is not on a grid line",
            point
        );
    }
}
