//! Travel optimizer for picked probe points.
//!
//! Orders points with a greedy nearest-neighbour walk so the machine does not
//! zig-zag across the stock between probes. This is a heuristic, not an
//! optimal tour.

use pickprobe_core::Point2D;

/// Greedy nearest-neighbour point orderer.
#[derive(Debug)]
pub struct PointOrderer;

impl PointOrderer {
    /// Returns a permutation of `points` built by starting at the first point
    /// and repeatedly visiting the closest unvisited one.
    ///
    /// Equal distances resolve to the point that came first in the input.
    /// Runs in O(n²), which is fine for hand-picked point counts.
    pub fn order<S: Copy>(points: &[Point2D<S>]) -> Vec<Point2D<S>> {
        let Some((&first, rest)) = points.split_first() else {
            return Vec::new();
        };

        let mut ordered = Vec::with_capacity(points.len());
        ordered.push(first);

        // Kept in input order so the first minimum found is the lowest index.
        let mut remaining: Vec<Point2D<S>> = rest.to_vec();
        let mut current = first;

        while !remaining.is_empty() {
            let mut best = 0;
            let mut best_distance = current.distance_to(&remaining[0]);
            for (i, candidate) in remaining.iter().enumerate().skip(1) {
                let distance = current.distance_to(candidate);
                if distance < best_distance {
                    best = i;
                    best_distance = distance;
                }
            }
            current = remaining.remove(best);
            ordered.push(current);
        }

        ordered
    }

    /// Total travel distance when visiting `points` in sequence.
    pub fn path_length<S>(points: &[Point2D<S>]) -> f64 {
        points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}
