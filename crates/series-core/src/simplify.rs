// File: crates/series-core/src/simplify.rs
// Summary: Recursive Douglas-Peucker polyline simplification.

use crate::geometry::{Coordinate, LineSegment};

/// Reduce a polyline so every dropped vertex lies within `tolerance` of the
/// simplified line. The first and last point always survive; a line of two
/// points (or fewer) cannot be reduced and is returned unchanged.
pub fn simplify(points: &[Coordinate], tolerance: f64) -> Vec<Coordinate> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let mut keep = vec![true; points.len()];
    simplify_section(points, tolerance, 0, points.len() - 1, &mut keep);
    points
        .iter()
        .zip(&keep)
        .filter(|(_, &kept)| kept)
        .map(|(p, _)| *p)
        .collect()
}

/// Collapse or split the section between indices `i` and `j` (inclusive).
/// Distances use the segment's closest point, so a degenerate zero-length
/// section still ranks interior points by plain Euclidean distance.
fn simplify_section(points: &[Coordinate], tolerance: f64, i: usize, j: usize, keep: &mut [bool]) {
    if i + 1 == j {
        return;
    }

    let seg = LineSegment::new(points[i], points[j]);
    let mut max_distance = -1.0;
    let mut max_index = i;
    for (k, point) in points.iter().enumerate().take(j).skip(i + 1) {
        let distance = seg.distance(*point);
        if distance > max_distance {
            max_distance = distance;
            max_index = k;
        }
    }

    if max_distance <= tolerance {
        for flag in keep.iter_mut().take(j).skip(i + 1) {
            *flag = false;
        }
    } else {
        simplify_section(points, tolerance, i, max_index, keep);
        simplify_section(points, tolerance, max_index, j, keep);
    }
}
