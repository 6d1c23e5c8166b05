// File: crates/series-core/src/geometry.rs
// Summary: 2-D point and segment math backing the polyline simplifier.

use std::cmp::Ordering;

/// Segments shorter than this are treated as degenerate (zero length).
const ZERO_LENGTH_EPS: f64 = 1e-5;

/// Milliseconds on the x-axis, measured value on the y-axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Planar Euclidean distance to another point.
    pub fn distance(&self, other: Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Total order: first by x, then by y.
    pub fn cmp_xy(&self, other: &Coordinate) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

/// An ordered pair of coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub p0: Coordinate,
    pub p1: Coordinate,
}

impl LineSegment {
    pub const fn new(p0: Coordinate, p1: Coordinate) -> Self {
        Self { p0, p1 }
    }

    pub fn length(&self) -> f64 {
        self.p0.distance(self.p1)
    }

    pub fn is_horizontal(&self) -> bool {
        self.p0.y == self.p1.y
    }

    pub fn is_vertical(&self) -> bool {
        self.p0.x == self.p1.x
    }

    /// Swap the segment endpoints.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.p0, &mut self.p1);
    }

    /// Orient the segment so the smaller endpoint (by x, then y) comes first.
    pub fn normalize(&mut self) {
        if self.p1.cmp_xy(&self.p0) == Ordering::Less {
            self.reverse();
        }
    }

    /// Projection factor r of `p` onto the infinite extension of the segment:
    /// r = 0 at p0, r = 1 at p1, outside [0, 1] beyond the endpoints.
    /// A degenerate zero-length segment yields +infinity so callers fall back
    /// to plain point distance instead of dividing by zero.
    pub fn projection_factor(&self, p: Coordinate) -> f64 {
        if p == self.p0 {
            return 0.0;
        }
        if p == self.p1 {
            return 1.0;
        }
        if self.length() < ZERO_LENGTH_EPS {
            return f64::INFINITY;
        }
        let dx = self.p1.x - self.p0.x;
        let dy = self.p1.y - self.p0.y;
        let len2 = dx * dx + dy * dy;
        ((p.x - self.p0.x) * dx + (p.y - self.p0.y) * dy) / len2
    }

    /// Project `p` onto the line through this segment. The result may lie
    /// outside the segment when the projection factor is outside [0, 1].
    pub fn project(&self, p: Coordinate) -> Coordinate {
        if p == self.p0 || p == self.p1 {
            return p;
        }
        let r = self.projection_factor(p);
        Coordinate::new(
            self.p0.x + r * (self.p1.x - self.p0.x),
            self.p0.y + r * (self.p1.y - self.p0.y),
        )
    }

    /// Closest point on the segment to `p`, clamped to the endpoints.
    pub fn closest_point(&self, p: Coordinate) -> Coordinate {
        let factor = self.projection_factor(p);
        if factor > 0.0 && factor < 1.0 {
            return self.project(p);
        }
        if self.p0.distance(p) < self.p1.distance(p) {
            self.p0
        } else {
            self.p1
        }
    }

    /// Distance from `p` to the segment (not the infinite line).
    pub fn distance(&self, p: Coordinate) -> f64 {
        p.distance(self.closest_point(p))
    }
}

/// Signed area of a ring of coordinates: positive for clockwise rings,
/// negative for counter-clockwise, zero for degenerate rings (< 3 points).
pub fn signed_area(ring: &[Coordinate]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for pair in ring.windows(2) {
        sum += (pair[0].x + pair[1].x) * (pair[1].y - pair[0].y);
    }
    -sum / 2.0
}
