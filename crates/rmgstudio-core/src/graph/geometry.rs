//! Plane geometry used by the zone graph: points, segment distance and
//! arrowheads.

use std::ops::{Add, Mul, Sub};

/// A point (or vector) in canvas pixels; y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (self - other).length()
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction, or `None` for the zero vector
    pub fn normalized(self) -> Option<Point> {
        let len = self.length();
        if len <= f32::EPSILON {
            None
        } else {
            Some(Point::new(self.x / len, self.y / len))
        }
    }

    /// Rotate around the origin by `angle` radians
    pub fn rotated(self, angle: f32) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Shortest distance from `p` to the segment `a`-`b`.
///
/// The projection of `p` onto the line is clamped to the segment, so points
/// beyond either end measure to the nearest endpoint. A degenerate segment
/// measures to `a`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Pull both ends of `a`-`b` inward by the given insets, e.g. to stop an
/// edge at the rim of the node circles. Returns `None` when the insets
/// consume the whole segment.
pub fn trim_segment(a: Point, b: Point, start_inset: f32, end_inset: f32) -> Option<(Point, Point)> {
    let dir = (b - a).normalized()?;
    if a.distance(b) <= start_inset + end_inset {
        return None;
    }
    Some((a + dir * start_inset, b - dir * end_inset))
}

/// Triangle `[tip, left wing, right wing]` for an arrow pointing from
/// `from` towards `tip`.
pub fn arrow_head(tip: Point, from: Point, length: f32, half_angle: f32) -> Option<[Point; 3]> {
    let back = (from - tip).normalized()? * length;
    Some([
        tip,
        tip + back.rotated(half_angle),
        tip + back.rotated(-half_angle),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn point_on_segment_has_zero_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        assert!(distance_to_segment(Point::new(5.0, 5.0), a, b) < EPS);
        assert!(distance_to_segment(a, a, b) < EPS);
        assert!(distance_to_segment(b, a, b) < EPS);
    }

    #[test]
    fn perpendicular_distance_inside_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let d = distance_to_segment(Point::new(4.0, 3.0), a, b);
        assert!((d - 3.0).abs() < EPS);
    }

    #[test]
    fn distance_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let d = distance_to_segment(Point::new(13.0, 4.0), a, b);
        assert!((d - 5.0).abs() < EPS);
        let d = distance_to_segment(Point::new(-3.0, -4.0), a, b);
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn degenerate_segment_measures_to_point() {
        let a = Point::new(2.0, 2.0);
        let d = distance_to_segment(Point::new(5.0, 6.0), a, a);
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn trim_segment_insets_both_ends() {
        let (s, e) = trim_segment(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 10.0, 20.0).unwrap();
        assert!((s.x - 10.0).abs() < EPS);
        assert!((e.x - 80.0).abs() < EPS);
        assert!(trim_segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 6.0, 6.0).is_none());
    }

    #[test]
    fn arrow_head_wings_sit_behind_tip() {
        let tip = Point::new(100.0, 0.0);
        let [t, l, r] = arrow_head(tip, Point::new(0.0, 0.0), 10.0, 0.5).unwrap();
        assert_eq!(t, tip);
        assert!(l.x < tip.x && r.x < tip.x);
        assert!((l.distance(tip) - 10.0).abs() < EPS);
        assert!((l.y + r.y).abs() < EPS, "wings are symmetric");
        assert!(arrow_head(tip, tip, 10.0, 0.5).is_none());
    }
}
