//! pixel-space primitives shared by the layout engine and its renderers

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}

impl Coords {
    pub const fn new(x: f64, y: f64) -> Self { Coords { x, y } }

    pub fn offset(self, dx: f64, dy: f64) -> Self { Coords { x: self.x + dx, y: self.y + dy } }
}

/// Axis-aligned rectangle with `y` growing upward, so `min` is the bottom-left
/// corner and `max` the top-right one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Coords,
    pub max: Coords,
}

impl Rect {
    /// Builds a rect from its top-left corner, which is how tile positions
    /// are reported.
    pub fn from_top_left(top_left: Coords, width: f64, height: f64) -> Self {
        Rect {
            min: Coords::new(top_left.x, top_left.y - height),
            max: Coords::new(top_left.x + width, top_left.y),
        }
    }

    pub fn width(&self) -> f64 { self.max.x - self.min.x }

    pub fn height(&self) -> f64 { self.max.y - self.min.y }

    pub fn intersection(&self, other: &Self) -> Self {
        let min_x = f64::max(self.min.x, other.min.x);
        let max_x = f64::min(self.max.x, other.max.x);
        let min_y = f64::max(self.min.y, other.min.y);
        let max_y = f64::min(self.max.y, other.max.y);
        Rect {
            min: Coords::new(min_x, min_y),
            max: Coords::new(f64::max(max_x, min_x), f64::max(max_y, min_y)),
        }
    }

    pub fn contains_rect(&self, other: Self) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }

    pub fn area(&self) -> f64 { self.width() * self.height() }

    /// Length of the edge segment the two rects have in common. Zero when they
    /// overlap, are apart, or only meet at a corner.
    pub fn shared_edge(&self, other: &Self) -> f64 {
        let overlap_x = f64::min(self.max.x, other.max.x) - f64::max(self.min.x, other.min.x);
        let overlap_y = f64::min(self.max.y, other.max.y) - f64::max(self.min.y, other.min.y);
        if overlap_x == 0.0 && overlap_y > 0.0 {
            overlap_y
        } else if overlap_y == 0.0 && overlap_x > 0.0 {
            overlap_x
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_top_left_grows_downward() {
        let rect = Rect::from_top_left(Coords::new(-20.0, 40.0), 40.0, 80.0);
        assert_eq!(rect.min, Coords::new(-20.0, -40.0));
        assert_eq!(rect.max, Coords::new(20.0, 40.0));
        assert_eq!(rect.width(), 40.0);
        assert_eq!(rect.height(), 80.0);
    }

    #[test]
    fn test_intersection() {
        let a = Rect::from_top_left(Coords::new(0.0, 100.0), 100.0, 100.0);
        let b = Rect::from_top_left(Coords::new(50.0, 150.0), 100.0, 100.0);
        let i = a.intersection(&b);
        assert_eq!(i.min, Coords::new(50.0, 50.0));
        assert_eq!(i.area(), 2500.0);
    }

    #[test]
    fn test_no_intersection() {
        let a = Rect::from_top_left(Coords::new(0.0, 100.0), 100.0, 100.0);
        let b = Rect::from_top_left(Coords::new(200.0, 300.0), 100.0, 100.0);
        assert_eq!(a.intersection(&b).area(), 0.0);
    }

    #[test]
    fn test_contains_rect() {
        let rect = Rect::from_top_left(Coords::new(0.0, 100.0), 100.0, 100.0);
        let inner = Rect::from_top_left(Coords::new(10.0, 90.0), 80.0, 80.0);
        assert!(rect.contains_rect(inner));
        assert!(!inner.contains_rect(rect));
    }

    #[test]
    fn test_shared_edge() {
        let left = Rect::from_top_left(Coords::new(0.0, 40.0), 40.0, 40.0);
        let right = Rect::from_top_left(Coords::new(40.0, 60.0), 40.0, 40.0);
        assert_eq!(left.shared_edge(&right), 20.0);

        let corner = Rect::from_top_left(Coords::new(40.0, 80.0), 40.0, 40.0);
        assert_eq!(left.shared_edge(&corner), 0.0);

        let overlapping = Rect::from_top_left(Coords::new(20.0, 40.0), 40.0, 40.0);
        assert_eq!(left.shared_edge(&overlapping), 0.0);
    }
}
