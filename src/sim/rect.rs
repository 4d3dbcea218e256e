//! Axis-aligned rectangle geometry for ships, projectiles and the divider
//!
//! Coordinates are integer screen pixels with the origin at the top-left:
//! - pos: top-left corner
//! - size: width and height

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Vertical centre line
    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    /// Check whether two rectangles share any interior area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Copy of this rectangle moved by `delta`
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 55, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 65);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center_y(), 40);
    }

    #[test]
    fn test_overlap() {
        let ship = Rect::new(700, 300, 55, 40);

        // Bullet inside the ship
        assert!(ship.overlaps(&Rect::new(705, 318, 10, 5)));
        // Overlap is symmetric
        assert!(Rect::new(705, 318, 10, 5).overlaps(&ship));
        // Partially overlapping on the left edge
        assert!(ship.overlaps(&Rect::new(695, 310, 10, 5)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let ship = Rect::new(700, 300, 55, 40);

        // Bullet's right edge touches ship's left edge
        assert!(!ship.overlaps(&Rect::new(690, 310, 10, 5)));
        // Bullet sits directly above the ship
        assert!(!ship.overlaps(&Rect::new(710, 295, 10, 5)));
    }

    #[test]
    fn test_translate() {
        let bullet = Rect::new(885, 100, 10, 5);
        let moved = bullet.translated(IVec2::new(10, 0));
        assert_eq!(moved.pos, IVec2::new(895, 100));
        assert_eq!(moved.size, bullet.size);
    }
}
