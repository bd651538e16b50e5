use std::fmt;

use glam::{IVec2, ivec2};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub origin: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(origin: IVec2, size: IVec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle at the origin with the given size.
    pub fn from_size(size: IVec2) -> Self {
        Self::new(IVec2::ZERO, size)
    }

    pub fn from_corners(min: IVec2, max: IVec2) -> Self {
        Self::new(min, max - min)
    }

    pub fn min(&self) -> IVec2 {
        self.origin
    }

    pub fn max(&self) -> IVec2 {
        self.origin + self.size
    }

    pub fn dx(&self) -> i32 {
        self.size.x
    }

    pub fn dy(&self) -> i32 {
        self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Half-open containment: the max edges are outside.
    pub fn contains(&self, p: IVec2) -> bool {
        let min = self.min();
        let max = self.max();
        p.x >= min.x && p.x < max.x && p.y >= min.y && p.y < max.y
    }

    pub fn translate(self, by: IVec2) -> Self {
        Self::new(self.origin + by, self.size)
    }

    /// Shrinks the rectangle by `n` on every side. Never produces a negative size.
    pub fn inset(self, n: i32) -> Self {
        let size = (self.size - IVec2::splat(2 * n)).max(IVec2::ZERO);
        Self::new(self.origin + IVec2::splat(n), size)
    }

    pub fn outset(self, by: IVec2) -> Self {
        Self::new(self.origin - by, self.size + by * 2)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        let (a0, a1) = (self.min(), self.max());
        let (b0, b1) = (other.min(), other.max());
        a0.x < b1.x && b0.x < a1.x && a0.y < b1.y && b0.y < a1.y
    }

    pub fn center(&self) -> IVec2 {
        self.origin + self.size / 2
    }

    pub fn extend_y(self, dy: i32) -> Self {
        Self::new(self.origin, self.size + ivec2(0, dy))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = (self.min(), self.max());
        write!(f, "({},{})-({},{})", min.x, min.y, max.x, max.y)
    }
}
