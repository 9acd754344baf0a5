use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// 2D vector on the logical canvas plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Circle-circle overlap, strict: centers exactly `ra + rb` apart do NOT
/// collide. Compared on squared distances, so it is total (no sqrt, no
/// division).
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let d = b - a;
    let rsum = ra + rb;
    d.length_squared() < rsum * rsum
}

/// Axis-aligned rectangle, origin at top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle from a center point and half-extents.
    pub fn centered(center: Vec2, half_w: f32, half_h: f32) -> Self {
        Self::new(center.x - half_w, center.y - half_h, half_w * 2.0, half_h * 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict interval overlap on both axes: rectangles that merely touch
    /// edges do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Axis along which an overlap should be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Resolution axis for a moving box overlapping a fixed box: the axis with
/// the smallest penetration depth. Exact ties resolve to `Vertical`.
///
/// Only meaningful when the boxes actually intersect.
pub fn bounce_axis(moving: &Aabb, fixed: &Aabb) -> Axis {
    let overlap_left = moving.right() - fixed.x;
    let overlap_right = fixed.right() - moving.x;
    let overlap_top = moving.bottom() - fixed.y;
    let overlap_bottom = fixed.bottom() - moving.y;

    let min_x = overlap_left.min(overlap_right);
    let min_y = overlap_top.min(overlap_bottom);

    if min_y <= min_x {
        Axis::Vertical
    } else {
        Axis::Horizontal
    }
}

/// Wrap a coordinate into `[0, extent)` (toroidal boundary policy).
pub fn wrap(value: f32, extent: f32) -> f32 {
    value.rem_euclid(extent)
}
