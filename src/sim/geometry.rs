//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: origin at the top-left corner, y grows downward.
//! Rectangles are half-open on both axes (`[x, x + w) × [y, y + h)`), so two
//! rectangles that only share an edge do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// An axis-aligned bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Rectangle of `size` whose horizontal center is `center_x` and whose bottom edge is `bottom`
    pub fn from_center_bottom(center_x: f32, bottom: f32, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(center_x - size.x / 2.0, bottom - size.y),
            size,
        }
    }

    /// Rectangle of `size` whose horizontal center is `center_x` and whose top edge is `top`
    pub fn from_center_top(center_x: f32, top: f32, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(center_x - size.x / 2.0, top),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Half-open AABB intersection test
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Move the rectangle so it lies entirely inside the arena
    pub fn clamp_within(&mut self, arena: &Arena) {
        let max_x = (arena.width - self.size.x).max(0.0);
        let max_y = (arena.height - self.size.y).max(0.0);
        self.pos.x = self.pos.x.min(max_x).max(0.0);
        self.pos.y = self.pos.y.min(max_y).max(0.0);
    }

    /// True if the whole rectangle is inside the arena
    pub fn is_within(&self, arena: &Arena) -> bool {
        self.left() >= 0.0
            && self.top() >= 0.0
            && self.right() <= arena.width
            && self.bottom() <= arena.height
    }
}

/// Playfield dimensions, fixed for the lifetime of a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Smallest arena that still fits a player at its spawn point (the player
    /// is wider than an enemy, so enemies fit too)
    pub const MIN_WIDTH: f32 = PLAYER_WIDTH;
    pub const MIN_HEIGHT: f32 = PLAYER_SPAWN_OFFSET;

    pub fn new(width: f32, height: f32) -> Result<Self, SettingsError> {
        // Written as negated comparisons so NaN is rejected too
        if !(width >= Self::MIN_WIDTH) || !(height >= Self::MIN_HEIGHT) {
            return Err(SettingsError::ArenaTooSmall {
                width,
                height,
                min_width: Self::MIN_WIDTH,
                min_height: Self::MIN_HEIGHT,
            });
        }
        Ok(Self { width, height })
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_overlap_requires_both_axes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // x overlaps, y does not
        let b = Rect::new(5.0, 20.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 15.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_anchor_constructors() {
        let size = Vec2::new(5.0, 15.0);
        let r = Rect::from_center_bottom(20.0, 100.0, size);
        assert_eq!(r.center_x(), 20.0);
        assert_eq!(r.bottom(), 100.0);

        let r = Rect::from_center_top(20.0, 100.0, size);
        assert_eq!(r.center_x(), 20.0);
        assert_eq!(r.top(), 100.0);
    }

    #[test]
    fn test_clamp_within() {
        let arena = Arena::default();
        let mut r = Rect::new(-30.0, 900.0, 40.0, 50.0);
        r.clamp_within(&arena);
        assert_eq!(r.pos, Vec2::new(0.0, 550.0));
        assert!(r.is_within(&arena));

        let mut r = Rect::new(790.0, -5.0, 40.0, 50.0);
        r.clamp_within(&arena);
        assert_eq!(r.pos, Vec2::new(760.0, 0.0));
    }

    #[test]
    fn test_arena_validation() {
        assert!(Arena::new(800.0, 600.0).is_ok());
        assert!(Arena::new(Arena::MIN_WIDTH, Arena::MIN_HEIGHT).is_ok());
        assert!(Arena::new(39.0, 600.0).is_err());
        assert!(Arena::new(800.0, 10.0).is_err());
        assert!(Arena::new(f32::NAN, 600.0).is_err());
    }
}
