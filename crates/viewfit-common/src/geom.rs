//! Geometry types: pixel extents, rectangles, and 2D scale transforms.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{ViewfitError, ViewfitResult};

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Extent {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Extent {
    /// Creates a new extent.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either axis is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rejects an extent with a zero axis.
    ///
    /// Dimensions are unsigned, so the invalid-dimension check reduces to
    /// the zero case.
    pub fn validate(self) -> ViewfitResult<()> {
        if self.is_empty() {
            return Err(ViewfitError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Calculates the width/height aspect ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Converts to a float vector.
    #[must_use]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// An axis-aligned rectangle: integer origin plus extent, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rect {
    /// X coordinate of the top-left corner
    pub x: i32,
    /// Y coordinate of the top-left corner
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle covering `extent` at the origin.
    #[must_use]
    pub const fn from_extent(extent: Extent) -> Self {
        Self {
            x: 0,
            y: 0,
            width: extent.width,
            height: extent.height,
        }
    }

    /// The rectangle's extent, discarding the origin.
    #[must_use]
    pub const fn extent(&self) -> Extent {
        Extent {
            width: self.width,
            height: self.height,
        }
    }

    /// The origin as a float vector.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// X coordinate of the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Y coordinate of the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Checks if a point is inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// A 2D affine scale, one factor per axis.
///
/// The draw transform scales virtual-space geometry up to physical pixels;
/// the input transform is its component-wise inverse. `to_matrix` produces
/// the scale as a 4x4 matrix (z factor 1.0) for composition with a camera
/// or view matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct ScaleTransform {
    /// Horizontal scale factor
    pub x: f32,
    /// Vertical scale factor
    pub y: f32,
}

impl ScaleTransform {
    /// The identity scale.
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    /// Creates a new scale transform.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Applies the scale to a point.
    #[must_use]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x * self.x, point.y * self.y)
    }

    /// Expands to a 4x4 scale matrix (z factor 1.0).
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::new(self.x, self.y, 1.0))
    }

    /// Whether both factors are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise product with another scale.
    #[must_use]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
}

impl Default for ScaleTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
