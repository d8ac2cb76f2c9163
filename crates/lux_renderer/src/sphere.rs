//! Sphere primitive.

use lux_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. The radius is clamped to be non-negative.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Get the center of the sphere.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Get the radius of the sphere.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}
