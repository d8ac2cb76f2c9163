//! Infinite plane primitive.

use lux_math::Vec3;

/// An infinite plane given by a point on the plane and an outward normal.
///
/// The normal is not required to be unit length at construction, but the
/// intersection tests use it in dot products as if it were; callers should
/// supply unit normals for distances to come out in world units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    origin: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a new plane from a point on it and its outward normal.
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self { origin, normal }
    }

    /// Get the reference point on the plane.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the outward normal of the plane.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}
