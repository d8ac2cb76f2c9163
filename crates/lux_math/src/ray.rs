use crate::Vec3;

/// A ray in 3D space with origin and direction.
///
/// The stored direction is not required to be unit length: `direction()`
/// normalizes on every call, and the intersection code relies on that
/// contract (it treats the direction as unit length throughout). Callers
/// must not assume the `direction` field itself is pre-normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    ///
    /// A zero-length direction is a construction error: normalizing it
    /// yields non-finite components downstream.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction.length_squared() > 0.0,
            "ray direction must be non-zero"
        );
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the normalized direction of the ray, recomputed on each call.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction.normalize()
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction(), measured along the *normalized*
    /// direction, so t is a real distance.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction() * t
    }
}
