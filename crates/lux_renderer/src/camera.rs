//! Pinhole camera for ray generation.

use lux_math::{Ray, Vec3};

/// Pinhole camera mapping normalized image coordinates to primary rays.
///
/// The viewport basis is cached at construction; `get_ray` is pure.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left: Vec3,
}

impl Camera {
    /// Create a camera.
    ///
    /// - `look_from` / `look_at` / `up`: position and orientation
    /// - `vfov`: vertical field of view in degrees
    /// - `aspect`: viewport width over height
    /// - `near` / `far`: clip range; `near` does not participate in the
    ///   projection, and `far` scales the viewport height
    #[allow(unused_variables)]
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        up: Vec3,
        vfov: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / far).tan();
        let viewport_height = far * h;
        let viewport_width = aspect * viewport_height;

        let w = (look_from - look_at).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let lower_left = origin - horizontal / 2.0 - vertical / 2.0 - w;

        Self {
            origin,
            horizontal,
            vertical,
            lower_left,
        }
    }

    /// Get the primary ray through normalized viewport coordinates
    /// (s, t) in [0, 1]^2, with (0, 0) the lower-left corner.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left + s * self.horizontal + t * self.vertical - self.origin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin_camera() -> Camera {
        Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            60.0,
            16.0 / 9.0,
            0.001,
            2.0,
        )
    }

    #[test]
    fn test_center_ray_points_forward() {
        let camera = origin_camera();
        let ray = camera.get_ray(0.5, 0.5);

        assert!((ray.origin - Vec3::ZERO).length() < 1e-6);
        assert!((ray.direction() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_corner_rays_straddle_center() {
        let camera = origin_camera();
        let left = camera.get_ray(0.0, 0.5);
        let right = camera.get_ray(1.0, 0.5);
        let bottom = camera.get_ray(0.5, 0.0);
        let top = camera.get_ray(0.5, 1.0);

        assert!(left.direction().x < 0.0);
        assert!(right.direction().x > 0.0);
        assert!(bottom.direction().y < 0.0);
        assert!(top.direction().y > 0.0);
        // Symmetric about the view axis
        assert!((left.direction().x + right.direction().x).abs() < 1e-5);
        assert!((bottom.direction().y + top.direction().y).abs() < 1e-5);
    }

    #[test]
    fn test_offset_camera_keeps_its_origin() {
        let camera = Camera::new(
            Vec3::new(-1.5, 0.6, 0.8),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            60.0,
            16.0 / 9.0,
            0.001,
            2.0,
        );
        let ray = camera.get_ray(0.25, 0.75);
        assert!((ray.origin - Vec3::new(-1.5, 0.6, 0.8)).length() < 1e-6);
    }
}
