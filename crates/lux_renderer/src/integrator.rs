//! Recursive path tracing integrator.

use crate::hit::{cuboid_intersect, plane_intersect, sphere_intersect, HitRecord, T_EPSILON};
use crate::{Color, Material, SceneSource};
use lux_math::Ray;
use rand::RngCore;

const SKY_ZENITH: Color = Color::new(0.5, 0.7, 1.0);
const SKY_HORIZON: Color = Color::new(1.0, 1.0, 1.0);

/// Sky background: vertical gradient between two fixed colors,
/// interpolated by the ray's (normalized) y direction.
pub fn sky_gradient(ray: &Ray) -> Color {
    let t = 0.5 * (ray.direction().y + 1.0);
    SKY_HORIZON * (1.0 - t) + SKY_ZENITH * t
}

/// Compute the color seen along a ray.
///
/// Scans every registered primitive for the nearest acceptable hit,
/// scatters at the hit surface, and recurses with the path throughput
/// multiplied by the material's attenuation. Terminal cases: exhausted
/// depth and absorbed paths return black, a miss returns the sky gradient.
///
/// The three shape collections are scanned in a fixed order (spheres,
/// planes, cuboids) so exact-distance ties break deterministically.
pub fn ray_color(
    ray: &Ray,
    scene: &dyn SceneSource,
    depth: u32,
    ambient_ior: f32,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let mut nearest: Option<(HitRecord, Material)> = None;
    let mut nearest_t = f32::MAX;

    for (sphere, material) in scene.spheres() {
        if let Some(t) = sphere_intersect(sphere, ray) {
            if t > T_EPSILON && t < nearest_t {
                nearest_t = t;
                let normal = (ray.at(t) - sphere.center()).normalize();
                nearest = Some((HitRecord::new(ray, t, normal), *material));
            }
        }
    }

    for (plane, material) in scene.planes() {
        if let Some(t) = plane_intersect(plane, ray) {
            if t > T_EPSILON && t < nearest_t {
                nearest_t = t;
                let normal = plane.normal().normalize();
                nearest = Some((HitRecord::new(ray, t, normal), *material));
            }
        }
    }

    for (cuboid, material) in scene.cuboids() {
        if let Some((side, t)) = cuboid_intersect(cuboid, ray) {
            if t > T_EPSILON && t < nearest_t {
                nearest_t = t;
                let normal = cuboid.side(side).normal().normalize();
                nearest = Some((HitRecord::new(ray, t, normal), *material));
            }
        }
    }

    let Some((record, material)) = nearest else {
        return sky_gradient(ray);
    };

    match material.scatter(ray, &record, ambient_ior, rng) {
        Some((attenuation, scattered)) => {
            attenuation * ray_color(&scattered, scene, depth - 1, ambient_ior, rng)
        }
        None => Color::ZERO,
    }
}
