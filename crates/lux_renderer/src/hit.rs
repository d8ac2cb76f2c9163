//! Ray/primitive intersection tests.
//!
//! All tests treat the ray direction as unit length (`Ray::direction`
//! normalizes on read), so returned parameters are world-space distances.

use crate::{Cuboid, Plane, Side, Sphere};
use lux_math::{Ray, Vec3};

/// Minimum accepted hit distance.
///
/// Keeps secondary rays from re-hitting the surface they just left.
pub const T_EPSILON: f32 = 5.0 * f32::EPSILON;

/// Record of a ray-surface intersection.
///
/// Created fresh per intersection and consumed immediately by the scatter
/// step; never persisted. The normal is the surface's outward normal and
/// is not flipped toward the ray; `front_face` records which side was hit.
#[derive(Debug, Copy, Clone)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal at the intersection
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl HitRecord {
    /// Build a record for a hit at parameter `t` with the given outward
    /// normal.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3) -> Self {
        Self {
            point: ray.at(t),
            normal: outward_normal,
            t,
            front_face: ray.direction().dot(outward_normal) < 0.0,
        }
    }
}

/// Intersect a ray with a sphere, returning the nearest acceptable root.
///
/// Solves the quadratic (V.V)t^2 + 2(S.V)t + (S.S) - r^2 = 0 where V is
/// the (unit) ray direction and S runs from the sphere center to the ray
/// origin, so `a` is identically 1. The smaller root wins if it is beyond
/// `T_EPSILON`, otherwise the larger root is tried; both at or behind the
/// origin means no hit.
pub fn sphere_intersect(sphere: &Sphere, ray: &Ray) -> Option<f32> {
    let to_origin = ray.origin() - sphere.center();

    let a = 1.0;
    let b = 2.0 * to_origin.dot(ray.direction());
    let c = to_origin.dot(to_origin) - sphere.radius() * sphere.radius();
    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let near = (-b - sqrtd) / (2.0 * a);
    let far = (-b + sqrtd) / (2.0 * a);

    if near > T_EPSILON {
        Some(near)
    } else if far > T_EPSILON {
        Some(far)
    } else {
        None
    }
}

/// Intersect a ray with an infinite plane.
///
/// Returns None for rays parallel to the plane. The returned t can be
/// negative (plane behind the ray); callers filter by range.
pub fn plane_intersect(plane: &Plane, ray: &Ray) -> Option<f32> {
    let denom = ray.direction().dot(plane.normal());
    if denom.abs() <= f32::EPSILON {
        return None;
    }

    Some((plane.origin() - ray.origin()).dot(plane.normal()) / denom)
}

/// Intersect a ray with a cuboid, returning the hit side and distance.
///
/// Sides are scanned in `Side::ALL` order. A side whose normal faces the
/// same general direction as the ray is culled; for the rest, the hit
/// point must lie on the inner half-space of every other side. The first
/// side to pass wins, which for rays clipping an edge is not guaranteed to
/// be the globally nearest face.
pub fn cuboid_intersect(cuboid: &Cuboid, ray: &Ray) -> Option<(Side, f32)> {
    for side in Side::ALL {
        let face = cuboid.side(side);
        if face.normal().dot(ray.direction()) > 0.0 {
            // back-facing
            continue;
        }

        let Some(t) = plane_intersect(face, ray) else {
            continue;
        };
        let point = ray.at(t);

        let inside = Side::ALL
            .into_iter()
            .filter(|other| *other != side)
            .all(|other| {
                let other_face = cuboid.side(other);
                (other_face.origin() - point).dot(other_face.normal()) >= 0.0
            });
        if inside {
            return Some((side, t));
        }
    }

    None
}
