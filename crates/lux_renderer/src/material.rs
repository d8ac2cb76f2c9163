//! Surface materials and scattering.

use crate::hit::HitRecord;
use crate::sampling::{random_unit_vector, reflect, refract};
use lux_math::{Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// A surface material.
///
/// The material set is closed: scattering matches exhaustively over the
/// variants, so adding one is a compile-time event rather than a silent
/// fallthrough.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Material {
    /// Diffuse surface: scatters around the normal, tinted by `albedo`.
    Diffuse { albedo: Color },
    /// Mirror surface: reflects the incoming ray, tinted by `albedo`.
    Metal { albedo: Color },
    /// Transparent surface with the given index of refraction.
    Dielectric { albedo: Color, ior: f32 },
}

impl Material {
    /// Scatter an incoming ray at a hit point.
    ///
    /// Returns `Some((attenuation, scattered))` if the path continues, or
    /// `None` if the ray is absorbed. Absorption is a terminated path, not
    /// an error; the integrator contributes black for it.
    ///
    /// `ambient_ior` is the refractive index of the medium surrounding the
    /// scene (air = 1.0); it only matters for dielectrics.
    pub fn scatter(
        &self,
        ray: &Ray,
        rec: &HitRecord,
        ambient_ior: f32,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        match *self {
            Material::Diffuse { albedo } => {
                let scatter_direction = rec.normal + random_unit_vector(rng);
                let scattered = Ray::new(rec.point, scatter_direction);
                Some((albedo, scattered))
            }
            Material::Metal { albedo } => {
                let reflected = reflect(ray.direction(), rec.normal);
                // A reflected ray ending up under the surface is absorbed.
                if reflected.dot(rec.normal) > 0.0 {
                    Some((albedo, Ray::new(rec.point, reflected)))
                } else {
                    None
                }
            }
            Material::Dielectric { albedo, ior } => {
                let refracted = refract(ray.direction(), rec.normal, ambient_ior, ior, rng);
                Some((albedo, Ray::new(rec.point, refracted)))
            }
        }
    }

    /// The material's base reflectance color.
    pub fn albedo(&self) -> Color {
        match *self {
            Material::Diffuse { albedo }
            | Material::Metal { albedo }
            | Material::Dielectric { albedo, .. } => albedo,
        }
    }
}
