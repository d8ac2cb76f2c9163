//! Lux Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer over implicit primitives (spheres, planes,
//! cuboids) with a hand-rolled work queue and thread pool driving
//! per-pixel sampling jobs.

mod camera;
mod cuboid;
mod hit;
mod integrator;
mod material;
mod plane;
mod pool;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use camera::Camera;
pub use cuboid::{Cuboid, Side};
pub use hit::{cuboid_intersect, plane_intersect, sphere_intersect, HitRecord, T_EPSILON};
pub use integrator::{ray_color, sky_gradient};
pub use material::{Color, Material};
pub use plane::Plane;
pub use pool::{ThreadPool, WorkQueue};
pub use renderer::{color_to_rgb8, render, render_pixel, ImageBuffer, RenderConfig, RenderError};
pub use sampling::{gen_f32, random_unit_vector, reflect, refract, refraction, Refraction};
pub use scene::{Scene, SceneSource};
pub use sphere::Sphere;

/// Re-export Ray and common math types from lux_math
pub use lux_math::{Ray, Vec3};
