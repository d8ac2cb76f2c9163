//! The demo scene: a handful of spheres, a ground plane, and two boxes.

use lux_math::Vec3;
use lux_renderer::{Color, Cuboid, Material, Plane, Scene, Sphere};

/// Build the demo scene.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add_sphere(
        Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5),
        Material::Diffuse {
            albedo: Color::new(1.0, 0.0, 0.0),
        },
    );
    scene.add_sphere(
        Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5),
        Material::Metal {
            albedo: Color::new(1.0, 1.0, 1.0),
        },
    );
    // Behind the camera, visible in glass reflections
    scene.add_sphere(
        Sphere::new(Vec3::new(0.5, 0.0, 1.0), 0.5),
        Material::Diffuse {
            albedo: Color::new(1.0, 0.0, 1.0),
        },
    );
    scene.add_sphere(
        Sphere::new(Vec3::new(2.0, 0.0, -1.0), 0.5),
        Material::Dielectric {
            albedo: Color::new(0.8, 0.8, 0.8),
            ior: 1.5,
        },
    );
    scene.add_sphere(
        Sphere::new(Vec3::new(0.3, -0.3, -0.4), 0.2),
        Material::Dielectric {
            albedo: Color::new(1.0, 1.0, 1.0),
            ior: 1.5,
        },
    );
    scene.add_sphere(
        Sphere::new(Vec3::new(-0.32, -0.3, -0.42), 0.2),
        Material::Dielectric {
            albedo: Color::new(1.0, 1.0, 1.0),
            ior: 1.5,
        },
    );
    scene.add_sphere(
        Sphere::new(Vec3::new(-0.68, -0.3, -0.69), 0.25),
        Material::Metal {
            albedo: Color::new(0.7, 0.2, 0.7),
        },
    );

    scene.add_plane(
        Plane::new(Vec3::new(0.0, -0.5, 0.0), Vec3::new(0.0, 1.0, 0.0)),
        Material::Diffuse {
            albedo: Color::new(0.8, 0.8, 0.8),
        },
    );

    scene.add_cuboid(
        Cuboid::new(
            Plane::new(Vec3::new(0.0, 0.5, -4.0), Vec3::new(0.0, 1.0, 0.0)),
            Plane::new(Vec3::new(0.0, -0.5, -4.0), Vec3::new(0.0, -1.0, 0.0)),
            Plane::new(Vec3::new(0.0, 0.0, -3.5), Vec3::new(0.0, 0.0, 1.0)),
            Plane::new(Vec3::new(0.0, 0.0, -4.5), Vec3::new(0.0, 0.0, -1.0)),
            Plane::new(Vec3::new(-0.5, 0.0, -4.0), Vec3::new(-1.0, 0.0, 0.0)),
            Plane::new(Vec3::new(0.5, 0.0, -4.0), Vec3::new(1.0, 0.0, 0.0)),
        ),
        Material::Metal {
            albedo: Color::new(0.8, 0.6, 0.1),
        },
    );

    scene.add_cuboid(
        Cuboid::new(
            Plane::new(Vec3::new(-0.5, 0.0, -2.5), Vec3::new(0.0, 1.0, 0.0)),
            Plane::new(Vec3::new(-0.5, -0.5, -2.5), Vec3::new(0.0, -1.0, 0.0)),
            Plane::new(Vec3::new(-0.5, -0.25, -2.0), Vec3::new(0.0, 0.0, 1.0)),
            Plane::new(Vec3::new(-0.5, -0.25, -2.5), Vec3::new(0.0, 0.0, -1.0)),
            Plane::new(Vec3::new(-1.0, -0.25, -2.5), Vec3::new(-1.0, 0.0, 0.0)),
            Plane::new(Vec3::new(-0.5, -0.25, -2.5), Vec3::new(1.0, 0.0, 0.0)),
        ),
        Material::Dielectric {
            albedo: Color::new(0.9, 0.9, 0.9),
            ior: 1.5,
        },
    );

    scene
}
