//! Scene storage: (shape, material) pairs, one collection per shape kind.

use crate::{Cuboid, Material, Plane, Sphere};

/// Iteration contract the integrator needs from a scene store.
///
/// Each shape kind is exposed as a slice of (shape, material) pairs.
/// Iteration order is unspecified but must be exhaustive and stable for
/// the duration of a render; scene content is read-only while rendering,
/// so workers may read it without synchronization.
pub trait SceneSource: Send + Sync {
    fn spheres(&self) -> &[(Sphere, Material)];
    fn planes(&self) -> &[(Plane, Material)];
    fn cuboids(&self) -> &[(Cuboid, Material)];
}

/// Default scene store backed by three vectors.
#[derive(Default)]
pub struct Scene {
    spheres: Vec<(Sphere, Material)>,
    planes: Vec<(Plane, Material)>,
    cuboids: Vec<(Cuboid, Material)>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere with its material.
    pub fn add_sphere(&mut self, sphere: Sphere, material: Material) {
        self.spheres.push((sphere, material));
    }

    /// Add a plane with its material.
    pub fn add_plane(&mut self, plane: Plane, material: Material) {
        self.planes.push((plane, material));
    }

    /// Add a cuboid with its material.
    pub fn add_cuboid(&mut self, cuboid: Cuboid, material: Material) {
        self.cuboids.push((cuboid, material));
    }

    /// Total number of renderables across all shape kinds.
    pub fn len(&self) -> usize {
        self.spheres.len() + self.planes.len() + self.cuboids.len()
    }

    /// Check if the scene holds no renderables.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SceneSource for Scene {
    fn spheres(&self) -> &[(Sphere, Material)] {
        &self.spheres
    }

    fn planes(&self) -> &[(Plane, Material)] {
        &self.planes
    }

    fn cuboids(&self) -> &[(Cuboid, Material)] {
        &self.cuboids
    }
}
