//! Render driver: per-pixel sampling jobs over the thread pool.

use crate::integrator::ray_color;
use crate::sampling::gen_f32;
use crate::{Camera, Color, SceneSource, ThreadPool};
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cell::UnsafeCell;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Worker thread count
    pub threads: usize,
    /// Base seed; each pixel job derives its own RNG from it
    pub seed: u64,
    /// Refractive index of the medium surrounding the scene
    pub ambient_ior: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            samples_per_pixel: 10,
            max_depth: 50,
            threads: 16,
            seed: 0,
            ambient_ior: 1.0,
        }
    }
}

/// Errors from render configuration validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("image dimensions must be non-zero (got {width}x{height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("image dimensions must be at least 2x2 for pixel jitter (got {width}x{height})")]
    DegenerateImage { width: u32, height: u32 },
    #[error("samples per pixel must be non-zero")]
    NoSamples,
    #[error("thread count must be non-zero")]
    NoThreads,
    #[error("{panicked} render worker(s) panicked; the output buffer is incomplete")]
    WorkerPanicked { panicked: usize },
}

impl RenderConfig {
    fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        // Jitter divides by width - 1 and height - 1.
        if self.width == 1 || self.height == 1 {
            return Err(RenderError::DegenerateImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::NoSamples);
        }
        if self.threads == 0 {
            return Err(RenderError::NoThreads);
        }
        Ok(())
    }
}

/// Convert a color channel in [0, 1] to its 8-bit value.
#[inline]
fn channel_to_u8(channel: f32) -> u8 {
    (255.999 * channel.clamp(0.0, 1.0)) as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

/// Render output: one color per pixel, row-major, top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Get the pixel at (x, y), with y = 0 the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Convert to 8-bit RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Pre-sized pixel buffer shared across workers without locking.
///
/// Every pixel job owns exclusive write access to one slot; slot
/// assignment is injective over jobs, so unsynchronized writes are sound.
struct SlotBuffer {
    slots: Vec<UnsafeCell<Color>>,
}

// Safety: slots are only written through `write`, whose contract forbids
// two threads from touching the same index, and never read until every
// writer has been joined.
unsafe impl Sync for SlotBuffer {}

impl SlotBuffer {
    fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| UnsafeCell::new(Color::ZERO)).collect(),
        }
    }

    /// Safety: callers must guarantee `index` is written by at most one
    /// thread and that no reads overlap the write.
    unsafe fn write(&self, index: usize, color: Color) {
        *self.slots[index].get() = color;
    }

    fn into_pixels(self) -> Vec<Color> {
        self.slots.into_iter().map(UnsafeCell::into_inner).collect()
    }
}

/// Render a single pixel: average `samples_per_pixel` jittered primary
/// rays. Pixel (0, 0) is the top-left corner.
pub fn render_pixel(
    camera: &Camera,
    scene: &dyn SceneSource,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (x as f32 + gen_f32(rng)) / (config.width - 1) as f32;
        // The camera's t axis points up; image rows run top to bottom.
        let v = ((config.height - 1 - y) as f32 + gen_f32(rng)) / (config.height - 1) as f32;

        let ray = camera.get_ray(u, v);
        pixel_color += ray_color(&ray, scene, config.max_depth, config.ambient_ior, rng);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Render the scene into an image buffer.
///
/// One job per pixel is queued on a fresh thread pool; each job draws its
/// jittered samples with a deterministically seeded per-job RNG and writes
/// the averaged color into its own slot. Joining the pool after the queue
/// drains guarantees each slot has been written exactly once by the time
/// the buffer is assembled; if any worker panicked instead, the buffer is
/// incomplete and an error is returned rather than a corrupt image.
pub fn render(
    camera: &Camera,
    scene: Arc<dyn SceneSource>,
    config: &RenderConfig,
) -> Result<ImageBuffer, RenderError> {
    config.validate()?;

    let started = Instant::now();
    info!(
        "rendering {}x{} at {} spp on {} threads",
        config.width, config.height, config.samples_per_pixel, config.threads
    );

    let buffer = Arc::new(SlotBuffer::new((config.width * config.height) as usize));
    let camera = Arc::new(camera.clone());

    let pool = ThreadPool::new(config.threads);
    for y in 0..config.height {
        for x in 0..config.width {
            let index = (y * config.width + x) as usize;
            let buffer = Arc::clone(&buffer);
            let camera = Arc::clone(&camera);
            let scene = Arc::clone(&scene);
            let config = config.clone();

            pool.queue(move || {
                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
                let color = render_pixel(&camera, scene.as_ref(), x, y, &config, &mut rng);
                // Safety: `index` is unique to this job and the buffer
                // is not read until the pool has been joined.
                unsafe { buffer.write(index, color) };
            });
        }
    }

    // A worker dies with the job that panicked it, leaving that job's
    // slot (and any jobs it would have picked up) unwritten.
    let panicked = pool.join();
    if panicked > 0 {
        return Err(RenderError::WorkerPanicked { panicked });
    }

    let buffer =
        Arc::try_unwrap(buffer).unwrap_or_else(|_| unreachable!("all render jobs have completed"));

    info!("render finished in {:.2?}", started.elapsed());

    Ok(ImageBuffer {
        width: config.width,
        height: config.height,
        pixels: buffer.into_pixels(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Scene, Sphere};
    use lux_math::Vec3;

    fn test_camera() -> Camera {
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

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 16,
            height: 9,
            samples_per_pixel: 2,
            max_depth: 5,
            threads: 4,
            seed: 42,
            ambient_ior: 1.0,
        }
    }

    #[test]
    fn test_validation() {
        let mut config = small_config();
        config.width = 0;
        assert_eq!(
            config.validate(),
            Err(RenderError::EmptyImage {
                width: 0,
                height: 9
            })
        );

        let mut config = small_config();
        config.samples_per_pixel = 0;
        assert_eq!(config.validate(), Err(RenderError::NoSamples));

        // A single-row or single-column image has no jitter range.
        let mut config = small_config();
        config.height = 1;
        assert_eq!(
            config.validate(),
            Err(RenderError::DegenerateImage {
                width: 16,
                height: 1
            })
        );

        let mut config = small_config();
        config.width = 1;
        assert_eq!(
            config.validate(),
            Err(RenderError::DegenerateImage {
                width: 1,
                height: 9
            })
        );

        let mut config = small_config();
        config.threads = 0;
        assert_eq!(config.validate(), Err(RenderError::NoThreads));

        assert_eq!(small_config().validate(), Ok(()));
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::new(0.5, -1.0, 2.0)), [127, 0, 255]);
    }

    #[test]
    fn test_every_slot_written_exactly_once() {
        // An empty scene renders pure sky, which is nowhere equal to the
        // slot buffer's zero sentinel; a slot left unwritten (or clobbered
        // with a second, different write) would show up here.
        let camera = test_camera();
        let config = small_config();
        let scene = Arc::new(Scene::new());

        let image = render(&camera, scene, &config).expect("config is valid");
        assert_eq!(image.pixels.len(), 16 * 9);
        for pixel in &image.pixels {
            assert_ne!(*pixel, Color::ZERO);
        }
    }

    #[test]
    fn test_render_rejects_single_row_image() {
        // height == 1 would divide by zero in the jitter and feed NaN
        // coordinates to the camera; it must be rejected up front.
        let camera = test_camera();
        let mut config = small_config();
        config.height = 1;
        let scene = Arc::new(Scene::new());

        assert_eq!(
            render(&camera, scene, &config).err(),
            Some(RenderError::DegenerateImage {
                width: 16,
                height: 1
            })
        );
    }

    #[test]
    fn test_render_reports_worker_panics() {
        // A scene source that panics kills the workers mid-queue, leaving
        // slots unwritten; render must surface that instead of returning a
        // partially black image.
        struct ExplodingScene;

        impl SceneSource for ExplodingScene {
            fn spheres(&self) -> &[(Sphere, Material)] {
                panic!("scene access failed");
            }
            fn planes(&self) -> &[(crate::Plane, Material)] {
                &[]
            }
            fn cuboids(&self) -> &[(crate::Cuboid, Material)] {
                &[]
            }
        }

        let camera = test_camera();
        let config = small_config();
        let scene: Arc<dyn SceneSource> = Arc::new(ExplodingScene);

        let result = render(&camera, scene, &config);
        assert!(matches!(result, Err(RenderError::WorkerPanicked { .. })));
    }

    #[test]
    fn test_render_is_deterministic_for_a_seed() {
        let camera = test_camera();
        let config = small_config();

        let mut scene = Scene::new();
        scene.add_sphere(
            Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5),
            Material::Diffuse {
                albedo: Color::new(1.0, 0.0, 0.0),
            },
        );
        let scene: Arc<dyn SceneSource> = Arc::new(scene);

        let first = render(&camera, Arc::clone(&scene), &config).expect("config is valid");
        let second = render(&camera, scene, &config).expect("config is valid");
        assert_eq!(first.pixels, second.pixels);
    }

    #[test]
    fn test_top_row_is_sky_blue_side_up() {
        // Forward camera, empty scene: the top image row must be closer to
        // the zenith color than the bottom row.
        let camera = test_camera();
        let config = small_config();
        let scene = Arc::new(Scene::new());

        let image = render(&camera, scene, &config).expect("config is valid");
        let top = image.get(8, 0);
        let bottom = image.get(8, 8);
        assert!(top.x < bottom.x);
    }
}
