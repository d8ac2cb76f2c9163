//! Image output: PPM text and anything the image crate can encode.

use anyhow::{Context, Result};
use lux_renderer::{color_to_rgb8, ImageBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a rendered image as a plain-text PPM ("P3") file.
///
/// Header `P3\n<width> <height>\n255\n`, then one "R G B" triple per
/// pixel, top row first, left to right.
pub fn write_ppm(image: &ImageBuffer, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "P3\n{} {}\n255", image.width, image.height)?;
    for pixel in &image.pixels {
        let [r, g, b] = color_to_rgb8(*pixel);
        writeln!(out, "{} {} {}", r, g, b)?;
    }
    out.flush()?;

    Ok(())
}

/// Save a rendered image through the image crate, with the format chosen
/// from the path's extension (PNG, JPEG, ...).
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .context("image buffer size does not match its dimensions")?;
    rgb.save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;

    Ok(())
}

/// Write the image in the format implied by the path: `.ppm` gets the
/// text writer, everything else goes through the image crate.
pub fn write(image: &ImageBuffer, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ppm") => write_ppm(image, path),
        _ => save_image(image, path),
    }
}
