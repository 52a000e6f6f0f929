//! Image loading and preprocessing
//!
//! Decoding and resizing are delegated to the `image` crate; this module
//! only normalizes pixels into the numeric layout the model expects.

use image::imageops::FilterType;
use ndarray::Array3;
use std::path::Path;

use crate::error::Result;

/// A single preprocessed image, ready for a batch-of-one forward pass.
///
/// Pixels are stored as (height, width, channel) with each channel value
/// normalized to [0, 1].
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub pixels: Array3<f32>,
}

impl ImageInput {
    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Flattened HWC view of the pixel data
    pub fn as_slice(&self) -> &[f32] {
        self.pixels
            .as_slice()
            .expect("pixel array is contiguous by construction")
    }
}

/// Load an image file, resize it to `width` x `height`, and normalize to [0, 1]
pub fn load_image<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<ImageInput> {
    let img = image::open(path.as_ref())?;
    let rgb = img.resize_exact(width, height, FilterType::Triangle).to_rgb8();

    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for pixel in rgb.pixels() {
        data.push(pixel.0[0] as f32 / 255.0);
        data.push(pixel.0[1] as f32 / 255.0);
        data.push(pixel.0[2] as f32 / 255.0);
    }

    let pixels = Array3::from_shape_vec((height as usize, width as usize, 3), data)
        .expect("pixel buffer matches image dimensions");

    Ok(ImageInput { pixels })
}
