use std::path::Path;

use image::imageops::FilterType;
use image::{GrayImage, ImageFormat, Luma, RgbImage};
use ndarray::Array2;
use tracing::info;

use crate::error::{LeafscanError, Result};

/// Dimensions after scaling `(width, height)` so the image fits a
/// `size` x `size` box, keeping the aspect ratio. Never returns zero.
pub fn fit_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    let scale = (size as f64 / width as f64).min(size as f64 / height as f64);
    let w = ((width as f64 * scale) as u32).max(1);
    let h = ((height as f64 * scale) as u32).max(1);
    (w, h)
}

/// Load any supported image as 8-bit RGB.
///
/// With `process_size`, the image is resampled to fit that box first
/// (smaller images are scaled up).
pub fn load_rgb(path: &Path, process_size: Option<u32>) -> Result<RgbImage> {
    let img = image::open(path)?.to_rgb8();
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(LeafscanError::InvalidDimensions {
            width: w as usize,
            height: h as usize,
        });
    }

    let img = match process_size {
        Some(size) => {
            let (nw, nh) = fit_dimensions(w, h, size.max(1));
            if (nw, nh) == (w, h) {
                img
            } else {
                image::imageops::resize(&img, nw, nh, FilterType::Triangle)
            }
        }
        None => img,
    };

    let (w, h) = img.dimensions();
    info!(width = w, height = h, path = %path.display(), "Loaded image");
    Ok(img)
}

/// Convert a mask to an 8-bit grayscale image: foreground white, rest black.
pub fn mask_to_image(mask: &Array2<bool>) -> GrayImage {
    let (h, w) = mask.dim();
    GrayImage::from_fn(w as u32, h as u32, |col, row| {
        if mask[[row as usize, col as usize]] {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Save a mask as 8-bit grayscale PNG.
pub fn save_mask(mask: &Array2<bool>, path: &Path) -> Result<()> {
    mask_to_image(mask).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
