//! Utility functions for building, validating and loading RGB buffers

use crate::error::{Result, ScrambleError};
use image::RgbImage;
use std::path::Path;

/// Number of channels in every buffer handled by this crate (R, G, B)
pub const CHANNELS: usize = 3;

/// Reject buffers the engine cannot work on.
///
/// `RgbImage` fixes the channel count at three, so only the dimensions need
/// checking here.
pub fn ensure_valid(image: &RgbImage) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ScrambleError::MalformedBuffer(format!(
            "Image must have non-zero dimensions, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

/// Build an RGB buffer from raw row-major bytes supplied by a caller
pub fn rgb_from_raw(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<RgbImage> {
    if channels != CHANNELS {
        return Err(ScrambleError::MalformedBuffer(format!(
            "Expected {} channels, got {}",
            CHANNELS, channels
        )));
    }
    if width == 0 || height == 0 {
        return Err(ScrambleError::MalformedBuffer(format!(
            "Image must have non-zero dimensions, got {}x{}",
            width, height
        )));
    }

    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            ScrambleError::MalformedBuffer(format!("{}x{} image is too large", width, height))
        })?;
    if data.len() != expected {
        return Err(ScrambleError::MalformedBuffer(format!(
            "Expected {} bytes for {}x{}x{}, got {}",
            expected,
            width,
            height,
            CHANNELS,
            data.len()
        )));
    }

    RgbImage::from_raw(width, height, data).ok_or_else(|| {
        ScrambleError::MalformedBuffer("Buffer does not match image dimensions".to_string())
    })
}

/// Load any image the `image` crate can decode and convert it to RGB
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let rgb = image::open(path)?.to_rgb8();
    ensure_valid(&rgb)?;
    Ok(rgb)
}

/// Save an RGB buffer; the format is chosen from the file extension
pub fn save_rgb<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    image.save(path)?;
    Ok(())
}

/// Short human-readable summary, e.g. `"640 x 480 pixels, 3 channels"`
pub fn describe(image: &RgbImage) -> String {
    format!(
        "{} x {} pixels, {} channels",
        image.width(),
        image.height(),
        CHANNELS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_raw() {
        let img = rgb_from_raw(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(1, 0).0, [4, 5, 6]);
    }

    #[test]
    fn test_rgb_from_raw_rejects_malformed() {
        let malformed = [
            rgb_from_raw(1, 1, 4, vec![0; 4]),
            rgb_from_raw(0, 1, 3, vec![]),
            rgb_from_raw(1, 0, 3, vec![]),
            rgb_from_raw(2, 2, 3, vec![0; 11]),
            rgb_from_raw(2, 2, 3, vec![0; 13]),
        ];
        for result in malformed {
            assert!(matches!(result, Err(ScrambleError::MalformedBuffer(_))));
        }
    }

    #[test]
    fn test_ensure_valid() {
        assert!(ensure_valid(&RgbImage::new(1, 1)).is_ok());
        assert!(ensure_valid(&RgbImage::new(0, 5)).is_err());
        assert!(ensure_valid(&RgbImage::new(5, 0)).is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&RgbImage::new(640, 480)), "640 x 480 pixels, 3 channels");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_rgb("definitely/not/here.png");
        assert!(matches!(result, Err(ScrambleError::ImageError(_))));
    }
}
