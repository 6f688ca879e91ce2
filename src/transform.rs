//! Keyed reversible pixel transform
//!
//! Encoding XORs every channel value with the key and then moves whole RGB
//! triples to new positions with the key's [`Permutation`]. Decoding undoes
//! the permutation first and the XOR second. Key 0 leaves the image untouched.

use crate::{
    error::Result,
    key::Key,
    permutation::Permutation,
    utils::ensure_valid,
};
use image::{Rgb, RgbImage};

/// Widened RGB triple; values are clipped back to 8 bits at the end
type WidePixel = [u16; 3];

/// Encode an image with `key` (XOR mask, then pixel permutation)
pub fn encode(image: &RgbImage, key: Key) -> Result<RgbImage> {
    encode_with(image, key, true)
}

/// Decode an image previously encoded with `key`.
///
/// A wrong key is not an error: the output is simply scrambled garbage.
pub fn decode(image: &RgbImage, key: Key) -> Result<RgbImage> {
    decode_with(image, key, true)
}

/// Encode, optionally skipping the permutation stage
pub fn encode_with(image: &RgbImage, key: Key, scramble_pixels: bool) -> Result<RgbImage> {
    ensure_valid(image)?;
    let mut pixels = widen(image);

    xor_pixels(&mut pixels, key);

    if scramble_pixels && !key.is_zero() {
        let permutation = Permutation::generate(key, pixels.len());
        pixels = permutation.gather(&pixels);
    }

    Ok(narrow(image, &pixels))
}

/// Decode, optionally skipping the permutation stage
///
/// `scramble_pixels` must match the value used when encoding.
pub fn decode_with(image: &RgbImage, key: Key, scramble_pixels: bool) -> Result<RgbImage> {
    ensure_valid(image)?;
    let mut pixels = widen(image);

    if scramble_pixels && !key.is_zero() {
        let inverse = Permutation::generate(key, pixels.len()).inverse();
        pixels = inverse.gather(&pixels);
    }

    xor_pixels(&mut pixels, key);

    Ok(narrow(image, &pixels))
}

fn widen(image: &RgbImage) -> Vec<WidePixel> {
    image
        .pixels()
        .map(|p| [u16::from(p[0]), u16::from(p[1]), u16::from(p[2])])
        .collect()
}

fn xor_pixels(pixels: &mut [WidePixel], key: Key) {
    if key.is_zero() {
        return;
    }
    let mask = u16::from(key.value());
    for pixel in pixels.iter_mut() {
        for value in pixel.iter_mut() {
            *value ^= mask;
        }
    }
}

/// Clip to [0, 255] and rebuild a buffer shaped like `like`
fn narrow(like: &RgbImage, pixels: &[WidePixel]) -> RgbImage {
    let width = like.width();
    RgbImage::from_fn(width, like.height(), |x, y| {
        let [r, g, b] = pixels[y as usize * width as usize + x as usize];
        Rgb([clip(r), clip(g), clip(b)])
    })
}

fn clip(value: u16) -> u8 {
    value.min(255) as u8
}
