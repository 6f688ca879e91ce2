//! Pixel Scrambler Library
//!
//! A keyed, reversible pixel transform for RGB images together with the
//! per-channel histograms used to compare images before and after it:
//! - XOR masking of every channel value with a one-byte key
//! - Seeded permutation of pixel positions (whole RGB triples move together)
//! - Exact inverse: `decode(encode(img, k), k) == img`
//! - Red/green/blue intensity histograms
//!
//! This is a teaching-grade scrambler, not a cipher.

pub mod error;
pub mod histogram;
pub mod key;
pub mod permutation;
pub mod transform;
pub mod utils;

pub use error::{Result, ScrambleError};
pub use histogram::{compute_histograms, Channel, ChannelHistograms};
pub use key::Key;
pub use permutation::Permutation;
pub use transform::{decode, encode};

// Re-export common types
pub use image::{ImageBuffer, Rgb, RgbImage};

use std::fmt;

/// Configuration for scrambling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleConfig {
    /// Key used for both the XOR mask and the permutation seed
    pub key: Key,
    /// Whether to permute pixel positions after XOR masking
    pub scramble_pixels: bool,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            key: Key::ZERO,
            scramble_pixels: true,
        }
    }
}

impl ScrambleConfig {
    /// Build a configuration from user-entered key text
    pub fn from_key_str(text: &str) -> Result<Self> {
        Ok(Self {
            key: text.parse()?,
            ..Default::default()
        })
    }
}

/// An encoded image together with the key that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub image: RgbImage,
    pub key: Key,
    pub scramble_pixels: bool,
}

/// Outcome of decoding relative to the key the image was encoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecryptionStatus {
    /// Decoded with the encoding key; the original image is restored
    Exact,
    /// Decoded with a different key; the output is not the original
    KeyMismatch { encoded_with: Key, used: Key },
}

impl fmt::Display for DecryptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecryptionStatus::Exact => write!(f, "Perfect decryption"),
            DecryptionStatus::KeyMismatch { encoded_with, used } => write!(
                f,
                "Warning: different key used ({}, encrypted with {})",
                used, encoded_with
            ),
        }
    }
}

/// A decoded image and how it relates to the encoding key
#[derive(Debug, Clone)]
pub struct Decryption {
    pub image: RgbImage,
    pub status: DecryptionStatus,
}

impl Decryption {
    pub fn is_exact(&self) -> bool {
        self.status == DecryptionStatus::Exact
    }
}

/// Main struct for scrambling operations
pub struct Scrambler {
    config: ScrambleConfig,
}

impl Scrambler {
    /// Create a new Scrambler with the given configuration
    pub fn new(config: ScrambleConfig) -> Self {
        Self { config }
    }

    /// Create a Scrambler from user-entered key text
    pub fn from_key_str(text: &str) -> Result<Self> {
        Ok(Self::new(ScrambleConfig::from_key_str(text)?))
    }

    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    pub fn key(&self) -> Key {
        self.config.key
    }

    /// Encrypt an image, remembering the key it was encrypted with
    pub fn encrypt(&self, image: &RgbImage) -> Result<EncodedImage> {
        let encoded =
            transform::encode_with(image, self.config.key, self.config.scramble_pixels)?;
        Ok(EncodedImage {
            image: encoded,
            key: self.config.key,
            scramble_pixels: self.config.scramble_pixels,
        })
    }

    /// Decrypt an encoded image with this scrambler's key.
    ///
    /// Never fails because of a key mismatch; the mismatch is reported in
    /// [`Decryption::status`] and the image is whatever that key produces.
    pub fn decrypt(&self, encoded: &EncodedImage) -> Result<Decryption> {
        let image =
            transform::decode_with(&encoded.image, self.config.key, encoded.scramble_pixels)?;
        let status = if encoded.key == self.config.key {
            DecryptionStatus::Exact
        } else {
            DecryptionStatus::KeyMismatch {
                encoded_with: encoded.key,
                used: self.config.key,
            }
        };
        Ok(Decryption { image, status })
    }

    /// Compute RGB histograms of any image (original, encrypted or decrypted)
    pub fn histograms(&self, image: &RgbImage) -> Result<ChannelHistograms> {
        compute_histograms(image)
    }
}
