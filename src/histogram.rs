//! Per-channel intensity histograms

use crate::{error::Result, utils::ensure_valid};
use image::RgbImage;
use std::fmt;

/// Number of intensity bins per channel
pub const BINS: usize = 256;

/// Colour channel of an RGB buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Channels in buffer order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of the channel inside a pixel
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }
}

/// Frequency tables for the red, green and blue channels of one image.
///
/// `red[i]` is the number of pixels whose red value is exactly `i`; each table
/// sums to the pixel count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistograms {
    pub red: [u64; BINS],
    pub green: [u64; BINS],
    pub blue: [u64; BINS],
    pixel_count: u64,
}

impl ChannelHistograms {
    fn empty() -> Self {
        Self {
            red: [0; BINS],
            green: [0; BINS],
            blue: [0; BINS],
            pixel_count: 0,
        }
    }

    pub fn channel(&self, channel: Channel) -> &[u64; BINS] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Number of pixels counted (height x width)
    pub fn pixel_count(&self) -> u64 {
        self.pixel_count
    }

    /// Largest bin over all three channels, used to scale a plot's y-axis
    pub fn max_frequency(&self) -> u64 {
        Channel::ALL
            .iter()
            .flat_map(|&c| self.channel(c).iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// True when any bin of any channel differs
    pub fn differs_from(&self, other: &ChannelHistograms) -> bool {
        self != other
    }
}

impl fmt::Display for ChannelHistograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pixels", self.pixel_count)?;
        for channel in Channel::ALL {
            let bins = self.channel(channel);
            let occupied = bins.iter().filter(|&&n| n > 0).count();
            let peak = bins
                .iter()
                .enumerate()
                .max_by_key(|&(i, &n)| (n, std::cmp::Reverse(i)))
                .map(|(i, _)| i)
                .unwrap_or(0);
            write!(
                f,
                "; {}: {} levels used, peak at {}",
                channel.label(),
                occupied,
                peak
            )?;
        }
        Ok(())
    }
}

/// Count channel intensities over every pixel of `image`
pub fn compute_histograms(image: &RgbImage) -> Result<ChannelHistograms> {
    ensure_valid(image)?;
    let mut hist = ChannelHistograms::empty();

    for pixel in image.pixels() {
        let [r, g, b] = pixel.0;
        hist.red[r as usize] += 1;
        hist.green[g as usize] += 1;
        hist.blue[b as usize] += 1;
        hist.pixel_count += 1;
    }

    Ok(hist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrambleError;
    use image::Rgb;

    #[test]
    fn test_single_pixel() {
        let img = RgbImage::from_pixel(1, 1, Rgb([10, 20, 30]));
        let hist = compute_histograms(&img).unwrap();

        assert_eq!(hist.pixel_count(), 1);
        for (channel, bin) in [(Channel::Red, 10), (Channel::Green, 20), (Channel::Blue, 30)] {
            let bins = hist.channel(channel);
            assert_eq!(bins[bin], 1);
            assert_eq!(bins.iter().sum::<u64>(), 1);
        }
    }

    #[test]
    fn test_conservation() {
        let img = RgbImage::from_fn(13, 5, |x, y| {
            Rgb([(x * 19) as u8, (y * 41) as u8, (x * y) as u8])
        });
        let hist = compute_histograms(&img).unwrap();

        for channel in Channel::ALL {
            assert_eq!(hist.channel(channel).iter().sum::<u64>(), 65);
        }
    }

    #[test]
    fn test_max_frequency() {
        let mut img = RgbImage::from_pixel(4, 1, Rgb([0, 1, 2]));
        img.put_pixel(3, 0, Rgb([9, 9, 9]));
        let hist = compute_histograms(&img).unwrap();
        assert_eq!(hist.max_frequency(), 3);
    }

    #[test]
    fn test_differs_from() {
        let a = compute_histograms(&RgbImage::from_pixel(2, 2, Rgb([1, 2, 3]))).unwrap();
        let b = compute_histograms(&RgbImage::from_pixel(2, 2, Rgb([1, 2, 4]))).unwrap();
        assert!(a.differs_from(&b));
        assert!(!a.differs_from(&a.clone()));
    }

    #[test]
    fn test_display_summary() {
        let hist = compute_histograms(&RgbImage::from_pixel(2, 1, Rgb([5, 6, 7]))).unwrap();
        assert_eq!(
            hist.to_string(),
            "2 pixels; Red: 1 levels used, peak at 5; Green: 1 levels used, peak at 6; \
             Blue: 1 levels used, peak at 7"
        );
    }

    #[test]
    fn test_rejects_empty_image() {
        assert!(matches!(
            compute_histograms(&RgbImage::new(0, 0)),
            Err(ScrambleError::MalformedBuffer(_))
        ));
    }

    #[test]
    fn test_channel_order() {
        let indices: Vec<usize> = Channel::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(Channel::Green.label(), "Green");
    }
}
