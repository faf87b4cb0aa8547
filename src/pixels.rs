//! Pixel sampling for glyph encoding.
//!
//! The encoder only ever sees a [`PixelSource`]: a bounded single-channel
//! luminance grid. [`ChannelBuffer`] is the concrete source built from a
//! decoded image by picking one colour channel.

use image::DynamicImage;

use crate::error::EncodeError;

/// Samples strictly brighter than this become a set bit.
pub const THRESHOLD: u8 = 127;

/// Threshold a luminance sample into a single bit.
pub fn threshold(luma: u8) -> bool {
    luma > THRESHOLD
}

/// Read-only provider of luminance samples over `[0, width) x [0, height)`.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Raw luminance at `(x, y)`. Callers must stay within bounds.
    fn luma(&self, x: u32, y: u32) -> u8;

    /// Bounds-checked, thresholded sample.
    fn sample(&self, x: u32, y: u32) -> Result<bool, EncodeError> {
        if x >= self.width() || y >= self.height() {
            return Err(EncodeError::SampleOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(threshold(self.luma(x, y)))
    }
}

/// Colour channel used as the monochrome source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    Red,
    #[default]
    Green,
    Blue,
}

impl Channel {
    fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Short name as accepted on the command line and in the config file.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
        }
    }
}

/// One colour channel of an image, row-major.
#[derive(Debug, Clone)]
pub struct ChannelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ChannelBuffer {
    /// Wrap an existing row-major luminance buffer.
    ///
    /// Returns `None` when `data` does not hold exactly `width * height` samples.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Extract `channel` from a decoded image.
    ///
    /// The image is converted to 8-bit RGB first, so palette, grayscale and
    /// 16-bit inputs all work; for grayscale images every channel is equal.
    pub fn from_image(image: &DynamicImage, channel: Channel) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let offset = channel.offset();

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for pixel in rgb.as_raw().chunks_exact(3) {
            data.push(pixel[offset]);
        }

        Self {
            width,
            height,
            data,
        }
    }
}

impl PixelSource for ChannelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn luma(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_threshold_boundary() {
        assert!(!threshold(0));
        assert!(!threshold(127));
        assert!(threshold(128));
        assert!(threshold(255));
    }

    #[test]
    fn test_channel_buffer_rejects_wrong_length() {
        assert!(ChannelBuffer::new(2, 2, vec![0; 3]).is_none());
        assert!(ChannelBuffer::new(2, 2, vec![0; 4]).is_some());
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let buffer = ChannelBuffer::new(2, 1, vec![255, 0]).unwrap();
        assert_eq!(buffer.sample(0, 0), Ok(true));
        assert_eq!(buffer.sample(1, 0), Ok(false));
        assert_eq!(
            buffer.sample(2, 0),
            Err(EncodeError::SampleOutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 1
            })
        );
        assert!(buffer.sample(0, 1).is_err());
    }

    #[test]
    fn test_from_image_selects_channel() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 200, 90]));
        let img = DynamicImage::ImageRgb8(img);

        let red = ChannelBuffer::from_image(&img, Channel::Red);
        assert_eq!((red.luma(0, 0), red.luma(1, 0)), (255, 0));

        let green = ChannelBuffer::from_image(&img, Channel::Green);
        assert_eq!((green.luma(0, 0), green.luma(1, 0)), (0, 200));

        let blue = ChannelBuffer::from_image(&img, Channel::Blue);
        assert_eq!((blue.luma(0, 0), blue.luma(1, 0)), (0, 90));
        assert_eq!(blue.width(), 2);
        assert_eq!(blue.height(), 1);
    }
}
