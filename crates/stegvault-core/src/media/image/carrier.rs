use std::io::Write;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::io::Reader as ImageReader;
use image::{ColorType, DynamicImage, ImageEncoder};
use log::{debug, error};

use crate::error::StegVaultError;
use crate::media::image::SampleOrder;
use crate::media::{write_atomically, CodecOptions, Persist};
use crate::result::Result;

/// channel layout of the 8 bit samples of a [`CarrierImage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ChannelLayout {
    pub fn channels(&self) -> usize {
        match self {
            ChannelLayout::Luma => 1,
            ChannelLayout::LumaAlpha => 2,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// if true, the last channel of every pixel is alpha
    pub fn has_alpha(&self) -> bool {
        matches!(self, ChannelLayout::LumaAlpha | ChannelLayout::Rgba)
    }

    fn color_type(&self) -> ColorType {
        match self {
            ChannelLayout::Luma => ColorType::L8,
            ChannelLayout::LumaAlpha => ColorType::La8,
            ChannelLayout::Rgb => ColorType::Rgb8,
            ChannelLayout::Rgba => ColorType::Rgba8,
        }
    }
}

/// A decoded raster image as flat row major sequence of 8 bit samples.
///
/// The number of samples is fixed once loaded, steganography only ever
/// rewrites single bits of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierImage {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    samples: Vec<u8>,
}

impl CarrierImage {
    /// loads an image, the format is guessed from the content not from the file extension
    pub fn from_file(file: &Path) -> Result<Self> {
        let img = ImageReader::open(file)
            .map_err(|source| {
                error!("Error opening image {file:?}: {source}");
                StegVaultError::ReadError { source }
            })?
            .with_guessed_format()
            .map_err(|source| StegVaultError::ReadError { source })?
            .decode()
            .map_err(|e| {
                error!("Error decoding image {file:?}: {e}");
                StegVaultError::InvalidImageMedia
            })?;

        let carrier = Self::from_image(img);
        debug!(
            "loaded carrier {file:?} {}x{} {:?}",
            carrier.width, carrier.height, carrier.layout
        );

        Ok(carrier)
    }

    /// 16 bit and float images are reduced to 8 bit samples, the channel layout stays
    pub fn from_image(img: DynamicImage) -> Self {
        let (layout, (width, height), samples) = match img {
            DynamicImage::ImageLuma8(b) => (ChannelLayout::Luma, b.dimensions(), b.into_raw()),
            DynamicImage::ImageLumaA8(b) => {
                (ChannelLayout::LumaAlpha, b.dimensions(), b.into_raw())
            }
            DynamicImage::ImageRgb8(b) => (ChannelLayout::Rgb, b.dimensions(), b.into_raw()),
            DynamicImage::ImageRgba8(b) => (ChannelLayout::Rgba, b.dimensions(), b.into_raw()),
            other => {
                let color = other.color();
                match (color.has_color(), color.has_alpha()) {
                    (false, false) => {
                        let b = other.to_luma8();
                        (ChannelLayout::Luma, b.dimensions(), b.into_raw())
                    }
                    (false, true) => {
                        let b = other.to_luma_alpha8();
                        (ChannelLayout::LumaAlpha, b.dimensions(), b.into_raw())
                    }
                    (true, false) => {
                        let b = other.to_rgb8();
                        (ChannelLayout::Rgb, b.dimensions(), b.into_raw())
                    }
                    (true, true) => {
                        let b = other.to_rgba8();
                        (ChannelLayout::Rgba, b.dimensions(), b.into_raw())
                    }
                }
            }
        };

        Self {
            width,
            height,
            layout,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// number of whole bytes that can be hidden with the given options
    pub fn capacity(&self, opts: &CodecOptions) -> usize {
        SampleOrder::for_carrier(self, opts).len() / 8
    }

    /// encodes the image as PNG, the only format that keeps every sample bit intact
    pub fn save_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        PngEncoder::new(writer)
            .write_image(
                &self.samples,
                self.width,
                self.height,
                self.layout.color_type(),
            )
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegVaultError::ImageEncodingError
            })
    }
}

impl Persist for CarrierImage {
    fn save_as(&self, file: &Path) -> Result<()> {
        write_atomically(file, |w| self.save_to_writer(w))
    }
}
