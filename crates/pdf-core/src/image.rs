//! Image embedding for PDF documents
//!
//! JPEG data passes through untouched with a DCTDecode filter; PNG data is
//! decoded, alpha-blended over white, and re-compressed with FlateDecode.

use crate::{PdfError, Result};
use image::{DynamicImage, ImageDecoder, ImageReader};
use lopdf::{Dictionary, Stream};
use std::io::Cursor;

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

/// Detected image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

/// Image scaling mode for insert_image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScaleMode {
    /// Stretch to exact target dimensions
    #[default]
    Stretch,
    /// Fit within the target box, preserving aspect ratio
    FitBox,
}

/// Calculate display dimensions for an image
///
/// # Arguments
/// * `original_width` - Image width in pixels
/// * `original_height` - Image height in pixels
/// * `target_width` - Target width in points
/// * `target_height` - Target height in points
/// * `mode` - Scaling mode
///
/// # Returns
/// (width, height) to draw at, in points
pub fn calculate_scaled_dimensions(
    original_width: u32,
    original_height: u32,
    target_width: f64,
    target_height: f64,
    mode: ImageScaleMode,
) -> (f64, f64) {
    match mode {
        ImageScaleMode::Stretch => (target_width, target_height),
        ImageScaleMode::FitBox => {
            let width_ratio = target_width / original_width as f64;
            let height_ratio = target_height / original_height as f64;
            let scale = width_ratio.min(height_ratio);
            (
                original_width as f64 * scale,
                original_height as f64 * scale,
            )
        }
    }
}

/// Detect image format from magic bytes
pub fn detect_format(data: &[u8]) -> Result<ImageFormat> {
    if data.len() < 8 {
        return Err(PdfError::ImageError("Image data too short".to_string()));
    }

    // JPEG starts with FF D8 FF
    if data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF {
        return Ok(ImageFormat::Jpeg);
    }

    // PNG signature
    if data[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
        return Ok(ImageFormat::Png);
    }

    Err(PdfError::ImageError("Unknown image format".to_string()))
}

/// JPEG frame header info
#[derive(Debug, Clone, Copy)]
struct JpegInfo {
    width: u32,
    height: u32,
    num_components: u8,
}

/// Scan a JPEG stream for the SOF marker and read its frame header
///
/// SOF segment layout after the 2-byte marker: length (2), precision (1),
/// height (2), width (2), component count (1).
fn get_jpeg_info(data: &[u8]) -> Result<JpegInfo> {
    let mut i = 2;
    while i + 10 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];

        // SOF0-SOF15, excluding DHT (C4), JPG (C8) and DAC (CC)
        if (0xC0..=0xCF).contains(&marker) && marker != 0xC4 && marker != 0xC8 && marker != 0xCC {
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            let num_components = data[i + 9];
            return Ok(JpegInfo {
                width,
                height,
                num_components,
            });
        }

        if i + 4 < data.len() {
            let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
            if length < 2 {
                break;
            }
            i += 2 + length;
        } else {
            break;
        }
    }

    Err(PdfError::ImageError(
        "Could not parse JPEG frame header".to_string(),
    ))
}

/// Image XObject ready for PDF embedding
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Color space ("DeviceRGB", "DeviceGray")
    pub color_space: String,
    /// Bits per component
    pub bits_per_component: u8,
    /// PDF filter ("DCTDecode" for JPEG, "FlateDecode" for PNG)
    pub filter: String,
    /// Compressed image data
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Build an XObject from image file bytes, detecting the format
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        match detect_format(data)? {
            ImageFormat::Jpeg => Self::from_jpeg(data),
            ImageFormat::Png => Self::from_png(data),
        }
    }

    /// Build an XObject from JPEG data
    ///
    /// JPEG streams embed directly under a DCTDecode filter, no re-encoding.
    pub fn from_jpeg(data: &[u8]) -> Result<Self> {
        let info = get_jpeg_info(data)?;

        let color_space = if info.num_components == 1 {
            "DeviceGray".to_string()
        } else {
            "DeviceRGB".to_string()
        };

        Ok(Self {
            width: info.width,
            height: info.height,
            color_space,
            bits_per_component: 8,
            filter: "DCTDecode".to_string(),
            data: data.to_vec(),
        })
    }

    /// Build an XObject from PNG data
    ///
    /// PNG is decoded to raw samples and re-compressed with FlateDecode.
    /// Alpha channels are blended against a white background, since the
    /// target pages have a white background and XObjects carry no alpha.
    pub fn from_png(data: &[u8]) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
        let decoder = reader.into_decoder()?;

        let (width, height) = decoder.dimensions();
        let color_type = decoder.color_type();
        let decoded = DynamicImage::from_decoder(decoder)?;

        let (raw_data, color_space) = match color_type {
            image::ColorType::L8 | image::ColorType::L16 => {
                let gray = decoded.to_luma8();
                (gray.into_raw(), "DeviceGray".to_string())
            }
            image::ColorType::La8 | image::ColorType::La16 => {
                let la = decoded.to_luma_alpha8();
                let mut samples = Vec::with_capacity((width * height) as usize);
                for pixel in la.pixels() {
                    samples.push(blend_white(pixel[0], pixel[1]));
                }
                (samples, "DeviceGray".to_string())
            }
            image::ColorType::Rgba8 | image::ColorType::Rgba16 => {
                let rgba = decoded.to_rgba8();
                let mut samples = Vec::with_capacity((width * height * 3) as usize);
                for pixel in rgba.pixels() {
                    samples.push(blend_white(pixel[0], pixel[3]));
                    samples.push(blend_white(pixel[1], pixel[3]));
                    samples.push(blend_white(pixel[2], pixel[3]));
                }
                (samples, "DeviceRGB".to_string())
            }
            _ => {
                let rgb = decoded.to_rgb8();
                (rgb.into_raw(), "DeviceRGB".to_string())
            }
        };

        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        std::io::Write::write_all(&mut encoder, &raw_data)?;
        let compressed = encoder.finish()?;

        Ok(Self {
            width,
            height,
            color_space,
            bits_per_component: 8,
            filter: "FlateDecode".to_string(),
            data: compressed,
        })
    }

    /// Convert to a lopdf Stream object
    pub fn to_pdf_stream(&self) -> Stream {
        let mut dict = Dictionary::new();
        dict.set("Type", lopdf::Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", lopdf::Object::Name(b"Image".to_vec()));
        dict.set("Width", self.width as i64);
        dict.set("Height", self.height as i64);
        dict.set(
            "ColorSpace",
            lopdf::Object::Name(self.color_space.as_bytes().to_vec()),
        );
        dict.set("BitsPerComponent", self.bits_per_component as i64);
        dict.set(
            "Filter",
            lopdf::Object::Name(self.filter.as_bytes().to_vec()),
        );
        dict.set("Length", self.data.len() as i64);

        Stream::new(dict, self.data.clone())
    }
}

/// Composite one sample over white by its alpha
fn blend_white(sample: u8, alpha: u8) -> u8 {
    let a = alpha as f32 / 255.0;
    (sample as f32 * a + 255.0 * (1.0 - a)) as u8
}

/// Generate operators to draw an image XObject
///
/// # Arguments
/// * `image_name` - Image resource name (e.g., "Im1")
/// * `x` - X coordinate of the bottom-left corner, in points
/// * `y` - Y coordinate in points (from bottom, PDF coordinates)
/// * `width`, `height` - Display size in points
pub fn generate_image_operators(
    image_name: &str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Vec<u8> {
    // q / cm / Do / Q: the unit image square is mapped to the target box
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{image_name} Do\nQ\n").into_bytes()
}
