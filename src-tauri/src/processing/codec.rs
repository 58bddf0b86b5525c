//! Decode → resize → encode, treated by the pipeline as a black box.

use std::io::Cursor;
use std::path::Path;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::core::Dimensions;
use crate::utils::{CodecError, detect_format, is_supported};

/// Largest output buffer the codec will allocate, at four bytes per pixel.
///
/// Allocation failure aborts the process instead of unwinding, so oversized
/// targets have to be refused before any pixels are touched.
pub const MAX_OUTPUT_BYTES: u64 = 512 * 1024 * 1024;

/// Turns encoded image bytes into encoded bytes of a different size.
///
/// Implementations are synchronous and CPU-bound; the executor runs them on the
/// blocking pool.
pub trait ImageCodec: Send + Sync {
    fn resize(&self, bytes: &[u8], source: &Path, target: Dimensions) -> Result<Vec<u8>, CodecError>;
}

/// Codec backed by the `image` crate. Output keeps the input's format.
#[derive(Debug, Clone, Copy)]
pub struct ImageRsCodec {
    filter: FilterType,
}

impl ImageRsCodec {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Default for ImageRsCodec {
    fn default() -> Self {
        Self::new(FilterType::Lanczos3)
    }
}

impl ImageCodec for ImageRsCodec {
    fn resize(&self, bytes: &[u8], source: &Path, target: Dimensions) -> Result<Vec<u8>, CodecError> {
        if !fits_in_memory(target) {
            return Err(CodecError::InvalidDimensions {
                width: target.width,
                height: target.height,
            });
        }

        let format = detect_format(bytes, source)?;
        if !is_supported(format) {
            return Err(CodecError::UnknownFormat);
        }

        let image = image::load_from_memory_with_format(bytes, format)?;
        debug!(
            "Decoded {:?} {}×{} → {}×{}",
            format,
            image.width(),
            image.height(),
            target.width,
            target.height
        );

        let resized = image.resize_exact(target.width, target.height, self.filter);
        encode(resized, format)
    }
}

fn fits_in_memory(target: Dimensions) -> bool {
    let pixels = u64::from(target.width) * u64::from(target.height);
    pixels > 0 && pixels.saturating_mul(4) <= MAX_OUTPUT_BYTES
}

fn encode(image: DynamicImage, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    // The JPEG encoder has no alpha channel.
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        _ => image,
    };

    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, format)
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn encoded(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, format).expect("encode fixture");
        out.into_inner()
    }

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    #[test]
    fn jpeg_is_resized_to_exact_dimensions() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(800, 600, Rgb([200, 30, 30])));
        let bytes = encoded(source, ImageFormat::Jpeg);

        let out = ImageRsCodec::default()
            .resize(&bytes, Path::new("photo.jpg"), dims(200, 100))
            .unwrap();

        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (200, 100));
    }

    #[test]
    fn png_keeps_format_and_alpha() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([0, 0, 255, 128])));
        let bytes = encoded(source, ImageFormat::Png);

        let out = ImageRsCodec::default()
            .resize(&bytes, Path::new("icon.png"), dims(10, 20))
            .unwrap();

        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (10, 20));
        assert!(decoded.color().has_alpha());
    }

    #[test]
    fn upscaling_is_allowed() {
        let source = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let bytes = encoded(source, ImageFormat::Png);

        let out = ImageRsCodec::default()
            .resize(&bytes, Path::new("tiny.png"), dims(64, 32))
            .unwrap();
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 32));
    }

    #[test]
    fn garbage_bytes_fail() {
        let err = ImageRsCodec::default()
            .resize(b"definitely not pixels", Path::new("notes.txt"), dims(10, 10))
            .unwrap_err();
        assert!(matches!(err, CodecError::UnknownFormat));

        let err = ImageRsCodec::default()
            .resize(b"definitely not pixels", Path::new("fake.jpg"), dims(10, 10))
            .unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let err = ImageRsCodec::default()
            .resize(&[], Path::new("a.png"), dims(0, 10))
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidDimensions { width: 0, height: 10 }));
    }

    #[test]
    fn oversized_targets_are_rejected_before_decoding() {
        let source = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let bytes = encoded(source, ImageFormat::Png);

        for (width, height) in [(u32::MAX, u32::MAX), (100_000, 100_000), (1, u32::MAX)] {
            let err = ImageRsCodec::default()
                .resize(&bytes, Path::new("tiny.png"), dims(width, height))
                .unwrap_err();
            assert!(
                matches!(err, CodecError::InvalidDimensions { width: w, height: h } if w == width && h == height),
                "{width}x{height} should be refused"
            );
        }
    }

    #[test]
    fn largest_allowed_target_is_at_the_byte_cap() {
        assert!(fits_in_memory(dims(16_384, 8_192)));
        assert!(!fits_in_memory(dims(16_384, 8_193)));
    }
}
