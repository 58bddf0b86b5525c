use std::path::Path;
use image::ImageFormat;
use crate::utils::CodecError;

/// Detects the format of `bytes`, falling back to the extension of `path`.
///
/// Content sniffing wins so a mislabeled file is still re-encoded in its real format.
pub fn detect_format(bytes: &[u8], path: &Path) -> Result<ImageFormat, CodecError> {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map_err(|_| CodecError::UnknownFormat)
}

/// Whether the codec can both read and write `format`.
pub fn is_supported(format: ImageFormat) -> bool {
    format.reading_enabled() && format.writing_enabled()
}
