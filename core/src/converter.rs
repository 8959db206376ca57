use std::path::Path;

use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::io::{read_file, write_file};
use crate::report::FileResult;

/// Decode image bytes, guessing the format from the content.
pub fn decode_image(path: &Path, data: &[u8]) -> Result<DynamicImage, ConvertError> {
    image::load_from_memory(data).map_err(|e| ConvertError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Normalize to 8-bit RGBA, which is what the WebP encoder takes.
///
/// RGBA8 input is moved through as-is. Formats without alpha gain a fully
/// opaque channel.
pub fn ensure_alpha(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => {
            if !other.color().has_alpha() {
                log::debug!("Adding opaque alpha channel to {:?} image", other.color());
            }
            other.to_rgba8()
        }
    }
}

/// Encode RGBA pixels as WebP.
pub fn encode_webp(
    path: &Path,
    rgba: &RgbaImage,
    quality: u8,
    lossless: bool,
) -> Result<Vec<u8>, ConvertError> {
    let (width, height) = rgba.dimensions();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), width, height);

    let encoded = encoder
        .encode_simple(lossless, quality as f32)
        .map_err(|e| ConvertError::Encode {
            path: path.to_path_buf(),
            reason: format!("{:?}", e),
        })?;

    Ok(encoded.to_vec())
}

/// Convert one PNG on disk into a WebP on disk.
///
/// The source is read fully and its handle released before decoding; the
/// destination is written in one go, replacing any previous file.
pub fn convert_file(
    source: &Path,
    destination: &Path,
    config: &ConvertConfig,
) -> Result<FileResult, ConvertError> {
    let data = read_file(source)?;
    let original_size = data.len() as u64;

    let img = decode_image(source, &data)?;
    drop(data);

    let (width, height) = img.dimensions();
    let had_alpha = img.color().has_alpha();
    log::debug!(
        "Decoded {}: {}x{} {:?}",
        source.display(),
        width,
        height,
        img.color()
    );

    let rgba = ensure_alpha(img);
    let encoded = encode_webp(source, &rgba, config.quality, config.lossless)?;
    write_file(destination, &encoded)?;

    log::debug!(
        "Encoded {} ({} bytes, {})",
        destination.display(),
        encoded.len(),
        if config.lossless { "lossless".to_string() } else { format!("quality={}", config.quality) }
    );

    Ok(FileResult {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        original_size,
        converted_size: encoded.len() as u64,
        had_alpha,
        error: None,
    })
}
