//! Still PNG input and output.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use palette_reducer::{Raster, RgbaImage};

use crate::error::ImageError;

/// Decode a PNG file into an RGBA image.
pub fn load_png(path: &Path) -> Result<RgbaImage, ImageError> {
    let file = File::open(path)?;
    let image = decode_png(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded PNG"
    );
    Ok(image)
}

/// Load several PNG files, keeping their order.
pub fn load_frames(paths: &[PathBuf]) -> Result<Vec<RgbaImage>, ImageError> {
    paths.iter().map(|path| load_png(path)).collect()
}

/// Decode PNG bytes from any reader.
///
/// Palette and low bit depth images are expanded, 16-bit samples are cut
/// to 8 bits, and gray or RGB layouts gain the missing channels.
pub fn decode_png(reader: impl Read) -> Result<RgbaImage, ImageError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let bytes = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::UnsupportedLayout(info.color_type));
    }

    let rgba = match info.color_type {
        png::ColorType::Rgba => bytes.to_vec(),
        png::ColorType::Rgb => bytes
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 0xFF])
            .collect(),
        png::ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => bytes.iter().flat_map(|&v| [v, v, v, 0xFF]).collect(),
        other => return Err(ImageError::UnsupportedLayout(other)),
    };

    let image = RgbaImage::from_rgba8(info.width as usize, info.height as usize, &rgba)?;
    Ok(image)
}

/// Encode a raster as an 8-bit RGBA PNG.
pub fn encode_png(image: &dyn Raster) -> Result<Vec<u8>, ImageError> {
    let width = image.width();
    let height = image.height();
    let mut data = vec![0u8; width * height * 4];
    if width > 0 {
        for (y, row) in data.chunks_exact_mut(width * 4).enumerate() {
            palette_reducer::raster::row_bytes(image, y, row);
        }
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width as u32, height as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;
    }
    Ok(buf.into_inner())
}

/// Encode a raster and write it to `path`.
pub fn save_png(path: &Path, image: &dyn Raster) -> Result<(), ImageError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}
