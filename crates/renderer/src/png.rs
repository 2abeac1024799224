//! PNG encoding for grayscale image data.
//!
//! Emits color type 0 (8-bit grayscale, one byte per pixel): signature,
//! IHDR, a single IDAT holding the zlib-deflated scanlines, IEND. Each
//! scanline is prefixed with filter byte 0 (no filter).

use std::io::Write;

use crate::error::RenderError;

/// Create a grayscale PNG (color type 0) from one-byte-per-pixel data.
///
/// # Arguments
/// - `pixels`: grayscale samples, row-major, top row first
/// - `width`: image width in pixels
/// - `height`: image height in pixels
pub fn create_png_gray(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, RenderError> {
    let needed = width * height;
    if pixels.len() < needed {
        return Err(RenderError::BufferTooSmall {
            got: pixels.len(),
            width,
            height,
            needed,
        });
    }

    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(0); // color type 0 = grayscale
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_idat_gray(pixels, width, height)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Deflate grayscale image data for the IDAT chunk.
fn deflate_idat_gray(
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, std::io::Error> {
    // Each scanline is a filter byte (0 = no filter) plus width samples
    let mut uncompressed = Vec::with_capacity(height * (1 + width));
    for y in 0..height {
        uncompressed.push(0); // filter type: none
        let row_start = y * width;
        uncompressed.extend_from_slice(&pixels[row_start..row_start + width]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

/// Write a PNG chunk: length, type, data, CRC over type + data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
