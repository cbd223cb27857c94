//! Mosaic image I/O: decoding the input mosaic and writing cropped tiles.
//!
//! The mosaic is decoded once into an RGB8 buffer; tiles are cropped views
//! materialized just long enough to encode one PNG each.

use std::path::Path;

use image::{ImageReader, RgbImage};

use crate::error::MosaicPrepError;
use crate::grid::Region;

/// Decodes the mosaic at `path` into an RGB8 pixel buffer.
///
/// Any raster format the `image` crate recognizes is accepted; the format is
/// sniffed from the file contents.
///
/// # Errors
/// Returns [`MosaicPrepError::Io`] if the file cannot be opened and
/// [`MosaicPrepError::MosaicDecode`] if decoding fails.
pub fn read_mosaic(path: &Path) -> Result<RgbImage, MosaicPrepError> {
    let decoded = ImageReader::open(path)
        .map_err(MosaicPrepError::Io)?
        .decode()
        .map_err(|source| MosaicPrepError::MosaicDecode {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(decoded.into_rgb8())
}

/// Crops `region` out of the mosaic and writes it to `path`.
///
/// The encoding is chosen from the path's extension (always `.png` for paths
/// produced by the manifest builder).
///
/// # Errors
/// Returns [`MosaicPrepError::TileWrite`] if encoding or writing fails.
pub fn write_tile(
    mosaic: &RgbImage,
    region: &Region,
    path: &Path,
) -> Result<(), MosaicPrepError> {
    let tile = image::imageops::crop_imm(
        mosaic,
        region.col_start,
        region.row_start,
        region.width(),
        region.height(),
    )
    .to_image();

    tile.save(path).map_err(|source| MosaicPrepError::TileWrite {
        path: path.to_path_buf(),
        source,
    })
}
