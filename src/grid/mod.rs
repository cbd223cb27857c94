//! Grid partitioning of a mosaic into tile regions.
//!
//! This module is the deterministic core of mosaicprep: given the mosaic's
//! pixel dimensions and a division count, it computes the ordered list of
//! rectangular windows that exactly tile the mosaic, remainders included.
//!
//! # Window Policy
//!
//! A single window size is derived from the mosaic **height**
//! (`win = ceil(height / divisions)`) and used for both axes. This mirrors the
//! sample-window policy of the annotation pipeline this tool feeds: tiles are
//! square except along the last row and column, where the remainder against
//! `end = (divisions - 1) * win` is used. Because `end` is height-derived, the
//! last column of a non-square mosaic absorbs the entire width remainder. Pick
//! `divisions` with the mosaic height in mind.
//!
//! # Determinism
//!
//! Regions are emitted in row-major order (outer loop over rows, inner over
//! columns) and the same inputs always produce the same list. Downstream
//! manifests index tiles by this order, so it must never change.

use crate::error::MosaicPrepError;

/// A half-open rectangular window into the mosaic.
///
/// Row/column bounds are in pixels: the region covers rows
/// `row_start..row_end` and columns `col_start..col_end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub row_start: u32,
    pub row_end: u32,
    pub col_start: u32,
    pub col_end: u32,
}

impl Region {
    /// Height of the region in pixels.
    pub fn height(&self) -> u32 {
        self.row_end - self.row_start
    }

    /// Width of the region in pixels.
    pub fn width(&self) -> u32 {
        self.col_end - self.col_start
    }
}

/// Partitions a `height` x `width` mosaic into `divisions` x `divisions`
/// regions, in row-major order.
///
/// All regions are `win` x `win` (`win = ceil(height / divisions)`) except
/// along the last row and column, which take the remainder against
/// `end = (divisions - 1) * win`. The union of the returned regions covers
/// every pixel exactly once.
///
/// # Errors
///
/// Returns [`MosaicPrepError::InvalidDimension`] if either dimension is zero,
/// `divisions` is zero, or the grid would contain empty regions (which happens
/// when `height <= end` or `width <= end`, e.g. a mosaic much wider than it is
/// tall relative to `divisions`). Rejecting these keeps the no-empty-region
/// invariant instead of silently emitting degenerate tiles.
pub fn partition(
    height: u32,
    width: u32,
    divisions: u32,
) -> Result<Vec<Region>, MosaicPrepError> {
    if height == 0 || width == 0 {
        return Err(MosaicPrepError::InvalidDimension {
            message: format!("mosaic is {}x{} (both dimensions must be positive)", height, width),
        });
    }
    if divisions == 0 {
        return Err(MosaicPrepError::InvalidDimension {
            message: "divisions must be at least 1".to_string(),
        });
    }

    let win = height.div_ceil(divisions);
    // Widened: (divisions - 1) * win can exceed u32 for extreme inputs, and
    // the comparisons below must see the true extent, not a wrapped one.
    let end = u64::from(divisions - 1) * u64::from(win);

    if u64::from(height) <= end {
        return Err(MosaicPrepError::InvalidDimension {
            message: format!(
                "height {} with {} divisions leaves no remainder row below the {} px grid extent",
                height, divisions, end
            ),
        });
    }
    if u64::from(width) <= end {
        return Err(MosaicPrepError::InvalidDimension {
            message: format!(
                "width {} is too small for the {} px grid extent derived from height {}",
                width, end, height
            ),
        });
    }

    // end < height <= u32::MAX, so all offsets below stay in u32 range
    let end = end as u32;
    let row_rem = height - end;
    let col_rem = width - end;

    let mut regions = Vec::with_capacity((divisions as usize).pow(2));
    for row in 0..divisions {
        let row_start = row * win;
        let row_len = if row == divisions - 1 { row_rem } else { win };
        for col in 0..divisions {
            let col_start = col * win;
            let col_len = if col == divisions - 1 { col_rem } else { win };
            regions.push(Region {
                row_start,
                row_end: row_start + row_len,
                col_start,
                col_end: col_start + col_len,
            });
        }
    }

    Ok(regions)
}
