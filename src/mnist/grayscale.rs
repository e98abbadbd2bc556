//! Conversion of decoded image grids into `image` buffers.

use image::{GrayImage, Luma};
use super::types::models::ImageSet;

/// Converts a grid indexed `[x][y]` (as returned by [`ImageSet::get_image`])
/// into a greyscale image of width `grid.len()` and height `grid[0].len()`.
///
/// Returns `None` for an empty grid, or one whose columns differ in length.
pub fn to_grayscale(grid: &[Vec<u8>]) -> Option<GrayImage> {
    let height = grid.first()?.len();
    if height == 0 || grid.iter().any(|column| column.len() != height) {
        return None;
    }
    let width = u32::try_from(grid.len()).ok()?;
    let height = u32::try_from(height).ok()?;
    Some(GrayImage::from_fn(width, height, |x, y| {
        Luma([grid[x as usize][y as usize]])
    }))
}

impl ImageSet {
    /// Image `offset` as a `cols × rows` greyscale image.
    ///
    /// # Panics
    /// If `offset >= count`.
    pub fn to_gray_image(&self, offset: usize) -> Option<GrayImage> {
        to_grayscale(&self.get_image(offset))
    }
}
