//! Data structures representing decoded IDX files

use std::path::{Path, PathBuf};
use super::error::{MnistError, Result};

/// Magic number of an IDX image file (`0x00000803`).
pub const IMAGE_MAGIC: i32 = 2051;
/// Magic number of an IDX label file (`0x00000801`).
pub const LABEL_MAGIC: i32 = 2049;

/// Fixed header of a label file, as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelHeader {
    pub count: i32,
}

/// Fixed header of an image file, as stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub count: i32,
    pub rows: i32,
    pub cols: i32,
}

/// A set of greyscale images stored as one flat buffer.
///
/// Image `i` occupies `pixels[i * rows * cols .. (i + 1) * rows * cols]`,
/// row-major, one unsigned byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    count: usize,
    rows: usize,
    cols: usize,
    pixels: Vec<u8>,
}

impl ImageSet {
    /// Build a set from its dimensions and flat pixel buffer.
    ///
    /// # Errors
    /// `SizeMismatch` if `pixels.len() != count * rows * cols`.
    pub fn new(count: usize, rows: usize, cols: usize, pixels: Vec<u8>) -> Result<Self> {
        let expected = count
            .checked_mul(rows)
            .and_then(|n| n.checked_mul(cols))
            .unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(MnistError::SizeMismatch {
                context: "image pixels",
                expected: expected as u64,
                found: pixels.len() as u64,
            });
        }
        Ok(Self { count, rows, cols, pixels })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of pixels in one image (`rows * cols`).
    pub fn image_size(&self) -> usize {
        self.rows * self.cols
    }

    /// The whole flat pixel buffer, in file order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns image `offset` as a grid indexed `[x][y]`.
    ///
    /// The outer vector has `cols` columns, each holding `rows` pixels, so
    /// `grid[x][y] == get_flat_image(offset)[y * cols + x]`. For the square
    /// images of MNIST this is the transpose of the usual `[y][x]` layout.
    ///
    /// # Panics
    /// If `offset >= count`.
    pub fn get_image(&self, offset: usize) -> Vec<Vec<u8>> {
        let flat = self.image_slice(offset, "get_image");
        let mut grid = vec![vec![0u8; self.rows]; self.cols];
        for y in 0..self.rows {
            let row = &flat[y * self.cols..(y + 1) * self.cols];
            for (x, &value) in row.iter().enumerate() {
                grid[x][y] = value;
            }
        }
        grid
    }

    /// Returns image `offset` as a borrowed row-major slice of `rows * cols` bytes.
    ///
    /// # Panics
    /// If `offset >= count`.
    pub fn get_flat_image(&self, offset: usize) -> &[u8] {
        self.image_slice(offset, "get_flat_image")
    }

    fn image_slice(&self, offset: usize, caller: &str) -> &[u8] {
        assert!(
            offset < self.count,
            "{}: offset {} out of range for {} images",
            caller,
            offset,
            self.count
        );
        let size = self.image_size();
        let start = offset * size;
        &self.pixels[start..start + size]
    }
}

/// A set of classification labels, one byte each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    count: usize,
    labels: Vec<u8>,
}

impl LabelSet {
    /// Build a set from its count and label buffer.
    ///
    /// # Errors
    /// `SizeMismatch` if `labels.len() != count`.
    pub fn new(count: usize, labels: Vec<u8>) -> Result<Self> {
        if labels.len() != count {
            return Err(MnistError::SizeMismatch {
                context: "labels",
                expected: count as u64,
                found: labels.len() as u64,
            });
        }
        Ok(Self { count, labels })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Returns label `offset`.
    ///
    /// # Panics
    /// If `offset >= count`.
    pub fn get_label(&self, offset: usize) -> u8 {
        assert!(
            offset < self.count,
            "get_label: offset {} out of range for {} labels",
            offset,
            self.count
        );
        self.labels[offset]
    }
}

/// Locations of the four MNIST files. Any subset may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MnistFiles {
    pub training_images: Option<PathBuf>,
    pub training_labels: Option<PathBuf>,
    pub testing_images: Option<PathBuf>,
    pub testing_labels: Option<PathBuf>,
}

impl MnistFiles {
    pub const TRAINING_IMAGES: &'static str = "train-images-idx3-ubyte";
    pub const TRAINING_LABELS: &'static str = "train-labels-idx1-ubyte";
    pub const TESTING_IMAGES: &'static str = "t10k-images-idx3-ubyte";
    pub const TESTING_LABELS: &'static str = "t10k-labels-idx1-ubyte";

    /// All four files under `dir`, using the canonical MNIST file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            training_images: Some(dir.join(Self::TRAINING_IMAGES)),
            training_labels: Some(dir.join(Self::TRAINING_LABELS)),
            testing_images: Some(dir.join(Self::TESTING_IMAGES)),
            testing_labels: Some(dir.join(Self::TESTING_LABELS)),
        }
    }

    pub fn with_training_images(mut self, path: impl Into<PathBuf>) -> Self {
        self.training_images = Some(path.into());
        self
    }

    pub fn with_training_labels(mut self, path: impl Into<PathBuf>) -> Self {
        self.training_labels = Some(path.into());
        self
    }

    pub fn with_testing_images(mut self, path: impl Into<PathBuf>) -> Self {
        self.testing_images = Some(path.into());
        self
    }

    pub fn with_testing_labels(mut self, path: impl Into<PathBuf>) -> Self {
        self.testing_labels = Some(path.into());
        self
    }
}
