//! Specialization logic for the two IDX variants (image sets vs label sets).

use std::fmt::Debug;
use std::io::Read;
use super::error::{DatasetKind, MnistError, Result};
use super::models::{ImageHeader, ImageSet, LabelHeader, LabelSet, IMAGE_MAGIC, LABEL_MAGIC};
use crate::mnist::format::header;

/// A trait that defines how one IDX variant is decoded.
pub trait IdxKind {
    /// A short name used for debugging and logging.
    const DEBUG_NAME: &'static str;

    /// Kind tag carried by errors.
    const KIND: DatasetKind;

    /// The format-defined magic number.
    const MAGIC: i32;

    /// The fixed header following the magic number.
    type Header: Debug;

    /// The decoded container.
    type Set;

    fn read_header<R: Read>(reader: &mut R) -> Result<Self::Header>;

    /// Number of payload bytes the header announces.
    fn payload_len(header: &Self::Header) -> Result<usize>;

    fn assemble(header: &Self::Header, data: Vec<u8>) -> Result<Self::Set>;
}

/// Zero-cost marker struct for image files.
#[derive(Debug)]
pub struct Images;

impl IdxKind for Images {
    const DEBUG_NAME: &'static str = "images";
    const KIND: DatasetKind = DatasetKind::Images;
    const MAGIC: i32 = IMAGE_MAGIC;
    type Header = ImageHeader;
    type Set = ImageSet;

    fn read_header<R: Read>(reader: &mut R) -> Result<ImageHeader> {
        header::read_image_header(reader)
    }

    fn payload_len(h: &ImageHeader) -> Result<usize> {
        let invalid = || MnistError::InvalidDimensions {
            count: h.count,
            rows: h.rows,
            cols: h.cols,
        };
        let count = usize::try_from(h.count).map_err(|_| invalid())?;
        let rows = usize::try_from(h.rows).map_err(|_| invalid())?;
        let cols = usize::try_from(h.cols).map_err(|_| invalid())?;
        count
            .checked_mul(rows)
            .and_then(|n| n.checked_mul(cols))
            .ok_or_else(invalid)
    }

    fn assemble(h: &ImageHeader, data: Vec<u8>) -> Result<ImageSet> {
        // payload_len already accepted these values
        ImageSet::new(h.count as usize, h.rows as usize, h.cols as usize, data)
    }
}

/// Zero-cost marker struct for label files.
#[derive(Debug)]
pub struct Labels;

impl IdxKind for Labels {
    const DEBUG_NAME: &'static str = "labels";
    const KIND: DatasetKind = DatasetKind::Labels;
    const MAGIC: i32 = LABEL_MAGIC;
    type Header = LabelHeader;
    type Set = LabelSet;

    fn read_header<R: Read>(reader: &mut R) -> Result<LabelHeader> {
        header::read_label_header(reader)
    }

    fn payload_len(h: &LabelHeader) -> Result<usize> {
        usize::try_from(h.count).map_err(|_| MnistError::InvalidCount { count: h.count })
    }

    fn assemble(h: &LabelHeader, data: Vec<u8>) -> Result<LabelSet> {
        LabelSet::new(h.count as usize, data)
    }
}
