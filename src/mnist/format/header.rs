//! Magic number and fixed header decoding.

use std::io::Read;
use log::trace;
use crate::mnist::types::error::{MnistError, Result};
use crate::mnist::types::models::{ImageHeader, LabelHeader};
use crate::mnist::utils;

/// Reads the 4 byte magic number and compares it against `expected`.
///
/// Consumes exactly 4 bytes on success.
pub fn check_magic<R: Read>(reader: &mut R, expected: i32) -> Result<()> {
    let found = utils::read_i32_be(reader)?;
    trace!("Magic: expected={:#010x}, found={:#010x}", expected, found);
    if found != expected {
        return Err(MnistError::MagicMismatch { expected, found });
    }
    Ok(())
}

/// Reads the label header: a single count.
pub fn read_label_header<R: Read>(reader: &mut R) -> Result<LabelHeader> {
    let count = utils::read_i32_be(reader)?;
    Ok(LabelHeader { count })
}

/// Reads the image header: count, rows and cols, in that order.
///
/// Values are returned as stored; range checks happen when the payload is sized.
pub fn read_image_header<R: Read>(reader: &mut R) -> Result<ImageHeader> {
    let count = utils::read_i32_be(reader)?;
    let rows = utils::read_i32_be(reader)?;
    let cols = utils::read_i32_be(reader)?;
    Ok(ImageHeader { count, rows, cols })
}
