//! Flat payload decoding.

use std::io::Read;
use log::trace;
use crate::mnist::types::error::Result;
use crate::mnist::utils;

/// Reads exactly `len` unsigned bytes following the header, in file order.
///
/// Anything after the payload is left unread.
pub fn read_payload<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    trace!("Reading {} payload bytes", len);
    utils::read_counted(reader, len)
}
