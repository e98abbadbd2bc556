//! IDX file format parsing layer.
//!
//! ```text
//! Label file:                    Image file:
//! ┌──────────────────────┐       ┌──────────────────────┐
//! │ magic = 2049  (i32)  │       │ magic = 2051  (i32)  │ ← header::check_magic()
//! ├──────────────────────┤       ├──────────────────────┤
//! │ count         (i32)  │       │ count, rows, cols    │ ← header::read_*_header()
//! ├──────────────────────┤       ├──────────────────────┤
//! │ count × u8           │       │ count*rows*cols × u8 │ ← content::read_payload()
//! └──────────────────────┘       └──────────────────────┘
//! ```
//!
//! All integers are big-endian. Bytes past the payload are never read.

pub mod content;
pub mod header;

use std::io::Read;
use log::debug;
use super::types::error::{MnistError, Result, Stage};
use super::types::filetypes::IdxKind;

/// Run magic check, header decode and payload read for one IDX stream.
///
/// Every failure is tagged with the dataset kind and the stage it happened in.
pub fn decode<K: IdxKind, R: Read>(reader: &mut R) -> Result<K::Set> {
    header::check_magic(reader, K::MAGIC).map_err(|e| MnistError::at(K::KIND, Stage::Magic, e))?;

    let header = K::read_header(reader).map_err(|e| MnistError::at(K::KIND, Stage::Config, e))?;
    debug!("{} header: {:?}", K::DEBUG_NAME, header);

    let set = K::payload_len(&header)
        .and_then(|len| content::read_payload(reader, len))
        .and_then(|data| K::assemble(&header, data))
        .map_err(|e| MnistError::at(K::KIND, Stage::Data, e))?;

    Ok(set)
}
