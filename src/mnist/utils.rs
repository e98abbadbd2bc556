//! Low-level byte reading utilities

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use byteorder::{BigEndian, ByteOrder};
use flate2::read::GzDecoder;
use log::debug;
use super::types::error::{MnistError, Result};

/// Leading bytes of a gzip member.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Upper bound on the buffer reserved up front, so a corrupt header cannot
/// force a huge allocation before any payload has been read.
const MAX_PREALLOC: usize = 64 << 20;

/// Read exactly `len` bytes.
///
/// Unlike `read_exact`, a truncated stream reports how many bytes were
/// actually available.
pub fn read_counted<R: Read>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if buf.len() < len {
        return Err(MnistError::ShortRead {
            expected: len as u64,
            found: buf.len() as u64,
        });
    }
    Ok(buf)
}

/// Read a 4 byte big-endian signed integer.
pub fn read_i32_be<R: Read>(reader: &mut R) -> Result<i32> {
    let bytes = read_counted(reader, 4)?;
    Ok(BigEndian::read_i32(&bytes))
}

/// Open `path` for reading, decompressing on the fly if it is gzipped.
///
/// The file handle lives inside the returned reader and is closed when it is dropped.
pub fn open_source(path: &Path) -> io::Result<Box<dyn Read>> {
    let mut reader = BufReader::new(File::open(path)?);
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    if gzipped {
        debug!("{} is gzip-compressed", path.display());
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}
