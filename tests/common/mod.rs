#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

pub const IMAGE_MAGIC: i32 = 2051;
pub const LABEL_MAGIC: i32 = 2049;

pub fn label_bytes(labels: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&LABEL_MAGIC.to_be_bytes());
    out.extend_from_slice(&(labels.len() as i32).to_be_bytes());
    out.extend_from_slice(labels);
    out
}

pub fn image_bytes(count: i32, rows: i32, cols: i32, pixels: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&IMAGE_MAGIC.to_be_bytes());
    out.extend_from_slice(&count.to_be_bytes());
    out.extend_from_slice(&rows.to_be_bytes());
    out.extend_from_slice(&cols.to_be_bytes());
    out.extend_from_slice(pixels);
    out
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    path
}

pub fn write_gz_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).expect("gzip write");
    let compressed = encoder.finish().expect("gzip finish");
    write_file(dir, name, &compressed)
}
