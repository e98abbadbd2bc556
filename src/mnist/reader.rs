use std::io::Read;
use std::path::Path;
use log::{info, warn};

use super::format;
use super::types::error::{MnistError, Result, Stage};
use super::types::filetypes::{IdxKind, Images, Labels};
use super::types::models::{ImageSet, LabelSet, MnistFiles};
use super::utils;

/// The decoded MNIST datasets.
///
/// Each set is present exactly when its location was given to [`MnistReader::new`].
#[derive(Debug, Clone, Default)]
pub struct MnistReader {
    pub training_images: Option<ImageSet>,
    pub training_labels: Option<LabelSet>,
    pub testing_images: Option<ImageSet>,
    pub testing_labels: Option<LabelSet>,
}

impl MnistReader {
    /// Decode every file listed in `files`.
    ///
    /// Files are processed in the order training images, training labels,
    /// testing images, testing labels. Absent (or empty) locations are skipped
    /// without touching the filesystem.
    ///
    /// # Errors
    /// The first failure aborts the whole load. The error names the file and
    /// the failing stage:
    /// - File cannot be opened
    /// - Magic number does not match the expected IDX variant
    /// - Header or payload is truncated
    /// - Header dimensions are negative or overflow
    pub fn new(files: &MnistFiles) -> Result<Self> {
        let reader = Self {
            training_images: read_optional::<Images>(files.training_images.as_deref())?,
            training_labels: read_optional::<Labels>(files.training_labels.as_deref())?,
            testing_images: read_optional::<Images>(files.testing_images.as_deref())?,
            testing_labels: read_optional::<Labels>(files.testing_labels.as_deref())?,
        };

        check_split("training", &reader.training_images, &reader.training_labels);
        check_split("testing", &reader.testing_images, &reader.testing_labels);

        Ok(reader)
    }

    /// Decode all four files from `dir`, using the canonical MNIST file names.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(&MnistFiles::in_dir(dir))
    }
}

impl ImageSet {
    /// Decode an image set from an IDX stream positioned at its magic number.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        format::decode::<Images, _>(&mut reader)
    }

    /// Decode an image set from a (possibly gzipped) IDX file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        read_set::<Images>(path.as_ref())
    }
}

impl LabelSet {
    /// Decode a label set from an IDX stream positioned at its magic number.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        format::decode::<Labels, _>(&mut reader)
    }

    /// Decode a label set from a (possibly gzipped) IDX file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        read_set::<Labels>(path.as_ref())
    }
}

fn read_optional<K: IdxKind>(path: Option<&Path>) -> Result<Option<K::Set>> {
    match path {
        Some(path) if !path.as_os_str().is_empty() => read_set::<K>(path).map(Some),
        _ => Ok(None),
    }
}

fn read_set<K: IdxKind>(path: &Path) -> Result<K::Set> {
    info!("Opening MNIST {} file: {}", K::DEBUG_NAME, path.display());
    let mut source = utils::open_source(path)
        .map_err(|e| MnistError::in_file(path, MnistError::at(K::KIND, Stage::Open, e)))?;

    let set = format::decode::<K, _>(&mut source).map_err(|e| MnistError::in_file(path, e))?;
    info!("MNIST {} file loaded: {}", K::DEBUG_NAME, path.display());
    Ok(set)
}

fn check_split(split: &str, images: &Option<ImageSet>, labels: &Option<LabelSet>) {
    if let (Some(images), Some(labels)) = (images, labels) {
        if images.count() != labels.count() {
            warn!(
                "{} split has {} images but {} labels",
                split,
                images.count(),
                labels.count()
            );
        }
    }
}
