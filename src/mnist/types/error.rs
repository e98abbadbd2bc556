//! Custom error types for the mnist-reader crate.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two IDX variants a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Images,
    Labels,
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Images => write!(f, "image"),
            DatasetKind::Labels => write!(f, "label"),
        }
    }
}

/// The step of the decode sequence that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Opening the file.
    Open,
    /// Reading and checking the magic number.
    Magic,
    /// Reading the fixed header (count, and rows/cols for images).
    Config,
    /// Reading the flat payload.
    Data,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "file"),
            Stage::Magic => write!(f, "magic"),
            Stage::Config => write!(f, "config"),
            Stage::Data => write!(f, "data"),
        }
    }
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum MnistError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The leading 4 bytes do not identify the expected IDX variant.
    #[error("magic mismatch: expected {expected}, found {found}")]
    MagicMismatch { expected: i32, found: i32 },

    /// The stream ended before a header field or the payload was complete.
    #[error("short read: expected {expected} bytes, but found {found} bytes")]
    ShortRead { expected: u64, found: u64 },

    /// Header dimensions that cannot describe a buffer (negative or overflowing).
    #[error("invalid dimensions: count={count}, rows={rows}, cols={cols}")]
    InvalidDimensions { count: i32, rows: i32, cols: i32 },

    /// A negative label count.
    #[error("invalid label count: {count}")]
    InvalidCount { count: i32 },

    /// A buffer does not match the size implied by its dimensions.
    #[error("Size mismatch for {context}: expected {expected} bytes, but found {found} bytes")]
    SizeMismatch {
        context: &'static str,
        expected: u64,
        found: u64,
    },

    /// A low-level error tagged with the dataset kind and the failing stage.
    #[error("error reading {kind} {stage}: {source}")]
    Stage {
        kind: DatasetKind,
        stage: Stage,
        #[source]
        source: Box<MnistError>,
    },

    /// An error tagged with the file it came from.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<MnistError>,
    },
}

impl MnistError {
    pub(crate) fn at(kind: DatasetKind, stage: Stage, source: impl Into<MnistError>) -> Self {
        MnistError::Stage {
            kind,
            stage,
            source: Box::new(source.into()),
        }
    }

    pub(crate) fn in_file(path: impl Into<PathBuf>, source: MnistError) -> Self {
        MnistError::File {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// The stage that failed, if this error passed through a decode step.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            MnistError::Stage { stage, .. } => Some(*stage),
            MnistError::File { source, .. } => source.stage(),
            _ => None,
        }
    }

    /// The innermost error, with all stage and file context stripped.
    pub fn root(&self) -> &MnistError {
        match self {
            MnistError::Stage { source, .. } | MnistError::File { source, .. } => source.root(),
            other => other,
        }
    }
}

/// A convenience `Result` type alias using the crate's `MnistError` type.
pub type Result<T> = std::result::Result<T, MnistError>;
