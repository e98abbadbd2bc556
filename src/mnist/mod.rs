//! Core IDX reader module

pub mod format;
pub mod grayscale;
pub mod reader;
pub mod types;
mod utils;

pub use reader::MnistReader;
pub use types::error::{DatasetKind, MnistError, Result, Stage};
pub use types::filetypes::{IdxKind, Images, Labels};
pub use types::models::{
    ImageHeader, ImageSet, LabelHeader, LabelSet, MnistFiles, IMAGE_MAGIC, LABEL_MAGIC,
};
