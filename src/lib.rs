//! # mnist-reader
//!
//! A reader for the IDX files the MNIST handwritten-digit dataset ships in.
//! Decodes image sets (magic 2051) and label sets (magic 2049), plain or gzipped,
//! into flat in-memory buffers with indexed accessors.
pub mod mnist;

// Re-export the main types for convenience
pub use mnist::{
    grayscale::to_grayscale,
    ImageSet,
    LabelSet,
    MnistError,
    MnistFiles,
    MnistReader,
    Result,
    Stage,
};
