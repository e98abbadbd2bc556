//! Foundational data structures, error types, and dataset kind definitions.

pub mod error;
pub mod filetypes;
pub mod models;
