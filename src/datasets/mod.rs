//! The module for the datasets trilayer networks are trained with.
//!
//! A Dataset is validated once against a Structure when it is created, so training never has to
//! check the shape of the samples again. Besides custom datasets it currently contains
//! - XOR

/// The Dataset type and its validation
pub mod dataset;
pub mod xor;

pub use dataset::{Collection, Dataset, DatasetError, ShapeMismatch, Split};
