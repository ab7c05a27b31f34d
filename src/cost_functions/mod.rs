//! The module that contains the cost functions a trilayer network can be trained with, which
//! currently are:
//!
//! - Mean Squared
//! - Cross Entropy
//! - Mean Absolute
//!
//! Any other differentiable cost can be used through `CostFunction::new`.

/// The CostFunction type itself
pub mod cost_function;
pub mod cross_entropy;
pub mod mean_absolute;
pub mod mean_squared;

pub use cost_function::CostFunction;
