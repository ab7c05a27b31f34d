//! The module that contains the activation functions a trilayer network can use on its hidden
//! and output layers, which currently are:
//!
//! - Identity
//! - Sigmoid
//! - ReLU (Rectified Linear Unit) and Leaky ReLU
//! - TanH (Hyperbolic Tangent)
//!
//! Any other differentiable function can be used through `ActivationFunction::new`.

/// The ActivationFunction type itself
pub mod activation;
/// The identity activation, which lets pre-activations through untouched
pub mod identity;
/// The ReLU and Leaky ReLU activations
pub mod relu;
/// The sigmoid activation
pub mod sigmoid;
/// The hyperbolic tangent activation
pub mod tanh;

pub use activation::ActivationFunction;
pub use identity::{identity, identity_derivative};
pub use relu::{relu, relu_derivative};
pub use sigmoid::{sigmoid, sigmoid_derivative};
pub use tanh::{tanh, tanh_derivative};

#[cfg(test)]
mod tests;
