use std::fmt::{self, Debug};
use std::sync::Arc;

/// A pure function from one float to another, shareable between threads.
pub type ScalarFunction = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

#[derive(Clone)]
/// An activation function applied element-wise to the pre-activations of a layer together with
/// its derivative.
///
/// The derivative is always evaluated at the same **pre-activation** value that was given to the
/// function itself, so that during backpropagation
///
/// dO/dI = derivative(I)
///
/// can be computed from the cached pre-activations.
pub struct ActivationFunction {
    name: String,
    function: ScalarFunction,
    derivative: ScalarFunction,
}

impl ActivationFunction {
    /// Creates a custom activation function from the function itself and its derivative.
    ///
    /// The name is only used when debugging a network's configuration.
    pub fn new<F, D>(name: impl Into<String>, function: F, derivative: D) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
        D: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        ActivationFunction {
            name: name.into(),
            function: Arc::new(function),
            derivative: Arc::new(derivative),
        }
    }

    /// The name given to this activation when it was created.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the activation to a single pre-activation value.
    pub fn apply(&self, x: f32) -> f32 {
        (self.function)(x)
    }

    /// Computes the derivative of the activation at the pre-activation value **x**.
    pub fn derivative(&self, x: f32) -> f32 {
        (self.derivative)(x)
    }

    /// Applies the activation to every single value of a layer.
    pub fn apply_all(&self, pre_activations: &[f32]) -> Vec<f32> {
        pre_activations.iter().map(|x| self.apply(*x)).collect()
    }
}

impl Debug for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActivationFunction")
            .field(&self.name)
            .finish()
    }
}
