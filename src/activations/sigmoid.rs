use std::f32::consts::E;

use super::ActivationFunction;

/// `1 / (1 + e^-x)`
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + E.powf(-x))
}

/// `sigmoid(x) * (1 - sigmoid(x))`
pub fn sigmoid_derivative(x: f32) -> f32 {
    let activated = sigmoid(x);

    activated * (1.0 - activated)
}

impl ActivationFunction {
    /// The logistic sigmoid, squashing every value into `(0, 1)`.
    pub fn sigmoid() -> Self {
        ActivationFunction::new("sigmoid", sigmoid, sigmoid_derivative)
    }
}
