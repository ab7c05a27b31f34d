use super::ActivationFunction;

/// The hyperbolic tangent.
pub fn tanh(x: f32) -> f32 {
    x.tanh()
}

/// `1 - tanh(x)^2`
pub fn tanh_derivative(x: f32) -> f32 {
    1.0 - x.tanh().powf(2.0)
}

impl ActivationFunction {
    /// The hyperbolic tangent, squashing every value into `(-1, 1)`.
    pub fn tanh() -> Self {
        ActivationFunction::new("tanh", tanh, tanh_derivative)
    }
}
