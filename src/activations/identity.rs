use super::ActivationFunction;

/// `x`
pub fn identity(x: f32) -> f32 {
    x
}

/// `1`
pub fn identity_derivative(_: f32) -> f32 {
    1.0
}

impl ActivationFunction {
    /// The linear activation, leaving the pre-activations untouched.
    pub fn identity() -> Self {
        ActivationFunction::new("identity", identity, identity_derivative)
    }
}
