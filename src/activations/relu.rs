use super::ActivationFunction;

/// `max(x, 0)`
pub fn relu(x: f32) -> f32 {
    x.max(0.0)
}

/// `1` for positive values, `0` otherwise (including at zero itself).
pub fn relu_derivative(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

impl ActivationFunction {
    /// The Rectified Linear Unit.
    pub fn relu() -> Self {
        ActivationFunction::new("relu", relu, relu_derivative)
    }

    /// A ReLU that lets negative values through scaled by **slope** instead of zeroing them,
    /// which keeps units from dying when they end up with only negative pre-activations.
    pub fn leaky_relu(slope: f32) -> Self {
        ActivationFunction::new(
            format!("leaky_relu({})", slope),
            move |x| if x > 0.0 { x } else { slope * x },
            move |x| if x > 0.0 { 1.0 } else { slope },
        )
    }
}
