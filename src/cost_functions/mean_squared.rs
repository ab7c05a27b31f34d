//! The module that implements the Mean Squared cost function.

use super::CostFunction;

/// `sum((output - expected)^2) / outputs_amount`
pub fn mean_squared(outputs: &[f32], expected_outputs: &[f32]) -> f32 {
    let outputs_amount = outputs.len() as f32;

    outputs
        .iter()
        .zip(expected_outputs)
        .map(|(output, expected)| (output - expected).powf(2.0))
        .sum::<f32>()
        / outputs_amount
}

/// `2 * (output - expected) / outputs_amount`
pub fn mean_squared_derivative(outputs: &[f32], expected_outputs: &[f32]) -> Vec<f32> {
    let outputs_amount = outputs.len() as f32;

    outputs
        .iter()
        .zip(expected_outputs)
        .map(|(output, expected)| 2.0 / outputs_amount * (output - expected))
        .collect()
}

impl CostFunction {
    /// The Mean Squared cost, penalizing larger errors much more than small ones.
    pub fn mean_squared() -> Self {
        CostFunction::new("mean_squared", mean_squared, mean_squared_derivative)
    }
}
