//! The module that implements the Mean Absolute cost function.

use super::CostFunction;

/// `sum(|output - expected|) / outputs_amount`
pub fn mean_absolute(outputs: &[f32], expected_outputs: &[f32]) -> f32 {
    let outputs_amount = outputs.len() as f32;

    outputs
        .iter()
        .zip(expected_outputs)
        .map(|(output, expected)| (output - expected).abs())
        .sum::<f32>()
        / outputs_amount
}

/// `sign(output - expected) / outputs_amount`, zero where the output is exactly right.
pub fn mean_absolute_derivative(outputs: &[f32], expected_outputs: &[f32]) -> Vec<f32> {
    let outputs_amount = outputs.len() as f32;

    outputs
        .iter()
        .zip(expected_outputs)
        .map(|(output, expected)| {
            let difference = output - expected;
            if difference == 0.0 {
                0.0
            } else {
                difference.signum() / outputs_amount
            }
        })
        .collect()
}

impl CostFunction {
    /// The Mean Absolute cost.
    ///
    /// Similar to the Mean Squared, but more tolerant with large errors and more considerate
    /// to small ones because it compares using absolute values instead of squares.
    pub fn mean_absolute() -> Self {
        CostFunction::new("mean_absolute", mean_absolute, mean_absolute_derivative)
    }
}
