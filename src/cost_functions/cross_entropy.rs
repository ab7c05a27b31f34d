//! The module that implements the Cross Entropy cost function.

use super::CostFunction;

/// How close to 0 or 1 an output may get before the logarithms of the Cross Entropy are taken.
pub const CROSS_ENTROPY_EPSILON: f32 = 0.0000001;

fn clamp_output(output: f32) -> f32 {
    output.max(CROSS_ENTROPY_EPSILON).min(1.0 - CROSS_ENTROPY_EPSILON)
}

/// `-sum(expected * ln(output) + (1 - expected) * ln(1 - output)) / outputs_amount`
pub fn cross_entropy(outputs: &[f32], expected_outputs: &[f32]) -> f32 {
    let outputs_amount = outputs.len() as f32;

    -outputs
        .iter()
        .zip(expected_outputs)
        .map(|(output, expected)| {
            let output = clamp_output(*output);
            expected * output.ln() + (1.0 - expected) * (1.0 - output).ln()
        })
        .sum::<f32>()
        / outputs_amount
}

/// `(output - expected) / (output * (1 - output)) / outputs_amount`
pub fn cross_entropy_derivative(outputs: &[f32], expected_outputs: &[f32]) -> Vec<f32> {
    let outputs_amount = outputs.len() as f32;

    outputs
        .iter()
        .zip(expected_outputs)
        .map(|(output, expected)| {
            let output = clamp_output(*output);
            (output - expected) / (output * (1.0 - output)) / outputs_amount
        })
        .collect()
}

impl CostFunction {
    /// The (binary) Cross Entropy cost, made for outputs that are probabilities in `(0, 1)`,
    /// such as the ones produced by a sigmoid output layer.
    ///
    /// Outputs are clamped into `[1e-7, 1 - 1e-7]` so that the logarithms never yield
    /// infinities.
    ///
    /// This cost penalizes heavily when some values are high when they should be closer to 0,
    /// and if the values are a bit far from what they are expected to be they are much more
    /// penalized than in other cost functions.
    pub fn cross_entropy() -> Self {
        CostFunction::new("cross_entropy", cross_entropy, cross_entropy_derivative)
    }
}
