use std::fmt::{self, Debug};
use std::sync::Arc;

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::neural_net::training::EvaluationError;

/// Computes a scalar cost from the outputs of a network and the expected outputs.
pub type VectorCost = Arc<dyn Fn(&[f32], &[f32]) -> f32 + Send + Sync>;

/// Computes the derivative of a cost with respect to every single output of a network.
pub type VectorCostDerivative = Arc<dyn Fn(&[f32], &[f32]) -> Vec<f32> + Send + Sync>;

#[derive(Clone)]
/// A function for computing how **wrong** a network was on one sample, together with the
/// derivative of that error with respect to each one of the network's outputs,
///
/// dE/dO
///
/// which is the seed of backpropagation's chain rule.
pub struct CostFunction {
    name: String,
    cost: VectorCost,
    derivative: VectorCostDerivative,
}

impl CostFunction {
    /// Creates a custom cost function from the cost itself and its derivative with respect to
    /// the outputs.
    ///
    /// Both closures receive `(outputs, expected_outputs)`, which always have the same length,
    /// and the derivative must return exactly one value per output. Backpropagating with a
    /// derivative of any other length panics in debug builds.
    pub fn new<C, D>(name: impl Into<String>, cost: C, derivative: D) -> Self
    where
        C: Fn(&[f32], &[f32]) -> f32 + Send + Sync + 'static,
        D: Fn(&[f32], &[f32]) -> Vec<f32> + Send + Sync + 'static,
    {
        CostFunction {
            name: name.into(),
            cost: Arc::new(cost),
            derivative: Arc::new(derivative),
        }
    }

    /// The name given to this cost function when it was created.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Computes the cost of a single sample.
    pub fn cost(&self, outputs: &[f32], expected_outputs: &[f32]) -> f32 {
        (self.cost)(outputs, expected_outputs)
    }

    /// Computes the derivative of the cost with respect to each output of a single sample.
    pub fn derivative(&self, outputs: &[f32], expected_outputs: &[f32]) -> Vec<f32> {
        (self.derivative)(outputs, expected_outputs)
    }

    /// Computes the average of the cost over all of the samples.
    ///
    /// The per sample costs are computed in parallel but always summed in order, so the result
    /// does not depend on how the work was split. Fails if there are no samples, if there is not
    /// one expected output for each sample output, or if any pair has different lengths.
    pub fn average_cost(
        &self,
        sample_outputs: &[Vec<f32>],
        expected_outputs: &[Vec<f32>],
    ) -> Result<f32, EvaluationError> {
        let samples_amount = sample_outputs.len();

        if samples_amount != expected_outputs.len() {
            return Err(EvaluationError::SampleCountMismatch {
                inputs: samples_amount,
                labels: expected_outputs.len(),
            });
        }
        if samples_amount == 0 {
            return Err(EvaluationError::NoSamples);
        }
        if let Some((index, (outputs, expected))) = sample_outputs
            .iter()
            .zip(expected_outputs)
            .enumerate()
            .find(|(_, (outputs, expected))| outputs.len() != expected.len())
        {
            return Err(EvaluationError::LabelSizeMismatch {
                index,
                expected: outputs.len(),
                actual: expected.len(),
            });
        }

        let sample_costs: Vec<f32> = (0..samples_amount)
            .into_par_iter()
            .map(|sample_index| {
                self.cost(&sample_outputs[sample_index], &expected_outputs[sample_index])
            })
            .collect();

        Ok(sample_costs.iter().sum::<f32>() / samples_amount as f32)
    }
}

impl Debug for CostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CostFunction").field(&self.name).finish()
    }
}
