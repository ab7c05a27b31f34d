//! The forward and backward passes of a trilayer network.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use thiserror::Error;

use super::NeuralNet;
use crate::structure::Structure;
use crate::types::NetworkState;
use crate::utils::MatrixOperations;

#[derive(Debug, Error, PartialEq, Eq)]
/// The errors that can happen when running a network forward.
pub enum InferenceError {
    /// Happens when the amount of input values is not the amount of inputs of the network.
    #[error("expected {expected} input values but got {actual}")]
    InputSizeMismatch {
        /// The amount of inputs of the network
        expected: usize,
        /// The amount of values that were given
        actual: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
/// The errors that can happen when backpropagating the error of a sample.
pub enum BackpropagationError {
    /// Happens when `backpropagate` is called without a successful `infer` before it, or when
    /// the activations of that `infer` were already consumed.
    #[error("there are no cached activations to backpropagate, call infer first")]
    StaleState,
    /// Happens when the amount of label values is not the amount of outputs of the network.
    #[error("expected {expected} label values but got {actual}")]
    LabelSizeMismatch {
        /// The amount of outputs of the network
        expected: usize,
        /// The amount of values that were given
        actual: usize,
    },
    /// Happens when an InferenceTrace made by a network with another Structure is given.
    #[error("the trace was made by a {trace:?} network but this one is {network:?}")]
    TraceStructureMismatch {
        /// The structure of the network that made the trace
        trace: Structure,
        /// The structure of the network that was asked to learn from it
        network: Structure,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Every intermediate value of one forward pass, which is all backpropagation needs to know
/// about a sample besides its labels.
///
/// A trace owns its values and is independent from the network that made it, so a network can
/// produce many traces without being mutated (e.g. one per thread with `forward`) and learn from
/// them later on with `backpropagate_trace`.
pub struct InferenceTrace {
    structure: Structure,
    inputs: Vec<f32>,
    hidden_pre_activations: Vec<f32>,
    hidden_activations: Vec<f32>,
    output_pre_activations: Vec<f32>,
    outputs: Vec<f32>,
}

impl InferenceTrace {
    /// The structure of the network that made this trace.
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// The values that were fed into the network.
    pub fn inputs(&self) -> &[f32] {
        &self.inputs
    }

    /// The weighted sums of the hidden layer, bias included, before its activation.
    pub fn hidden_pre_activations(&self) -> &[f32] {
        &self.hidden_pre_activations
    }

    /// The outputs of the hidden layer.
    pub fn hidden_activations(&self) -> &[f32] {
        &self.hidden_activations
    }

    /// The weighted sums of the output layer, bias included, before its activation.
    pub fn output_pre_activations(&self) -> &[f32] {
        &self.output_pre_activations
    }

    /// What the network predicted.
    pub fn outputs(&self) -> &[f32] {
        &self.outputs
    }

    /// Takes the predictions out of the trace.
    pub fn into_outputs(self) -> Vec<f32> {
        self.outputs
    }
}

impl NeuralNet {
    /// Runs **inputs** through the network without changing it, returning every intermediate
    /// value of the pass.
    pub fn forward(&self, inputs: &[f32]) -> Result<InferenceTrace, InferenceError> {
        if inputs.len() != self.structure.inputs() {
            return Err(InferenceError::InputSizeMismatch {
                expected: self.structure.inputs(),
                actual: inputs.len(),
            });
        }

        let hidden_pre_activations = self.input_to_hidden.dot_with_bias(inputs);
        let hidden_activations = self
            .configuration
            .hidden_activation()
            .apply_all(&hidden_pre_activations);

        let output_pre_activations = self.hidden_to_output.dot_with_bias(&hidden_activations);
        let outputs = self
            .configuration
            .output_activation()
            .apply_all(&output_pre_activations);

        Ok(InferenceTrace {
            structure: self.structure,
            inputs: inputs.to_vec(),
            hidden_pre_activations,
            hidden_activations,
            output_pre_activations,
            outputs,
        })
    }

    /// Computes the outputs of the network for **inputs** without caching anything.
    pub fn predict(&self, inputs: &[f32]) -> Result<Vec<f32>, InferenceError> {
        Ok(self.forward(inputs)?.into_outputs())
    }

    /// Computes the outputs of the network for many samples in parallel, in the same order as
    /// the samples were given.
    pub fn predict_batch(&self, samples: &[Vec<f32>]) -> Result<Vec<Vec<f32>>, InferenceError> {
        samples
            .par_iter()
            .map(|inputs| self.predict(inputs))
            .collect()
    }

    /// Computes the outputs of the network for **inputs** and caches every intermediate value so
    /// that the next call to `backpropagate` can learn from this sample.
    ///
    /// A cached pass that was never backpropagated is replaced by this one. If the input has
    /// the wrong size nothing changes.
    pub fn infer(&mut self, inputs: &[f32]) -> Result<Vec<f32>, InferenceError> {
        let trace = self.forward(inputs)?;
        let outputs = trace.outputs.clone();

        self.last_trace = Some(trace);

        Ok(outputs)
    }

    /// Updates every weight of the network so that the outputs of the last `infer` move towards
    /// **labels**, consuming the cached pass.
    ///
    /// When the labels have the wrong size the weights stay untouched and the cached pass is
    /// kept, so the call can be retried with the right labels.
    pub fn backpropagate(&mut self, labels: &[f32]) -> Result<(), BackpropagationError> {
        if self.state() == NetworkState::Ready {
            return Err(BackpropagationError::StaleState);
        }
        self.ensure_label_size(labels)?;

        if let Some(trace) = self.last_trace.take() {
            self.apply_gradients(&trace, labels);
        }

        Ok(())
    }

    /// Updates every weight of the network from an explicit **trace** instead of the cached one,
    /// which is left as it is.
    pub fn backpropagate_trace(
        &mut self,
        trace: &InferenceTrace,
        labels: &[f32],
    ) -> Result<(), BackpropagationError> {
        if trace.structure != self.structure {
            return Err(BackpropagationError::TraceStructureMismatch {
                trace: trace.structure,
                network: self.structure,
            });
        }
        self.ensure_label_size(labels)?;

        self.apply_gradients(trace, labels);

        Ok(())
    }

    fn ensure_label_size(&self, labels: &[f32]) -> Result<(), BackpropagationError> {
        if labels.len() != self.structure.outputs() {
            return Err(BackpropagationError::LabelSizeMismatch {
                expected: self.structure.outputs(),
                actual: labels.len(),
            });
        }

        Ok(())
    }

    fn apply_gradients(&mut self, trace: &InferenceTrace, labels: &[f32]) {
        let configuration = &self.configuration;

        let loss_derivatives = configuration.cost().derivative(&trace.outputs, labels);
        debug_assert_eq!(
            loss_derivatives.len(),
            self.structure.outputs(),
            "the derivative of the {:?} cost must have one value per output",
            configuration.cost()
        );
        let output_deltas: Vec<f32> = loss_derivatives
            .iter()
            .zip(&trace.output_pre_activations)
            .map(|(loss_derivative, pre_activation)| {
                loss_derivative * configuration.output_activation().derivative(*pre_activation)
            })
            .collect();

        // must flow back through the weights as they were during the forward pass
        let hidden_deltas: Vec<f32> = self
            .hidden_to_output
            .transposed_dot_without_bias(&output_deltas)
            .iter()
            .zip(&trace.hidden_pre_activations)
            .map(|(error, pre_activation)| {
                error * configuration.hidden_activation().derivative(*pre_activation)
            })
            .collect();

        let learning_rate = configuration.learning_rate();
        let momentum = configuration.momentum();

        update_weights(
            &mut self.hidden_to_output,
            &mut self.hidden_to_output_last_updates,
            &output_deltas,
            &trace.hidden_activations,
            learning_rate,
            momentum,
        );
        update_weights(
            &mut self.input_to_hidden,
            &mut self.input_to_hidden_last_updates,
            &hidden_deltas,
            &trace.inputs,
            learning_rate,
            momentum,
        );
    }
}

/// Applies `update = -learning_rate * delta * input + momentum * last_update` to every weight of
/// a layer and remembers the update for the next step.
fn update_weights(
    weights: &mut [Vec<f32>],
    last_updates: &mut [Vec<f32>],
    deltas: &[f32],
    layer_inputs: &[f32],
    learning_rate: f32,
    momentum: f32,
) {
    for ((row, last_update_row), delta) in weights.iter_mut().zip(last_updates.iter_mut()).zip(deltas)
    {
        for (column, (weight, last_update)) in
            row.iter_mut().zip(last_update_row.iter_mut()).enumerate()
        {
            // the bias column is fed by a constant 1
            let input = layer_inputs.get(column).copied().unwrap_or(1.0);
            let update = -learning_rate * delta * input + momentum * *last_update;

            *weight += update;
            *last_update = update;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BackpropagationError, InferenceError};
    use crate::activations::ActivationFunction;
    use crate::configuration::Configuration;
    use crate::cost_functions::CostFunction;
    use crate::neural_net::NeuralNet;
    use crate::structure::Structure;
    use crate::types::NetworkState;
    use crate::utils::approx_eq::assert_approx_equal_distance;

    fn identity_configuration(learning_rate: f32, momentum: f32) -> Configuration {
        Configuration::new(
            ActivationFunction::identity(),
            ActivationFunction::identity(),
            CostFunction::mean_squared(),
            learning_rate,
            momentum,
        )
        .unwrap()
    }

    #[test]
    fn should_output_zero_with_zero_weights_and_identity_activations() {
        let structure = Structure::new(3, 4, 2).unwrap();
        let network = NeuralNet::from_weights(
            structure,
            identity_configuration(0.1, 0.0),
            &vec![0.0; structure.parameter_count()],
        )
        .unwrap();

        assert_eq!(network.predict(&[1.0, -2.0, 3.0]).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn should_compute_the_forward_pass_with_biases() {
        let structure = Structure::new(2, 1, 1).unwrap();
        // hidden = 0.5 * 1.0 + 0.25 * 2.0 + 1.0, output = 2.0 * hidden - 1.0
        let network = NeuralNet::from_weights(
            structure,
            identity_configuration(0.1, 0.0),
            &[0.5, 0.25, 1.0, 2.0, -1.0],
        )
        .unwrap();

        let trace = network.forward(&[1.0, 2.0]).unwrap();

        assert_eq!(trace.hidden_pre_activations(), &[2.0]);
        assert_eq!(trace.hidden_activations(), &[2.0]);
        assert_eq!(trace.outputs(), &[3.0]);
    }

    #[test]
    fn should_apply_the_momentum_update_rule() {
        let structure = Structure::new(1, 1, 1).unwrap();
        let mut network = NeuralNet::from_weights(
            structure,
            identity_configuration(0.1, 0.5),
            &[1.0, 0.0, 1.0, 0.0],
        )
        .unwrap();

        // the output is 1.0 and the mse derivative 2 * (1 - 3) = -4, which is also the hidden
        // delta since the hidden to output weight is 1
        network.infer(&[1.0]).unwrap();
        network.backpropagate(&[3.0]).unwrap();

        assert_approx_equal_distance(&network.all_weights(), &[1.4, 0.4, 1.4, 0.4], 0.0001);

        // hidden = 1.4 + 0.4, output = 1.4 * 1.8 + 0.4
        let outputs = network.infer(&[1.0]).unwrap();
        assert_approx_equal_distance(&outputs, &[2.92], 0.0001);

        let weights_before = network.all_weights();
        network.backpropagate(&[3.0]).unwrap();
        let weights_after = network.all_weights();

        // the output delta is now 2 * (2.92 - 3) and half of the last update carries over
        let output_bias_update = weights_after[3] - weights_before[3];
        assert_approx_equal_distance(&[output_bias_update], &[0.016 + 0.5 * 0.4], 0.0001);
    }

    #[test]
    fn should_fail_with_stale_state_without_an_infer() {
        let mut network = NeuralNet::seeded(
            Structure::new(2, 2, 1).unwrap(),
            Configuration::default(),
            0,
        );

        assert_eq!(
            network.backpropagate(&[1.0]),
            Err(BackpropagationError::StaleState)
        );

        network.infer(&[0.0, 1.0]).unwrap();
        network.backpropagate(&[1.0]).unwrap();

        assert_eq!(network.state(), NetworkState::Ready);
        assert_eq!(
            network.backpropagate(&[1.0]),
            Err(BackpropagationError::StaleState)
        );
    }

    #[test]
    fn should_leave_everything_untouched_on_a_wrong_input_size() {
        let mut network = NeuralNet::seeded(
            Structure::new(2, 2, 1).unwrap(),
            Configuration::default(),
            0,
        );
        let weights = network.all_weights();

        assert_eq!(
            network.infer(&[1.0, 2.0, 3.0]),
            Err(InferenceError::InputSizeMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(network.all_weights(), weights);
        assert_eq!(network.state(), NetworkState::Ready);
    }

    #[test]
    fn should_keep_the_cached_pass_on_a_wrong_label_size() {
        let mut network = NeuralNet::seeded(
            Structure::new(2, 2, 1).unwrap(),
            Configuration::default(),
            0,
        );
        let weights = network.all_weights();

        network.infer(&[1.0, 0.0]).unwrap();
        assert_eq!(
            network.backpropagate(&[1.0, 0.0]),
            Err(BackpropagationError::LabelSizeMismatch {
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(network.all_weights(), weights);
        assert_eq!(network.state(), NetworkState::Inferred);

        network.backpropagate(&[1.0]).unwrap();
        assert_ne!(network.all_weights(), weights);
    }

    #[test]
    fn should_reduce_the_cost_of_a_sample_after_backpropagating_it() {
        let mut network = NeuralNet::seeded(
            Structure::new(3, 5, 2).unwrap(),
            Configuration::default(),
            21,
        );
        let inputs = [0.3, -0.7, 0.9];
        let labels = [0.9, 0.1];
        let cost = network.configuration().cost().clone();

        let before = cost.cost(&network.infer(&inputs).unwrap(), &labels);
        network.backpropagate(&labels).unwrap();
        let after = cost.cost(&network.predict(&inputs).unwrap(), &labels);

        assert!(after < before);
    }

    #[test]
    fn should_learn_from_an_explicit_trace_like_from_a_cached_one() {
        let structure = Structure::new(2, 3, 1).unwrap();
        let mut cached = NeuralNet::seeded(structure, Configuration::default(), 5);
        let mut explicit = cached.clone();

        cached.infer(&[0.2, 0.8]).unwrap();
        cached.backpropagate(&[1.0]).unwrap();

        let trace = explicit.forward(&[0.2, 0.8]).unwrap();
        explicit.backpropagate_trace(&trace, &[1.0]).unwrap();

        assert_eq!(cached.all_weights(), explicit.all_weights());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "one value per output")]
    fn should_panic_on_a_cost_derivative_of_the_wrong_length() {
        let configuration = Configuration::new(
            ActivationFunction::sigmoid(),
            ActivationFunction::sigmoid(),
            CostFunction::new(
                "first_output_only",
                |outputs, expected| (outputs[0] - expected[0]).powi(2),
                |outputs, expected| Vec::from([2.0 * (outputs[0] - expected[0])]),
            ),
            0.1,
            0.0,
        )
        .unwrap();
        let mut network = NeuralNet::seeded(Structure::new(2, 2, 3).unwrap(), configuration, 0);

        network.infer(&[1.0, 0.0]).unwrap();
        let _ = network.backpropagate(&[1.0, 0.0, 1.0]);
    }

    #[test]
    fn should_reject_a_trace_from_another_structure() {
        let other = NeuralNet::seeded(
            Structure::new(2, 4, 1).unwrap(),
            Configuration::default(),
            0,
        );
        let mut network = NeuralNet::seeded(
            Structure::new(2, 3, 1).unwrap(),
            Configuration::default(),
            0,
        );

        let trace = other.forward(&[0.0, 1.0]).unwrap();

        assert_eq!(
            network.backpropagate_trace(&trace, &[1.0]),
            Err(BackpropagationError::TraceStructureMismatch {
                trace: *other.structure(),
                network: *network.structure(),
            })
        );
    }

    #[test]
    fn should_predict_batches_in_order() {
        let network = NeuralNet::seeded(
            Structure::new(2, 3, 2).unwrap(),
            Configuration::default(),
            8,
        );
        let samples: Vec<Vec<f32>> = (0..32)
            .map(|i| Vec::from([i as f32 / 32.0, 1.0 - i as f32 / 32.0]))
            .collect();

        let batch = network.predict_batch(&samples).unwrap();

        for (sample, outputs) in samples.iter().zip(batch) {
            assert_eq!(network.predict(sample).unwrap(), outputs);
        }
        assert!(network.predict_batch(&[Vec::from([1.0])]).is_err());
    }
}
