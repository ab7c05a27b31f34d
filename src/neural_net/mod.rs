//! The module that contains the trilayer network itself.

pub mod persistence;
pub mod propagation;
pub mod training;

use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

use crate::configuration::Configuration;
use crate::initializers::{Initializer, InitializerTrait};
use crate::structure::Structure;
use crate::types::NetworkState;
use crate::utils::MatrixOperations;

pub use propagation::InferenceTrace;

#[derive(Debug, Error, PartialEq, Eq)]
/// The errors that can happen when replacing the weights of a network.
pub enum WeightsError {
    /// Happens when the amount of weights given is not exactly the amount of parameters the
    /// network's Structure has.
    #[error("expected {expected} weights but got {actual}")]
    WeightCountMismatch {
        /// The amount of parameters of the network
        expected: usize,
        /// The amount of weights that were given
        actual: usize,
    },
}

#[derive(Debug, Clone)]
/// A fully connected feed-forward network with an input, a hidden and an output layer, trained
/// one sample at a time by backpropagation with momentum.
///
/// The weights of each layer live in a row-major matrix with one row per unit of the layer and
/// one column per unit of the layer before it, plus a last column holding the bias weight, which
/// is fed by an implicit input that is always 1.
///
/// Training happens in two calls: `infer` caches the activations of every layer, and the next
/// `backpropagate` consumes them to update the weights.
///
/// ```
/// use trilayer::{Configuration, NeuralNet, Structure};
///
/// let structure = Structure::new(2, 3, 1).unwrap();
/// let mut network = NeuralNet::seeded(structure, Configuration::default(), 7);
///
/// for _ in 0..100 {
///     network.infer(&[1.0, 0.0]).unwrap();
///     network.backpropagate(&[1.0]).unwrap();
/// }
///
/// assert!(network.infer(&[1.0, 0.0]).unwrap()[0] > 0.5);
/// ```
pub struct NeuralNet {
    structure: Structure,
    configuration: Configuration,

    input_to_hidden: Vec<Vec<f32>>,
    hidden_to_output: Vec<Vec<f32>>,

    input_to_hidden_last_updates: Vec<Vec<f32>>,
    hidden_to_output_last_updates: Vec<Vec<f32>>,

    last_trace: Option<InferenceTrace>,
}

impl NeuralNet {
    /// Creates a new network with Glorot uniform weights sampled from the thread's random number
    /// generator.
    pub fn new(structure: Structure, configuration: Configuration) -> Self {
        Self::with_initializer(
            structure,
            configuration,
            &Initializer::default(),
            &mut rand::thread_rng(),
        )
    }

    /// Creates a new network with Glorot uniform weights that are always the same for the same
    /// **seed**.
    pub fn seeded(structure: Structure, configuration: Configuration, seed: u64) -> Self {
        Self::with_initializer(
            structure,
            configuration,
            &Initializer::default(),
            &mut StdRng::seed_from_u64(seed),
        )
    }

    /// Creates a new network with weights, biases included, generated by **initializer**.
    pub fn with_initializer<R: Rng + ?Sized>(
        structure: Structure,
        configuration: Configuration,
        initializer: &Initializer,
        rng: &mut R,
    ) -> Self {
        let input_to_hidden = initializer.initialize_2d(
            structure.input_to_hidden_shape(),
            structure.inputs(),
            structure.hidden(),
            rng,
        );
        let hidden_to_output = initializer.initialize_2d(
            structure.hidden_to_output_shape(),
            structure.hidden(),
            structure.outputs(),
            rng,
        );

        Self::from_matrices(structure, configuration, input_to_hidden, hidden_to_output)
    }

    /// Creates a network from weights laid out the same way `all_weights` returns them.
    pub fn from_weights(
        structure: Structure,
        configuration: Configuration,
        weights: &[f32],
    ) -> Result<Self, WeightsError> {
        let (input_to_hidden, hidden_to_output) = decode_weights(&structure, weights)?;

        Ok(Self::from_matrices(
            structure,
            configuration,
            input_to_hidden,
            hidden_to_output,
        ))
    }

    fn from_matrices(
        structure: Structure,
        configuration: Configuration,
        input_to_hidden: Vec<Vec<f32>>,
        hidden_to_output: Vec<Vec<f32>>,
    ) -> Self {
        NeuralNet {
            structure,
            configuration,
            input_to_hidden_last_updates: input_to_hidden.zeros_like(),
            hidden_to_output_last_updates: hidden_to_output.zeros_like(),
            input_to_hidden,
            hidden_to_output,
            last_trace: None,
        }
    }

    /// The shape of this network.
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// The hyperparameters of this network.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// The hyperparameters of this network, for tuning the learning rate and the momentum in
    /// between training steps.
    pub fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.configuration
    }

    /// Whether or not there are cached activations waiting for `backpropagate`.
    pub fn state(&self) -> NetworkState {
        if self.last_trace.is_some() {
            NetworkState::Inferred
        } else {
            NetworkState::Ready
        }
    }

    /// The `hidden x (inputs + 1)` matrix of weights going from the inputs into the hidden layer.
    pub fn input_to_hidden_weights(&self) -> &[Vec<f32>] {
        &self.input_to_hidden
    }

    /// The `outputs x (hidden + 1)` matrix of weights going from the hidden layer into the
    /// outputs.
    pub fn hidden_to_output_weights(&self) -> &[Vec<f32>] {
        &self.hidden_to_output
    }

    /// All of the weights of the network, biases included, flattened row after row with the
    /// input to hidden matrix coming before the hidden to output one.
    pub fn all_weights(&self) -> Vec<f32> {
        let mut weights = Vec::with_capacity(self.structure.parameter_count());

        self.input_to_hidden.flatten_into(&mut weights);
        self.hidden_to_output.flatten_into(&mut weights);

        weights
    }

    /// Replaces all of the weights of the network by **weights**, in the same order as
    /// `all_weights` gives them.
    ///
    /// Since the previous updates are meaningless for the new weights, the momentum is reset,
    /// and so are any cached activations.
    pub fn set_weights(&mut self, weights: &[f32]) -> Result<(), WeightsError> {
        let (input_to_hidden, hidden_to_output) = decode_weights(&self.structure, weights)?;

        self.input_to_hidden_last_updates = input_to_hidden.zeros_like();
        self.hidden_to_output_last_updates = hidden_to_output.zeros_like();
        self.input_to_hidden = input_to_hidden;
        self.hidden_to_output = hidden_to_output;
        self.last_trace = None;

        Ok(())
    }
}

fn decode_weights(
    structure: &Structure,
    weights: &[f32],
) -> Result<(Vec<Vec<f32>>, Vec<Vec<f32>>), WeightsError> {
    if weights.len() != structure.parameter_count() {
        return Err(WeightsError::WeightCountMismatch {
            expected: structure.parameter_count(),
            actual: weights.len(),
        });
    }

    let (hidden_rows, hidden_columns) = structure.input_to_hidden_shape();
    let (input_to_hidden, hidden_to_output) = weights.split_at(hidden_rows * hidden_columns);
    let (_, output_columns) = structure.hidden_to_output_shape();

    Ok((
        input_to_hidden
            .chunks(hidden_columns)
            .map(|row| row.to_vec())
            .collect(),
        hidden_to_output
            .chunks(output_columns)
            .map(|row| row.to_vec())
            .collect(),
    ))
}
