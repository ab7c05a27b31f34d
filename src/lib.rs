//! A small **Machine Learning** crate for creating, training, running and persisting fully
//! connected feed-forward networks with exactly three layers: the inputs, one hidden layer and
//! the outputs.
//!
//! Networks are trained one sample at a time by backpropagation with momentum, either manually
//! through `NeuralNet::infer` followed by `NeuralNet::backpropagate`, or automatically through
//! `NeuralNet::train`, which goes through a Dataset until the cost over its validation samples
//! gets below a threshold.
//!
//! ```
//! use trilayer::{ActivationFunction, Configuration, CostFunction, Dataset, NeuralNet, Structure,
//!     TrainingOptions};
//!
//! let structure = Structure::new(2, 4, 1).unwrap();
//! let configuration = Configuration::new(
//!     ActivationFunction::tanh(),
//!     ActivationFunction::sigmoid(),
//!     CostFunction::mean_squared(),
//!     0.3,
//!     0.9,
//! ).unwrap();
//!
//! let mut network = NeuralNet::seeded(structure, configuration, 0);
//! let dataset = Dataset::xor(structure).unwrap();
//!
//! let report = network.train_with(&dataset, &TrainingOptions {
//!     error_threshold: 0.05,
//!     max_epochs: Some(10),
//!     verbose: false,
//! }).unwrap();
//!
//! assert!(report.epochs <= 10);
//! ```

#![deny(missing_docs)]

pub mod activations;
pub mod configuration;
pub mod cost_functions;
pub mod datasets;
pub mod initializers;
pub mod neural_net;
pub mod structure;
pub mod types;
pub(crate) mod utils;

pub use activations::ActivationFunction;
pub use configuration::{Configuration, ConfigurationError};
pub use cost_functions::CostFunction;
pub use datasets::{Dataset, DatasetError};
pub use initializers::{Initializer, InitializerError};
pub use neural_net::persistence::{PersistedNetwork, PersistenceError};
pub use neural_net::propagation::{BackpropagationError, InferenceError, InferenceTrace};
pub use neural_net::training::{EvaluationError, TrainingError};
pub use neural_net::{NeuralNet, WeightsError};
pub use structure::{Structure, StructureError};
pub use types::{NetworkState, TrainingOptions, TrainingReport};

#[cfg(test)]
mod tests;
