//! The automatic training loop of a trilayer network.

use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::{debug, info};

use super::propagation::{BackpropagationError, InferenceError};
use super::NeuralNet;
use crate::datasets::Dataset;
use crate::structure::Structure;
use crate::types::{TrainingOptions, TrainingReport};
use trilayer_macros::FromForAllUnnamedVariants;

#[derive(Debug, Error, PartialEq, Eq)]
/// The errors that can happen when measuring the cost of a network over many samples.
pub enum EvaluationError {
    /// Happens when there are no samples to average over.
    #[error("there are no samples to compute the cost of")]
    NoSamples,
    /// Happens when there is not one label vector for each input vector.
    #[error("{inputs} input vectors but {labels} label vectors")]
    SampleCountMismatch {
        /// The amount of input vectors
        inputs: usize,
        /// The amount of label vectors
        labels: usize,
    },
    /// Happens when a label vector does not have one value per output of the network.
    #[error("label vector #{index} has {actual} values but the network has {expected} outputs")]
    LabelSizeMismatch {
        /// The position of the label vector
        index: usize,
        /// The amount of outputs of the network
        expected: usize,
        /// The size of the label vector
        actual: usize,
    },
    /// Happens when one of the input vectors has the wrong size.
    #[error(transparent)]
    Inference(InferenceError),
}

#[derive(Debug, Error, FromForAllUnnamedVariants)]
/// The errors that can happen when training a network.
pub enum TrainingError {
    /// Happens when the error threshold is not a finite number larger than zero.
    #[error("the error threshold must be finite and positive but was {threshold}")]
    InvalidThreshold {
        /// The threshold that was given
        threshold: f32,
    },
    /// Happens when a Dataset validated against another amount of inputs or outputs is given.
    #[error("the dataset was made for a {dataset:?} network but this one is {network:?}")]
    DatasetStructureMismatch {
        /// The Structure the Dataset was validated against
        dataset: Structure,
        /// The Structure of the network being trained
        network: Structure,
    },
    /// Happens when a training sample cannot be run forward.
    #[error(transparent)]
    Inference(InferenceError),
    /// Happens when a training sample cannot be backpropagated.
    #[error(transparent)]
    Backpropagation(BackpropagationError),
    /// Happens when the validation cost cannot be computed.
    #[error(transparent)]
    Evaluation(EvaluationError),
}

fn training_progress_bar(max_epochs: Option<usize>) -> ProgressBar {
    let (progress, template) = match max_epochs {
        Some(max_epochs) => (
            ProgressBar::new(max_epochs as u64),
            "[{elapsed_precise}] [{bar:40}] epoch {pos}/{len} {msg}",
        ),
        None => (
            ProgressBar::new_spinner(),
            "{spinner} [{elapsed_precise}] epoch {pos} {msg}",
        ),
    };

    if let Ok(style) = ProgressStyle::with_template(template) {
        progress.set_style(style.progress_chars("#>-"));
    }

    progress
}

impl NeuralNet {
    /// Trains the network on the training samples of **dataset**, one sample at a time, until
    /// the average cost over its validation samples gets below **error_threshold**.
    ///
    /// There is no limit to the amount of epochs, so a network that is not able to reach the
    /// threshold will train forever. Use `train_with` for setting a limit.
    pub fn train(
        &mut self,
        dataset: &Dataset,
        error_threshold: f32,
    ) -> Result<TrainingReport, TrainingError> {
        self.train_with(
            dataset,
            &TrainingOptions {
                error_threshold,
                ..TrainingOptions::default()
            },
        )
    }

    /// Trains the network on the training samples of **dataset** until the average cost over
    /// its validation samples gets below the error threshold, or until the maximum amount of
    /// epochs is reached.
    ///
    /// At least one epoch is always run before the validation cost is looked at, unless the
    /// maximum amount of epochs is zero.
    pub fn train_with(
        &mut self,
        dataset: &Dataset,
        options: &TrainingOptions,
    ) -> Result<TrainingReport, TrainingError> {
        let threshold = options.error_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(TrainingError::InvalidThreshold { threshold });
        }

        if !dataset.fits(&self.structure) {
            return Err(TrainingError::DatasetStructureMismatch {
                dataset: *dataset.structure(),
                network: self.structure,
            });
        }

        let progress = options
            .verbose
            .then(|| training_progress_bar(options.max_epochs));

        let mut epochs = 0;
        let mut last_validation_cost = None;

        loop {
            if options.max_epochs.map_or(false, |max_epochs| epochs >= max_epochs) {
                let validation_cost = match last_validation_cost {
                    Some(validation_cost) => validation_cost,
                    None => self.validation_cost(dataset)?,
                };

                if let Some(progress) = &progress {
                    progress.finish_with_message(format!(
                        "stopped with a validation cost of {}",
                        validation_cost
                    ));
                }
                info!(epochs, validation_cost, "reached the maximum amount of epochs");

                return Ok(TrainingReport {
                    epochs,
                    validation_cost,
                    converged: false,
                });
            }

            for (inputs, labels) in dataset.training_pairs() {
                self.infer(inputs)?;
                self.backpropagate(labels)?;
            }
            epochs += 1;

            let validation_cost = self.validation_cost(dataset)?;
            debug!(epoch = epochs, validation_cost, "finished training epoch");

            if let Some(progress) = &progress {
                progress.set_message(format!("validation cost {}", validation_cost));
                progress.inc(1);
            }

            if validation_cost < threshold {
                if let Some(progress) = &progress {
                    progress.finish_with_message(format!(
                        "converged with a validation cost of {}",
                        validation_cost
                    ));
                }
                info!(epochs, validation_cost, "converged");

                return Ok(TrainingReport {
                    epochs,
                    validation_cost,
                    converged: true,
                });
            }

            last_validation_cost = Some(validation_cost);
        }
    }

    /// The average cost of the network over the validation samples of **dataset**.
    pub fn validation_cost(&self, dataset: &Dataset) -> Result<f32, EvaluationError> {
        self.average_cost(dataset.validation_inputs(), dataset.validation_labels())
    }

    /// The average cost of the network over arbitrary samples, computed in parallel without
    /// changing the network.
    pub fn average_cost(
        &self,
        inputs: &[Vec<f32>],
        labels: &[Vec<f32>],
    ) -> Result<f32, EvaluationError> {
        if inputs.len() != labels.len() {
            return Err(EvaluationError::SampleCountMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }
        if inputs.is_empty() {
            return Err(EvaluationError::NoSamples);
        }
        if let Some((index, label)) = labels
            .iter()
            .enumerate()
            .find(|(_, label)| label.len() != self.structure.outputs())
        {
            return Err(EvaluationError::LabelSizeMismatch {
                index,
                expected: self.structure.outputs(),
                actual: label.len(),
            });
        }

        let outputs = self
            .predict_batch(inputs)
            .map_err(EvaluationError::Inference)?;

        self.configuration.cost().average_cost(&outputs, labels)
    }
}
