use std::fmt::{self, Display};

use thiserror::Error;

use crate::structure::Structure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One of the two halves of a Dataset.
pub enum Split {
    /// The samples backpropagated on every epoch
    Training,
    /// The samples only used for measuring the cost after every epoch
    Validation,
}

impl Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Training => write!(f, "training"),
            Split::Validation => write!(f, "validation"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whether something is about the inputs or about the labels of a split.
pub enum Collection {
    /// The vectors fed into the network
    Inputs,
    /// The vectors the network should output
    Labels,
}

impl Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Inputs => write!(f, "inputs"),
            Collection::Labels => write!(f, "labels"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What exactly is wrong with the shape of a split.
pub enum ShapeMismatch {
    /// There is not one label vector for each input vector.
    SampleCount {
        /// The amount of input vectors
        inputs: usize,
        /// The amount of label vectors
        labels: usize,
    },
    /// One of the vectors does not have the size the Structure requires.
    VectorSize {
        /// Whether the vector is an input or a label
        collection: Collection,
        /// The position of the vector in its collection
        index: usize,
        /// The size the Structure requires
        expected: usize,
        /// The size of the vector
        actual: usize,
    },
}

impl Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeMismatch::SampleCount { inputs, labels } => {
                write!(f, "{} input vectors but {} label vectors", inputs, labels)
            }
            ShapeMismatch::VectorSize {
                collection,
                index,
                expected,
                actual,
            } => write!(
                f,
                "{} vector #{} has {} values instead of {}",
                collection, index, actual, expected
            ),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
/// The errors that can happen when creating a Dataset.
pub enum DatasetError {
    /// Happens when a split does not fit the Structure or its inputs and labels do not pair up.
    #[error("bad {split} split, {mismatch}")]
    DatasetShapeMismatch {
        /// The split that is wrong
        split: Split,
        /// What is wrong with it
        mismatch: ShapeMismatch,
    },
    /// Happens when a split has no samples at all.
    #[error("the {split} split has no samples")]
    EmptySplit {
        /// The split that is empty
        split: Split,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Training and validation samples that are known to fit a Structure.
///
/// Only the amount of inputs and outputs of the Structure matter, so a Dataset can be used to
/// train networks with any amount of hidden units.
pub struct Dataset {
    structure: Structure,
    training_inputs: Vec<Vec<f32>>,
    training_labels: Vec<Vec<f32>>,
    validation_inputs: Vec<Vec<f32>>,
    validation_labels: Vec<Vec<f32>>,
}

impl Dataset {
    /// Creates a new Dataset, failing if any of the splits is empty, if the inputs and labels of
    /// a split do not pair up, or if any vector does not have the size **structure** requires.
    pub fn new(
        structure: Structure,
        training_inputs: Vec<Vec<f32>>,
        training_labels: Vec<Vec<f32>>,
        validation_inputs: Vec<Vec<f32>>,
        validation_labels: Vec<Vec<f32>>,
    ) -> Result<Self, DatasetError> {
        validate_split(
            Split::Training,
            &structure,
            &training_inputs,
            &training_labels,
        )?;
        validate_split(
            Split::Validation,
            &structure,
            &validation_inputs,
            &validation_labels,
        )?;

        Ok(Dataset {
            structure,
            training_inputs,
            training_labels,
            validation_inputs,
            validation_labels,
        })
    }

    /// The Structure this Dataset was validated against.
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Whether the samples fit a network with **structure**, hidden units aside.
    pub fn fits(&self, structure: &Structure) -> bool {
        self.structure.inputs() == structure.inputs()
            && self.structure.outputs() == structure.outputs()
    }

    /// The input vectors of the training split.
    pub fn training_inputs(&self) -> &[Vec<f32>] {
        &self.training_inputs
    }

    /// The label vectors of the training split, one per input vector.
    pub fn training_labels(&self) -> &[Vec<f32>] {
        &self.training_labels
    }

    /// The input vectors of the validation split.
    pub fn validation_inputs(&self) -> &[Vec<f32>] {
        &self.validation_inputs
    }

    /// The label vectors of the validation split, one per input vector.
    pub fn validation_labels(&self) -> &[Vec<f32>] {
        &self.validation_labels
    }

    /// The amount of training samples.
    pub fn training_len(&self) -> usize {
        self.training_inputs.len()
    }

    /// The amount of validation samples.
    pub fn validation_len(&self) -> usize {
        self.validation_inputs.len()
    }

    /// Every training sample as `(inputs, labels)`, in the order they were given.
    pub fn training_pairs(&self) -> impl Iterator<Item = (&[f32], &[f32])> {
        pairs(&self.training_inputs, &self.training_labels)
    }

    /// Every validation sample as `(inputs, labels)`, in the order they were given.
    pub fn validation_pairs(&self) -> impl Iterator<Item = (&[f32], &[f32])> {
        pairs(&self.validation_inputs, &self.validation_labels)
    }
}

fn pairs<'a>(
    inputs: &'a [Vec<f32>],
    labels: &'a [Vec<f32>],
) -> impl Iterator<Item = (&'a [f32], &'a [f32])> {
    inputs
        .iter()
        .zip(labels)
        .map(|(inputs, labels)| (inputs.as_slice(), labels.as_slice()))
}

fn validate_split(
    split: Split,
    structure: &Structure,
    inputs: &[Vec<f32>],
    labels: &[Vec<f32>],
) -> Result<(), DatasetError> {
    if inputs.len() != labels.len() {
        return Err(DatasetError::DatasetShapeMismatch {
            split,
            mismatch: ShapeMismatch::SampleCount {
                inputs: inputs.len(),
                labels: labels.len(),
            },
        });
    }

    if inputs.is_empty() {
        return Err(DatasetError::EmptySplit { split });
    }

    validate_vectors(split, Collection::Inputs, structure.inputs(), inputs)?;
    validate_vectors(split, Collection::Labels, structure.outputs(), labels)
}

fn validate_vectors(
    split: Split,
    collection: Collection,
    expected: usize,
    vectors: &[Vec<f32>],
) -> Result<(), DatasetError> {
    match vectors
        .iter()
        .enumerate()
        .find(|(_, vector)| vector.len() != expected)
    {
        Some((index, vector)) => Err(DatasetError::DatasetShapeMismatch {
            split,
            mismatch: ShapeMismatch::VectorSize {
                collection,
                index,
                expected,
                actual: vector.len(),
            },
        }),
        None => Ok(()),
    }
}
