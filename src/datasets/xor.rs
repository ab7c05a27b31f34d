//! The XOR truth table, the smallest problem a network without a hidden layer cannot solve.

use super::dataset::{Dataset, DatasetError};
use crate::structure::Structure;

impl Dataset {
    /// The four samples of the XOR truth table, used both for training and for validation.
    ///
    /// Fails if **structure** does not have 2 inputs and 1 output.
    pub fn xor(structure: Structure) -> Result<Self, DatasetError> {
        let inputs: Vec<Vec<f32>> = Vec::from([
            Vec::from([0.0, 0.0]),
            Vec::from([0.0, 1.0]),
            Vec::from([1.0, 0.0]),
            Vec::from([1.0, 1.0]),
        ]);
        let labels: Vec<Vec<f32>> = Vec::from([
            Vec::from([0.0]),
            Vec::from([1.0]),
            Vec::from([1.0]),
            Vec::from([0.0]),
        ]);

        Dataset::new(structure, inputs.clone(), labels.clone(), inputs, labels)
    }
}
