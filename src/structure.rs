//! The module that contains the shape descriptor of a trilayer network.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// The errors that can happen when describing the shape of a network.
pub enum StructureError {
    /// Happens when any of the three layers would end up with no units at all, or when there
    /// would be more weights than a `usize` can count.
    #[error("invalid structure {inputs}-{hidden}-{outputs}, every layer needs at least one unit and the weights must be countable")]
    InvalidStructure {
        /// The requested amount of inputs
        inputs: usize,
        /// The requested amount of hidden units
        hidden: usize,
        /// The requested amount of outputs
        outputs: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The amount of units in each one of the three layers of a network.
///
/// A Structure can only be created through `Structure::new`, so every instance is known to
/// have at least one unit per layer.
pub struct Structure {
    inputs: usize,
    hidden: usize,
    outputs: usize,
}

impl Structure {
    /// Creates a new Structure, failing if any of the layers is empty or if the amount of
    /// weights would overflow a `usize`.
    pub fn new(inputs: usize, hidden: usize, outputs: usize) -> Result<Self, StructureError> {
        if inputs == 0
            || hidden == 0
            || outputs == 0
            || checked_parameter_count(inputs, hidden, outputs).is_none()
        {
            return Err(StructureError::InvalidStructure {
                inputs,
                hidden,
                outputs,
            });
        }

        Ok(Structure {
            inputs,
            hidden,
            outputs,
        })
    }

    /// The amount of values a network with this structure receives.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// The amount of units in the hidden layer.
    pub fn hidden(&self) -> usize {
        self.hidden
    }

    /// The amount of values a network with this structure produces.
    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// The shape of the input to hidden matrix as `(rows, columns)`, the extra column being the
    /// bias weights.
    pub fn input_to_hidden_shape(&self) -> (usize, usize) {
        (self.hidden, self.inputs + 1)
    }

    /// The shape of the hidden to output matrix as `(rows, columns)`, the extra column being the
    /// bias weights.
    pub fn hidden_to_output_shape(&self) -> (usize, usize) {
        (self.outputs, self.hidden + 1)
    }

    /// The total amount of weights, biases included, of a network with this structure.
    pub fn parameter_count(&self) -> usize {
        self.hidden * (self.inputs + 1) + self.outputs * (self.hidden + 1)
    }
}

/// `hidden * (inputs + 1) + outputs * (hidden + 1)`, or None if any step overflows.
fn checked_parameter_count(inputs: usize, hidden: usize, outputs: usize) -> Option<usize> {
    let input_to_hidden = hidden.checked_mul(inputs.checked_add(1)?)?;
    let hidden_to_output = outputs.checked_mul(hidden.checked_add(1)?)?;

    input_to_hidden.checked_add(hidden_to_output)
}

#[cfg(test)]
mod tests {
    use super::{Structure, StructureError};

    #[test]
    fn should_reject_empty_layers() {
        for (i, h, o) in [(0, 1, 1), (1, 0, 1), (1, 1, 0), (0, 0, 0)] {
            assert_eq!(
                Structure::new(i, h, o),
                Err(StructureError::InvalidStructure {
                    inputs: i,
                    hidden: h,
                    outputs: o
                })
            );
        }
    }

    #[test]
    fn should_reject_structures_with_too_many_weights() {
        for (i, h, o) in [
            (usize::MAX, 1, 1),
            (usize::MAX / 2, 4, 1),
            (1, usize::MAX, 1),
            (3, 2, usize::MAX),
        ] {
            assert_eq!(
                Structure::new(i, h, o),
                Err(StructureError::InvalidStructure {
                    inputs: i,
                    hidden: h,
                    outputs: o
                })
            );
        }

        let largest = Structure::new(usize::MAX / 2 - 1, 1, 1).unwrap();
        assert_eq!(largest.parameter_count(), usize::MAX / 2 + 2);
    }

    #[test]
    fn should_count_bias_weights_in_the_parameters() {
        let structure = Structure::new(2, 3, 1).unwrap();

        assert_eq!(structure.input_to_hidden_shape(), (3, 3));
        assert_eq!(structure.hidden_to_output_shape(), (1, 4));
        assert_eq!(structure.parameter_count(), 13);
    }
}
