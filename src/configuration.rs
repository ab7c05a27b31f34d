//! The module that contains the hyperparameters of a trilayer network.

use thiserror::Error;

use crate::activations::ActivationFunction;
use crate::cost_functions::CostFunction;

#[derive(Debug, Error, PartialEq)]
/// The errors that can happen when setting up the hyperparameters of a network.
pub enum ConfigurationError {
    /// Happens when the learning rate or the momentum is NaN or infinite.
    #[error("invalid configuration, {parameter} must be a finite number but was {value}")]
    InvalidConfiguration {
        /// The name of the offending hyperparameter
        parameter: &'static str,
        /// The value that was rejected
        value: f32,
    },
}

fn ensure_finite(parameter: &'static str, value: f32) -> Result<f32, ConfigurationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigurationError::InvalidConfiguration { parameter, value })
    }
}

#[derive(Debug, Clone)]
/// The hyperparameters used both for inferring and for training a network.
///
/// The activations and the cost function are fixed once the Configuration is created, while the
/// **learning rate** and the **momentum** can be tuned at any time, even in between manual
/// training steps, as long as they stay finite.
pub struct Configuration {
    hidden_activation: ActivationFunction,
    output_activation: ActivationFunction,
    cost: CostFunction,
    learning_rate: f32,
    momentum: f32,
}

impl Configuration {
    /// Creates a new Configuration, failing if the learning rate or the momentum are not finite.
    ///
    /// The **momentum** is how much of the last weight update is added to the current one, and
    /// is usually somewhere around `0.9`. Neither it nor the learning rate is restricted to any
    /// range beyond being finite.
    pub fn new(
        hidden_activation: ActivationFunction,
        output_activation: ActivationFunction,
        cost: CostFunction,
        learning_rate: f32,
        momentum: f32,
    ) -> Result<Self, ConfigurationError> {
        Ok(Configuration {
            hidden_activation,
            output_activation,
            cost,
            learning_rate: ensure_finite("learning_rate", learning_rate)?,
            momentum: ensure_finite("momentum", momentum)?,
        })
    }

    /// The activation applied to the hidden layer.
    pub fn hidden_activation(&self) -> &ActivationFunction {
        &self.hidden_activation
    }

    /// The activation applied to the output layer.
    pub fn output_activation(&self) -> &ActivationFunction {
        &self.output_activation
    }

    /// The cost function minimized during training.
    pub fn cost(&self) -> &CostFunction {
        &self.cost
    }

    /// How much of the gradient is applied on each weight update.
    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// How much of the previous weight update is carried into the next one.
    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    /// Changes the learning rate, leaving it untouched if **learning_rate** is not finite.
    pub fn set_learning_rate(&mut self, learning_rate: f32) -> Result<(), ConfigurationError> {
        self.learning_rate = ensure_finite("learning_rate", learning_rate)?;
        Ok(())
    }

    /// Changes the momentum, leaving it untouched if **momentum** is not finite.
    pub fn set_momentum(&mut self, momentum: f32) -> Result<(), ConfigurationError> {
        self.momentum = ensure_finite("momentum", momentum)?;
        Ok(())
    }
}

impl Default for Configuration {
    /// Sigmoid on both layers, the Mean Squared cost, a learning rate of `0.1` and a momentum of
    /// `0.5`.
    fn default() -> Self {
        Configuration {
            hidden_activation: ActivationFunction::sigmoid(),
            output_activation: ActivationFunction::sigmoid(),
            cost: CostFunction::mean_squared(),
            learning_rate: 0.1,
            momentum: 0.5,
        }
    }
}
