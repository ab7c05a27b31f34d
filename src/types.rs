//! A module containing the small data types shared by the public API of trilayer

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which step of the infer/backpropagate protocol a network is currently at.
pub enum NetworkState {
    /// There are no cached activations, `backpropagate` would fail with a stale state.
    Ready,
    /// The activations of the last `infer` are cached and waiting for `backpropagate`.
    Inferred,
}

#[derive(Debug, Clone, PartialEq)]
/// A struct that defines the options for automatically training a network.
pub struct TrainingOptions {
    /// Training stops as soon as the average cost over the validation samples falls below this
    /// value, which must be finite and larger than zero.
    pub error_threshold: f32,
    /// The maximum amount of epochs to train for.
    ///
    /// When this is **None** training goes on until the threshold is reached, which may be
    /// forever if the network never converges.
    pub max_epochs: Option<usize>,
    /// Whether or not the training process should be verbose, showing a progress indicator with
    /// the current epoch and the validation cost after it.
    pub verbose: bool,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        TrainingOptions {
            error_threshold: 0.01,
            max_epochs: None,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// What came out of a call to `train` or `train_with`.
pub struct TrainingReport {
    /// The amount of full passes over the training samples that were made.
    pub epochs: usize,
    /// The average cost over the validation samples after the last epoch.
    pub validation_cost: f32,
    /// Whether the validation cost got below the error threshold, this can only be false when
    /// training stopped because of `max_epochs`.
    pub converged: bool,
}
