//! Saving and loading the weights of a trilayer network.
//!
//! Only the Structure and the weights are persisted. Activations and cost functions are
//! arbitrary closures, so the Configuration is given again when loading, which also means a saved
//! network can be loaded with other hyperparameters. The momentum of the last updates and any
//! cached pass are not persisted either, a loaded network starts both from scratch.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use savefile::{load, save, SavefileError};
use savefile_derive::Savefile;
use thiserror::Error;
use tracing::debug;

use super::NeuralNet;
use crate::configuration::Configuration;
use crate::structure::Structure;
use trilayer_macros::FromForAllUnnamedVariants;

/// The version of the persisted format written by `save` and accepted by `load`.
pub const PERSISTENCE_VERSION: u32 = 0;

#[derive(Debug, Error, FromForAllUnnamedVariants)]
/// The errors that can happen when saving or loading a network.
pub enum PersistenceError {
    /// Happens when the persisted data decodes fine but does not describe a valid network.
    #[error("corrupt network data, a {inputs}-{hidden}-{outputs} structure with {weights} weights")]
    CorruptData {
        /// The persisted amount of inputs
        inputs: u64,
        /// The persisted amount of hidden units
        hidden: u64,
        /// The persisted amount of outputs
        outputs: u64,
        /// The amount of weights that were persisted
        weights: usize,
    },
    /// Happens when savefile is not able to encode or decode the data.
    #[error("savefile error: {0:?}")]
    Savefile(SavefileError),
    /// Happens when the file cannot be created or opened.
    #[error(transparent)]
    Io(std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Savefile)]
/// Everything that is written when a network is saved.
pub struct PersistedNetwork {
    /// The amount of inputs
    pub inputs: u64,
    /// The amount of hidden units
    pub hidden: u64,
    /// The amount of outputs
    pub outputs: u64,
    /// The weights in the same order `NeuralNet::all_weights` returns them
    pub weights: Vec<f32>,
}

impl PersistedNetwork {
    fn corrupt(&self) -> PersistenceError {
        PersistenceError::CorruptData {
            inputs: self.inputs,
            hidden: self.hidden,
            outputs: self.outputs,
            weights: self.weights.len(),
        }
    }

    fn structure(&self) -> Result<Structure, PersistenceError> {
        let dimension = |value: u64| usize::try_from(value).map_err(|_| self.corrupt());

        Structure::new(
            dimension(self.inputs)?,
            dimension(self.hidden)?,
            dimension(self.outputs)?,
        )
        .map_err(|_| self.corrupt())
    }
}

impl NeuralNet {
    /// The Structure and weights of this network as they would be saved.
    pub fn to_persisted(&self) -> PersistedNetwork {
        PersistedNetwork {
            inputs: self.structure.inputs() as u64,
            hidden: self.structure.hidden() as u64,
            outputs: self.structure.outputs() as u64,
            weights: self.all_weights(),
        }
    }

    /// Rebuilds a network from persisted data, failing with `CorruptData` if the structure is
    /// invalid or the amount of weights does not match it.
    pub fn from_persisted(
        persisted: &PersistedNetwork,
        configuration: Configuration,
    ) -> Result<Self, PersistenceError> {
        let structure = persisted.structure()?;

        NeuralNet::from_weights(structure, configuration, &persisted.weights)
            .map_err(|_| persisted.corrupt())
    }

    /// Writes the Structure and the weights of the network into **writer**.
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<(), PersistenceError> {
        save(writer, PERSISTENCE_VERSION, &self.to_persisted())?;
        Ok(())
    }

    /// Reads a network written by `save` from **reader**, using **configuration** for its
    /// hyperparameters.
    pub fn load<R: Read>(
        reader: &mut R,
        configuration: Configuration,
    ) -> Result<Self, PersistenceError> {
        let persisted: PersistedNetwork = load(reader, PERSISTENCE_VERSION)?;
        Self::from_persisted(&persisted, configuration)
    }

    /// Saves the network into the file at **path**, creating or truncating it.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistenceError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);

        self.save(&mut writer)?;
        writer.flush()?;

        debug!(path = %path.as_ref().display(), structure = ?self.structure, "saved network");

        Ok(())
    }

    /// Loads a network saved with `save_file` from the file at **path**.
    pub fn load_file<P: AsRef<Path>>(
        path: P,
        configuration: Configuration,
    ) -> Result<Self, PersistenceError> {
        let mut reader = BufReader::new(File::open(path.as_ref())?);
        let network = Self::load(&mut reader, configuration)?;

        debug!(path = %path.as_ref().display(), structure = ?network.structure, "loaded network");

        Ok(network)
    }
}
