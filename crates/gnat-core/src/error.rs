//! Error types for the core primitives

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while building or querying the core structures
#[derive(Error, Debug)]
pub enum CoreError {
    /// Neuron id does not fit the declared population
    #[error("Neuron {id} outside population of {n_cells} cells")]
    NeuronOutOfRange {
        /// Offending neuron id
        id: u32,
        /// Declared population size
        n_cells: u32,
    },

    /// Synaptic weight must be positive so that -ln w is finite
    #[error("Invalid synaptic weight {weight}: must be finite and > 0")]
    InvalidWeight {
        /// Offending weight value
        weight: f32,
    },

    /// Conduction delay must be non-negative
    #[error("Invalid synaptic delay {delay}: must be finite and >= 0")]
    InvalidDelay {
        /// Offending delay value
        delay: f32,
    },

    /// A spike pair needs two distinct timestamps
    #[error("Degenerate spike pair: both spikes of neuron {neuron} at t = {ts}")]
    DegeneratePair {
        /// Neuron both spikes belong to
        neuron: u32,
        /// Shared timestamp
        ts: u64,
    },

    /// Invalid analysis parameter
    #[error("Invalid parameter {name} = {value}: expected {expected}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Value as given
        value: String,
        /// Constraint that was violated
        expected: &'static str,
    },
}

impl CoreError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }
}
