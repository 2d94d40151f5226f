//! Error types for the drivers

use thiserror::Error;

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while running an analysis
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core structure error
    #[error(transparent)]
    Core(#[from] gnat_core::CoreError),

    /// Edge output error
    #[error(transparent)]
    Output(#[from] gnat_io::IoError),

    /// The connectivity graph covers fewer cells than the raster
    #[error("Network covers {network_cells} cells but the raster has {raster_cells}")]
    PopulationMismatch {
        /// Cells declared by the network
        network_cells: u32,
        /// Cells declared by the raster
        raster_cells: u32,
    },
}
