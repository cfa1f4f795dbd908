//! Error taxonomy for censo
//!
//! Every failure path returns to the menu loop; nothing here is fatal.

use thiserror::Error;

/// Errors raised by generation, queries and statistics export
#[derive(Error, Debug)]
pub enum CensoError {
    /// Non-positive generation count, non-numeric console input, out-of-range lookup
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    /// A query was invoked before any collection was built
    #[error("No hay datos disponibles. Use opción 0 primero.")]
    EmptyCollection,

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for censo operations
pub type Result<T> = std::result::Result<T, CensoError>;
