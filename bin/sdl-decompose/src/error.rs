use std::path::PathBuf;

use sdl_decompose::{DecompositionError, OperationKind};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("SDL file not found: {}", .0.display())]
    SdlFileNotFound(PathBuf),
    #[error("No SDL content provided via stdin")]
    EmptyStdin,
    #[error("Operation '{operation}' not found in {kind} type")]
    OperationNotFound {
        operation: String,
        kind: OperationKind,
    },
    #[error(transparent)]
    Decomposition(#[from] DecompositionError),
    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
