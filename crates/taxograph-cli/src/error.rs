//! CLI error type and exit-code mapping.
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | General error (IO, serialization) |
//! | 2 | Cyclic relationship data |
//! | 3 | Unusable release input (missing file/column, parse failure) |
//! | 4 | Unknown target concept |

use std::path::PathBuf;

use thiserror::Error;

use taxograph_graph::GraphError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// The release path cannot be found or read.
    #[error("cannot find or read release path: {}", .0.display())]
    ReleasePath(PathBuf),

    /// A required release file is absent from the directory.
    #[error("no {kind} file found under {}", .dir.display())]
    MissingReleaseFile { kind: &'static str, dir: PathBuf },

    /// A release file lacks a column the parser needs.
    #[error("release file {} is missing required column `{column}`", .path.display())]
    MissingColumn {
        column: &'static str,
        path: PathBuf,
    },

    /// Delimited parsing failed.
    #[error("failed to parse release file: {0}")]
    Csv(#[from] csv::Error),

    /// Graph construction or query failure.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// IO failure outside the csv layer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization failure.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Graph(GraphError::CyclicGraph { .. }) => 2,
            Self::ReleasePath(_)
            | Self::MissingReleaseFile { .. }
            | Self::MissingColumn { .. }
            | Self::Csv(_) => 3,
            Self::Graph(GraphError::UnknownConcept(_)) => 4,
            Self::Graph(_) | Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
