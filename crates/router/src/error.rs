//! Router error types

use std::io;
use std::path::Path;

use contracts::{ContractError, DestinationName};
use thiserror::Error;

/// Router-specific errors
#[derive(Debug, Error)]
pub enum RouterError {
    /// Destination could not be created or truncated
    #[error("couldn't create output file {name}: {source}")]
    DestinationCreate {
        name: DestinationName,
        #[source]
        source: io::Error,
    },

    /// Write to an active destination failed
    #[error("write to {name} failed: {source}")]
    Write {
        name: DestinationName,
        #[source]
        source: io::Error,
    },
}

impl RouterError {
    pub fn destination_create(name: DestinationName, source: io::Error) -> Self {
        Self::DestinationCreate { name, source }
    }

    pub fn write(name: DestinationName, source: io::Error) -> Self {
        Self::Write { name, source }
    }

    /// Attach the input location that triggered this error
    pub fn at(self, path: &Path, line: u64) -> ContractError {
        match self {
            Self::DestinationCreate { name, source } => ContractError::DestinationCreate {
                path: path.to_path_buf(),
                line,
                name,
                source,
            },
            Self::Write { name, source } => ContractError::Write {
                path: path.to_path_buf(),
                line,
                name,
                source,
            },
        }
    }
}
