//! Errors shared by every ftee crate
//!
//! Anything that reaches the user is a [`ContractError`]; [`ErrorKind`]
//! gives its category.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::DestinationName;

/// Run-fatal error categories.
///
/// Every run failure maps onto exactly one of these; callers that need to
/// branch on the cause match on the kind rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Configuration could not be loaded or is invalid
    Config,
    /// An input path cannot be opened for reading
    InputOpen,
    /// Delimiter text present but never as a whitespace-bounded field
    UnboundedDelimiter,
    /// More than one standalone delimiter field in a line
    MultipleDelimiters,
    /// Delimiter field with no destination names after it
    MissingTargets,
    /// An output path cannot be created or truncated
    DestinationCreate,
    /// Writing or flushing an output failed
    Write,
    /// Reading an input failed before end-of-stream
    Read,
}

/// Malformed directive line.
///
/// Message text matches what users of the tool have always seen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("Delimiter {delimiter} must be surrounded by whitespace")]
    UnboundedDelimiter { delimiter: String },

    #[error("Found more than one delimiter {delimiter} in line.")]
    MultipleDelimiters { delimiter: String },

    #[error("No file names found after delimiter {delimiter}")]
    MissingTargets { delimiter: String },
}

impl DirectiveError {
    pub fn unbounded_delimiter(delimiter: impl Into<String>) -> Self {
        Self::UnboundedDelimiter {
            delimiter: delimiter.into(),
        }
    }

    pub fn multiple_delimiters(delimiter: impl Into<String>) -> Self {
        Self::MultipleDelimiters {
            delimiter: delimiter.into(),
        }
    }

    pub fn missing_targets(delimiter: impl Into<String>) -> Self {
        Self::MissingTargets {
            delimiter: delimiter.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnboundedDelimiter { .. } => ErrorKind::UnboundedDelimiter,
            Self::MultipleDelimiters { .. } => ErrorKind::MultipleDelimiters,
            Self::MissingTargets { .. } => ErrorKind::MissingTargets,
        }
    }
}

/// Run-fatal error, located at an input line where one applies
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Config =====
    /// Config file unreadable or malformed
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Config value out of range
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Input =====
    /// Input path could not be opened
    #[error("couldn't open input file {}: {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input stream failed mid-read
    #[error("error reading {} at line {line}: {source}", .path.display())]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: io::Error,
    },

    /// Malformed directive line
    #[error("error processing {} line {line}: {source}", .path.display())]
    Directive {
        path: PathBuf,
        line: u64,
        #[source]
        source: DirectiveError,
    },

    // ===== Destinations =====
    /// Output destination could not be created
    #[error(
        "error processing {} line {line}: couldn't create output file {name}: {source}",
        .path.display()
    )]
    DestinationCreate {
        path: PathBuf,
        line: u64,
        name: DestinationName,
        #[source]
        source: io::Error,
    },

    /// Payload write to an active destination failed
    #[error(
        "error processing {} line {line}: write to {name} failed: {source}",
        .path.display()
    )]
    Write {
        path: PathBuf,
        line: u64,
        name: DestinationName,
        #[source]
        source: io::Error,
    },

    /// Flushing a destination at the end of the run failed
    #[error("couldn't flush output file {name}: {source}")]
    Flush {
        name: DestinationName,
        #[source]
        source: io::Error,
    },
}

impl ContractError {
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn input_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, line: u64, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            line,
            source,
        }
    }

    pub fn directive(path: impl Into<PathBuf>, line: u64, source: DirectiveError) -> Self {
        Self::Directive {
            path: path.into(),
            line,
            source,
        }
    }

    pub fn flush(name: DestinationName, source: io::Error) -> Self {
        Self::Flush { name, source }
    }

    /// Error category for this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigParse { .. } | Self::ConfigValidation { .. } => ErrorKind::Config,
            Self::InputOpen { .. } => ErrorKind::InputOpen,
            Self::Read { .. } => ErrorKind::Read,
            Self::Directive { source, .. } => source.kind(),
            Self::DestinationCreate { .. } => ErrorKind::DestinationCreate,
            Self::Write { .. } | Self::Flush { .. } => ErrorKind::Write,
        }
    }
}
