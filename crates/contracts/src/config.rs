//! Run configuration contracts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ContractError;

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = "FTEE";

/// Default capacity of each destination's write buffer.
pub const DEFAULT_OUTPUT_BUFFER_BYTES: usize = 8 * 1024;

/// Directive marker token.
///
/// Compared literally against whitespace-separated fields, so it can be
/// neither empty nor contain whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(String);

impl Delimiter {
    pub fn new(token: impl Into<String>) -> Result<Self, ContractError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ContractError::config_validation(
                "delimiter",
                "delimiter cannot be empty",
            ));
        }
        if token.chars().any(char::is_whitespace) {
            return Err(ContractError::config_validation(
                "delimiter",
                format!("delimiter must not contain whitespace, got {token:?}"),
            ));
        }
        Ok(Self(token))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER.to_string())
    }
}

impl TryFrom<String> for Delimiter {
    type Error = ContractError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Delimiter> for String {
    fn from(value: Delimiter) -> Self {
        value.0
    }
}

impl FromStr for Delimiter {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Delimiter {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settings for one splitting run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Directive marker token
    pub delimiter: Delimiter,

    /// Write buffer capacity per destination, in bytes
    pub output_buffer_bytes: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            output_buffer_bytes: DEFAULT_OUTPUT_BUFFER_BYTES,
        }
    }
}
