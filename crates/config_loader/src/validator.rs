//! Config validation
//!
//! Rules:
//! - output_buffer_bytes > 0
//!
//! Delimiter rules are enforced by `Delimiter` itself while deserializing.

use contracts::{ContractError, RunConfig};

/// Validate a RunConfig
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(config: &RunConfig) -> Result<(), ContractError> {
    validate_buffer(config.output_buffer_bytes)?;
    Ok(())
}

fn validate_buffer(bytes: usize) -> Result<(), ContractError> {
    if bytes == 0 {
        return Err(ContractError::config_validation(
            "output_buffer_bytes",
            "output_buffer_bytes must be > 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&RunConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let config = RunConfig {
            output_buffer_bytes: 0,
            ..RunConfig::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(
            err,
            ContractError::ConfigValidation { ref field, .. } if field == "output_buffer_bytes"
        ));
    }
}
