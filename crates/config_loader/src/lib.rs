//! # Config Loader
//!
//! Reads an ftee run configuration from disk.
//!
//! A config file sets the delimiter and the output buffer size. Its format
//! follows the extension: `.toml` or `.json`. Missing keys take their
//! defaults, and the result is validated before it is handed out.
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_from_path(Path::new("ftee.toml")).unwrap();
//! println!("Delimiter: {}", config.delimiter);
//! ```

mod parser;
mod validator;

pub use contracts::RunConfig;
pub use parser::ConfigFormat;

use contracts::ContractError;
use std::path::Path;

/// Entry points for turning a file or string into a checked [`RunConfig`]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read `path`, choosing TOML or JSON by its extension.
    ///
    /// Every failure, unreadable file included, is a `Config`-kind error.
    pub fn load_from_path(path: &Path) -> Result<RunConfig, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load from `path` if given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<RunConfig, ContractError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Ok(RunConfig::default()),
        }
    }

    /// Parse `content` in `format`, then validate it
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<RunConfig, ContractError> {
        let config = parser::parse(content, format)?;
        validator::validate(&config)?;
        Ok(config)
    }

    /// Validate a configuration assembled elsewhere (e.g. after CLI overrides)
    pub fn validate(config: &RunConfig) -> Result<(), ContractError> {
        validator::validate(config)
    }

    /// Render `config` as a TOML config file
    pub fn to_toml(config: &RunConfig) -> Result<String, ContractError> {
        toml::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Render `config` as a JSON config file
    pub fn to_json(config: &RunConfig) -> Result<String, ContractError> {
        serde_json::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Err(ContractError::config_parse(format!(
                "{} has no .toml or .json extension",
                path.display()
            )));
        };

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!(
                "{}: .{ext} is not a supported config format",
                path.display()
            ))
        })
    }

    fn read_file(path: &Path) -> Result<String, ContractError> {
        std::fs::read_to_string(path).map_err(|e| ContractError::ConfigParse {
            message: format!("cannot read {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })
    }
}
