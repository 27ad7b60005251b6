//! Environment-backed configuration.
//!
//! Every setting has a default; override with `VERIDOC_*` environment
//! variables. With no model paths configured, both model capabilities run in
//! deterministic stub mode.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_MAX_SEQ_LEN;

/// Scoring service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERIDOC_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sentence-embedding model directory (`config.json`,
    /// `model.safetensors`, `tokenizer.json`). `None` = stub mode.
    pub embed_model_dir: Option<PathBuf>,

    /// Classifier artifact directory (`manifest.json`,
    /// `weights.safetensors`). `None` = stub mode.
    pub classifier_dir: Option<PathBuf>,

    /// Max tokens fed to the sentence encoder. Default: `256`.
    pub max_seq_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embed_model_dir: None,
            classifier_dir: None,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
        }
    }
}

impl Config {
    /// Env var for the embedding model directory.
    pub const ENV_EMBED_MODEL_DIR: &'static str = "VERIDOC_EMBED_MODEL_DIR";
    /// Env var for the classifier artifact directory.
    pub const ENV_CLASSIFIER_DIR: &'static str = "VERIDOC_CLASSIFIER_DIR";
    /// Env var for the encoder max sequence length.
    pub const ENV_MAX_SEQ_LEN: &'static str = "VERIDOC_MAX_SEQ_LEN";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let embed_model_dir = Self::parse_optional_path_from_env(Self::ENV_EMBED_MODEL_DIR);
        let classifier_dir = Self::parse_optional_path_from_env(Self::ENV_CLASSIFIER_DIR);
        let max_seq_len = Self::parse_max_seq_len_from_env()?;

        Ok(Self {
            embed_model_dir,
            classifier_dir,
            max_seq_len,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in [&self.embed_model_dir, &self.classifier_dir]
            .into_iter()
            .flatten()
        {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_max_seq_len_from_env() -> Result<usize, ConfigError> {
        match env::var(Self::ENV_MAX_SEQ_LEN) {
            Ok(value) => {
                let parsed: usize =
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidMaxSeqLen {
                            value: value.clone(),
                        })?;
                if parsed == 0 {
                    return Err(ConfigError::InvalidMaxSeqLen { value });
                }
                Ok(parsed)
            }
            Err(_) => Ok(DEFAULT_MAX_SEQ_LEN),
        }
    }
}
