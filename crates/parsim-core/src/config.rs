//! Run configuration for parsim
//!
//! Configuration is read from an optional `parsim.toml` file; CLI flags take
//! precedence over file values, and `PARSIM_EMBEDDING_API_KEY` supplies the
//! endpoint credential so it never lands in a checked-in file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregate::DiagonalPolicy;
use crate::error::{ParsimError, Result};

/// Default number of closest paragraphs reported per paragraph
pub const DEFAULT_TOP_K: usize = 5;

/// Default timeout for embedding requests
pub const DEFAULT_EMBEDDING_TIMEOUT_SECONDS: u64 = 60;

/// Default embedding model name sent to the endpoint
pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";

/// Config file looked up in the working directory when `--config` is absent
pub const CONFIG_FILE_NAME: &str = "parsim.toml";

/// Configuration for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Number of closest paragraphs reported per paragraph
    pub top_k: usize,
    /// Whether article self-averages keep paragraph self-similarity entries
    pub diagonal: DiagonalPolicy,
    /// Embedding endpoint settings
    pub embedding: EmbeddingConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            diagonal: DiagonalPolicy::default(),
            embedding: EmbeddingConfig::default(),
        }
    }
}

/// Configuration for the embedding endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbeddingConfig {
    /// URL of the embedding endpoint (empty means unconfigured)
    pub url: String,
    /// Model name sent with each request
    pub model: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// Bearer token for the endpoint, from PARSIM_EMBEDDING_API_KEY
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            timeout_seconds: DEFAULT_EMBEDDING_TIMEOUT_SECONDS,
            api_key: None,
        }
    }
}

impl EmbeddingConfig {
    /// Check if an endpoint has been configured
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

impl AnalysisConfig {
    /// Load configuration from an explicit path, or from `parsim.toml` in the
    /// working directory if present, or defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILE_NAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(key) = std::env::var("PARSIM_EMBEDDING_API_KEY") {
            if !key.is_empty() {
                config.embedding.api_key = Some(key);
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Reject values no run can proceed with
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(ParsimError::InvalidConfig {
                reason: "top_k must be at least 1".to_string(),
            });
        }
        if self.embedding.timeout_seconds == 0 {
            return Err(ParsimError::InvalidConfig {
                reason: "embedding timeout_seconds must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
