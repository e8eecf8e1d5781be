//! Startup configuration
//!
//! [`Settings`] is the raw view of flags and environment variables.
//! [`AppConfig`] is the validated form handed to the rest of the service.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::llm::{GenerationConfig, Model, UnknownModel};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownModel(#[from] UnknownModel),

    #[error("BUCKET_NAME is required when STORAGE_BACKEND is gcs")]
    MissingBucket,

    #[error("Invalid address {addr}: {reason}")]
    InvalidAddress { addr: String, reason: String },

    #[error("{name} must be {expected}, got {value}")]
    OutOfRange {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    Gcs,
    Local,
}

/// Blog generation service
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// GCP project hosting Vertex AI
    #[arg(long, env = "GCP_PROJECT_ID")]
    pub project_id: String,

    /// Vertex AI location
    #[arg(long, env = "GCP_LOCATION", default_value = "us-central1")]
    pub location: String,

    /// Model identifier, e.g. gemini-2.5-flash or claude-sonnet-4-5@20250929
    #[arg(long, env = "MODEL_ID", default_value = "gemini-2.5-flash")]
    pub model_id: String,

    #[arg(long, env = "MAX_TOKENS", default_value_t = 512)]
    pub max_tokens: u32,

    #[arg(long, env = "TEMPERATURE", default_value_t = 0.5)]
    pub temperature: f32,

    #[arg(long, env = "TOP_P", default_value_t = 0.9)]
    pub top_p: f32,

    /// Timeout for a whole inference or upload request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 300)]
    pub request_timeout_secs: u64,

    #[arg(long, env = "STORAGE_BACKEND", value_enum, default_value = "gcs")]
    pub storage_backend: StorageBackend,

    /// Bucket for generated posts (gcs backend)
    #[arg(long, env = "BUCKET_NAME")]
    pub bucket: Option<String>,

    /// Directory for generated posts (local backend)
    #[arg(long, env = "LOCAL_STORAGE_DIR", default_value = "./generated")]
    pub local_dir: PathBuf,

    /// Key prefix under which posts are written
    #[arg(long, env = "STORAGE_PREFIX", default_value = "generated-content")]
    pub storage_prefix: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub project_id: String,
    pub location: String,
    pub model: Model,
    pub generation: GenerationConfig,
    pub request_timeout: Duration,
}

/// Where generated posts go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Gcs { bucket: String, prefix: String },
    Local { base_dir: PathBuf, prefix: String },
}

impl StorageConfig {
    pub fn prefix(&self) -> &str {
        match self {
            StorageConfig::Gcs { prefix, .. } | StorageConfig::Local { prefix, .. } => prefix,
        }
    }
}

/// Validated configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub inference: InferenceConfig,
    pub storage: StorageConfig,
}

impl TryFrom<Settings> for AppConfig {
    type Error = ConfigError;

    fn try_from(settings: Settings) -> Result<Self, Self::Error> {
        let addr_text = format!("{}:{}", settings.host, settings.port);
        let addr = addr_text
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidAddress {
                addr: addr_text.clone(),
                reason: e.to_string(),
            })?;

        let model = settings.model_id.parse::<Model>()?;

        if !(0.0..=1.0).contains(&settings.temperature) {
            return Err(ConfigError::OutOfRange {
                name: "TEMPERATURE",
                expected: "between 0.0 and 1.0",
                value: settings.temperature.to_string(),
            });
        }
        if !(settings.top_p > 0.0 && settings.top_p <= 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "TOP_P",
                expected: "in (0.0, 1.0]",
                value: settings.top_p.to_string(),
            });
        }
        if settings.max_tokens == 0 {
            return Err(ConfigError::OutOfRange {
                name: "MAX_TOKENS",
                expected: "greater than zero",
                value: settings.max_tokens.to_string(),
            });
        }

        let prefix = settings.storage_prefix.trim_matches('/').to_string();
        let storage = match settings.storage_backend {
            StorageBackend::Gcs => {
                let bucket = settings
                    .bucket
                    .filter(|b| !b.trim().is_empty())
                    .ok_or(ConfigError::MissingBucket)?;
                StorageConfig::Gcs { bucket, prefix }
            }
            StorageBackend::Local => StorageConfig::Local {
                base_dir: settings.local_dir,
                prefix,
            },
        };

        Ok(Self {
            server: ServerConfig {
                addr,
                log_level: settings.log_level,
            },
            inference: InferenceConfig {
                project_id: settings.project_id,
                location: settings.location,
                model,
                generation: GenerationConfig::new(settings.max_tokens)
                    .with_temperature(settings.temperature)
                    .with_top_p(settings.top_p),
                request_timeout: Duration::from_secs(settings.request_timeout_secs),
            },
            storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ClaudeModel, GeminiModel};

    fn settings(args: &[&str]) -> Settings {
        let mut argv = vec!["blogsmith", "--project-id", "my-project"];
        argv.extend_from_slice(args);
        Settings::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::try_from(settings(&["--bucket", "blogcreatorbucket"])).unwrap();

        assert_eq!(config.server.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.inference.model, Model::Gemini(GeminiModel::Gemini25Flash));
        assert_eq!(config.inference.location, "us-central1");
        assert_eq!(config.inference.generation, GenerationConfig::default());
        assert_eq!(config.inference.request_timeout, Duration::from_secs(300));
        assert_eq!(
            config.storage,
            StorageConfig::Gcs {
                bucket: "blogcreatorbucket".to_string(),
                prefix: "generated-content".to_string(),
            }
        );
    }

    #[test]
    fn test_gcs_requires_bucket() {
        assert!(matches!(
            AppConfig::try_from(settings(&[])),
            Err(ConfigError::MissingBucket)
        ));
        assert!(matches!(
            AppConfig::try_from(settings(&["--bucket", "  "])),
            Err(ConfigError::MissingBucket)
        ));
    }

    #[test]
    fn test_local_backend() {
        let config = AppConfig::try_from(settings(&[
            "--storage-backend",
            "local",
            "--local-dir",
            "/tmp/posts",
            "--storage-prefix",
            "/drafts/",
        ]))
        .unwrap();

        assert_eq!(
            config.storage,
            StorageConfig::Local {
                base_dir: PathBuf::from("/tmp/posts"),
                prefix: "drafts".to_string(),
            }
        );
        assert_eq!(config.storage.prefix(), "drafts");
    }

    #[test]
    fn test_claude_model() {
        let config = AppConfig::try_from(settings(&[
            "--bucket",
            "b",
            "--model-id",
            "claude-sonnet-4-5@20250929",
            "--location",
            "global",
        ]))
        .unwrap();
        assert_eq!(config.inference.model, Model::Claude(ClaudeModel::Sonnet45));
    }

    #[test]
    fn test_unknown_model() {
        let err = AppConfig::try_from(settings(&["--bucket", "b", "--model-id", "gpt-4"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown model identifier: gpt-4");
    }

    #[test]
    fn test_out_of_range_sampling() {
        assert!(matches!(
            AppConfig::try_from(settings(&["--bucket", "b", "--temperature", "1.5"])),
            Err(ConfigError::OutOfRange { name: "TEMPERATURE", .. })
        ));
        assert!(matches!(
            AppConfig::try_from(settings(&["--bucket", "b", "--top-p", "0"])),
            Err(ConfigError::OutOfRange { name: "TOP_P", .. })
        ));
        assert!(matches!(
            AppConfig::try_from(settings(&["--bucket", "b", "--max-tokens", "0"])),
            Err(ConfigError::OutOfRange { name: "MAX_TOKENS", .. })
        ));
    }

    #[test]
    fn test_invalid_host() {
        assert!(matches!(
            AppConfig::try_from(settings(&["--bucket", "b", "--host", "not a host"])),
            Err(ConfigError::InvalidAddress { .. })
        ));
    }
}
