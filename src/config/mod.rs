//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SLANT_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which backend answers `/score`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorerMode {
    /// Full bias analysis with result caching.
    #[default]
    Analyzer,
    /// Placeholder scores in `(-1, 1)`; no corpus needed.
    Random,
}

impl ScorerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerMode::Analyzer => "analyzer",
            ScorerMode::Random => "random",
        }
    }
}

impl FromStr for ScorerMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analyzer" => Ok(ScorerMode::Analyzer),
            "random" => Ok(ScorerMode::Random),
            _ => Err(()),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SLANT_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `5000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Reference corpus JSON. Default: `./corpus.json`.
    pub corpus_path: PathBuf,

    /// Classifier model JSON, read when serving and written when training.
    pub classifier_path: Option<PathBuf>,

    /// Use classifier fusion instead of the heuristic. Default: `false`.
    pub use_classifier: bool,

    /// Text-embeddings server base URL. Unset means the stub embedder.
    pub embedder_url: Option<String>,

    /// Max articles in the result cache. Unset means unbounded.
    pub cache_capacity: Option<u64>,

    /// Scoring backend. Default: [`ScorerMode::Analyzer`].
    pub scorer: ScorerMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            corpus_path: PathBuf::from("./corpus.json"),
            classifier_path: None,
            use_classifier: false,
            embedder_url: None,
            cache_capacity: None,
            scorer: ScorerMode::Analyzer,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "SLANT_PORT";
    pub const ENV_BIND_ADDR: &'static str = "SLANT_BIND_ADDR";
    pub const ENV_CORPUS_PATH: &'static str = "SLANT_CORPUS_PATH";
    pub const ENV_CLASSIFIER_PATH: &'static str = "SLANT_CLASSIFIER_PATH";
    pub const ENV_USE_CLASSIFIER: &'static str = "SLANT_USE_CLASSIFIER";
    pub const ENV_EMBEDDER_URL: &'static str = "SLANT_EMBEDDER_URL";
    pub const ENV_CACHE_CAPACITY: &'static str = "SLANT_CACHE_CAPACITY";
    pub const ENV_SCORER: &'static str = "SLANT_SCORER";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let corpus_path = Self::parse_path_from_env(Self::ENV_CORPUS_PATH, defaults.corpus_path);
        let classifier_path = Self::parse_optional_path_from_env(Self::ENV_CLASSIFIER_PATH);
        let use_classifier =
            Self::parse_bool_from_env(Self::ENV_USE_CLASSIFIER, defaults.use_classifier)?;
        let embedder_url = Self::parse_optional_string_from_env(Self::ENV_EMBEDDER_URL);
        let cache_capacity = Self::parse_capacity_from_env()?;
        let scorer = Self::parse_scorer_from_env(defaults.scorer)?;

        Ok(Self {
            port,
            bind_addr,
            corpus_path,
            classifier_path,
            use_classifier,
            embedder_url,
            cache_capacity,
            scorer,
        })
    }

    /// Validates settings needed to serve.
    ///
    /// The random scorer needs no corpus or classifier, so those checks only
    /// apply to [`ScorerMode::Analyzer`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_embedder_url()?;
        if self.scorer == ScorerMode::Random {
            return Ok(());
        }

        Self::require_file(&self.corpus_path)?;

        if self.use_classifier {
            let path = self
                .classifier_path
                .as_ref()
                .ok_or(ConfigError::MissingEnvVar {
                    name: Self::ENV_CLASSIFIER_PATH,
                })?;
            Self::require_file(path)?;
        }

        Ok(())
    }

    /// Validates settings needed to train a classifier. Returns the output path.
    pub fn validate_for_training(&self) -> Result<&Path, ConfigError> {
        self.validate_embedder_url()?;
        Self::require_file(&self.corpus_path)?;
        self.classifier_path
            .as_deref()
            .ok_or(ConfigError::MissingEnvVar {
                name: Self::ENV_CLASSIFIER_PATH,
            })
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn validate_embedder_url(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.embedder_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_EMBEDDER_URL,
                value: url.clone(),
                reason: "must be an http(s) URL",
            });
        }
        Ok(())
    }

    fn require_file(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ConfigError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        Self::parse_optional_string_from_env(var_name).map(PathBuf::from)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        let Ok(value) = env::var(var_name) else {
            return Ok(default);
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                name: var_name,
                value,
                reason: "expected true or false",
            }),
        }
    }

    fn parse_capacity_from_env() -> Result<Option<u64>, ConfigError> {
        let Some(value) = Self::parse_optional_string_from_env(Self::ENV_CACHE_CAPACITY) else {
            return Ok(None);
        };
        match value.parse::<u64>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidValue {
                name: Self::ENV_CACHE_CAPACITY,
                value,
                reason: "expected a positive integer",
            }),
            Ok(capacity) => Ok(Some(capacity)),
        }
    }

    fn parse_scorer_from_env(default: ScorerMode) -> Result<ScorerMode, ConfigError> {
        match Self::parse_optional_string_from_env(Self::ENV_SCORER) {
            Some(value) => value.parse().map_err(|()| ConfigError::InvalidValue {
                name: Self::ENV_SCORER,
                value,
                reason: "expected analyzer or random",
            }),
            None => Ok(default),
        }
    }
}
