//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`QV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::fmt;
use std::path::Path;

use quadvec_math::{ComponentFormat, Real, VectorError};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vector display configuration
    #[serde(default)]
    pub display: DisplayConfig,
    /// Sample vectors for the showcase binary
    #[serde(default)]
    pub showcase: ShowcaseConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`QV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    ///
    /// The loaded configuration is validated before it is returned.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional local overrides
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // QV_DISPLAY__FORMAT=F3 -> display.format = "F3"
        figment = figment.merge(Env::prefixed("QV_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.component_format()?;
        Ok(())
    }
}

/// Vector display configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Component format token (`""`, `G`, `F2`, `E3`, `D4`, `X8`)
    ///
    /// Empty means the plain `Display` output.
    pub format: String,
}

impl DisplayConfig {
    /// Parse the configured token
    pub fn component_format(&self) -> Result<ComponentFormat, ConfigError> {
        self.format.parse().map_err(ConfigError::from)
    }
}

/// Inputs for the showcase binary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Real vectors as `[x, y, z, w]`
    pub vectors: Vec<[Real; 4]>,
    /// Integer vectors as `[x, y, z, w]`
    pub int_vectors: Vec<[i32; 4]>,
    /// Step for `snapped`
    pub step: Real,
    /// Modulus for `%` and `posmod`
    pub modulus: Real,
    /// Weight for `lerp` between consecutive vectors
    pub weight: Real,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            vectors: vec![[1.0, -2.5, 0.3, 4.0], [10.0, -20.0, 30.0, 40.0]],
            int_vectors: vec![[10, -20, 30, -40], [6, 7, 8, 9]],
            step: 0.5,
            modulus: 7.0,
            weight: 0.25,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace), used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or did not match the schema
    Load(Box<figment::Error>),
    /// A value was read but is not usable
    Invalid(VectorError),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(Box::new(e))
    }
}

impl From<VectorError> for ConfigError {
    fn from(e: VectorError) -> Self {
        ConfigError::Invalid(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(e) => write!(f, "Configuration error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Load(e) => Some(e.as_ref()),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}
