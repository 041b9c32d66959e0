//! Deploy-time loading of protocol constants
//!
//! Layers an optional TOML file and `ALN__`-prefixed environment variables on
//! top of the reference values, then validates the result. The treasury and
//! safety sections always keep their compiled-in values.
//!
//! ```toml
//! [network]
//! block_time_ms = 2000
//!
//! [ports]
//! metrics = 9191
//! ```
//!
//! The same override through the environment: `ALN__PORTS__METRICS=9191`.

use crate::ProtocolConstants;
use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "ALN";

/// Separator between prefix and nested keys, e.g. `ALN__NETWORK__BLOCK_TIME_MS`
pub const ENV_SEPARATOR: &str = "__";

/// Sections that are never read from configuration sources
const FIXED_SECTIONS: [&str; 2] = ["treasury", "safety"];

impl ProtocolConstants {
    /// Load constants with optional file and environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading protocol constants overrides: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let config = builder
            .build()
            .context("Failed to build protocol constants configuration")?;

        for section in FIXED_SECTIONS {
            if config.get_table(section).is_ok() {
                warn!("Ignoring [{}] overrides: section is fixed at compile time", section);
            }
        }

        let constants: ProtocolConstants = config
            .try_deserialize()
            .context("Failed to deserialize protocol constants")?;

        constants
            .validate()
            .context("Protocol constants failed validation")?;

        debug!(
            block_time_ms = constants.network.block_time_ms,
            jurisdictions = constants.jurisdictions.len(),
            "Protocol constants loaded"
        );

        Ok(constants)
    }
}

/// Expand `~` and `$VAR` in a user-supplied path
pub fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path).context("Failed to expand constants path")?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Convenience function to load constants from an optional, unexpanded path
pub fn load_constants(path: Option<&str>) -> Result<ProtocolConstants> {
    let path = path.map(expand_path).transpose()?;
    ProtocolConstants::load(path.as_deref())
}
