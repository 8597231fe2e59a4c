//! Settings for the `fakegen` command loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::CliError;

const DEFAULT_COUNT: usize = 1;

/// Defaults applied when the matching command-line flag is absent.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FAKEGEN")]
pub struct FakegenSettings {
    /// Seed for the generator's random source.
    pub seed: Option<u64>,
    /// Number of values to print per invocation.
    #[ortho_config(default = 1)]
    pub count: usize,
}

impl Default for FakegenSettings {
    fn default() -> Self {
        Self {
            seed: None,
            count: DEFAULT_COUNT,
        }
    }
}

/// Loads settings from the environment and configuration files.
///
/// # Errors
///
/// Returns [`CliError::Settings`] when a configured value cannot be parsed.
pub fn load_settings() -> Result<FakegenSettings, CliError> {
    FakegenSettings::load_from_iter([OsString::from("fakegen")]).map_err(|err| {
        CliError::Settings {
            message: err.to_string(),
        }
    })
}
