use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CONFIG_BASENAME, DEFAULT_OUTPUT_FILE, ENV_PREFIX, SESSION_END_SENTINEL,
};

/// Runtime settings: built-in defaults, then an optional config file, then
/// `WHEREINTHEWORLD_*` environment variables.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(length(min = 1))]
    pub output_file: String,

    #[validate(length(min = 1))]
    pub sentinel: String,

    #[validate(range(min = 1))]
    pub max_workers: usize,

    pub pretty: bool,
}

impl Settings {
    /// Load settings. An explicit `path` must exist; the default
    /// `whereintheworld.{toml,json,yaml}` in the working directory is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file_source = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_BASENAME).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("output_file", DEFAULT_OUTPUT_FILE)?
            .set_default("sentinel", SESSION_END_SENTINEL)?
            .set_default("max_workers", num_cpus::get() as i64)?
            .set_default("pretty", true)?
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_file)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            sentinel: SESSION_END_SENTINEL.to_string(),
            max_workers: num_cpus::get(),
            pretty: true,
        }
    }
}
