use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct CafeConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub directory: DirectoryConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryConfig {
    /// JSON file mapping city → ordered café names. When unset the
    /// compiled-in directory is served.
    pub file: Option<PathBuf>,
}

impl CafeConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let file = match env::var("CAFE_DIRECTORY_FILE") {
            Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
            // The built-in directory is demo data; production must point at
            // a real one.
            _ if is_prod => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "CAFE_DIRECTORY_FILE is required in production but not set"
                )))
            }
            _ => None,
        };

        Ok(CafeConfig {
            common,
            directory: DirectoryConfig { file },
        })
    }
}
