use crate::cli::OutputFormat;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured random seed
pub const SEED_ENV: &str = "WWP_SEED";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub spiral: SpiralConfig,
    #[serde(default)]
    pub graph: GraphConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub color: bool,
    pub format: OutputFormat,
    pub pager: bool,
    /// Largest count or position the CLI will generate up to
    pub max_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    pub coordinate_range: f64,
    pub dot_size: u32,
    pub difference_coordinate_range: f64,
    pub difference_dot_size: u32,
}

/// Terminal plot size in character cells; 0 means "use the terminal size"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Simple,
            pager: true,
            max_count: 1_000_000,
        }
    }
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            coordinate_range: 100.0,
            dot_size: 5,
            difference_coordinate_range: 15.0,
            difference_dot_size: 10,
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            Config::default().save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.max_count == 0 {
            return Err(AppError::Config("max_count must be at least 1".to_string()));
        }

        for (name, range) in [
            ("coordinate_range", self.spiral.coordinate_range),
            ("difference_coordinate_range", self.spiral.difference_coordinate_range),
        ] {
            if range == 0.0 || !range.is_finite() {
                return Err(AppError::Config(format!(
                    "spiral {} must be a non-zero number",
                    name
                )));
            }
        }

        if self.spiral.dot_size == 0 || self.spiral.difference_dot_size == 0 {
            return Err(AppError::Config(
                "spiral dot sizes must be positive integers".to_string(),
            ));
        }

        Ok(())
    }

    /// Seed for sampling: `WWP_SEED` first, then the config file
    pub fn effective_seed(&self) -> AppResult<Option<u64>> {
        match std::env::var(SEED_ENV) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| AppError::Config(format!("{} must be an unsigned integer, got '{}'", SEED_ENV, raw))),
            Err(_) => Ok(self.random.seed),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file_path())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wwp")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[random]\nseed = 11\n").unwrap();
        assert_eq!(config.random.seed, Some(11));
        assert_eq!(config.spiral, SpiralConfig::default());
        assert!(config.general.color);
    }

    #[test]
    fn test_validate_rejects_zero_coordinate_range() {
        let mut config = Config::default();
        config.spiral.coordinate_range = 0.0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_dot_size() {
        let mut config = Config::default();
        config.spiral.difference_dot_size = 0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
