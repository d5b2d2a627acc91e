use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    pub profile: ProfileConfig,
    #[serde(default)]
    pub autosave: AutoSaveConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding the per-profile JSON files
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProfileConfig {
    /// Profile used when `--profile` is not given
    pub default: String,
    /// Start profiles that have no recipes file with the demo recipes
    #[serde(default = "default_seed_demo_recipes")]
    pub seed_demo_recipes: bool,
}

fn default_seed_demo_recipes() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct AutoSaveConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl AutoSaveConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    2000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShoppingConfig {
    /// Checklists kept per profile before the oldest week is forgotten
    #[serde(default = "default_retained_weeks")]
    pub retained_weeks: usize,
    /// Leave out items whose quantity is zero (e.g. slots planned for 0 servings)
    #[serde(default)]
    pub hide_zero_quantity: bool,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            retained_weeks: default_retained_weeks(),
            hide_zero_quantity: false,
        }
    }
}

fn default_retained_weeks() -> usize {
    mealplanner_shopping::DEFAULT_RETAINED_WEEKS
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALPLANNER__DATA__DIR, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("data.dir", "data")?
            .set_default("profile.default", "Default")?
            .set_default("profile.seed_demo_recipes", default_seed_demo_recipes())?
            .set_default("autosave.debounce_ms", default_debounce_ms())?
            .set_default("shopping.retained_weeks", default_retained_weeks() as u64)?
            .set_default("shopping.hide_zero_quantity", false)?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALPLANNER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.data.dir.trim().is_empty() {
            return Err("Data directory must not be empty".to_string());
        }
        if self.profile.default.trim().is_empty() {
            return Err("Default profile must not be empty".to_string());
        }
        if self.shopping.retained_weeks < 1 {
            return Err("Shopping retained_weeks must be at least 1".to_string());
        }
        if !matches!(self.observability.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Unknown log format '{}', expected 'pretty' or 'json'",
                self.observability.format
            ));
        }
        Ok(())
    }
}
