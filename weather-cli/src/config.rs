use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use google_weather_core::{ClientOptions, UnitsSystem};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// language_code = "en"
/// units_system = "metric"
/// latitude = 37.422
/// longitude = -122.084
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub language_code: Option<String>,
    pub units_system: Option<String>,
    pub referrer: Option<String>,
    pub timeout_secs: Option<u64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub language_code: Option<String>,
    pub units_system: Option<UnitsSystem>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "google-weather", "google-weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Stored units system as a strongly-typed value.
    pub fn units_system(&self) -> Result<Option<UnitsSystem>> {
        self.units_system
            .as_deref()
            .map(|s| s.parse::<UnitsSystem>())
            .transpose()
            .context("Invalid `units_system` in config file")
    }

    /// Builds client options: overrides first, then this file, then library defaults.
    pub fn client_options(&self, overrides: &Overrides) -> Result<ClientOptions> {
        let api_key = overrides
            .api_key
            .as_deref()
            .or(self.api_key.as_deref())
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: run `google-weather configure` or set GOOGLE_WEATHER_API_KEY."
                )
            })?;

        let mut options = ClientOptions::new(api_key);

        if let Some(code) = overrides.language_code.as_ref().or(self.language_code.as_ref()) {
            options = options.with_language_code(code.clone());
        }
        if let Some(units) = overrides.units_system.or(self.units_system()?) {
            options = options.with_units_system(units);
        }
        if let Some(referrer) = &self.referrer {
            options = options.with_referrer(referrer.clone());
        }
        if let Some(secs) = self.timeout_secs {
            options = options.with_timeout(Duration::from_secs(secs));
        }

        Ok(options)
    }

    /// Coordinates to query: overrides first, then the stored default location.
    pub fn location(&self, overrides: &Overrides) -> Result<(f64, f64)> {
        let latitude = overrides.latitude.or(self.latitude);
        let longitude = overrides.longitude.or(self.longitude);

        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(anyhow!(
                "No location given.\n\
                 Hint: pass --lat and --lon, or store a default with `google-weather configure`."
            )),
        }
    }
}
