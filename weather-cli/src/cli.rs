use anyhow::Context;
use clap::{Parser, Subcommand};
use google_weather_core::{
    DEFAULT_FORECAST_DAYS, DEFAULT_FORECAST_HOURS, UnitsSystem, WeatherClient,
};
use inquire::{CustomType, Password, PasswordDisplayMode, Select, Text};
use serde::Serialize;
use tracing::debug;

use crate::config::{Config, Overrides};
use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "google-weather", version, about = "Google Weather CLI")]
pub struct Cli {
    /// Log client requests and responses to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Print the typed response as JSON instead of a summary.
    #[arg(long, global = true)]
    pub json: bool,

    /// Latitude in decimal degrees; defaults to the configured location.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees; defaults to the configured location.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// API key; overrides the configured one.
    #[arg(long, global = true, env = "GOOGLE_WEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Language code for descriptions, e.g. "en" or "de".
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// "metric" or "imperial".
    #[arg(long, global = true)]
    pub units: Option<UnitsSystem>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store API key, language, units and a default location.
    Configure,

    /// Show current conditions.
    Current,

    /// Show the hourly forecast.
    Hourly {
        /// Number of hours, also used as the page size.
        #[arg(long, default_value_t = DEFAULT_FORECAST_HOURS)]
        hours: u32,
    },

    /// Show the daily forecast.
    Daily {
        /// Number of days, also used as the page size.
        #[arg(long, default_value_t = DEFAULT_FORECAST_DAYS)]
        days: u32,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        debug!(
            language_code = ?config.language_code,
            units_system = ?config.units_system,
            "loaded configuration"
        );

        match &self.command {
            Command::Configure => configure(config),
            Command::Current => {
                let (client, (lat, lon)) = self.client(&config)?;
                let current = client
                    .fetch_current_conditions(lat, lon)
                    .await
                    .context("Failed to fetch current conditions")?;

                if self.json {
                    print_json(&current)
                } else {
                    println!("{}", output::current_summary(&current));
                    Ok(())
                }
            }
            Command::Hourly { hours } => {
                let (client, (lat, lon)) = self.client(&config)?;
                let hourly = client
                    .fetch_hourly_forecast(lat, lon, *hours)
                    .await
                    .context("Failed to fetch hourly forecast")?;

                if self.json {
                    print_json(&hourly)
                } else {
                    println!("Time zone: {}", hourly.time_zone.id);
                    for line in output::hourly_lines(&hourly) {
                        println!("{line}");
                    }
                    Ok(())
                }
            }
            Command::Daily { days } => {
                let (client, (lat, lon)) = self.client(&config)?;
                let daily = client
                    .fetch_daily_forecast(lat, lon, *days)
                    .await
                    .context("Failed to fetch daily forecast")?;

                if self.json {
                    print_json(&daily)
                } else {
                    println!("Time zone: {}", daily.time_zone.id);
                    for line in output::daily_lines(&daily) {
                        println!("{line}");
                    }
                    Ok(())
                }
            }
        }
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            language_code: self.language.clone(),
            units_system: self.units,
            latitude: self.lat,
            longitude: self.lon,
        }
    }

    fn client(&self, config: &Config) -> anyhow::Result<(WeatherClient, (f64, f64))> {
        let overrides = self.overrides();
        let options = config.client_options(&overrides)?;
        let location = config.location(&overrides)?;
        Ok((WeatherClient::new(options), location))
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("Google Weather API key (empty keeps current):")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let language = Text::new("Language code:")
        .with_default(config.language_code.as_deref().unwrap_or("en"))
        .prompt()?;
    config.language_code = Some(language);

    let units = Select::new("Units system:", vec!["metric", "imperial"]).prompt()?;
    config.units_system = Some(units.to_string());

    let referrer = Text::new("Referrer (optional):")
        .with_default(config.referrer.as_deref().unwrap_or(""))
        .prompt()?;
    config.referrer = (!referrer.is_empty()).then_some(referrer);

    let latitude = CustomType::<f64>::new("Default latitude (Esc to skip):").prompt_skippable()?;
    let longitude = CustomType::<f64>::new("Default longitude (Esc to skip):").prompt_skippable()?;
    if let (Some(lat), Some(lon)) = (latitude, longitude) {
        config.latitude = Some(lat);
        config.longitude = Some(lon);
    }

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to render JSON")?
    );
    Ok(())
}
