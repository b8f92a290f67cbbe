use std::num::NonZeroU32;

use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::day::WeekStart;

/// Default hard ceiling on generator iterations per expansion call.
pub const DEFAULT_MAX_ITERATIONS: NonZeroU32 = NonZeroU32::MIN.saturating_add(4999);

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub recurrence: RecurrenceConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecurrenceConfig {
    /// Hard ceiling on cursor steps for a single expansion call; zero is rejected.
    pub max_iterations: NonZeroU32,
    pub week_start: WeekStart,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA zone used to fold instants onto calendar days.
    pub timezone: Tz,
    pub hide_completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    ///
    /// Environment variables use the `ALMANAC_` prefix and `__` between
    /// sections, e.g. `ALMANAC_CALENDAR__TIMEZONE=Europe/Berlin`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("recurrence.max_iterations", DEFAULT_MAX_ITERATIONS.get())?
            .set_default("recurrence.week_start", WeekStart::default().to_string())?
            .set_default("calendar.timezone", "UTC")?
            .set_default("calendar.hide_completed", false)?
            .set_default("logging.level", "info")?
            // Env file
            .add_source(
                config::Environment::with_prefix("ALMANAC")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recurrence: RecurrenceConfig {
                max_iterations: DEFAULT_MAX_ITERATIONS,
                week_start: WeekStart::default(),
            },
            calendar: CalendarConfig {
                timezone: Tz::UTC,
                hide_completed: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    Settings::load()
}
