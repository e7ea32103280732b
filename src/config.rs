use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarModel, DAYS_PER_SEASON, DAYS_PER_WEEK, DEFAULT_SEASON_NAMES, DEFAULT_TICK_INTERVAL_MS,
    DEFAULT_TRANSITION_MS, DayPalette, SEASON_COUNT, SelectionController, WEEKDAY_LABELS,
};

/// Settings the host application injects into the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Season names in calendar order
    pub season_names:     [String; SEASON_COUNT],
    /// Header letters above the day columns
    pub weekday_labels:   [String; DAYS_PER_WEEK],
    pub days_per_season:  u8,
    /// Delay between animation frames, in milliseconds
    pub tick_interval_ms: u64,
    /// Default hover transition length, in milliseconds
    pub transition_ms:    u64,
    pub palette:          DayPalette,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A season name is blank.
    #[error("Season {0} has an empty name")]
    EmptySeasonName(usize),

    /// Two seasons share a name (compared case-insensitively).
    #[error("Season name {0:?} is used more than once")]
    DuplicateSeasonName(String),

    /// Seasons must have at least one day.
    #[error("Days per season must be at least 1")]
    ZeroDaysPerSeason,

    /// Animation frames need a non-zero delay.
    #[error("Animation tick interval must be at least 1ms")]
    ZeroTickInterval,

    /// Malformed JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            season_names:     DEFAULT_SEASON_NAMES.map(String::from),
            weekday_labels:   WEEKDAY_LABELS.map(String::from),
            days_per_season:  DAYS_PER_SEASON,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            transition_ms:    DEFAULT_TRANSITION_MS,
            palette:          DayPalette::default(),
        }
    }
}

impl CalendarConfig {
    /// Parses and validates a JSON configuration. Missing fields take their
    /// default values.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` for malformed input, or the first
    /// validation failure.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("calendar config loaded: seasons {:?}", config.season_names);
        Ok(config)
    }

    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, name) in self.season_names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptySeasonName(index));
            }
            let lowered = name.to_lowercase();
            if self.season_names[..index]
                .iter()
                .any(|other| other.to_lowercase() == lowered)
            {
                return Err(ConfigError::DuplicateSeasonName(name.clone()));
            }
        }
        if self.days_per_season == 0 {
            return Err(ConfigError::ZeroDaysPerSeason);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    pub fn model(&self) -> CalendarModel {
        CalendarModel::new(self.season_names.clone(), self.days_per_season)
    }

    /// A fresh selection over this calendar
    pub fn selection(&self) -> SelectionController {
        SelectionController::new(self.model())
    }

    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub const fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
