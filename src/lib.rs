mod animation;
mod color;
mod config;
mod consts;
mod palette;
mod prelude;
mod range;
mod selection;
mod types;

pub use animation::{AnimationState, ColorProperty, ColorTarget, ElementId, HoverAnimator, Transition};
pub use color::{ColorError, Rgb};
pub use config::{CalendarConfig, ConfigError};
pub use consts::*;
pub use palette::DayPalette;
pub use range::Interval;
pub use selection::{DayClassification, DayStyle, SelectionController, SelectionUpdate};
pub use types::{Day, Season};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A day of the four-season calendar, as picked by the user.
///
/// The season is kept as its display name so that a date can be handed to
/// (and received from) collaborators in the same `{season, day}` shape. A
/// season name no [`CalendarModel`] recognises is not rejected here; the
/// model reports such a date with the [`INVALID_ORDINAL`] sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    season: String,
    day:    Day,
}

/// Errors raised when building calendar values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Day is zero or past the end of the season
    #[error("Invalid day {day} (must be 1-{max})")]
    InvalidDay { day: u8, max: u8 },

    /// Season name matches none of the configured seasons
    #[error("Unknown season: {0}")]
    UnknownSeason(String),
}

impl CalendarDate {
    /// Creates a date from a season name and an already validated day
    pub fn new(season: impl Into<String>, day: Day) -> Self {
        Self {
            season: season.into(),
            day,
        }
    }

    /// Returns the season name
    pub fn season(&self) -> &str {
        &self.season
    }

    /// Returns the day of the season
    pub const fn day(&self) -> Day {
        self.day
    }
}

/// `<Season> D<day>`, the token downstream plan generation consumes
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.season, DAY_PREFIX, self.day)
    }
}

/// Ordering rules of the four-season calendar.
///
/// Every date maps to a single ordinal `index(season) * days_per_season + day`
/// which is the only key used for comparison and containment. There is no
/// wrap-around between the last day of the last season and the first day of
/// the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarModel {
    season_names:    [String; SEASON_COUNT],
    days_per_season: u8,
}

impl Default for CalendarModel {
    fn default() -> Self {
        Self::new(DEFAULT_SEASON_NAMES.map(String::from), DAYS_PER_SEASON)
    }
}

impl CalendarModel {
    /// Creates a model from season names (in calendar order) and a season length.
    /// Use [`CalendarConfig::model`] for a validated model.
    pub const fn new(season_names: [String; SEASON_COUNT], days_per_season: u8) -> Self {
        Self {
            season_names,
            days_per_season,
        }
    }

    /// Returns the display name configured for `season`
    pub fn season_name(&self, season: Season) -> &str {
        &self.season_names[season.index()]
    }

    /// Returns the configured season names in calendar order
    pub const fn season_names(&self) -> &[String; SEASON_COUNT] {
        &self.season_names
    }

    /// Number of days in each season
    pub const fn days_in_season(&self) -> u8 {
        self.days_per_season
    }

    /// Builds a validated date for `day` of `season`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is 0 or past the end of the season.
    pub fn date(&self, season: Season, day: u8) -> Result<CalendarDate, DateError> {
        let day = Day::new(day, self.days_per_season)?;
        Ok(CalendarDate::new(self.season_name(season), day))
    }

    /// Looks up a season by name.
    ///
    /// An exact match is tried first, then a case-insensitive one.
    pub fn resolve_season(&self, name: &str) -> Option<Season> {
        if let Some(index) = self.season_names.iter().position(|s| s == name) {
            return Season::from_index(index);
        }

        let lowered = name.to_lowercase();
        let index = self
            .season_names
            .iter()
            .position(|s| s.to_lowercase() == lowered)?;
        log::warn!("season {name:?} only matched case-insensitively");
        Season::from_index(index)
    }

    /// Like [`resolve_season`](Self::resolve_season) but reports the unknown name
    ///
    /// # Errors
    /// Returns `DateError::UnknownSeason` if no season matches `name`.
    pub fn try_resolve_season(&self, name: &str) -> Result<Season, DateError> {
        self.resolve_season(name)
            .ok_or_else(|| DateError::UnknownSeason(name.to_owned()))
    }

    /// Total-order key of a date, or [`INVALID_ORDINAL`] when the date is
    /// absent, its day is past the end of the season, or its season cannot be
    /// resolved.
    pub fn ordinal(&self, date: Option<&CalendarDate>) -> i32 {
        let Some(date) = date else {
            return INVALID_ORDINAL;
        };
        if date.day.get() > self.days_per_season {
            return INVALID_ORDINAL;
        }
        let Some(season) = self.resolve_season(&date.season) else {
            return INVALID_ORDINAL;
        };
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let index = season.index() as i32;
        index * i32::from(self.days_per_season) + i32::from(date.day.get())
    }

    /// Three-way comparison of two dates by ordinal.
    ///
    /// Only the sign is meaningful.
    pub fn compare(&self, a: Option<&CalendarDate>, b: Option<&CalendarDate>) -> i32 {
        self.ordinal(a) - self.ordinal(b)
    }

    /// Inclusive containment of `date` between `start` and `end`, in whichever
    /// order the endpoints are given. Always false when an endpoint is absent.
    pub fn contains(
        &self,
        date: &CalendarDate,
        start: Option<&CalendarDate>,
        end: Option<&CalendarDate>,
    ) -> bool {
        if start.is_none() || end.is_none() {
            return false;
        }

        let day = self.ordinal(Some(date));
        let mut low = self.ordinal(start);
        let mut high = self.ordinal(end);
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }

        low <= day && day <= high
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    pub fn model() -> CalendarModel {
        CalendarModel::new(["Spring", "Summer", "Fall", "Winter"].map(String::from), DAYS_PER_SEASON)
    }

    pub fn date(season: Season, day: u8) -> CalendarDate {
        model().date(season, day).unwrap()
    }

    pub fn raw_date(season: &str, day: u8) -> CalendarDate {
        CalendarDate::new(season, Day::try_from(day).unwrap())
    }
}
