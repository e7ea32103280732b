use crate::consts::SEASON_COUNT;
use crate::prelude::*;
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// One of the four seasons of a calendar cycle, in calendar order.
///
/// The variant only fixes the position in the cycle; the text shown for a
/// season comes from the season names the [`CalendarModel`](crate::CalendarModel)
/// was configured with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Self; SEASON_COUNT] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    /// Zero-based position of the season in the cycle
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the season at `index`, if it is inside the cycle
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SEASON_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Moves `delta` seasons forwards (or backwards when negative), wrapping
    /// around the cycle in both directions.
    pub fn offset(self, delta: i32) -> Self {
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let count = SEASON_COUNT as i32;
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let current = self.index() as i32;
        #[allow(clippy::cast_sign_loss)]
        let wrapped = (current + delta).rem_euclid(count) as usize;
        Self::ALL[wrapped]
    }

    /// The following season, wrapping from the last back to the first
    pub fn next(self) -> Self {
        self.offset(1)
    }

    /// The preceding season, wrapping from the first to the last
    pub fn previous(self) -> Self {
        self.offset(-1)
    }
}

/// A day-of-season value, always at least [`MIN_DAY`](crate::MIN_DAY).
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and fits in a season of
    /// `days_per_season` days
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or > `days_per_season`.
    pub fn new(value: u8, days_per_season: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            day: value,
            max: days_per_season,
        })?;
        if value > days_per_season {
            return Err(DateError::InvalidDay {
                day: value,
                max: days_per_season,
            });
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Season length is not known here, only the lower bound is checked
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay { day: value, max: 0 })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
