use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, RANGE_SEPARATOR};

/// A selected span of the calendar (inclusive).
///
/// Either endpoint may be missing while the user is still choosing. When both
/// are present the owning [`SelectionController`](crate::SelectionController)
/// keeps `start` at or before `end`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
}

impl Interval {
    /// An interval with nothing selected
    pub const fn empty() -> Self {
        Self {
            start: None,
            end:   None,
        }
    }

    /// An interval with only its first endpoint chosen
    pub const fn single(start: CalendarDate) -> Self {
        Self {
            start: Some(start),
            end:   None,
        }
    }

    /// An interval with both endpoints, taken as given
    pub const fn between(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            start: Some(start),
            end:   Some(end),
        }
    }

    /// Returns the start date if chosen
    pub const fn start(&self) -> Option<&CalendarDate> {
        self.start.as_ref()
    }

    /// Returns the end date if chosen
    pub const fn end(&self) -> Option<&CalendarDate> {
        self.end.as_ref()
    }

    /// True while no date has been chosen
    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True once both endpoints are chosen
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns the same interval with its endpoints exchanged
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            start: self.end,
            end:   self.start,
        }
    }

    /// Text shown for the selection: `<Season> D<day>` for a single date,
    /// `<start> -> <end>` for a complete range, `None` when nothing is selected.
    pub fn label(&self) -> Option<String> {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => Some(format!("{start}{RANGE_SEPARATOR}{end}")),
            (Some(date), None) | (None, Some(date)) => Some(date.to_string()),
            (None, None) => None,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(&label),
            None => Ok(()),
        }
    }
}
