//! Two-click interval selection over the four-season calendar.
//!
//! The first click picks a start date, the second completes the range and a
//! third click starts over. Endpoints are kept in calendar order, so clicking
//! a later day first and an earlier one second still yields `start <= end`.

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{CalendarDate, CalendarModel, DateError, Interval, RANGE_MARKER, Season};

/// How a single day cell should be drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum DayStyle {
    /// Outside the selection
    #[default]
    #[display(fmt = "default")]
    Default,
    /// Strictly between the two endpoints
    #[display(fmt = "in-range")]
    InRange,
    /// The start or the end of the selection
    #[display(fmt = "range-endpoint")]
    RangeEndpoint,
}

/// The style of one day of the displayed season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayClassification {
    pub day:   u8,
    pub style: DayStyle,
}

/// What the view needs to redraw after a click.
///
/// The styles replace whatever the day cells show, so hover transitions still
/// running on those cells must be stopped first with
/// [`HoverAnimator::cancel_elements`](crate::HoverAnimator::cancel_elements),
/// otherwise their last frame paints over the new style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionUpdate {
    /// Formatted selection, `<Season> D<day>` or `<start> -> <end>`
    pub label: String,
    /// Every day of the displayed season, in order
    pub days:  Vec<DayClassification>,
}

/// Owns the current [`Interval`] and the season the calendar is showing.
#[derive(Debug, Clone)]
pub struct SelectionController {
    model:            CalendarModel,
    interval:         Interval,
    label:            Option<String>,
    displayed_season: Season,
}

impl SelectionController {
    pub fn new(model: CalendarModel) -> Self {
        Self {
            model,
            interval: Interval::empty(),
            label: None,
            displayed_season: Season::default(),
        }
    }

    pub const fn model(&self) -> &CalendarModel {
        &self.model
    }

    pub const fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Label of the current selection, `None` until a day is picked
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// True once the label describes a full range
    pub fn is_range_complete(&self) -> bool {
        self.label
            .as_deref()
            .is_some_and(|label| label.contains(RANGE_MARKER))
    }

    /// Feeds one clicked day into the selection.
    ///
    /// With no start, or with a range already complete, the candidate starts a
    /// new selection. Otherwise it becomes the end, and the endpoints are
    /// swapped if the end comes first.
    pub fn select_day(&mut self, candidate: CalendarDate) -> SelectionUpdate {
        let next = match (self.interval.start(), self.interval.end()) {
            (Some(start), None) => {
                log::debug!("selection completed with {candidate}");
                Interval::between(start.clone(), candidate)
            },
            _ => {
                log::debug!("selection restarted at {candidate}");
                Interval::single(candidate)
            },
        };

        self.interval = if next.is_complete() && self.model.compare(next.start(), next.end()) > 0 {
            log::debug!("selection endpoints swapped");
            next.swapped()
        } else {
            next
        };

        let label = self.interval.label().unwrap_or_default();
        self.label = Some(label.clone());

        SelectionUpdate {
            label,
            days: self.classify_season(self.displayed_season),
        }
    }

    /// Selects `day` of the season currently on display
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in the season.
    pub fn select_displayed_day(&mut self, day: u8) -> Result<SelectionUpdate, DateError> {
        let candidate = self.model.date(self.displayed_season, day)?;
        Ok(self.select_day(candidate))
    }

    /// Drops the selection and its label
    pub fn reset(&mut self) {
        if !self.interval.is_empty() {
            log::debug!("selection reset");
        }
        self.interval = Interval::empty();
        self.label = None;
    }

    /// Style of `date` under the current selection
    pub fn classify(&self, date: &CalendarDate) -> DayStyle {
        let start = self.interval.start();
        let end = self.interval.end();
        let target = Some(date);

        let is_start = start.is_some() && self.model.compare(target, start) == 0;
        let is_end = end.is_some() && self.model.compare(target, end) == 0;

        if is_start || is_end {
            DayStyle::RangeEndpoint
        } else if self.model.contains(date, start, end) {
            DayStyle::InRange
        } else {
            DayStyle::Default
        }
    }

    /// Style of every day of `season`, in day order
    pub fn classify_season(&self, season: Season) -> Vec<DayClassification> {
        (1..=self.model.days_in_season())
            .filter_map(|day| {
                let date = self.model.date(season, day).ok()?;
                Some(DayClassification {
                    day,
                    style: self.classify(&date),
                })
            })
            .collect()
    }

    pub const fn displayed_season(&self) -> Season {
        self.displayed_season
    }

    /// Moves the calendar `delta` seasons, wrapping around the cycle. The
    /// selection is kept.
    pub fn show_season(&mut self, delta: i32) -> Vec<DayClassification> {
        self.displayed_season = self.displayed_season.offset(delta);
        log::debug!("showing season {}", self.model.season_name(self.displayed_season));
        self.classify_season(self.displayed_season)
    }

    pub fn next_season(&mut self) -> Vec<DayClassification> {
        self.show_season(1)
    }

    pub fn previous_season(&mut self) -> Vec<DayClassification> {
        self.show_season(-1)
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(CalendarModel::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, model};

    fn style_of(days: &[DayClassification], day: u8) -> DayStyle {
        days.iter()
            .find(|c| c.day == day)
            .map(|c| c.style)
            .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let controller = SelectionController::new(model());
        assert!(controller.interval().is_empty());
        assert_eq!(controller.label(), None);
        assert!(!controller.is_range_complete());
        assert_eq!(controller.displayed_season(), Season::Spring);
    }

    #[test]
    fn test_first_click_sets_start() {
        let mut controller = SelectionController::new(model());
        let update = controller.select_day(date(Season::Summer, 9));

        assert_eq!(update.label, "Summer D9");
        assert_eq!(controller.interval().start(), Some(&date(Season::Summer, 9)));
        assert_eq!(controller.interval().end(), None);
        assert!(!controller.is_range_complete());
    }

    #[test]
    fn test_second_click_completes_in_order() {
        let mut controller = SelectionController::new(model());
        controller.select_day(date(Season::Spring, 2));
        let update = controller.select_day(date(Season::Fall, 11));

        assert_eq!(update.label, "Spring D2 -> Fall D11");
        assert_eq!(controller.interval().start(), Some(&date(Season::Spring, 2)));
        assert_eq!(controller.interval().end(), Some(&date(Season::Fall, 11)));
        assert!(controller.is_range_complete());
    }

    #[test]
    fn test_out_of_order_clicks_are_swapped() {
        let mut controller = SelectionController::new(model());
        controller.select_day(date(Season::Winter, 4));
        let update = controller.select_day(date(Season::Summer, 20));

        assert_eq!(controller.interval().start(), Some(&date(Season::Summer, 20)));
        assert_eq!(controller.interval().end(), Some(&date(Season::Winter, 4)));
        assert_eq!(update.label, "Summer D20 -> Winter D4");
    }

    #[test]
    fn test_same_day_twice() {
        let mut controller = SelectionController::new(model());
        controller.select_day(date(Season::Spring, 8));
        let update = controller.select_day(date(Season::Spring, 8));

        assert_eq!(update.label, "Spring D8 -> Spring D8");
        assert_eq!(style_of(&update.days, 8), DayStyle::RangeEndpoint);
        assert_eq!(style_of(&update.days, 7), DayStyle::Default);
    }

    #[test]
    fn test_third_click_restarts() {
        let clicks = [
            (date(Season::Spring, 1), date(Season::Winter, 28)),
            (date(Season::Fall, 6), date(Season::Spring, 3)),
            (date(Season::Summer, 5), date(Season::Summer, 5)),
        ];

        for (first, second) in clicks {
            let mut controller = SelectionController::new(model());
            controller.select_day(first);
            controller.select_day(second);
            let update = controller.select_day(date(Season::Fall, 14));

            assert_eq!(controller.interval().start(), Some(&date(Season::Fall, 14)));
            assert_eq!(controller.interval().end(), None);
            assert_eq!(update.label, "Fall D14");
            assert!(!controller.is_range_complete());
        }
    }

    #[test]
    fn test_swapped_range_scenario() {
        let names = ["A", "B", "C", "D"].map(String::from);
        let mut controller = SelectionController::new(CalendarModel::new(names, 28));

        controller.select_displayed_day(5).unwrap();
        let update = controller.select_displayed_day(3).unwrap();

        assert_eq!(update.label, "A D3 -> A D5");
        assert_eq!(controller.label(), Some("A D3 -> A D5"));
        assert_eq!(style_of(&update.days, 4), DayStyle::InRange);
        assert_eq!(style_of(&update.days, 3), DayStyle::RangeEndpoint);
        assert_eq!(style_of(&update.days, 5), DayStyle::RangeEndpoint);
        assert_eq!(style_of(&update.days, 1), DayStyle::Default);
        assert_eq!(update.days.len(), 28);
    }

    #[test]
    fn test_single_endpoint_has_no_range() {
        let mut controller = SelectionController::new(model());
        let update = controller.select_displayed_day(10).unwrap();

        assert_eq!(style_of(&update.days, 10), DayStyle::RangeEndpoint);
        assert!(update
            .days
            .iter()
            .filter(|c| c.day != 10)
            .all(|c| c.style == DayStyle::Default));
    }

    #[test]
    fn test_select_displayed_day_rejects_invalid_day() {
        let mut controller = SelectionController::new(model());
        assert!(controller.select_displayed_day(0).is_err());
        assert!(controller.select_displayed_day(29).is_err());
        assert!(controller.interval().is_empty());
    }

    #[test]
    fn test_reset_idempotent() {
        let mut controller = SelectionController::new(model());
        controller.select_day(date(Season::Spring, 1));
        controller.select_day(date(Season::Spring, 9));

        controller.reset();
        let once = (controller.interval().clone(), controller.label().map(str::to_owned));
        controller.reset();
        let twice = (controller.interval().clone(), controller.label().map(str::to_owned));

        assert_eq!(once, twice);
        assert!(controller.interval().is_empty());
        assert_eq!(controller.label(), None);
    }

    #[test]
    fn test_reset_then_select_starts_fresh() {
        let mut controller = SelectionController::new(model());
        controller.select_day(date(Season::Spring, 1));
        controller.reset();
        let update = controller.select_day(date(Season::Summer, 2));

        assert_eq!(update.label, "Summer D2");
        assert_eq!(controller.interval().end(), None);
    }

    #[test]
    fn test_selection_survives_season_navigation() {
        let mut controller = SelectionController::new(model());
        controller.select_day(date(Season::Spring, 20));
        controller.select_day(date(Season::Fall, 3));

        let summer = controller.next_season();
        assert_eq!(controller.displayed_season(), Season::Summer);
        assert!(summer.iter().all(|c| c.style == DayStyle::InRange));

        let fall = controller.next_season();
        assert_eq!(style_of(&fall, 2), DayStyle::InRange);
        assert_eq!(style_of(&fall, 3), DayStyle::RangeEndpoint);
        assert_eq!(style_of(&fall, 4), DayStyle::Default);

        let winter = controller.next_season();
        assert!(winter.iter().all(|c| c.style == DayStyle::Default));

        let spring = controller.next_season();
        assert_eq!(controller.displayed_season(), Season::Spring);
        assert_eq!(style_of(&spring, 19), DayStyle::Default);
        assert_eq!(style_of(&spring, 20), DayStyle::RangeEndpoint);
        assert_eq!(style_of(&spring, 28), DayStyle::InRange);

        assert_eq!(controller.label(), Some("Spring D20 -> Fall D3"));
    }

    #[test]
    fn test_previous_season_wraps() {
        let mut controller = SelectionController::new(model());
        controller.previous_season();
        assert_eq!(controller.displayed_season(), Season::Winter);

        let update = controller.select_displayed_day(28).unwrap();
        assert_eq!(update.label, "Winter D28");
    }

    #[test]
    fn test_classification_uses_displayed_season() {
        let mut controller = SelectionController::new(model());
        controller.select_day(date(Season::Summer, 5));
        let update = controller.select_day(date(Season::Summer, 7));

        // Spring is on display, the range lies in summer
        assert!(update.days.iter().all(|c| c.style == DayStyle::Default));
        assert_eq!(controller.classify(&date(Season::Summer, 6)), DayStyle::InRange);
    }

    #[test]
    fn test_day_past_season_end_is_never_an_endpoint() {
        let mut controller = SelectionController::new(model());
        let overflow: CalendarDate = serde_json::from_str(r#"{"season":"Spring","day":29}"#).unwrap();
        controller.select_day(overflow);

        assert_eq!(controller.classify(&date(Season::Summer, 1)), DayStyle::Default);
        assert_eq!(controller.classify(&date(Season::Spring, 28)), DayStyle::Default);
    }

    #[test]
    fn test_default_controller_uses_default_names() {
        let mut controller = SelectionController::default();
        controller.select_displayed_day(3).unwrap();
        let update = controller.select_displayed_day(5).unwrap();
        assert_eq!(update.label, "Primavera D3 -> Primavera D5");
    }

    #[test]
    fn test_day_style_display() {
        assert_eq!(DayStyle::Default.to_string(), "default");
        assert_eq!(DayStyle::InRange.to_string(), "in-range");
        assert_eq!(DayStyle::RangeEndpoint.to_string(), "range-endpoint");
    }
}
