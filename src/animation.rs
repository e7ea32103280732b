//! Hover color transitions.
//!
//! A [`HoverAnimator`] blends one color property of a view element from a
//! start color to an end color over a fixed duration. The host event loop
//! calls [`HoverAnimator::tick`] every [`HoverAnimator::next_tick_in`]; progress
//! is measured against the time passed to `tick`, not against the number of
//! ticks, so late ticks do not stretch the transition.
//!
//! At most one transition runs per `(element, property)`. Starting another
//! one replaces it on the spot.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::prelude::*;
use crate::{CalendarConfig, DEFAULT_TICK_INTERVAL_MS, DEFAULT_TRANSITION_MS, Rgb};

/// Handle of a view element, assigned by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "element {}", _0)]
pub struct ElementId(u64);

/// The color slot of an element a transition writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ColorProperty {
    #[display(fmt = "background")]
    Background,
    #[display(fmt = "foreground")]
    Foreground,
}

/// The view side of an animation: where colors are written.
pub trait ColorTarget {
    /// False once the element has been torn down
    fn is_alive(&self, element: ElementId) -> bool;

    fn set_color(&mut self, element: ElementId, property: ColorProperty, color: Rgb);
}

/// A transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub element:  ElementId,
    pub property: ColorProperty,
    pub from:     Rgb,
    pub to:       Rgb,
    /// `None` uses the animator's default duration
    pub duration: Option<Duration>,
}

impl Transition {
    pub const fn new(element: ElementId, property: ColorProperty, from: Rgb, to: Rgb) -> Self {
        Self {
            element,
            property,
            from,
            to,
            duration: None,
        }
    }

    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// A running transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    from:       Rgb,
    to:         Rgb,
    started_at: Instant,
    duration:   Duration,
}

impl AnimationState {
    pub const fn start_color(&self) -> Rgb {
        self.from
    }

    pub const fn end_color(&self) -> Rgb {
        self.to
    }

    pub const fn started_at(&self) -> Instant {
        self.started_at
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Share of the duration elapsed at `now`; 1.0 or more once finished
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64
    }

    /// Writes the frame for `now` and reports whether the transition goes on.
    /// The final frame is always exactly `to`.
    fn advance<T>(&self, element: ElementId, property: ColorProperty, now: Instant, target: &mut T) -> bool
    where
        T: ColorTarget + ?Sized,
    {
        if !target.is_alive(element) {
            log::debug!("{element} is gone, dropping its {property} transition");
            return false;
        }

        let fraction = self.fraction(now);
        if fraction >= 1.0 {
            log::trace!("{element} {property} finished at {}", self.to);
            target.set_color(element, property, self.to);
            return false;
        }

        let color = self.from.interpolate(self.to, fraction);
        log::trace!("{element} {property} -> {color} ({fraction:.3})");
        target.set_color(element, property, color);
        true
    }
}

/// Owns every running hover transition
#[derive(Debug, Clone)]
pub struct HoverAnimator {
    active:           HashMap<(ElementId, ColorProperty), AnimationState>,
    tick_interval:    Duration,
    default_duration: Duration,
}

impl Default for HoverAnimator {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            Duration::from_millis(DEFAULT_TRANSITION_MS),
        )
    }
}

impl HoverAnimator {
    pub fn new(tick_interval: Duration, default_duration: Duration) -> Self {
        Self {
            active: HashMap::new(),
            tick_interval,
            default_duration,
        }
    }

    /// Animator using the tick interval and transition length from `config`
    pub fn from_config(config: &CalendarConfig) -> Self {
        Self::new(config.tick_interval(), config.transition_duration())
    }

    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub const fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Starts `transition`, replacing any transition already running on the
    /// same element and property. The first frame is written right away.
    pub fn start<T>(&mut self, transition: Transition, now: Instant, target: &mut T)
    where
        T: ColorTarget + ?Sized,
    {
        let Transition {
            element,
            property,
            from,
            to,
            duration,
        } = transition;

        self.cancel(element, property);

        let state = AnimationState {
            from,
            to,
            started_at: now,
            duration: duration.unwrap_or(self.default_duration),
        };
        if state.advance(element, property, now, target) {
            self.active.insert((element, property), state);
        }
    }

    /// Stops the transition on `property` of `element` without writing
    /// anything further. Returns whether one was running.
    pub fn cancel(&mut self, element: ElementId, property: ColorProperty) -> bool {
        let cancelled = self.active.remove(&(element, property)).is_some();
        if cancelled {
            log::debug!("{element} {property} transition cancelled");
        }
        cancelled
    }

    /// Stops every transition of `element`, for when it is torn down.
    /// Returns how many were running.
    pub fn cancel_element(&mut self, element: ElementId) -> usize {
        let before = self.active.len();
        self.active.retain(|(id, _), _| *id != element);
        let cancelled = before - self.active.len();
        if cancelled > 0 {
            log::debug!("{element} torn down, {cancelled} transition(s) cancelled");
        }
        cancelled
    }

    /// Stops every transition of each of `elements`, for when the view repaints
    /// them from scratch. Returns how many were running.
    pub fn cancel_elements<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = ElementId>,
    {
        let elements: HashSet<ElementId> = elements.into_iter().collect();
        let before = self.active.len();
        self.active.retain(|(id, _), _| !elements.contains(id));
        let cancelled = before - self.active.len();
        if cancelled > 0 {
            log::debug!("repaint cancelled {cancelled} transition(s)");
        }
        cancelled
    }

    /// Advances every running transition to `now`. Returns how many are still
    /// running afterwards.
    pub fn tick<T>(&mut self, now: Instant, target: &mut T) -> usize
    where
        T: ColorTarget + ?Sized,
    {
        self.active
            .retain(|&(element, property), state| state.advance(element, property, now, &mut *target));
        self.active.len()
    }

    /// Delay before the next [`tick`](Self::tick), or `None` when idle
    pub fn next_tick_in(&self) -> Option<Duration> {
        (!self.active.is_empty()).then_some(self.tick_interval)
    }

    pub fn is_animating(&self, element: ElementId, property: ColorProperty) -> bool {
        self.active.contains_key(&(element, property))
    }

    pub fn state(&self, element: ElementId, property: ColorProperty) -> Option<&AnimationState> {
        self.active.get(&(element, property))
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
