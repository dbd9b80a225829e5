#![forbid(unsafe_code)]

//! On-screen titles.
//!
//! A [`Title`] bundles an optional title and subtitle, optional fade
//! [`Times`], and the `clear`/`reset` commands. [`TitleBuilder::build`]
//! refuses a title that would do nothing.

use crate::component::Component;
use crate::error::BuildError;
use std::time::Duration;

/// Game ticks per second.
pub const TICKS_PER_SECOND: u32 = 20;

const MILLIS_PER_TICK: u128 = 1000 / TICKS_PER_SECOND as u128;

/// Fade-in, stay and fade-out durations in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Times {
    pub fade_in: u32,
    pub stay: u32,
    pub fade_out: u32,
}

impl Times {
    /// The client's defaults: half a second in, 3.5 seconds shown, one second out.
    pub const DEFAULT: Self = Self::new(10, 70, 20);

    #[must_use]
    pub const fn new(fade_in: u32, stay: u32, fade_out: u32) -> Self {
        Self {
            fade_in,
            stay,
            fade_out,
        }
    }

    /// Convert durations to whole ticks, rounding down.
    #[must_use]
    pub fn from_durations(fade_in: Duration, stay: Duration, fade_out: Duration) -> Self {
        Self::new(ticks(fade_in), ticks(stay), ticks(fade_out))
    }

    #[must_use]
    pub const fn fade_in_duration(&self) -> Duration {
        duration(self.fade_in)
    }

    #[must_use]
    pub const fn stay_duration(&self) -> Duration {
        duration(self.stay)
    }

    #[must_use]
    pub const fn fade_out_duration(&self) -> Duration {
        duration(self.fade_out)
    }
}

impl Default for Times {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn ticks(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis() / MILLIS_PER_TICK).unwrap_or(u32::MAX)
}

const fn duration(ticks: u32) -> Duration {
    Duration::from_millis(ticks as u64 * MILLIS_PER_TICK as u64)
}

/// A title to show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Title {
    title: Option<Component>,
    subtitle: Option<Component>,
    times: Option<Times>,
    clear: bool,
    reset: bool,
}

impl Title {
    #[must_use]
    pub fn builder() -> TitleBuilder {
        TitleBuilder::new()
    }

    #[must_use]
    pub fn title(&self) -> Option<&Component> {
        self.title.as_ref()
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&Component> {
        self.subtitle.as_ref()
    }

    #[must_use]
    pub const fn times(&self) -> Option<Times> {
        self.times
    }

    /// Whether the current title is removed first.
    #[must_use]
    pub const fn clear(&self) -> bool {
        self.clear
    }

    /// Whether the client's title settings are reset first.
    #[must_use]
    pub const fn reset(&self) -> bool {
        self.reset
    }
}

/// Builder for [`Title`].
///
/// ```
/// use ctext::{Component, Title, Times};
///
/// let title = Title::builder()
///     .title(Component::text("Round 2"))
///     .times(Times::new(5, 40, 5))
///     .build()
///     .unwrap();
/// assert_eq!(title.times().unwrap().stay, 40);
///
/// assert!(Title::builder().build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TitleBuilder {
    inner: Title,
}

impl TitleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<Option<Component>>) -> Self {
        self.inner.title = title.into();
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<Option<Component>>) -> Self {
        self.inner.subtitle = subtitle.into();
        self
    }

    #[must_use]
    pub fn times(mut self, times: impl Into<Option<Times>>) -> Self {
        self.inner.times = times.into();
        self
    }

    #[must_use]
    pub fn clear(mut self, clear: bool) -> Self {
        self.inner.clear = clear;
        self
    }

    #[must_use]
    pub fn reset(mut self, reset: bool) -> Self {
        self.inner.reset = reset;
        self
    }

    pub fn build(&self) -> Result<Title, BuildError> {
        let t = &self.inner;
        if t.title.is_none() && t.subtitle.is_none() && t.times.is_none() && !t.clear && !t.reset {
            return Err(BuildError::missing("title", "title is empty"));
        }
        Ok(t.clone())
    }
}
