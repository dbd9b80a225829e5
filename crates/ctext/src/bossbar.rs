#![forbid(unsafe_code)]

//! Boss bars: a named progress bar shown at the top of the screen.
//!
//! Unlike components, a [`BossBar`] is mutable state owned by whoever shows
//! it. Setters change it in place and return `&mut Self` for chaining, and
//! [`BossBar::version`] advances whenever a setter actually changes something,
//! so an owner can tell when viewers need an update.
//!
//! # Example
//! ```
//! use ctext::{BossBar, BossBarColor, BossBarOverlay, Component};
//!
//! let mut bar = BossBar::new(Component::text("Ender Dragon"), 1.0, BossBarColor::Purple, BossBarOverlay::Progress);
//! let before = bar.version();
//! bar.set_percent(0.25).set_darken_screen(true);
//! assert_eq!(bar.percent(), 0.25);
//! assert!(bar.darken_screen());
//! assert_eq!(bar.version(), before + 2);
//! ```

use crate::component::Component;
use bitflags::bitflags;

/// Bar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BossBarColor {
    #[default]
    Pink,
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    White,
}

impl BossBarColor {
    pub const ALL: [Self; 7] = [
        Self::Pink,
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Purple,
        Self::White,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::White => "white",
        }
    }
}

/// How the bar is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BossBarOverlay {
    #[default]
    Progress,
    Notched6,
    Notched10,
    Notched12,
    Notched20,
}

impl BossBarOverlay {
    /// Number of segments, `None` for a continuous bar.
    #[must_use]
    pub const fn notches(self) -> Option<u8> {
        match self {
            Self::Progress => None,
            Self::Notched6 => Some(6),
            Self::Notched10 => Some(10),
            Self::Notched12 => Some(12),
            Self::Notched20 => Some(20),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Progress => "progress",
            Self::Notched6 => "notched_6",
            Self::Notched10 => "notched_10",
            Self::Notched12 => "notched_12",
            Self::Notched20 => "notched_20",
        }
    }
}

bitflags! {
    /// Screen effects requested while the bar is visible.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BossBarFlags: u8 {
        const DARKEN_SCREEN = 0b001;
        const PLAY_BOSS_MUSIC = 0b010;
        const CREATE_WORLD_FOG = 0b100;
    }
}

/// A boss bar.
///
/// Equality compares what the bar shows; the change counter is ignored.
#[derive(Debug, Clone)]
pub struct BossBar {
    name: Component,
    percent: f32,
    color: BossBarColor,
    overlay: BossBarOverlay,
    flags: BossBarFlags,
    version: u64,
}

impl BossBar {
    /// Create a bar with no flags. `percent` is clamped into `[0, 1]`.
    #[must_use]
    pub fn new(name: Component, percent: f32, color: BossBarColor, overlay: BossBarOverlay) -> Self {
        Self {
            name,
            percent: clamp_percent(percent),
            color,
            overlay,
            flags: BossBarFlags::empty(),
            version: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &Component {
        &self.name
    }

    /// Progress in `[0, 1]`.
    #[must_use]
    pub const fn percent(&self) -> f32 {
        self.percent
    }

    #[must_use]
    pub const fn color(&self) -> BossBarColor {
        self.color
    }

    #[must_use]
    pub const fn overlay(&self) -> BossBarOverlay {
        self.overlay
    }

    #[must_use]
    pub const fn flags(&self) -> BossBarFlags {
        self.flags
    }

    #[must_use]
    pub const fn darken_screen(&self) -> bool {
        self.flags.contains(BossBarFlags::DARKEN_SCREEN)
    }

    #[must_use]
    pub const fn play_boss_music(&self) -> bool {
        self.flags.contains(BossBarFlags::PLAY_BOSS_MUSIC)
    }

    #[must_use]
    pub const fn create_world_fog(&self) -> bool {
        self.flags.contains(BossBarFlags::CREATE_WORLD_FOG)
    }

    /// Incremented on every change made through a setter.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    pub fn set_name(&mut self, name: Component) -> &mut Self {
        if self.name != name {
            self.name = name;
            self.touch();
        }
        self
    }

    /// Set progress; values outside `[0, 1]` are clamped and NaN becomes 0.
    pub fn set_percent(&mut self, percent: f32) -> &mut Self {
        let percent = clamp_percent(percent);
        if self.percent.to_bits() != percent.to_bits() {
            self.percent = percent;
            self.touch();
        }
        self
    }

    pub fn set_color(&mut self, color: BossBarColor) -> &mut Self {
        if self.color != color {
            self.color = color;
            self.touch();
        }
        self
    }

    pub fn set_overlay(&mut self, overlay: BossBarOverlay) -> &mut Self {
        if self.overlay != overlay {
            self.overlay = overlay;
            self.touch();
        }
        self
    }

    pub fn set_flags(&mut self, flags: BossBarFlags) -> &mut Self {
        if self.flags != flags {
            self.flags = flags;
            self.touch();
        }
        self
    }

    pub fn set_darken_screen(&mut self, value: bool) -> &mut Self {
        self.set_flag(BossBarFlags::DARKEN_SCREEN, value)
    }

    pub fn set_play_boss_music(&mut self, value: bool) -> &mut Self {
        self.set_flag(BossBarFlags::PLAY_BOSS_MUSIC, value)
    }

    pub fn set_create_world_fog(&mut self, value: bool) -> &mut Self {
        self.set_flag(BossBarFlags::CREATE_WORLD_FOG, value)
    }

    fn set_flag(&mut self, flag: BossBarFlags, value: bool) -> &mut Self {
        let mut flags = self.flags;
        flags.set(flag, value);
        self.set_flags(flags)
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl PartialEq for BossBar {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.percent == other.percent
            && self.color == other.color
            && self.overlay == other.overlay
            && self.flags == other.flags
    }
}

fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 1.0)
    }
}
