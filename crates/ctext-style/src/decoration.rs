//! Text decorations with explicit "not set" tracking.
//!
//! A component may switch a decoration on, switch it off, or leave it
//! unspecified so that it inherits from its parent. [`DecorationSet`] packs
//! those three states for every [`TextDecoration`] into two bit masks.

use std::fmt;

bitflags::bitflags! {
    /// Bit set of text decorations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decorations: u8 {
        /// Bold text.
        const BOLD          = 0b0000_0001;
        /// Italic text.
        const ITALIC        = 0b0000_0010;
        /// Underlined text.
        const UNDERLINED    = 0b0000_0100;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0000_1000;
        /// Obfuscated (scrambled) text.
        const OBFUSCATED    = 0b0001_0000;
    }
}

/// A single text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDecoration {
    Bold,
    Italic,
    Underlined,
    Strikethrough,
    Obfuscated,
}

impl TextDecoration {
    /// All decorations, in flag order.
    pub const ALL: [TextDecoration; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Underlined,
        Self::Strikethrough,
        Self::Obfuscated,
    ];

    /// The flag bit for this decoration.
    #[must_use]
    pub const fn flag(self) -> Decorations {
        match self {
            Self::Bold => Decorations::BOLD,
            Self::Italic => Decorations::ITALIC,
            Self::Underlined => Decorations::UNDERLINED,
            Self::Strikethrough => Decorations::STRIKETHROUGH,
            Self::Obfuscated => Decorations::OBFUSCATED,
        }
    }

    /// The canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underlined => "underlined",
            Self::Strikethrough => "strikethrough",
            Self::Obfuscated => "obfuscated",
        }
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tri-state value of one decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecorationState {
    /// Inherit from the parent.
    #[default]
    NotSet,
    /// Explicitly enabled.
    True,
    /// Explicitly disabled.
    False,
}

impl DecorationState {
    /// `true` unless the state is [`DecorationState::NotSet`].
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::NotSet)
    }

    /// Convert to an optional boolean.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::NotSet => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }
}

impl From<bool> for DecorationState {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for DecorationState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::NotSet, Self::from)
    }
}

/// Tri-state decorations for all [`TextDecoration`]s.
///
/// Invariant: `enabled` is always a subset of `explicit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecorationSet {
    enabled: Decorations,
    explicit: Decorations,
}

impl DecorationSet {
    /// A set with every decoration unset.
    pub const EMPTY: Self = Self {
        enabled: Decorations::empty(),
        explicit: Decorations::empty(),
    };

    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Get the state of one decoration.
    #[must_use]
    pub fn get(self, decoration: TextDecoration) -> DecorationState {
        let flag = decoration.flag();
        if !self.explicit.contains(flag) {
            DecorationState::NotSet
        } else if self.enabled.contains(flag) {
            DecorationState::True
        } else {
            DecorationState::False
        }
    }

    /// Return a copy with one decoration set to `state`.
    #[must_use]
    pub fn with(mut self, decoration: TextDecoration, state: DecorationState) -> Self {
        let flag = decoration.flag();
        match state {
            DecorationState::NotSet => {
                self.explicit.remove(flag);
                self.enabled.remove(flag);
            }
            DecorationState::True => {
                self.explicit.insert(flag);
                self.enabled.insert(flag);
            }
            DecorationState::False => {
                self.explicit.insert(flag);
                self.enabled.remove(flag);
            }
        }
        self
    }

    /// Decorations explicitly switched on.
    #[must_use]
    pub const fn enabled(self) -> Decorations {
        self.enabled
    }

    /// Decorations explicitly switched on or off.
    #[must_use]
    pub const fn explicit(self) -> Decorations {
        self.explicit
    }

    /// `true` when no decoration is set either way.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.explicit.is_empty()
    }

    /// Fill every decoration unset here from `source`; set ones are kept.
    #[must_use]
    pub fn merge(self, source: Self) -> Self {
        let fill = source.explicit.difference(self.explicit);
        Self {
            enabled: self.enabled | (source.enabled & fill),
            explicit: self.explicit | fill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_all_unset() {
        let set = DecorationSet::new();
        for decoration in TextDecoration::ALL {
            assert_eq!(set.get(decoration), DecorationState::NotSet);
        }
        assert!(set.is_empty());
    }

    #[test]
    fn with_tracks_three_states() {
        let set = DecorationSet::new()
            .with(TextDecoration::Bold, DecorationState::True)
            .with(TextDecoration::Italic, DecorationState::False);
        assert_eq!(set.get(TextDecoration::Bold), DecorationState::True);
        assert_eq!(set.get(TextDecoration::Italic), DecorationState::False);
        assert_eq!(set.get(TextDecoration::Underlined), DecorationState::NotSet);
        assert_eq!(set.enabled(), Decorations::BOLD);
        assert_eq!(set.explicit(), Decorations::BOLD | Decorations::ITALIC);

        let cleared = set.with(TextDecoration::Bold, DecorationState::NotSet);
        assert_eq!(cleared.get(TextDecoration::Bold), DecorationState::NotSet);
    }

    #[test]
    fn merge_never_overrides_explicit_false() {
        let target = DecorationSet::new().with(TextDecoration::Bold, DecorationState::False);
        let source = DecorationSet::new()
            .with(TextDecoration::Bold, DecorationState::True)
            .with(TextDecoration::Italic, DecorationState::True);
        let merged = target.merge(source);
        assert_eq!(merged.get(TextDecoration::Bold), DecorationState::False);
        assert_eq!(merged.get(TextDecoration::Italic), DecorationState::True);
    }

    #[test]
    fn state_bool_conversions() {
        assert_eq!(DecorationState::from(true), DecorationState::True);
        assert_eq!(DecorationState::from(None), DecorationState::NotSet);
        assert_eq!(DecorationState::False.as_bool(), Some(false));
        assert!(!DecorationState::NotSet.is_set());
    }

    fn state() -> impl Strategy<Value = DecorationState> {
        prop_oneof![
            Just(DecorationState::NotSet),
            Just(DecorationState::True),
            Just(DecorationState::False),
        ]
    }

    fn set() -> impl Strategy<Value = DecorationSet> {
        proptest::collection::vec(state(), 5).prop_map(|states| {
            TextDecoration::ALL
                .iter()
                .zip(states)
                .fold(DecorationSet::new(), |acc, (d, s)| acc.with(*d, s))
        })
    }

    proptest! {
        #[test]
        fn merge_is_additive_only(target in set(), source in set()) {
            let merged = target.merge(source);
            for decoration in TextDecoration::ALL {
                let before = target.get(decoration);
                if before.is_set() {
                    prop_assert_eq!(merged.get(decoration), before);
                } else {
                    prop_assert_eq!(merged.get(decoration), source.get(decoration));
                }
            }
            prop_assert!(merged.explicit().contains(merged.enabled()));
        }
    }
}
