//! Style merge strategies.

bitflags::bitflags! {
    /// Which style attributes a merge may copy from its source.
    ///
    /// Merges are additive: an attribute is only copied when the target has
    /// not set it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Merge: u8 {
        /// The color.
        const COLOR       = 0b0001;
        /// Every decoration state.
        const DECORATIONS = 0b0010;
        /// Click and hover events.
        const EVENTS      = 0b0100;
        /// Shift-click insertion text.
        const INSERTION   = 0b1000;

        /// Color and decorations only.
        const COLOR_AND_DECORATIONS = Self::COLOR.bits() | Self::DECORATIONS.bits();
    }
}

impl Default for Merge {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_strategies() {
        assert!(Merge::COLOR_AND_DECORATIONS.contains(Merge::COLOR));
        assert!(Merge::COLOR_AND_DECORATIONS.contains(Merge::DECORATIONS));
        assert!(!Merge::COLOR_AND_DECORATIONS.contains(Merge::EVENTS));
        assert_eq!(Merge::default(), Merge::all());
    }
}
