#![forbid(unsafe_code)]

//! Component style: color, decorations, events and insertion text.
//!
//! [`Style`] is an immutable value. The `with_*` methods return modified
//! copies and [`Style::merge`] fills attributes that are still unset from
//! another style, never overwriting what the target already has.
//!
//! # Example
//! ```
//! use ctext::{Color, DecorationState, Merge, NamedColor, Style, TextDecoration};
//!
//! let base = Style::new().with_color(NamedColor::Gold);
//! let source = Style::new()
//!     .with_color(NamedColor::Red)
//!     .with_decoration(TextDecoration::Bold, true);
//!
//! let merged = base.merge(&source, Merge::COLOR_AND_DECORATIONS);
//! assert_eq!(merged.color(), Some(Color::Named(NamedColor::Gold)));
//! assert_eq!(merged.decoration(TextDecoration::Bold), DecorationState::True);
//! ```

use crate::component::Component;
use ctext_style::{
    ClickEvent, Color, DecorationSet, DecorationState, HoverAction, Merge, TextDecoration,
};
use std::sync::Arc;

/// A hover action together with the component it displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HoverEvent {
    action: HoverAction,
    value: Arc<Component>,
}

impl HoverEvent {
    /// Create a hover event.
    #[must_use]
    pub fn new(action: HoverAction, value: Component) -> Self {
        Self {
            action,
            value: Arc::new(value),
        }
    }

    /// Show `text` as a tooltip.
    #[must_use]
    pub fn show_text(text: Component) -> Self {
        Self::new(HoverAction::ShowText, text)
    }

    /// Show an item described by `item`.
    #[must_use]
    pub fn show_item(item: Component) -> Self {
        Self::new(HoverAction::ShowItem, item)
    }

    /// Show an entity described by `entity`.
    #[must_use]
    pub fn show_entity(entity: Component) -> Self {
        Self::new(HoverAction::ShowEntity, entity)
    }

    /// The action tag.
    #[must_use]
    pub const fn action(&self) -> HoverAction {
        self.action
    }

    /// The payload component.
    #[must_use]
    pub fn value(&self) -> &Component {
        &self.value
    }

    /// Replace the payload with `f(payload)`, keeping the action.
    #[must_use]
    pub fn map_value(&self, f: impl FnOnce(&Component) -> Component) -> Self {
        Self::new(self.action, f(&self.value))
    }
}

/// Formatting attributes attached to a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    color: Option<Color>,
    decorations: DecorationSet,
    click_event: Option<ClickEvent>,
    hover_event: Option<HoverEvent>,
    insertion: Option<String>,
}

impl Style {
    /// A style with nothing set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: None,
            decorations: DecorationSet::EMPTY,
            click_event: None,
            hover_event: None,
            insertion: None,
        }
    }

    /// The color, if set.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// The state of one decoration.
    #[must_use]
    pub fn decoration(&self, decoration: TextDecoration) -> DecorationState {
        self.decorations.get(decoration)
    }

    /// All decoration states.
    #[must_use]
    pub const fn decorations(&self) -> DecorationSet {
        self.decorations
    }

    /// The click event, if set.
    #[must_use]
    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.click_event.as_ref()
    }

    /// The hover event, if set.
    #[must_use]
    pub fn hover_event(&self) -> Option<&HoverEvent> {
        self.hover_event.as_ref()
    }

    /// The shift-click insertion text, if set.
    #[must_use]
    pub fn insertion(&self) -> Option<&str> {
        self.insertion.as_deref()
    }

    /// `true` when no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.decorations.is_empty()
            && self.click_event.is_none()
            && self.hover_event.is_none()
            && self.insertion.is_none()
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Clear the color.
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.color = None;
        self
    }

    #[must_use]
    pub fn with_decoration(
        mut self,
        decoration: TextDecoration,
        state: impl Into<DecorationState>,
    ) -> Self {
        self.decorations = self.decorations.with(decoration, state.into());
        self
    }

    #[must_use]
    pub fn with_decorations(mut self, decorations: DecorationSet) -> Self {
        self.decorations = decorations;
        self
    }

    #[must_use]
    pub fn with_click_event(mut self, event: Option<ClickEvent>) -> Self {
        self.click_event = event;
        self
    }

    #[must_use]
    pub fn with_hover_event(mut self, event: Option<HoverEvent>) -> Self {
        self.hover_event = event;
        self
    }

    #[must_use]
    pub fn with_insertion(mut self, insertion: Option<String>) -> Self {
        self.insertion = insertion;
        self
    }

    /// Fill attributes selected by `strategy` from `source` where unset here.
    #[must_use]
    pub fn merge(&self, source: &Style, strategy: Merge) -> Style {
        let mut merged = self.clone();
        if strategy.contains(Merge::COLOR) && merged.color.is_none() {
            merged.color = source.color;
        }
        if strategy.contains(Merge::DECORATIONS) {
            merged.decorations = merged.decorations.merge(source.decorations);
        }
        if strategy.contains(Merge::EVENTS) {
            if merged.click_event.is_none() {
                merged.click_event = source.click_event.clone();
            }
            if merged.hover_event.is_none() {
                merged.hover_event = source.hover_event.clone();
            }
        }
        if strategy.contains(Merge::INSERTION) && merged.insertion.is_none() {
            merged.insertion = source.insertion.clone();
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctext_style::NamedColor;

    fn full_style() -> Style {
        Style::new()
            .with_color(NamedColor::Aqua)
            .with_decoration(TextDecoration::Italic, true)
            .with_click_event(Some(ClickEvent::run_command("/help")))
            .with_hover_event(Some(HoverEvent::show_text(Component::text("tip"))))
            .with_insertion(Some("ins".to_string()))
    }

    #[test]
    fn new_is_empty() {
        assert!(Style::new().is_empty());
        assert_eq!(Style::new(), Style::default());
        assert!(!full_style().is_empty());
    }

    #[test]
    fn merge_fills_unset_attributes() {
        let merged = Style::new().merge(&full_style(), Merge::all());
        assert_eq!(merged, full_style());
    }

    #[test]
    fn merge_never_overwrites() {
        let target = Style::new()
            .with_color(NamedColor::Red)
            .with_decoration(TextDecoration::Italic, false)
            .with_click_event(Some(ClickEvent::open_url("https://a")));
        let merged = target.merge(&full_style(), Merge::all());
        assert_eq!(merged.color(), Some(Color::Named(NamedColor::Red)));
        assert_eq!(merged.decoration(TextDecoration::Italic), DecorationState::False);
        assert_eq!(merged.click_event(), Some(&ClickEvent::open_url("https://a")));
        assert_eq!(merged.insertion(), Some("ins"));
        assert!(merged.hover_event().is_some());
    }

    #[test]
    fn merge_respects_strategy() {
        let merged = Style::new().merge(&full_style(), Merge::COLOR_AND_DECORATIONS);
        assert_eq!(merged.color(), Some(Color::Named(NamedColor::Aqua)));
        assert_eq!(merged.decoration(TextDecoration::Italic), DecorationState::True);
        assert!(merged.click_event().is_none());
        assert!(merged.hover_event().is_none());
        assert!(merged.insertion().is_none());
    }

    #[test]
    fn hover_map_keeps_action() {
        let hover = HoverEvent::show_entity(Component::text("zombie"));
        let mapped = hover.map_value(|_| Component::text("creeper"));
        assert_eq!(mapped.action(), HoverAction::ShowEntity);
        assert_eq!(mapped.value(), &Component::text("creeper"));
    }
}
