//! Click and hover event descriptors.
//!
//! Click events are opaque to rendering and copied verbatim. Hover events carry
//! a component payload and live next to the component model; only their
//! action tag is defined here.

use std::fmt;

/// What happens when a component is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    OpenFile,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

impl ClickAction {
    /// The canonical snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OpenUrl => "open_url",
            Self::OpenFile => "open_file",
            Self::RunCommand => "run_command",
            Self::SuggestCommand => "suggest_command",
            Self::ChangePage => "change_page",
            Self::CopyToClipboard => "copy_to_clipboard",
        }
    }

    /// Whether a client may accept this action from untrusted input.
    #[must_use]
    pub const fn is_readable(self) -> bool {
        !matches!(self, Self::OpenFile)
    }
}

impl fmt::Display for ClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A click action paired with its string argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    action: ClickAction,
    value: String,
}

impl ClickEvent {
    /// Create a click event.
    #[must_use]
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }

    #[must_use]
    pub fn open_file(path: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenFile, path)
    }

    #[must_use]
    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::RunCommand, command)
    }

    #[must_use]
    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::SuggestCommand, command)
    }

    /// Turn a book to `page` (1-based).
    #[must_use]
    pub fn change_page(page: u32) -> Self {
        Self::new(ClickAction::ChangePage, page.to_string())
    }

    #[must_use]
    pub fn copy_to_clipboard(text: impl Into<String>) -> Self {
        Self::new(ClickAction::CopyToClipboard, text)
    }

    /// The action.
    #[must_use]
    pub const fn action(&self) -> ClickAction {
        self.action
    }

    /// The action argument.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// What is shown when a component is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverAction {
    ShowText,
    ShowItem,
    ShowEntity,
}

impl HoverAction {
    /// The canonical snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShowText => "show_text",
            Self::ShowItem => "show_item",
            Self::ShowEntity => "show_entity",
        }
    }
}

impl fmt::Display for HoverAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_constructors_pick_action() {
        assert_eq!(ClickEvent::open_url("https://x").action(), ClickAction::OpenUrl);
        assert_eq!(ClickEvent::run_command("/spawn").value(), "/spawn");
        let page = ClickEvent::change_page(3);
        assert_eq!(page.action(), ClickAction::ChangePage);
        assert_eq!(page.value(), "3");
    }

    #[test]
    fn open_file_is_not_readable() {
        assert!(!ClickAction::OpenFile.is_readable());
        assert!(ClickAction::SuggestCommand.is_readable());
    }

    #[test]
    fn action_names() {
        assert_eq!(ClickAction::CopyToClipboard.to_string(), "copy_to_clipboard");
        assert_eq!(HoverAction::ShowEntity.to_string(), "show_entity");
    }
}
