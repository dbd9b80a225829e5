#![forbid(unsafe_code)]

//! The immutable component tree.
//!
//! A [`Component`] pairs a [`Content`] variant with a [`Style`] and an ordered
//! list of children. Once built it never changes: every derivation
//! ([`Component::append`], [`Component::with_style`], rendering) returns a new
//! value. Children are held behind an `Arc`, so clones share subtrees.
//!
//! Equality and hashing are structural over content, style and children.
//!
//! # Example
//! ```
//! use ctext::{Component, NamedColor};
//!
//! let hello = Component::text_builder()
//!     .content("Hello, ")
//!     .color(NamedColor::Gold)
//!     .append(Component::text("world"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(hello.children().len(), 1);
//! assert_eq!(hello.as_text(), Some("Hello, "));
//! ```

use crate::builder::{
    BlockNbtBuilder, EntityNbtBuilder, KeybindBuilder, ScoreBuilder, SelectorBuilder,
    StorageNbtBuilder, TextBuilder, TranslatableBuilder,
};
use crate::nbt::{BlockPos, NbtPath};
use crate::style::{HoverEvent, Style};
use ctext_style::{ClickEvent, Color, DecorationState, TextDecoration};
use std::sync::Arc;

/// What a component displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    /// Literal text.
    Text { content: String },
    /// A translation key with positional arguments.
    Translatable {
        key: String,
        args: Arc<[Component]>,
    },
    /// The key currently bound to a control (`"key.jump"`).
    Keybind { keybind: String },
    /// A scoreboard value.
    Score {
        name: String,
        objective: String,
        value: Option<String>,
    },
    /// Names of entities matched by a selector.
    Selector { pattern: String },
    /// NBT read from a block entity.
    BlockNbt { nbt: NbtPath, pos: BlockPos },
    /// NBT read from entities matched by a selector.
    EntityNbt { nbt: NbtPath, selector: String },
    /// NBT read from command storage.
    StorageNbt { nbt: NbtPath, storage: String },
}

impl Content {
    /// Short variant name, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Translatable { .. } => "translatable",
            Self::Keybind { .. } => "keybind",
            Self::Score { .. } => "score",
            Self::Selector { .. } => "selector",
            Self::BlockNbt { .. } => "block_nbt",
            Self::EntityNbt { .. } => "entity_nbt",
            Self::StorageNbt { .. } => "storage_nbt",
        }
    }

    /// The NBT path of the three NBT variants.
    #[must_use]
    pub fn nbt(&self) -> Option<&NbtPath> {
        match self {
            Self::BlockNbt { nbt, .. } | Self::EntityNbt { nbt, .. } | Self::StorageNbt { nbt, .. } => {
                Some(nbt)
            }
            _ => None,
        }
    }
}

/// An immutable rich-text node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    content: Content,
    style: Style,
    children: Arc<[Component]>,
}

impl Component {
    pub(crate) fn from_parts(content: Content, style: Style, children: Vec<Component>) -> Self {
        Self {
            content,
            style,
            children: children.into(),
        }
    }

    /// Unstyled text with no children.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::from_parts(
            Content::Text {
                content: content.into(),
            },
            Style::new(),
            Vec::new(),
        )
    }

    /// Empty text.
    #[must_use]
    pub fn empty() -> Self {
        Self::text("")
    }

    /// Unstyled translatable component.
    #[must_use]
    pub fn translatable(key: impl Into<String>, args: impl IntoIterator<Item = Component>) -> Self {
        Self::from_parts(
            Content::Translatable {
                key: key.into(),
                args: args.into_iter().collect(),
            },
            Style::new(),
            Vec::new(),
        )
    }

    /// Unstyled keybind component.
    #[must_use]
    pub fn keybind(keybind: impl Into<String>) -> Self {
        Self::from_parts(
            Content::Keybind {
                keybind: keybind.into(),
            },
            Style::new(),
            Vec::new(),
        )
    }

    /// Unstyled selector component.
    #[must_use]
    pub fn selector(pattern: impl Into<String>) -> Self {
        Self::from_parts(
            Content::Selector {
                pattern: pattern.into(),
            },
            Style::new(),
            Vec::new(),
        )
    }

    #[must_use]
    pub fn text_builder() -> TextBuilder {
        TextBuilder::new()
    }

    #[must_use]
    pub fn translatable_builder() -> TranslatableBuilder {
        TranslatableBuilder::new()
    }

    #[must_use]
    pub fn keybind_builder() -> KeybindBuilder {
        KeybindBuilder::new()
    }

    #[must_use]
    pub fn score_builder() -> ScoreBuilder {
        ScoreBuilder::new()
    }

    #[must_use]
    pub fn selector_builder() -> SelectorBuilder {
        SelectorBuilder::new()
    }

    #[must_use]
    pub fn block_nbt_builder() -> BlockNbtBuilder {
        BlockNbtBuilder::new()
    }

    #[must_use]
    pub fn entity_nbt_builder() -> EntityNbtBuilder {
        EntityNbtBuilder::new()
    }

    #[must_use]
    pub fn storage_nbt_builder() -> StorageNbtBuilder {
        StorageNbtBuilder::new()
    }

    /// The content variant.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The style.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The children, in order.
    #[must_use]
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.style.color()
    }

    #[must_use]
    pub fn decoration(&self, decoration: TextDecoration) -> DecorationState {
        self.style.decoration(decoration)
    }

    #[must_use]
    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.style.click_event()
    }

    #[must_use]
    pub fn hover_event(&self) -> Option<&HoverEvent> {
        self.style.hover_event()
    }

    #[must_use]
    pub fn insertion(&self) -> Option<&str> {
        self.style.insertion()
    }

    /// The text of a text component.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text { content } => Some(content.as_str()),
            _ => None,
        }
    }

    /// The key of a translatable component.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match &self.content {
            Content::Translatable { key, .. } => Some(key.as_str()),
            _ => None,
        }
    }

    /// The arguments of a translatable component (empty otherwise).
    #[must_use]
    pub fn args(&self) -> &[Component] {
        match &self.content {
            Content::Translatable { args, .. } => &args[..],
            _ => &[],
        }
    }

    /// A copy with `child` appended after the existing children.
    #[must_use]
    pub fn append(&self, child: Component) -> Self {
        let mut children = Vec::with_capacity(self.children.len() + 1);
        children.extend(self.children.iter().cloned());
        children.push(child);
        Self::from_parts(self.content.clone(), self.style.clone(), children)
    }

    /// A copy with the style replaced.
    #[must_use]
    pub fn with_style(&self, style: Style) -> Self {
        Self {
            content: self.content.clone(),
            style,
            children: Arc::clone(&self.children),
        }
    }

    /// A copy with the children replaced.
    #[must_use]
    pub fn with_children(&self, children: impl IntoIterator<Item = Component>) -> Self {
        Self::from_parts(
            self.content.clone(),
            self.style.clone(),
            children.into_iter().collect(),
        )
    }

    /// Whether this is childless, unstyled, empty text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_text() == Some("") && self.children.is_empty() && self.style.is_empty()
    }
}

impl Default for Component {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for Component {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Component {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}
