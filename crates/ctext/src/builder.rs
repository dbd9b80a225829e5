#![forbid(unsafe_code)]

//! Builders for every component variant.
//!
//! [`ComponentBuilder`] holds the children and style shared by all variants;
//! the type parameter stages the variant's own fields. Setters take and
//! return the builder by value. [`ComponentBuilder::build`] borrows it, so a
//! builder can keep being extended after producing a component without
//! affecting what it already built.
//!
//! # Example
//! ```
//! use ctext::{Component, TextDecoration};
//!
//! let builder = Component::translatable_builder()
//!     .key("chat.type.text")
//!     .arg(Component::text("Steve"))
//!     .arg(Component::text("hi"))
//!     .decorate(TextDecoration::Italic);
//!
//! let first = builder.build().unwrap();
//! let second = builder.append(Component::text("!")).build().unwrap();
//! assert!(first.children().is_empty());
//! assert_eq!(second.children().len(), 1);
//! ```

use crate::component::{Component, Content};
use crate::error::BuildError;
use crate::nbt::{BlockPos, NbtPath};
use crate::style::{HoverEvent, Style};
use ctext_style::{ClickEvent, Color, DecorationState, Merge, TextDecoration};

/// Variant-specific staging state.
pub trait ContentPart: Clone + Default {
    /// Produce the content, or report the first missing mandatory field.
    fn build_content(&self) -> Result<Content, BuildError>;
}

/// A builder for one component variant.
#[derive(Debug, Clone, Default)]
pub struct ComponentBuilder<P> {
    part: P,
    style: Style,
    children: Vec<Component>,
}

pub type TextBuilder = ComponentBuilder<TextPart>;
pub type TranslatableBuilder = ComponentBuilder<TranslatablePart>;
pub type KeybindBuilder = ComponentBuilder<KeybindPart>;
pub type ScoreBuilder = ComponentBuilder<ScorePart>;
pub type SelectorBuilder = ComponentBuilder<SelectorPart>;
pub type BlockNbtBuilder = ComponentBuilder<BlockNbtPart>;
pub type EntityNbtBuilder = ComponentBuilder<EntityNbtPart>;
pub type StorageNbtBuilder = ComponentBuilder<StorageNbtPart>;

impl<P: ContentPart> ComponentBuilder<P> {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child.
    #[must_use]
    pub fn append(mut self, child: impl Into<Component>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children, in order.
    #[must_use]
    pub fn append_all(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children.extend(children);
        self
    }

    /// Replace the whole style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.style = self.style.with_color(color);
        self
    }

    /// Set the color only if none is set yet.
    #[must_use]
    pub fn color_if_absent(self, color: impl Into<Color>) -> Self {
        if self.style.color().is_some() {
            self
        } else {
            self.color(color)
        }
    }

    #[must_use]
    pub fn decoration(
        mut self,
        decoration: TextDecoration,
        state: impl Into<DecorationState>,
    ) -> Self {
        self.style = self.style.with_decoration(decoration, state);
        self
    }

    /// Switch a decoration on.
    #[must_use]
    pub fn decorate(self, decoration: TextDecoration) -> Self {
        self.decoration(decoration, DecorationState::True)
    }

    #[must_use]
    pub fn click_event(mut self, event: impl Into<Option<ClickEvent>>) -> Self {
        self.style = self.style.with_click_event(event.into());
        self
    }

    #[must_use]
    pub fn hover_event(mut self, event: impl Into<Option<HoverEvent>>) -> Self {
        self.style = self.style.with_hover_event(event.into());
        self
    }

    #[must_use]
    pub fn insertion(mut self, insertion: impl Into<String>) -> Self {
        self.style = self.style.with_insertion(Some(insertion.into()));
        self
    }

    /// Copy style attributes selected by `strategy` from `source`, keeping
    /// anything already set on this builder.
    #[must_use]
    pub fn merge_style(mut self, source: &Component, strategy: Merge) -> Self {
        self.style = self.style.merge(source.style(), strategy);
        self
    }

    #[must_use]
    pub fn merge_color(self, source: &Component) -> Self {
        self.merge_style(source, Merge::COLOR)
    }

    #[must_use]
    pub fn merge_decorations(self, source: &Component) -> Self {
        self.merge_style(source, Merge::DECORATIONS)
    }

    /// The style staged so far.
    #[must_use]
    pub fn current_style(&self) -> &Style {
        &self.style
    }

    /// The children staged so far.
    #[must_use]
    pub fn current_children(&self) -> &[Component] {
        &self.children
    }

    /// Snapshot the builder into an immutable component.
    pub fn build(&self) -> Result<Component, BuildError> {
        let content = self.part.build_content()?;
        Ok(Component::from_parts(
            content,
            self.style.clone(),
            self.children.clone(),
        ))
    }
}

fn required(
    value: &Option<String>,
    target: &'static str,
    reason: &'static str,
) -> Result<String, BuildError> {
    value.clone().ok_or(BuildError::missing(target, reason))
}

// --- text ---

#[derive(Debug, Clone, Default)]
pub struct TextPart {
    content: Option<String>,
}

impl ContentPart for TextPart {
    fn build_content(&self) -> Result<Content, BuildError> {
        Ok(Content::Text {
            content: required(&self.content, "text component", "content is not set")?,
        })
    }
}

impl TextBuilder {
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.part.content = Some(content.into());
        self
    }
}

// --- translatable ---

#[derive(Debug, Clone, Default)]
pub struct TranslatablePart {
    key: Option<String>,
    args: Vec<Component>,
}

impl ContentPart for TranslatablePart {
    fn build_content(&self) -> Result<Content, BuildError> {
        Ok(Content::Translatable {
            key: required(&self.key, "translatable component", "key is not set")?,
            args: self.args.iter().cloned().collect(),
        })
    }
}

impl TranslatableBuilder {
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.part.key = Some(key.into());
        self
    }

    /// Replace all arguments.
    #[must_use]
    pub fn args(mut self, args: impl IntoIterator<Item = Component>) -> Self {
        self.part.args = args.into_iter().collect();
        self
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<Component>) -> Self {
        self.part.args.push(arg.into());
        self
    }
}

// --- keybind ---

#[derive(Debug, Clone, Default)]
pub struct KeybindPart {
    keybind: Option<String>,
}

impl ContentPart for KeybindPart {
    fn build_content(&self) -> Result<Content, BuildError> {
        Ok(Content::Keybind {
            keybind: required(&self.keybind, "keybind component", "keybind is not set")?,
        })
    }
}

impl KeybindBuilder {
    #[must_use]
    pub fn keybind(mut self, keybind: impl Into<String>) -> Self {
        self.part.keybind = Some(keybind.into());
        self
    }
}

// --- score ---

#[derive(Debug, Clone, Default)]
pub struct ScorePart {
    name: Option<String>,
    objective: Option<String>,
    value: Option<String>,
}

impl ContentPart for ScorePart {
    fn build_content(&self) -> Result<Content, BuildError> {
        Ok(Content::Score {
            name: required(&self.name, "score component", "name is not set")?,
            objective: required(&self.objective, "score component", "objective is not set")?,
            value: self.value.clone(),
        })
    }
}

impl ScoreBuilder {
    /// The score holder (a player name or selector).
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.part.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn objective(mut self, objective: impl Into<String>) -> Self {
        self.part.objective = Some(objective.into());
        self
    }

    /// A fixed value to display instead of the live score.
    #[must_use]
    pub fn value(mut self, value: impl Into<Option<String>>) -> Self {
        self.part.value = value.into();
        self
    }
}

// --- selector ---

#[derive(Debug, Clone, Default)]
pub struct SelectorPart {
    pattern: Option<String>,
}

impl ContentPart for SelectorPart {
    fn build_content(&self) -> Result<Content, BuildError> {
        Ok(Content::Selector {
            pattern: required(&self.pattern, "selector component", "pattern is not set")?,
        })
    }
}

impl SelectorBuilder {
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.part.pattern = Some(pattern.into());
        self
    }
}

// --- nbt ---

/// Fields shared by the three NBT variants.
#[derive(Debug, Clone, Default)]
pub struct NbtStaging {
    path: Option<String>,
    interpret: bool,
}

impl NbtStaging {
    fn build(&self, target: &'static str) -> Result<NbtPath, BuildError> {
        let path = required(&self.path, target, "nbt path is not set")?;
        Ok(NbtPath::new(path, self.interpret))
    }
}

/// Staging parts that carry an NBT path.
pub trait NbtPart: ContentPart {
    fn nbt_mut(&mut self) -> &mut NbtStaging;
}

impl<P: NbtPart> ComponentBuilder<P> {
    #[must_use]
    pub fn nbt_path(mut self, path: impl Into<String>) -> Self {
        self.part.nbt_mut().path = Some(path.into());
        self
    }

    #[must_use]
    pub fn interpret(mut self, interpret: bool) -> Self {
        self.part.nbt_mut().interpret = interpret;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlockNbtPart {
    nbt: NbtStaging,
    pos: Option<BlockPos>,
}

impl ContentPart for BlockNbtPart {
    fn build_content(&self) -> Result<Content, BuildError> {
        const TARGET: &str = "block nbt component";
        let nbt = self.nbt.build(TARGET)?;
        let pos = self
            .pos
            .ok_or(BuildError::missing(TARGET, "position is not set"))?;
        Ok(Content::BlockNbt { nbt, pos })
    }
}

impl NbtPart for BlockNbtPart {
    fn nbt_mut(&mut self) -> &mut NbtStaging {
        &mut self.nbt
    }
}

impl BlockNbtBuilder {
    #[must_use]
    pub fn pos(mut self, pos: BlockPos) -> Self {
        self.part.pos = Some(pos);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct EntityNbtPart {
    nbt: NbtStaging,
    selector: Option<String>,
}

impl ContentPart for EntityNbtPart {
    fn build_content(&self) -> Result<Content, BuildError> {
        const TARGET: &str = "entity nbt component";
        Ok(Content::EntityNbt {
            nbt: self.nbt.build(TARGET)?,
            selector: required(&self.selector, TARGET, "selector is not set")?,
        })
    }
}

impl NbtPart for EntityNbtPart {
    fn nbt_mut(&mut self) -> &mut NbtStaging {
        &mut self.nbt
    }
}

impl EntityNbtBuilder {
    #[must_use]
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.part.selector = Some(selector.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct StorageNbtPart {
    nbt: NbtStaging,
    storage: Option<String>,
}

impl ContentPart for StorageNbtPart {
    fn build_content(&self) -> Result<Content, BuildError> {
        const TARGET: &str = "storage nbt component";
        Ok(Content::StorageNbt {
            nbt: self.nbt.build(TARGET)?,
            storage: required(&self.storage, TARGET, "storage id is not set")?,
        })
    }
}

impl NbtPart for StorageNbtPart {
    fn nbt_mut(&mut self) -> &mut NbtStaging {
        &mut self.nbt
    }
}

impl StorageNbtBuilder {
    /// The storage id (`"namespace:path"`).
    #[must_use]
    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.part.storage = Some(storage.into());
        self
    }
}
