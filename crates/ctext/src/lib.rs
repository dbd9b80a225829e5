#![forbid(unsafe_code)]

//! Immutable rich-text components with translation-aware rendering.
//!
//! - [`Component`] - content variant, [`Style`] and ordered children
//! - [`ComponentBuilder`] - per-variant staging that snapshots into components
//! - [`TranslatableRenderer`] - deep renderer resolving translation keys
//! - [`BossBar`] and [`Title`] - display state built from components
//!
//! # Example
//! ```
//! use ctext::prelude::*;
//!
//! let mut catalog = StringCatalog::new();
//! catalog.insert("en", "welcome", "Welcome, {0}!").unwrap();
//!
//! let message = Component::translatable_builder()
//!     .key("welcome")
//!     .arg(Component::text_builder().content("Steve").color(NamedColor::Gold).build().unwrap())
//!     .color(NamedColor::Gray)
//!     .build()
//!     .unwrap();
//!
//! let rendered = TranslatableRenderer::new(catalog).render(&message, "en-US");
//! assert_eq!(rendered.color(), Some(Color::Named(NamedColor::Gray)));
//! assert_eq!(rendered.children()[0].as_text(), Some("Welcome, "));
//! assert_eq!(rendered.children()[1].color(), Some(Color::Named(NamedColor::Gold)));
//! ```

pub mod bossbar;
pub mod builder;
pub mod component;
pub mod error;
pub mod nbt;
pub mod render;
pub mod style;
pub mod title;

pub use bossbar::{BossBar, BossBarColor, BossBarFlags, BossBarOverlay};
pub use builder::{
    BlockNbtBuilder, ComponentBuilder, ContentPart, EntityNbtBuilder, KeybindBuilder, NbtPart,
    ScoreBuilder, SelectorBuilder, StorageNbtBuilder, TextBuilder, TranslatableBuilder,
};
pub use component::{Component, Content};
pub use error::BuildError;
pub use nbt::{BlockPos, CoordKind, NbtPath, PosParseError, WorldCoord};
pub use render::{
    ComponentRenderer, MissingArgument, RenderConfig, TranslatableRenderer,
};
pub use style::{HoverEvent, Style};
pub use title::{TICKS_PER_SECOND, Times, Title, TitleBuilder};

// --- Re-exports ------------------------------------------------------------

pub use ctext_i18n::{
    MessageTemplate, NoTranslations, Run, StringCatalog, TemplateError, TranslationSource,
};
pub use ctext_style::{
    ClickAction, ClickEvent, Color, ColorParseError, DecorationSet, DecorationState,
    HoverAction, Merge, NamedColor, Rgb, TextDecoration,
};

pub use ctext_i18n as i18n;

/// Everything needed to build and render components.
pub mod prelude {
    pub use crate::{
        BuildError, ClickEvent, Color, Component, ComponentRenderer, DecorationState,
        HoverEvent, Merge, NamedColor, StringCatalog, Style, TextDecoration,
        TranslatableRenderer,
    };
}
