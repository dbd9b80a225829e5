#![forbid(unsafe_code)]

//! Deep rendering of component trees.
//!
//! A renderer maps a component and a caller-supplied context to a new tree.
//! [`TranslatableRenderer`] walks every node, rebuilds it with its children
//! and hover payload rendered, and replaces translatable nodes whose key
//! resolves in its [`TranslationSource`] with text.
//!
//! A resolved translation with arguments becomes an empty text node whose
//! children alternate between the template's literal text and the rendered
//! argument components, so arguments keep their own style and children:
//!
//! ```
//! use ctext::{Component, ComponentRenderer, StringCatalog, TranslatableRenderer};
//!
//! let mut catalog = StringCatalog::new();
//! catalog.insert("en", "score.msg", "{0} scored {1} points").unwrap();
//! let renderer = TranslatableRenderer::new(catalog);
//!
//! let message = Component::translatable(
//!     "score.msg",
//!     [Component::text("Alice"), Component::text("10")],
//! );
//! let rendered = renderer.render(&message, "en");
//! assert_eq!(
//!     rendered.children(),
//!     &[
//!         Component::text("Alice"),
//!         Component::text(" scored "),
//!         Component::text("10"),
//!         Component::text(" points"),
//!     ]
//! );
//! ```
//!
//! A key with no translation is returned as is.

use crate::component::{Component, Content};
use crate::style::Style;
use ctext_i18n::{MessageTemplate, Run, TranslationSource};
use std::sync::Arc;

/// Maps a component tree to a new tree for a context.
pub trait ComponentRenderer<C: ?Sized> {
    fn render(&self, component: &Component, context: &C) -> Component;
}

/// What a placeholder with no matching argument renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MissingArgument {
    /// Keep the placeholder text (`{2}`).
    #[default]
    Literal,
    /// Render nothing.
    Empty,
}

/// Rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    pub missing_argument: MissingArgument,
}

impl RenderConfig {
    #[must_use]
    pub const fn with_missing_argument(mut self, missing_argument: MissingArgument) -> Self {
        self.missing_argument = missing_argument;
        self
    }
}

/// Deep renderer resolving translatable components through a source.
///
/// With [`NoTranslations`](ctext_i18n::NoTranslations) as the source every
/// key misses, so rendering returns a tree equal to its input.
#[derive(Debug, Clone, Default)]
pub struct TranslatableRenderer<S> {
    translations: S,
    config: RenderConfig,
}

impl<S> TranslatableRenderer<S> {
    /// Render with translations from `translations`.
    #[must_use]
    pub fn new(translations: S) -> Self {
        Self {
            translations,
            config: RenderConfig::default(),
        }
    }

    /// Render with translations looked up by a closure.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use ctext::{Component, ComponentRenderer, MessageTemplate, TranslatableRenderer};
    ///
    /// let renderer = TranslatableRenderer::from_fn(|viewer: &u32, key: &str| {
    ///     (*viewer == 7 && key == "greeting").then(|| Arc::new(MessageTemplate::literal("hey")))
    /// });
    /// let greeting = Component::translatable("greeting", []);
    /// assert_eq!(renderer.render(&greeting, &7u32).as_text(), Some("hey"));
    /// assert_eq!(renderer.render(&greeting, &8u32), greeting);
    /// ```
    #[must_use]
    pub fn from_fn<C: ?Sized>(lookup: S) -> Self
    where
        S: Fn(&C, &str) -> Option<Arc<MessageTemplate>>,
    {
        Self::new(lookup)
    }

    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn config(&self) -> RenderConfig {
        self.config
    }

    /// The translation source.
    #[must_use]
    pub fn translations(&self) -> &S {
        &self.translations
    }

    fn render_node<C: ?Sized>(&self, component: &Component, context: &C) -> Component
    where
        S: TranslationSource<C>,
    {
        match component.content() {
            Content::Translatable { key, args } => {
                self.render_translatable(component, key, args, context)
            }
            Content::Text { .. }
            | Content::Keybind { .. }
            | Content::Score { .. }
            | Content::Selector { .. }
            | Content::BlockNbt { .. }
            | Content::EntityNbt { .. }
            | Content::StorageNbt { .. } => {
                self.deep_render(component, component.content().clone(), Vec::new(), context)
            }
        }
    }

    /// Rebuild `source` with `content`, placing `leading` before the rendered
    /// children and rendering the hover payload.
    fn deep_render<C: ?Sized>(
        &self,
        source: &Component,
        content: Content,
        mut leading: Vec<Component>,
        context: &C,
    ) -> Component
    where
        S: TranslationSource<C>,
    {
        let style = self.render_style(source.style(), context);
        leading.reserve(source.children().len());
        leading.extend(
            source
                .children()
                .iter()
                .map(|child| self.render_node(child, context)),
        );
        Component::from_parts(content, style, leading)
    }

    fn render_style<C: ?Sized>(&self, style: &Style, context: &C) -> Style
    where
        S: TranslationSource<C>,
    {
        match style.hover_event() {
            Some(hover) => {
                let hover = hover.map_value(|payload| self.render_node(payload, context));
                style.clone().with_hover_event(Some(hover))
            }
            None => style.clone(),
        }
    }

    fn render_translatable<C: ?Sized>(
        &self,
        source: &Component,
        key: &str,
        args: &[Component],
        context: &C,
    ) -> Component
    where
        S: TranslationSource<C>,
    {
        let Some(template) = self.translations.translation(context, key) else {
            tracing::trace!(key, "no translation, leaving component as is");
            return source.clone();
        };

        let runs = match self.config.missing_argument {
            MissingArgument::Literal => template.runs(args.len()),
            MissingArgument::Empty => template.runs_omitting_missing(args.len()),
        };

        if args.is_empty() {
            let mut text = String::new();
            for run in &runs {
                if let Run::Literal(literal) = run {
                    text.push_str(literal);
                }
            }
            return self.deep_render(source, Content::Text { content: text }, Vec::new(), context);
        }

        let mut spliced = Vec::with_capacity(runs.len() + source.children().len());
        for run in runs {
            match run {
                Run::Literal(literal) => spliced.push(Component::text(literal)),
                Run::Argument(index) => {
                    if let Some(arg) = args.get(index) {
                        spliced.push(self.render_node(arg, context));
                    }
                }
            }
        }
        self.deep_render(
            source,
            Content::Text {
                content: String::new(),
            },
            spliced,
            context,
        )
    }
}

impl<C, S> ComponentRenderer<C> for TranslatableRenderer<S>
where
    C: ?Sized,
    S: TranslationSource<C>,
{
    fn render(&self, component: &Component, context: &C) -> Component {
        let _span = tracing::debug_span!(
            "component_render",
            kind = component.content().kind_name()
        )
        .entered();
        self.render_node(component, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nbt::BlockPos;
    use crate::style::HoverEvent;
    use ctext_i18n::{NoTranslations, StringCatalog};
    use ctext_style::{ClickEvent, Color, NamedColor, TextDecoration};

    fn catalog() -> StringCatalog {
        let mut catalog = StringCatalog::new();
        catalog.insert("en", "greeting", "Hello World").unwrap();
        catalog
            .insert("en", "score.msg", "{0} scored {1} points")
            .unwrap();
        catalog.insert("en", "pair", "{0} and {1}").unwrap();
        catalog.insert("en", "tooltip", "Click me").unwrap();
        catalog.insert("de", "greeting", "Hallo Welt").unwrap();
        catalog
    }

    fn renderer() -> TranslatableRenderer<StringCatalog> {
        TranslatableRenderer::new(catalog())
    }

    // --- Deep rendering ---

    #[test]
    fn tree_without_translatables_is_unchanged() {
        let tree = Component::text_builder()
            .content("root")
            .color(NamedColor::Gold)
            .insertion("ins")
            .click_event(ClickEvent::open_url("https://example.com"))
            .hover_event(HoverEvent::show_text(Component::keybind("key.jump")))
            .append(Component::selector("@p"))
            .append(
                Component::block_nbt_builder()
                    .nbt_path("Items")
                    .pos(BlockPos::absolute(0, 64, 0))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(renderer().render(&tree, "en"), tree);
        assert_eq!(TranslatableRenderer::new(NoTranslations).render(&tree, &()), tree);
    }

    #[test]
    fn empty_source_leaves_translatables() {
        let tree = Component::text("a").append(Component::translatable("greeting", []));
        assert_eq!(TranslatableRenderer::new(NoTranslations).render(&tree, "en"), tree);
    }

    // --- Translation resolution ---

    #[test]
    fn miss_returns_source_verbatim() {
        let source = Component::translatable_builder()
            .key("missing.key")
            .arg(Component::translatable("greeting", []))
            .append(Component::translatable("greeting", []))
            .build()
            .unwrap();
        assert_eq!(renderer().render(&source, "en"), source);
    }

    #[test]
    fn zero_argument_translation_becomes_text() {
        let source = Component::translatable_builder()
            .key("greeting")
            .color(NamedColor::Red)
            .decorate(TextDecoration::Bold)
            .build()
            .unwrap();
        let rendered = renderer().render(&source, "en");
        assert_eq!(rendered.as_text(), Some("Hello World"));
        assert_eq!(rendered.style(), source.style());
        assert!(rendered.children().is_empty());

        let german = renderer().render(&source, "de-AT");
        assert_eq!(german.as_text(), Some("Hallo Welt"));
    }

    #[test]
    fn arguments_are_spliced_in_order() {
        let source = Component::translatable(
            "score.msg",
            [Component::text("Alice"), Component::text("10")],
        );
        let rendered = renderer().render(&source, "en");
        assert_eq!(rendered.as_text(), Some(""));
        assert_eq!(
            rendered.children(),
            &[
                Component::text("Alice"),
                Component::text(" scored "),
                Component::text("10"),
                Component::text(" points"),
            ]
        );
    }

    #[test]
    fn arguments_keep_their_style_and_are_rendered() {
        let alice = Component::text_builder()
            .content("Alice")
            .color(NamedColor::Aqua)
            .build()
            .unwrap();
        let source = Component::translatable(
            "score.msg",
            [alice.clone(), Component::translatable("greeting", [])],
        );
        let rendered = renderer().render(&source, "en");
        assert_eq!(rendered.children()[0], alice);
        assert_eq!(rendered.children()[2], Component::text("Hello World"));
    }

    #[test]
    fn source_children_follow_the_runs() {
        let source = Component::translatable_builder()
            .key("score.msg")
            .args([Component::text("A"), Component::text("1")])
            .append(Component::translatable("greeting", []))
            .build()
            .unwrap();
        let rendered = renderer().render(&source, "en");
        assert_eq!(rendered.children().len(), 5);
        assert_eq!(rendered.children()[4], Component::text("Hello World"));

        let zero_args = Component::translatable_builder()
            .key("greeting")
            .append(Component::text("!"))
            .build()
            .unwrap();
        let rendered = renderer().render(&zero_args, "en");
        assert_eq!(rendered.children(), &[Component::text("!")]);
    }

    #[test]
    fn hover_payload_is_rendered() {
        let source = Component::text_builder()
            .content("button")
            .hover_event(HoverEvent::show_text(Component::translatable("tooltip", [])))
            .build()
            .unwrap();
        let rendered = renderer().render(&source, "en");
        let hover = rendered.hover_event().unwrap();
        assert_eq!(hover.value(), &Component::text("Click me"));
        assert_eq!(hover.action(), ctext_style::HoverAction::ShowText);
    }

    #[test]
    fn translated_node_keeps_insertion_and_events() {
        let source = Component::translatable_builder()
            .key("greeting")
            .insertion("hi")
            .click_event(ClickEvent::copy_to_clipboard("hi"))
            .build()
            .unwrap();
        let rendered = renderer().render(&source, "en");
        assert_eq!(rendered.insertion(), Some("hi"));
        assert_eq!(rendered.click_event(), source.click_event());
    }

    #[test]
    fn client_locale_tags_match_catalog_regardless_of_case() {
        let mut catalog = StringCatalog::new();
        catalog.insert("en-US", "k", "US").unwrap();
        let renderer = TranslatableRenderer::new(catalog);
        let source = Component::translatable("k", []);
        for locale in ["en_us", "EN-us", "En_US.UTF-8"] {
            assert_eq!(renderer.render(&source, locale).as_text(), Some("US"), "{locale}");
        }
    }

    // --- Missing arguments ---

    #[test]
    fn missing_argument_literal_keeps_placeholder() {
        let source = Component::translatable("pair", [Component::text("A")]);
        let rendered = renderer().render(&source, "en");
        assert_eq!(
            rendered.children(),
            &[Component::text("A"), Component::text(" and {1}")]
        );
    }

    #[test]
    fn missing_argument_empty_drops_placeholder() {
        let renderer = renderer().with_config(
            RenderConfig::default().with_missing_argument(MissingArgument::Empty),
        );
        assert_eq!(renderer.config().missing_argument, MissingArgument::Empty);
        let source = Component::translatable("pair", [Component::text("A")]);
        let rendered = renderer.render(&source, "en");
        assert_eq!(
            rendered.children(),
            &[Component::text("A"), Component::text(" and ")]
        );

        let no_args = Component::translatable("pair", []);
        assert_eq!(renderer.render(&no_args, "en").as_text(), Some(" and "));
    }

    #[test]
    fn closure_source() {
        let renderer = TranslatableRenderer::from_fn(|locale: &str, key: &str| {
            (locale == "x" && key == "k").then(|| Arc::new(MessageTemplate::literal("{literal}")))
        });
        let rendered = renderer.render(&Component::translatable("k", []), "x");
        assert_eq!(rendered.as_text(), Some("{literal}"));
        assert!(renderer.render(&Component::translatable("k", []), "y").key().is_some());
    }

    #[test]
    fn color_survives_deep_render() {
        let source = Component::keybind_builder()
            .keybind("key.jump")
            .color(Color::Named(NamedColor::Green))
            .build()
            .unwrap();
        assert_eq!(renderer().render(&source, "en").color(), source.color());
    }
}
