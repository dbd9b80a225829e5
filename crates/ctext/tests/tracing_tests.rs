#![forbid(unsafe_code)]

//! Tracing instrumentation of component rendering.
//!
//!   cargo test -p ctext --test tracing_tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ctext::{
    Component, ComponentRenderer, NoTranslations, StringCatalog, TranslatableRenderer,
};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

impl CapturedEvent {
    fn message(&self) -> &str {
        self.fields.get("message").map(String::as_str).unwrap_or("")
    }
}

#[derive(Clone, Default)]
struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

/// A tracing Layer recording span and event fields.
struct Capture(CaptureHandle);

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.0.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let parent_name = ctx
            .event_span(event)
            .map(|span_ref| span_ref.name().to_string());
        self.0.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }
}

fn with_capture<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let handle = CaptureHandle::default();
    let subscriber = tracing_subscriber::registry().with(Capture(handle.clone()));
    tracing::subscriber::with_default(subscriber, f);
    handle
}

fn catalog() -> StringCatalog {
    let mut catalog = StringCatalog::new();
    catalog.insert("en", "pair", "{0} and {1}").unwrap();
    catalog.insert("en", "greeting", "Hello").unwrap();
    catalog
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn one_span_per_top_level_render() {
    let tree = Component::text("a")
        .append(Component::text("b"))
        .append(Component::keybind("key.jump"));
    let handle = with_capture(|| {
        TranslatableRenderer::new(NoTranslations).render(&tree, &());
    });

    let spans: Vec<_> = handle
        .spans()
        .into_iter()
        .filter(|span| span.name == "component_render")
        .collect();
    assert_eq!(spans.len(), 1, "children must not open their own span");
    assert_eq!(spans[0].fields.get("kind").map(String::as_str), Some("text"));
}

#[test]
fn translation_miss_emits_trace_event() {
    let handle = with_capture(|| {
        TranslatableRenderer::new(catalog()).render(&Component::translatable("nope", []), "en");
    });

    let events = handle.events();
    let miss = events
        .iter()
        .find(|event| event.fields.get("key").map(String::as_str) == Some("nope"))
        .expect("miss event");
    assert_eq!(miss.level, tracing::Level::TRACE);
    assert_eq!(miss.parent_name.as_deref(), Some("component_render"));
}

#[test]
fn out_of_range_argument_emits_debug_event() {
    let handle = with_capture(|| {
        TranslatableRenderer::new(catalog())
            .render(&Component::translatable("pair", [Component::text("x")]), "en");
    });

    let events = handle.events();
    let event = events
        .iter()
        .find(|event| event.message() == "template argument out of range")
        .expect("out-of-range event");
    assert_eq!(event.level, tracing::Level::DEBUG);
    assert_eq!(event.fields.get("index").map(String::as_str), Some("1"));
    assert_eq!(event.fields.get("arg_count").map(String::as_str), Some("1"));
}

#[test]
fn catalog_fallback_emits_debug_event() {
    let mut catalog = catalog();
    catalog.set_fallback_chain(vec!["en".to_string()]);
    let handle = with_capture(|| {
        let rendered = TranslatableRenderer::new(catalog)
            .render(&Component::translatable("greeting", []), "fr-FR");
        assert_eq!(rendered.as_text(), Some("Hello"));
    });

    let events = handle.events();
    let event = events
        .iter()
        .find(|event| event.message() == "translation resolved through fallback")
        .expect("fallback event");
    assert_eq!(event.fields.get("fallback").map(String::as_str), Some("en"));
    assert_eq!(event.fields.get("requested").map(String::as_str), Some("fr-FR"));
}

#[test]
fn resolved_translation_is_quiet() {
    let handle = with_capture(|| {
        TranslatableRenderer::new(catalog()).render(&Component::translatable("greeting", []), "en");
    });
    assert!(handle.events().is_empty());
}
