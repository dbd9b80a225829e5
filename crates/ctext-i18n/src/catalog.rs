#![forbid(unsafe_code)]

//! Multi-locale string catalogs.
//!
//! A [`StringCatalog`] maps `(locale, key)` to a parsed [`MessageTemplate`].
//! Lookups try the exact locale, then its language subtag, then each locale
//! of the fallback chain in order.
//!
//! # Example
//! ```
//! use ctext_i18n::{LocaleStrings, StringCatalog};
//!
//! let mut en = LocaleStrings::new();
//! en.insert("greeting", "Hello World").unwrap();
//! let mut catalog = StringCatalog::new();
//! catalog.add_locale("en", en);
//! catalog.set_fallback_chain(vec!["en".into()]);
//!
//! let template = catalog.get("fr_FR", "greeting").unwrap();
//! assert_eq!(template.format_plain(), "Hello World");
//! ```

use crate::locale::{Locale, language_of, normalize_locale};
use crate::template::{MessageTemplate, TemplateError};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Templates for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    entries: FxHashMap<String, Arc<MessageTemplate>>,
}

impl LocaleStrings {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `pattern` and store it under `key`, replacing any previous entry.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        pattern: &str,
    ) -> Result<&mut Self, TemplateError> {
        let template = MessageTemplate::parse(pattern)?;
        self.insert_template(key, template);
        Ok(self)
    }

    /// Store an already parsed template under `key`.
    pub fn insert_template(&mut self, key: impl Into<String>, template: MessageTemplate) {
        self.entries.insert(key.into(), Arc::new(template));
    }

    /// Look up a template.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arc<MessageTemplate>> {
        self.entries.get(key)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// A registry of per-locale templates with a fallback chain.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: FxHashMap<Locale, LocaleStrings>,
    fallback_chain: Vec<Locale>,
}

impl StringCatalog {
    /// Create an empty catalog with no fallback chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the strings of a locale.
    pub fn add_locale(&mut self, locale: &str, strings: LocaleStrings) {
        self.locales.insert(normalize_locale(locale), strings);
    }

    /// Parse and insert a single entry, creating the locale if needed.
    pub fn insert(&mut self, locale: &str, key: &str, pattern: &str) -> Result<(), TemplateError> {
        self.locales
            .entry(normalize_locale(locale))
            .or_default()
            .insert(key, pattern)?;
        Ok(())
    }

    /// Set the locales consulted, in order, after the requested one misses.
    pub fn set_fallback_chain(&mut self, chain: Vec<Locale>) {
        self.fallback_chain = chain.iter().map(|locale| normalize_locale(locale)).collect();
    }

    /// The normalized fallback chain.
    #[must_use]
    pub fn fallback_chain(&self) -> &[Locale] {
        &self.fallback_chain
    }

    /// Look up a template for `key`, walking the fallback order.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&Arc<MessageTemplate>> {
        let requested = normalize_locale(locale);
        let language = language_of(&requested);

        if let Some(found) = self.lookup(&requested, key) {
            return Some(found);
        }
        if language != requested
            && let Some(found) = self.lookup(language, key)
        {
            return Some(found);
        }
        for fallback in &self.fallback_chain {
            if fallback == &requested {
                continue;
            }
            if let Some(found) = self.lookup(fallback, key) {
                tracing::debug!(
                    requested = %requested,
                    fallback = %fallback,
                    key,
                    "translation resolved through fallback"
                );
                return Some(found);
            }
        }
        None
    }

    /// Whether `key` resolves for `locale` (fallbacks included).
    #[must_use]
    pub fn contains(&self, locale: &str, key: &str) -> bool {
        self.get(locale, key).is_some()
    }

    /// Registered locales, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Every key defined by any locale, sorted and deduplicated.
    #[must_use]
    pub fn all_keys(&self) -> Vec<&str> {
        self.locales
            .values()
            .flat_map(LocaleStrings::keys)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Keys defined somewhere but absent from `locale` itself (no fallback).
    #[must_use]
    pub fn missing_keys(&self, locale: &str) -> Vec<&str> {
        let locale = normalize_locale(locale);
        let strings = self.locales.get(&locale);
        self.all_keys()
            .into_iter()
            .filter(|key| !strings.is_some_and(|strings| strings.contains(key)))
            .collect()
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&Arc<MessageTemplate>> {
        self.locales.get(locale).and_then(|strings| strings.get(key))
    }
}
