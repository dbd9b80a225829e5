#![forbid(unsafe_code)]

//! Internationalization support for ctext.
//!
//! - [`MessageTemplate`] - positional pattern with run attribution
//! - [`StringCatalog`] - per-locale template tables with fallback
//! - [`TranslationSource`] - the lookup seam used by component rendering
//! - [`locale`] - locale normalization and system detection
//!
//! # Example
//! ```
//! use ctext_i18n::{StringCatalog, TranslationSource};
//!
//! let mut catalog = StringCatalog::new();
//! catalog.insert("en", "score.msg", "{0} scored {1} points").unwrap();
//!
//! let template = catalog.translation("en", "score.msg").unwrap();
//! assert_eq!(template.format(&["Alice", "10"]), "Alice scored 10 points");
//! ```

pub mod catalog;
pub mod locale;
pub mod source;
pub mod template;

pub use catalog::{LocaleStrings, StringCatalog};
pub use locale::{DEFAULT_LOCALE, Locale, detect_system_locale, language_of, normalize_locale};
pub use source::{NoTranslations, TranslationSource};
pub use template::{MessageTemplate, Run, TemplateError};
