#![forbid(unsafe_code)]

//! Translation lookup seam.

use crate::catalog::StringCatalog;
use crate::template::MessageTemplate;
use std::sync::Arc;

/// Resolves a translation key to a template for a caller-defined context.
///
/// `C` is whatever the caller threads through rendering: a locale tag, a
/// viewer, a request. Returning `None` is a miss, not an error.
pub trait TranslationSource<C: ?Sized> {
    /// Find the template for `key` in `context`.
    fn translation(&self, context: &C, key: &str) -> Option<Arc<MessageTemplate>>;
}

impl<C, F> TranslationSource<C> for F
where
    C: ?Sized,
    F: Fn(&C, &str) -> Option<Arc<MessageTemplate>>,
{
    fn translation(&self, context: &C, key: &str) -> Option<Arc<MessageTemplate>> {
        self(context, key)
    }
}

/// Catalogs are looked up with the context as the locale tag.
impl<C> TranslationSource<C> for StringCatalog
where
    C: AsRef<str> + ?Sized,
{
    fn translation(&self, context: &C, key: &str) -> Option<Arc<MessageTemplate>> {
        self.get(context.as_ref(), key).cloned()
    }
}

/// A source that never resolves anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTranslations;

impl<C: ?Sized> TranslationSource<C> for NoTranslations {
    fn translation(&self, _context: &C, _key: &str) -> Option<Arc<MessageTemplate>> {
        None
    }
}
