#![forbid(unsafe_code)]

//! Locale tags and normalization.
//!
//! Locales are BCP-47-style strings (`"en"`, `"fr-FR"`, `"zh-Hant-TW"`).
//! Anything coming from the environment, a client or a caller is normalized
//! first so that catalog lookups compare like with like: `en_us`, `EN-us` and
//! `en_US.UTF-8` all become `en-US`.

use std::env;

/// A normalized locale tag.
pub type Locale = String;

/// The locale used when nothing better is known.
pub const DEFAULT_LOCALE: &str = "en";

/// Environment variables consulted by [`detect_system_locale`], in order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Detect the system locale from `LC_ALL`, `LC_MESSAGES` and `LANG`.
///
/// The first variable holding a usable tag wins; `"en"` otherwise.
#[must_use]
pub fn detect_system_locale() -> Locale {
    first_usable(|name| env::var(name).ok())
}

/// Normalize a locale tag, falling back to `"en"` for empty input.
///
/// Encoding (`.UTF-8`) and modifier (`@euro`) suffixes are dropped, `_`
/// becomes `-`, and subtags get their canonical case: lowercase language,
/// titlecase four-letter script, uppercase two-letter region. `C` and
/// `POSIX` map to `"en"`.
#[must_use]
pub fn normalize_locale(raw: &str) -> Locale {
    canonical_tag(raw).unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// The language subtag of a locale (`"fr-FR"` → `"fr"`).
#[must_use]
pub fn language_of(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

fn first_usable(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    LOCALE_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find_map(|value| canonical_tag(&value))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

fn canonical_tag(raw: &str) -> Option<Locale> {
    let tag = raw
        .trim()
        .split(['@', '.'])
        .next()
        .unwrap_or_default()
        .trim();
    if tag.eq_ignore_ascii_case("c") || tag.eq_ignore_ascii_case("posix") {
        return Some(DEFAULT_LOCALE.to_string());
    }

    let mut subtags = tag.split(['_', '-']).filter(|subtag| !subtag.is_empty());
    let mut out = subtags.next()?.to_ascii_lowercase();
    for subtag in subtags {
        out.push('-');
        match subtag.len() {
            2 => out.push_str(&subtag.to_ascii_uppercase()),
            4 => {
                let (head, tail) = subtag.split_at(1);
                out.push_str(&head.to_ascii_uppercase());
                out.push_str(&tail.to_ascii_lowercase());
            }
            _ => out.push_str(&subtag.to_ascii_lowercase()),
        }
    }
    Some(out)
}
