#![forbid(unsafe_code)]

//! Positional message templates.
//!
//! A [`MessageTemplate`] is parsed once from a pattern such as
//! `"{0} scored {1} points"` and can then be formatted in two ways:
//!
//! - [`MessageTemplate::format`] substitutes string arguments and returns the
//!   finished text.
//! - [`MessageTemplate::runs`] attributes every span of output either to
//!   static template text or to the argument that fills it, which lets a
//!   caller splice structured values (such as styled components) in place of
//!   the arguments.
//!
//! # Syntax
//!
//! - `{n}` - argument `n` (zero-based)
//! - `{n,type}` / `{n,type,style}` - accepted; the type and style are ignored
//! - `'...'` - quoted literal text, braces inside are not special
//! - `''` - a literal single quote, inside or outside a quoted section
//! - a lone `}` outside an argument is literal text
//!
//! An argument whose index is not covered by the supplied arguments prints as
//! its placeholder, `{n}`.
//!
//! # Example
//! ```
//! use ctext_i18n::{MessageTemplate, Run};
//!
//! let template = MessageTemplate::parse("{0} scored {1} points").unwrap();
//! assert_eq!(template.format(&["Alice", "10"]), "Alice scored 10 points");
//! assert_eq!(
//!     template.runs(2),
//!     vec![
//!         Run::Argument(0),
//!         Run::Literal(" scored ".into()),
//!         Run::Argument(1),
//!         Run::Literal(" points".into()),
//!     ]
//! );
//! ```

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Errors that can occur while parsing a template pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// An argument opened with `{` was never closed.
    UnmatchedBrace { position: usize },
    /// An argument has no index (`{}` or `{,number}`).
    EmptyArgument { position: usize },
    /// An argument index is not a non-negative integer.
    InvalidArgumentIndex { text: String, position: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedBrace { position } => {
                write!(f, "unmatched brace at position {}", position)
            }
            Self::EmptyArgument { position } => {
                write!(f, "empty argument at position {}", position)
            }
            Self::InvalidArgumentIndex { text, position } => {
                write!(
                    f,
                    "invalid argument index '{}' at position {}",
                    text, position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Literal(String),
    Argument(usize),
}

/// One attributed span of formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Run {
    /// Static template text.
    Literal(String),
    /// The span filled by the argument at this index.
    Argument(usize),
}

/// A parsed positional message template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageTemplate {
    pattern: String,
    segments: SmallVec<[Segment; 4]>,
}

impl MessageTemplate {
    /// Parse a pattern.
    pub fn parse(pattern: &str) -> Result<Self, TemplateError> {
        let mut segments: SmallVec<[Segment; 4]> = SmallVec::new();
        let mut literal = String::new();
        let mut in_quote = false;
        let mut chars = pattern.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            match ch {
                '\'' => {
                    if matches!(chars.peek(), Some((_, '\''))) {
                        chars.next();
                        literal.push('\'');
                    } else {
                        in_quote = !in_quote;
                    }
                }
                '{' if !in_quote => {
                    let body = read_argument_body(&mut chars)
                        .ok_or(TemplateError::UnmatchedBrace { position })?;
                    let index = parse_index(&body, position)?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Argument(index));
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
        })
    }

    /// A template that prints `text` verbatim.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut segments = SmallVec::new();
        if !text.is_empty() {
            segments.push(Segment::Literal(text.clone()));
        }
        Self {
            pattern: quote_literal(&text),
            segments,
        }
    }

    /// The source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The highest argument index referenced, if any.
    #[must_use]
    pub fn max_argument_index(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Argument(index) => Some(*index),
                Segment::Literal(_) => None,
            })
            .max()
    }

    /// Whether the template references any argument at all.
    #[must_use]
    pub fn has_arguments(&self) -> bool {
        self.max_argument_index().is_some()
    }

    /// Format with string arguments.
    #[must_use]
    pub fn format<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Argument(index) => match args.get(*index) {
                    Some(arg) => out.push_str(arg.as_ref()),
                    None => push_placeholder(&mut out, *index),
                },
            }
        }
        out
    }

    /// Format without arguments; every placeholder prints as `{n}`.
    #[must_use]
    pub fn format_plain(&self) -> String {
        self.format::<&str>(&[])
    }

    /// Attribute the formatted output to literal text and arguments.
    ///
    /// Arguments with an index below `arg_count` become [`Run::Argument`];
    /// any other placeholder is printed as `{n}` and folded into the
    /// surrounding literal text. Adjacent literals are always coalesced, and
    /// empty literals are never produced.
    #[must_use]
    pub fn runs(&self, arg_count: usize) -> Vec<Run> {
        self.collect_runs(arg_count, true)
    }

    /// Like [`runs`](Self::runs), but placeholders without a matching
    /// argument produce no output at all.
    #[must_use]
    pub fn runs_omitting_missing(&self, arg_count: usize) -> Vec<Run> {
        self.collect_runs(arg_count, false)
    }

    fn collect_runs(&self, arg_count: usize, keep_missing: bool) -> Vec<Run> {
        let mut runs = Vec::with_capacity(self.segments.len());
        let mut pending = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => pending.push_str(text),
                Segment::Argument(index) if *index < arg_count => {
                    if !pending.is_empty() {
                        runs.push(Run::Literal(std::mem::take(&mut pending)));
                    }
                    runs.push(Run::Argument(*index));
                }
                Segment::Argument(index) => {
                    tracing::debug!(
                        index = *index,
                        arg_count,
                        pattern = %self.pattern,
                        "template argument out of range"
                    );
                    if keep_missing {
                        push_placeholder(&mut pending, *index);
                    }
                }
            }
        }
        if !pending.is_empty() {
            runs.push(Run::Literal(pending));
        }
        runs
    }
}

impl FromStr for MessageTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// Read up to the `}` that closes the current argument, honoring nested
/// braces and quotes inside a format style. Returns `None` when the input
/// ends first.
fn read_argument_body(chars: &mut impl Iterator<Item = (usize, char)>) -> Option<String> {
    let mut body = String::new();
    let mut depth = 1usize;
    let mut in_quote = false;
    for (_, ch) in chars {
        match ch {
            '\'' => {
                in_quote = !in_quote;
                body.push(ch);
            }
            '{' if !in_quote => {
                depth += 1;
                body.push(ch);
            }
            '}' if !in_quote => {
                depth -= 1;
                if depth == 0 {
                    return Some(body);
                }
                body.push(ch);
            }
            _ => body.push(ch),
        }
    }
    None
}

fn parse_index(body: &str, position: usize) -> Result<usize, TemplateError> {
    let text = body.split(',').next().unwrap_or_default().trim();
    if text.is_empty() {
        return Err(TemplateError::EmptyArgument { position });
    }
    text.parse::<usize>()
        .map_err(|_| TemplateError::InvalidArgumentIndex {
            text: text.to_string(),
            position,
        })
}

fn push_placeholder(out: &mut String, index: usize) {
    out.push('{');
    out.push_str(&index.to_string());
    out.push('}');
}

/// Escape `text` so that it parses back to itself. Everything from the first
/// brace onwards sits in a single quoted section.
fn quote_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let split = text.find(['{', '}']).unwrap_or(text.len());
    let (plain, braced) = text.split_at(split);
    out.push_str(&plain.replace('\'', "''"));
    if !braced.is_empty() {
        out.push('\'');
        out.push_str(&braced.replace('\'', "''"));
        out.push('\'');
    }
    out
}
