#![forbid(unsafe_code)]

//! Style primitives for ctext components.
//!
//! - [`Color`] - legacy named colors and RGB values
//! - [`DecorationSet`] - tri-state bold/italic/underlined/strikethrough/obfuscated
//! - [`ClickEvent`] - click action plus argument
//! - [`HoverAction`] - hover action tag (the payload lives with the component)
//! - [`Merge`] - which attributes an additive style merge may copy
//!
//! # Example
//! ```
//! use ctext_style::{Color, DecorationSet, DecorationState, NamedColor, TextDecoration};
//!
//! let color: Color = "#ff5555".parse().unwrap();
//! assert_eq!(color.nearest_named(), NamedColor::Red);
//!
//! let decorations = DecorationSet::new().with(TextDecoration::Bold, DecorationState::True);
//! assert_eq!(decorations.get(TextDecoration::Bold), DecorationState::True);
//! ```

pub mod color;
pub mod decoration;
pub mod event;
pub mod merge;

pub use color::{Color, ColorParseError, NamedColor, Rgb, rgb_to_named};
pub use decoration::{DecorationSet, DecorationState, Decorations, TextDecoration};
pub use event::{ClickAction, ClickEvent, HoverAction};
pub use merge::Merge;
