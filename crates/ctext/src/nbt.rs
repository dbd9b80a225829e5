#![forbid(unsafe_code)]

//! NBT source descriptors: the path expression and where the data lives.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An NBT path plus whether the resolved value is itself interpreted as a
/// component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NbtPath {
    path: String,
    interpret: bool,
}

impl NbtPath {
    #[must_use]
    pub fn new(path: impl Into<String>, interpret: bool) -> Self {
        Self {
            path: path.into(),
            interpret,
        }
    }

    /// The path expression.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether resolved values are parsed as components.
    #[must_use]
    pub const fn interpret(&self) -> bool {
        self.interpret
    }
}

/// Whether a world coordinate is absolute or relative to the command source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordKind {
    Absolute,
    Relative,
}

/// One axis of a world position (`5` or `~5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldCoord {
    kind: CoordKind,
    value: i32,
}

impl WorldCoord {
    #[must_use]
    pub const fn absolute(value: i32) -> Self {
        Self {
            kind: CoordKind::Absolute,
            value,
        }
    }

    #[must_use]
    pub const fn relative(value: i32) -> Self {
        Self {
            kind: CoordKind::Relative,
            value,
        }
    }

    #[must_use]
    pub const fn kind(self) -> CoordKind {
        self.kind
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.value
    }

    fn parse(token: &str) -> Option<Self> {
        match token.strip_prefix('~') {
            Some("") => Some(Self::relative(0)),
            Some(rest) => rest.parse().ok().map(Self::relative),
            None => token.parse().ok().map(Self::absolute),
        }
    }
}

impl fmt::Display for WorldCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CoordKind::Absolute => write!(f, "{}", self.value),
            CoordKind::Relative if self.value == 0 => f.write_str("~"),
            CoordKind::Relative => write!(f, "~{}", self.value),
        }
    }
}

/// Location of a block whose NBT is read.
///
/// Printed and parsed in command notation: `^left ^up ^forwards` for local
/// positions and `x y z` (each optionally `~`-relative) for world positions.
#[derive(Debug, Clone, Copy)]
pub enum BlockPos {
    /// Offsets along the command source's facing.
    Local { left: f64, up: f64, forwards: f64 },
    /// World axes.
    World {
        x: WorldCoord,
        y: WorldCoord,
        z: WorldCoord,
    },
}

impl BlockPos {
    #[must_use]
    pub const fn local(left: f64, up: f64, forwards: f64) -> Self {
        Self::Local { left, up, forwards }
    }

    #[must_use]
    pub const fn world(x: WorldCoord, y: WorldCoord, z: WorldCoord) -> Self {
        Self::World { x, y, z }
    }

    /// An absolute world position.
    #[must_use]
    pub const fn absolute(x: i32, y: i32, z: i32) -> Self {
        Self::world(
            WorldCoord::absolute(x),
            WorldCoord::absolute(y),
            WorldCoord::absolute(z),
        )
    }

    /// Parse command notation.
    pub fn parse(input: &str) -> Result<Self, PosParseError> {
        let err = || PosParseError::new(input);
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let [a, b, c] = tokens.as_slice() else {
            return Err(err());
        };

        let carets = [a, b, c].iter().filter(|t| t.starts_with('^')).count();
        match carets {
            3 => {
                let left = parse_local(a).ok_or_else(err)?;
                let up = parse_local(b).ok_or_else(err)?;
                let forwards = parse_local(c).ok_or_else(err)?;
                Ok(Self::local(left, up, forwards))
            }
            0 => {
                let x = WorldCoord::parse(a).ok_or_else(err)?;
                let y = WorldCoord::parse(b).ok_or_else(err)?;
                let z = WorldCoord::parse(c).ok_or_else(err)?;
                Ok(Self::world(x, y, z))
            }
            _ => Err(err()),
        }
    }
}

fn parse_local(token: &str) -> Option<f64> {
    let rest = token.strip_prefix('^')?;
    if rest.is_empty() {
        return Some(0.0);
    }
    rest.parse::<f64>().ok().filter(|v| v.is_finite())
}

// f64 fields compare bitwise so that positions can key hash maps.
impl PartialEq for BlockPos {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Local { left, up, forwards },
                Self::Local {
                    left: l2,
                    up: u2,
                    forwards: f2,
                },
            ) => {
                left.to_bits() == l2.to_bits()
                    && up.to_bits() == u2.to_bits()
                    && forwards.to_bits() == f2.to_bits()
            }
            (Self::World { x, y, z }, Self::World { x: x2, y: y2, z: z2 }) => {
                x == x2 && y == y2 && z == z2
            }
            _ => false,
        }
    }
}

impl Eq for BlockPos {}

impl Hash for BlockPos {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Local { left, up, forwards } => {
                0u8.hash(state);
                left.to_bits().hash(state);
                up.to_bits().hash(state);
                forwards.to_bits().hash(state);
            }
            Self::World { x, y, z } => {
                1u8.hash(state);
                x.hash(state);
                y.hash(state);
                z.hash(state);
            }
        }
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { left, up, forwards } => write!(f, "^{} ^{} ^{}", left, up, forwards),
            Self::World { x, y, z } => write!(f, "{} {} {}", x, y, z),
        }
    }
}

impl FromStr for BlockPos {
    type Err = PosParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Input that is not a valid block position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosParseError {
    input: String,
}

impl PosParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for PosParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid block position '{}'", self.input)
    }
}

impl std::error::Error for PosParseError {}
