use std::fmt;
use std::hash::{Hash, Hasher};

use colored::{Color, Colorize};

/// Whether a node is a named compartment or an unnamed corridor junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    /// A named compartment; renders as the first character of its name.
    Named,
    /// A corridor intersection; renders as `+`.
    Junction,
}

/// A node of the deck plan.
///
/// Identity is the name: two rooms compare equal exactly when their names
/// match, regardless of kind or highlight.
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique name within a graph.
    pub name: String,
    /// Named compartment or junction.
    pub kind: RoomKind,
    /// Transient display tint, cleared between interactive commands.
    pub highlight: Option<Color>,
}

impl Room {
    /// Create a named room.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoomKind::Named,
            highlight: None,
        }
    }

    /// Create a junction.
    pub fn junction(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoomKind::Junction,
            highlight: None,
        }
    }

    /// The one-character glyph this room renders as, tinted when a
    /// highlight is set and color output is enabled.
    pub fn glyph(&self) -> String {
        let ch = match self.kind {
            RoomKind::Named => self.name.chars().next().unwrap_or(' '),
            RoomKind::Junction => '+',
        };
        match self.highlight {
            Some(color) => ch.to_string().color(color).to_string(),
            None => ch.to_string(),
        }
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
