use serde::{Deserialize, Serialize};
use std::str::FromStr;

mod action_enum;
mod dispatch;
mod parse;

pub use action_enum::*;
pub use parse::ActionParseError;

/// Edge or corner a window is resized from. Fixed for the whole gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::NE,
        ResizeDirection::NW,
        ResizeDirection::SE,
        ResizeDirection::SW,
    ];

    pub fn north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    pub fn south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    pub fn east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    pub fn west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    /// CSS cursor name for this edge.
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::NE | Self::SW => "nesw-resize",
            Self::NW | Self::SE => "nwse-resize",
        }
    }
}

impl FromStr for ResizeDirection {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "n" => Ok(Self::N),
            "s" => Ok(Self::S),
            "e" => Ok(Self::E),
            "w" => Ok(Self::W),
            "ne" => Ok(Self::NE),
            "nw" => Ok(Self::NW),
            "se" => Ok(Self::SE),
            "sw" => Ok(Self::SW),
            other => Err(ActionParseError::InvalidArgument {
                name: "direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Source filter of the projects panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectFilter {
    #[default]
    All,
    Github,
    Figma,
}

impl FromStr for ProjectFilter {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "github" => Ok(Self::Github),
            "figma" => Ok(Self::Figma),
            other => Err(ActionParseError::InvalidArgument {
                name: "filter",
                value: other.to_string(),
            }),
        }
    }
}
