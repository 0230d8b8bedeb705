use std::str::FromStr;

use crate::error::InvalidIndexState;

/// Lifecycle state an index is created in.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum IndexState {
    Open,
    Close,
}

impl Default for IndexState {
    fn default() -> Self {
        Self::Open
    }
}

impl IndexState {
    /// Stable numeric id of the state.
    pub const fn id(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Close => 1,
        }
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Open),
            1 => Some(Self::Close),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
        }
    }
}

impl std::fmt::Display for IndexState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexState {
    type Err = InvalidIndexState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("open") {
            Ok(Self::Open)
        } else if s.eq_ignore_ascii_case("close") {
            Ok(Self::Close)
        } else {
            Err(InvalidIndexState::new(s))
        }
    }
}
