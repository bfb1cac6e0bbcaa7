use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The two games the clan site tracks, each with its own API namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "coc")]
    ClashOfClans,
    #[serde(rename = "cr")]
    ClashRoyale,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::ClashOfClans => "coc",
            GameType::ClashRoyale => "cr",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coc" => Ok(GameType::ClashOfClans),
            "cr" => Ok(GameType::ClashRoyale),
            other => Err(anyhow::anyhow!("unknown game type {other}")),
        }
    }
}

/// Path prefix of the per-game API, e.g. `/api/coc`.
pub fn get_api_prefix(game: GameType) -> String {
    format!("/api/{game}")
}
