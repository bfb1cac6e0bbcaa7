//! The user record returned by `/auth/me`

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub discord_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub highest_role: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    // clash of clans player tags
    #[serde(default)]
    pub linked_players: Vec<String>,
    // clash royale player tags
    #[serde(default)]
    pub linked_cr_players: Vec<String>,
}

impl User {
    /// Best name to show for the user.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .or(self.global_name.as_deref())
            .or(self.username.as_deref())
            .unwrap_or(&self.discord_id)
    }
}
