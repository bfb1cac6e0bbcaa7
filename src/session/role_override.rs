//! Admin-only preview of lower privilege views.

use serde::{Deserialize, Deserializer};

use crate::authclient::User;

/// A field of an override that can be left alone, cleared or replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldOverride<T> {
    #[default]
    Omitted,
    Cleared,
    Set(T),
}

impl<T> FieldOverride<T> {
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            FieldOverride::Omitted => current,
            FieldOverride::Cleared => None,
            FieldOverride::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for FieldOverride<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => FieldOverride::Set(value),
            None => FieldOverride::Cleared,
        }
    }
}

// A missing key never reaches this impl; `#[serde(default)]` on the field
// turns it into `Omitted`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldOverride<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(FieldOverride::from)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoleOverride {
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub highest_role: FieldOverride<String>,
}

impl RoleOverride {
    pub fn is_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = Some(is_admin);
        self
    }

    pub fn highest_role(mut self, highest_role: Option<&str>) -> Self {
        self.highest_role = highest_role.map(str::to_string).into();
        self
    }
}

/// The user the UI should see. Overrides only apply on top of a real admin
/// and always strip linked players.
pub fn derive_effective_user(
    real: Option<&User>,
    role_override: Option<&RoleOverride>,
) -> Option<User> {
    let real = real?;
    let role_override = match role_override {
        Some(role_override) if real.is_admin => role_override,
        _ => return Some(real.clone()),
    };

    Some(User {
        is_admin: role_override.is_admin.unwrap_or(real.is_admin),
        highest_role: role_override
            .highest_role
            .clone()
            .apply(real.highest_role.clone()),
        linked_players: Vec::new(),
        linked_cr_players: Vec::new(),
        ..real.clone()
    })
}
