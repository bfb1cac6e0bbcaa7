use std::{fmt, str::FromStr};

/// Clan hierarchy ranks, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Leader,
    CoLeader,
    Elder,
    Member,
    NotInClan,
}

impl Role {
    pub fn priority(&self) -> i32 {
        match self {
            Role::Admin => 1000,
            Role::Leader => 100,
            Role::CoLeader => 80,
            Role::Elder => 50,
            Role::Member => 10,
            Role::NotInClan => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Leader => "LEADER",
            Role::CoLeader => "COLEADER",
            Role::Elder => "ELDER",
            Role::Member => "MEMBER",
            Role::NotInClan => "NOTINCLAN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "LEADER" => Ok(Role::Leader),
            "COLEADER" => Ok(Role::CoLeader),
            "ELDER" => Ok(Role::Elder),
            "MEMBER" => Ok(Role::Member),
            "NOTINCLAN" | "NOTMEMBER" => Ok(Role::NotInClan),
            _ => Err(anyhow::anyhow!("unknown role {s}")),
        }
    }
}

/// Rank of a role label. Unknown or missing labels rank lowest.
pub fn get_role_priority(role: Option<&str>) -> i32 {
    role.and_then(|role| role.parse::<Role>().ok())
        .map(|role| role.priority())
        .unwrap_or(0)
}

pub fn has_required_role(user_role: Option<&str>, required_role: &str) -> bool {
    get_role_priority(user_role) >= get_role_priority(Some(required_role))
}
