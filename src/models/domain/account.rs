use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The two account categories. Each one owns its own table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Attendee,
    Proctor,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Attendee, Role::Proctor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Attendee => "attendee",
            Role::Proctor => "proctor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attendee" => Ok(Role::Attendee),
            "proctor" => Ok(Role::Proctor),
            _ => Err(AppError::InvalidInput(format!(
                "role must be one of 'attendee' or 'proctor', got '{}'",
                s
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Row payload for an insert; the store assigns `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewAccount {
    pub fn new(name: &str, email: &str, password_hash: &str) -> Self {
        NewAccount {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        }
    }

    pub fn into_account(self, id: i64, role: Role) -> Account {
        Account {
            id,
            role,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
