use serde::{Deserialize, Serialize};

use crate::models::domain::{Account, Role};

pub const TOKEN_TYPE_BEARER: &str = "bearer";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<Account> for ProfileResponse {
    fn from(account: Account) -> Self {
        ProfileResponse {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
        }
    }
}
