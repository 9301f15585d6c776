use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{Account, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64, // Account id, scoped to `role`
    pub email: String,
    pub role: Role,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user_id: i64, email: &str, role: Role, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::minutes(expiration_minutes);

        Self {
            sub: user_id,
            email: email.to_string(),
            role,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }

    pub fn for_account(account: &Account, expiration_minutes: i64) -> Self {
        Self::new(account.id, &account.email, account.role, expiration_minutes)
    }

    pub fn user_id(&self) -> i64 {
        self.sub
    }
}
