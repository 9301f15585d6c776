use serde::Deserialize;
use validator::Validate;

use crate::{errors::AppResult, models::domain::Role};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 1024, message = "Password must not be empty"))]
    pub password: String,

    pub role: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 1024, message = "Password must not be empty"))]
    pub password: String,

    pub role: String,
}

impl SignupRequest {
    /// Shape checks plus role parsing; nothing here touches the store.
    pub fn validated_role(&self) -> AppResult<Role> {
        let role = self.role.parse::<Role>()?;
        self.validate()?;
        Ok(role)
    }
}

impl SigninRequest {
    pub fn validated_role(&self) -> AppResult<Role> {
        let role = self.role.parse::<Role>()?;
        self.validate()?;
        Ok(role)
    }
}
