use std::sync::Arc;

use crate::{
    auth::{hash_password, password::DUMMY_HASH, verify_password, Claims, CredentialHash, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::NewAccount,
        dto::{
            request::{SigninRequest, SignupRequest},
            response::{MessageResponse, ProfileResponse, TokenResponse},
        },
    },
    repositories::AccountRepository,
};

pub const SIGNUP_SUCCESS_MESSAGE: &str = "User registered successfully";

pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
    jwt_service: JwtService,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>, jwt_service: JwtService) -> Self {
        Self {
            repository,
            jwt_service,
        }
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub async fn signup(&self, request: SignupRequest) -> AppResult<MessageResponse> {
        let role = request.validated_role()?;

        if self
            .repository
            .find_by_email(role, &request.email)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateEmail);
        }

        let password = request.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::HashingError(e.to_string()))??;

        let account = self
            .repository
            .insert(
                role,
                NewAccount {
                    name: request.name,
                    email: request.email,
                    password_hash: password_hash.into_string(),
                },
            )
            .await?;

        log::info!("Registered {} account {}", role, account.id);

        Ok(MessageResponse::new(SIGNUP_SUCCESS_MESSAGE))
    }

    pub async fn signin(&self, request: SigninRequest) -> AppResult<TokenResponse> {
        let role = request.validated_role()?;

        let account = self.repository.find_by_email(role, &request.email).await?;

        let stored_hash = account
            .as_ref()
            .map(|account| CredentialHash::from_stored(account.password_hash.clone()));
        let password_ok = verify_in_background(stored_hash, request.password).await?;

        let account = match account {
            Some(account) if password_ok => account,
            _ => {
                log::warn!("Failed {} signin attempt", role);
                return Err(AppError::InvalidCredentials);
            }
        };

        let access_token = self.jwt_service.issue(&account)?;
        log::info!("Issued token for {} account {}", role, account.id);

        Ok(TokenResponse::bearer(access_token))
    }

    pub async fn get_profile(&self, claims: &Claims) -> AppResult<ProfileResponse> {
        let account = self
            .repository
            .find_by_id(claims.role, claims.user_id())
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} account {} not found", claims.role, claims.user_id()))
            })?;

        Ok(account.into())
    }
}

/// Without a stored hash the candidate is checked against `DUMMY_HASH` and
/// the result is always `false`. The dummy is first built on this blocking
/// thread, never on a request worker.
async fn verify_in_background(hash: Option<CredentialHash>, candidate: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify_password(&hash, &candidate),
        None => {
            if let Some(dummy) = DUMMY_HASH.as_ref() {
                verify_password(dummy, &candidate);
            }
            false
        }
    })
    .await
    .map_err(|e| AppError::HashingError(e.to_string()))
}
