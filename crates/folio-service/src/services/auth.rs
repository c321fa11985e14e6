//! Authentication service
//!
//! Handles admin login and credential changes.

use folio_common::auth::{hash_password, verify_dummy_password, verify_password};
use folio_common::AppError;
use folio_core::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{LoginRequest, LoginResponse, LoginUserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    ///
    /// Unknown emails still pay for one hash verification so both failure
    /// paths take the same time.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let Some(user) = self.ctx.user_repo().find_by_email(&request.email).await? else {
            verify_dummy_password(&request.password);
            warn!("Login failed: user not found");
            return Err(AppError::InvalidCredentials.into());
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            verify_dummy_password(&request.password);
            warn!(user_id = %user.id, "Login failed: no password hash");
            return Err(AppError::InvalidCredentials.into());
        };

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        let token = self.ctx.jwt_service().generate_token(user.id)?;

        let full_name = self
            .ctx
            .profile_repo()
            .find_by_user(user.id)
            .await?
            .map(|p| p.full_name)
            .unwrap_or_default();

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse {
            token,
            expires_in: self.ctx.jwt_service().expires_in(),
            user: LoginUserResponse {
                id: user.id,
                email: user.email,
                full_name,
            },
        })
    }

    /// Change the login email of `user_id`
    #[instrument(skip(self))]
    pub async fn update_email(&self, user_id: Uuid, email: &str) -> ServiceResult<()> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if user.email == email {
            return Ok(());
        }

        if let Some(other) = self.ctx.user_repo().find_by_email(email).await? {
            if other.id != user_id {
                return Err(DomainError::EmailAlreadyExists.into());
            }
        }

        self.ctx.user_repo().update_email(user_id, email).await?;

        info!(user_id = %user_id, "Email updated");
        Ok(())
    }

    /// Re-hash and store a new password
    #[instrument(skip(self, password))]
    pub async fn update_password(&self, user_id: Uuid, password: &str) -> ServiceResult<()> {
        let password_hash = hash_password(password)?;
        self.ctx
            .user_repo()
            .update_password(user_id, &password_hash)
            .await?;

        info!(user_id = %user_id, "Password updated");
        Ok(())
    }

    /// Resolve a bearer token to the user id it was issued for
    pub fn authenticate(&self, token: &str) -> ServiceResult<Uuid> {
        let claims = self.ctx.jwt_service().decode_token(token)?;
        claims.user_id().map_err(ServiceError::from)
    }
}
