//! `AuthUser` extractor: Bearer token -> verified claims -> user row.

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};

use crate::error::AppError;
use crate::models::user::User;
use crate::{db, token, AppState};

/// The authenticated user resolved from the Authorization header.
/// Role gating stays in the handler; a wrong role is 403, not 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthenticated("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthenticated("Invalid Authorization header"))?;

        let claims = token::verify(&state.keys, token)?;

        // The subject may have disappeared since issuance; still a 401.
        let user = db::find_user_by_id(&state.db, &claims.sub)
            .await?
            .ok_or(AppError::Unauthenticated("User not found"))?;

        Ok(AuthUser(user))
    }
}
