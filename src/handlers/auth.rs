use axum::{extract::State, Json};
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::AuthUser;
use crate::models::user::{LoginPayload, RegisterPayload, Role, TokenResponse, User};
use crate::{db, password, token, AppState};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<Json<TokenResponse>, AppError> {
    let role = Role::parse(&payload.role).ok_or(AppError::InvalidRole)?;

    let password_hash = password::hash(&payload.password)?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        role,
        password_hash,
        created_at: chrono::Utc::now(),
    };

    // A duplicate email surfaces here as a unique violation.
    db::insert_user(&state.db, &user).await?;
    tracing::info!(user_id = %user.id, role = role.as_str(), "registered user");

    let access_token = token::issue(&state.keys, &user.id, user.role)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        user,
    }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<TokenResponse>, AppError> {
    // One uniform failure for unknown email and wrong password.
    let user = db::find_user_by_email(&state.db, &payload.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !password::verify(&payload.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let access_token = token::issue(&state.keys, &user.id, user.role)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        user,
    }))
}

pub async fn me(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}
