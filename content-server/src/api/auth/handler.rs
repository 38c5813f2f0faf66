//! Authentication Handlers
//!
//! Handles registration, login and the current account

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{LoginRequest, LoginResponse, RegisterRequest, User};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{NewUser, UserRepository};
use crate::security_log;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, validate_email, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, repo_error};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

fn validate_password(password: &str) -> AppResult<()> {
    if password.len() < MIN_PASSWORD_LEN || password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"
        ))
        .with_detail("field", "password"));
    }
    Ok(())
}

fn issue_token(state: &ServerState, user: &User) -> AppResult<String> {
    state
        .jwt_service
        .generate_token(&user.id, &user.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))
}

/// Register handler
///
/// New accounts are never admins; the admin flag is granted out of band
/// (bootstrap account or directly in the store).
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    let username = req.username.trim().to_string();
    validate_required_text(&username, "username", MAX_NAME_LEN)?;
    validate_password(&req.password)?;
    if !req.email.trim().is_empty() {
        validate_email(&req.email, "email")?;
    }

    let repo = UserRepository::new(state.db.clone());
    let user: User = repo
        .create(NewUser {
            username,
            email: req.email.trim().to_string(),
            password: req.password,
            is_admin: false,
        })
        .await
        .map_err(|e| repo_error(e, ErrorCode::NotFound, ErrorCode::UsernameExists))?
        .into();

    let token = issue_token(&state, &user)?;
    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok((StatusCode::CREATED, Json(LoginResponse { token, user })))
}

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let username = req.username.trim().to_string();
    let repo = UserRepository::new(state.db.clone());
    let account = repo.find_by_username(&username).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let Some(account) = account else {
        security_log!("WARN", "login_failed", username = username.clone(), reason = "user_not_found");
        return Err(AppError::invalid_credentials());
    };

    let password_valid = account
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !password_valid {
        security_log!("WARN", "login_failed", username = username.clone(), reason = "invalid_password");
        return Err(AppError::invalid_credentials());
    }

    let user: User = account.into();
    let token = issue_token(&state, &user)?;

    tracing::info!(
        user_id = %user.id,
        username = %user.username,
        is_admin = user.is_admin,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse { token, user }))
}

/// Get current user info
pub async fn user(
    State(state): State<ServerState>,
    current: CurrentUser,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_id(&current.id)
        .await?
        .ok_or_else(|| AppError::invalid_token("Token is not valid"))?;
    Ok(Json(user.into()))
}
