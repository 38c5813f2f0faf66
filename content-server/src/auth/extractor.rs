//! CurrentUser Extractor
//!
//! Handlers behind [`require_auth`](super::require_auth) read the user the
//! middleware stored; anywhere else the credential is validated here.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, credential_from_headers};
use crate::core::ServerState;
use crate::utils::AppError;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted (from middleware)
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user = state
            .gate
            .authenticate(credential_from_headers(&parts.headers))
            .await?;

        // Store in extensions for potential reuse
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
