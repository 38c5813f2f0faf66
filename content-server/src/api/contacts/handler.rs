//! Contact API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Contact, ContactCreate, ContactUpdate};

use crate::core::ServerState;
use crate::db::repository::{ContactRepository, RepoError};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, normalize_optional, validate_email,
    validate_optional_text, validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, repo_error};

fn contact_error(err: RepoError) -> AppError {
    repo_error(err, ErrorCode::ContactNotFound, ErrorCode::AlreadyExists)
}

/// POST /api/contacts/public - 公开联系表单
///
/// 保存后在后台发送通知邮件，发送失败不影响响应
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ContactCreate>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email, "email")?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.service, "service", MAX_NAME_LEN)?;
    validate_required_text(&payload.message, "message", MAX_TEXT_LEN)?;

    let repo = ContactRepository::new(state.db.clone());
    let contact: Contact = repo
        .create(
            payload.name.trim().to_string(),
            payload.email.trim().to_string(),
            normalize_optional(payload.phone),
            normalize_optional(payload.service),
            payload.message.trim().to_string(),
        )
        .await?
        .into();

    tracing::info!(id = %contact.id, "Contact form submitted");
    state.notifier.spawn(contact.clone());

    Ok((StatusCode::CREATED, Json(contact)))
}

/// GET /api/admin/contacts - 最新在前
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Contact>>> {
    let repo = ContactRepository::new(state.db.clone());
    let contacts = repo.find_all().await?;
    Ok(Json(contacts.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/contacts/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Contact>> {
    let repo = ContactRepository::new(state.db.clone());
    let contact = repo
        .find_by_id(&id)
        .await
        .map_err(contact_error)?
        .ok_or_else(|| AppError::new(ErrorCode::ContactNotFound))?;
    Ok(Json(contact.into()))
}

/// PUT /api/admin/contacts/:id - 标记已读 / 未读
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ContactUpdate>,
) -> AppResult<Json<Contact>> {
    let repo = ContactRepository::new(state.db.clone());
    let contact = match payload.is_read {
        Some(is_read) => repo.set_read(&id, is_read).await.map_err(contact_error)?,
        None => repo
            .find_by_id(&id)
            .await
            .map_err(contact_error)?
            .ok_or_else(|| AppError::new(ErrorCode::ContactNotFound))?,
    };
    Ok(Json(contact.into()))
}

/// DELETE /api/admin/contacts/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = ContactRepository::new(state.db.clone());
    repo.delete(&id).await.map_err(contact_error)?;

    tracing::info!(id = %id, "Contact deleted");
    Ok(ApiResponse::ok_with_message("Contact removed"))
}
