//! Review API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Review, ReviewCreate, ReviewStatus, ReviewUpdate};

use crate::core::ServerState;
use crate::db::models::review::ReviewChanges;
use crate::db::repository::{RepoError, ReviewRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, normalize_optional, validate_optional_text,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, repo_error};

fn review_error(err: RepoError) -> AppError {
    repo_error(err, ErrorCode::ReviewNotFound, ErrorCode::AlreadyExists)
}

/// Ratings are whole stars from 1 to 5
fn parse_rating(rating: i64) -> AppResult<u8> {
    u8::try_from(rating)
        .ok()
        .filter(|r| (1..=5).contains(r))
        .ok_or_else(|| AppError::new(ErrorCode::ReviewRatingInvalid).with_detail("rating", rating))
}

/// POST /api/reviews/public - 访客提交评价，状态为 pending
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<(StatusCode, Json<Review>)> {
    validate_required_text(&payload.reviewer_name, "reviewerName", MAX_NAME_LEN)?;
    validate_required_text(&payload.comment, "comment", MAX_TEXT_LEN)?;
    validate_optional_text(
        &payload.product_or_service_id,
        "productOrServiceId",
        MAX_SHORT_TEXT_LEN,
    )?;
    let rating = parse_rating(payload.rating)?;

    let repo = ReviewRepository::new(state.db.clone());
    let review = repo
        .create(
            payload.reviewer_name.trim().to_string(),
            rating,
            payload.comment.trim().to_string(),
            normalize_optional(payload.product_or_service_id),
        )
        .await?;

    tracing::info!(id = ?review.id, rating, "Review submitted");
    Ok((StatusCode::CREATED, Json(review.into())))
}

/// GET /api/reviews/public/approved
pub async fn list_approved(State(state): State<ServerState>) -> AppResult<Json<Vec<Review>>> {
    let repo = ReviewRepository::new(state.db.clone());
    let reviews = repo.find_by_status(ReviewStatus::Approved).await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/reviews
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Review>>> {
    let repo = ReviewRepository::new(state.db.clone());
    let reviews = repo.find_all().await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/reviews/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Review>> {
    let repo = ReviewRepository::new(state.db.clone());
    let review = repo
        .find_by_id(&id)
        .await
        .map_err(review_error)?
        .ok_or_else(|| AppError::new(ErrorCode::ReviewNotFound))?;
    Ok(Json(review.into()))
}

/// PUT /api/admin/reviews/:id - 审核 (status / comment / rating)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReviewUpdate>,
) -> AppResult<Json<Review>> {
    let comment = normalize_optional(payload.comment);
    validate_optional_text(&comment, "comment", MAX_TEXT_LEN)?;
    let rating = payload.rating.map(parse_rating).transpose()?;

    let changes = ReviewChanges {
        status: payload.status,
        comment,
        rating,
    };

    let repo = ReviewRepository::new(state.db.clone());
    let review = repo.update(&id, changes).await.map_err(review_error)?;

    tracing::info!(id = %id, status = %review.status, "Review updated");
    Ok(Json(review.into()))
}

/// DELETE /api/admin/reviews/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let repo = ReviewRepository::new(state.db.clone());
    repo.delete(&id).await.map_err(review_error)?;

    tracing::info!(id = %id, "Review deleted");
    Ok(ApiResponse::ok_with_message("Review removed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(1).unwrap(), 1);
        assert_eq!(parse_rating(5).unwrap(), 5);
        for bad in [0, 6, -1, 300] {
            assert_eq!(
                parse_rating(bad).unwrap_err().code,
                ErrorCode::ReviewRatingInvalid
            );
        }
    }
}
