use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};

use crate::api::handlers::{names_match, AppState, ErrorResponse};
use crate::dto::{ReviewDto, ReviewerDto};
use crate::model::Id;
use crate::store::traits::Store;

pub async fn list_reviewers<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ReviewerDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.list_reviewers().await {
        Ok(reviewers) => Ok(Json(
            reviewers.iter().map(ReviewerDto::from_entity).collect(),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn get_reviewer<S: Store>(
    State(state): State<AppState<S>>,
    Path(reviewer_id): Path<Id>,
) -> Result<Json<ReviewerDto>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.reviewer_exists(reviewer_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Reviewer not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state.store.get_reviewer(reviewer_id).await {
        Ok(Some(reviewer)) => Ok(Json(ReviewerDto::from_entity(&reviewer))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Reviewer not found")),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn get_reviews_by_reviewer<S: Store>(
    State(state): State<AppState<S>>,
    Path(reviewer_id): Path<Id>,
) -> Result<Json<Vec<ReviewDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.reviewer_exists(reviewer_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Reviewer not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state.store.get_reviews_by_reviewer(reviewer_id).await {
        Ok(reviews) => Ok(Json(reviews.iter().map(ReviewDto::from_entity).collect())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn create_reviewer<S: Store>(
    State(state): State<AppState<S>>,
    RequestJson(reviewer_create): RequestJson<Option<ReviewerDto>>,
) -> Result<(StatusCode, String), (StatusCode, Json<ErrorResponse>)> {
    let Some(reviewer_create) = reviewer_create else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };

    let reviewers = match state.store.list_reviewers().await {
        Ok(reviewers) => reviewers,
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };
    if reviewers
        .iter()
        .any(|r| names_match(&r.last_name, &reviewer_create.last_name))
    {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("Reviewer already exists")),
        ));
    }

    match state
        .store
        .create_reviewer(reviewer_create.into_entity())
        .await
    {
        Ok(true) => Ok((StatusCode::OK, "Successfully created".to_string())),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong while saving")),
        )),
        Err(e) => {
            log::error!("Reviewer insert failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong while saving")),
            ))
        }
    }
}

pub async fn update_reviewer<S: Store>(
    State(state): State<AppState<S>>,
    Path(reviewer_id): Path<Id>,
    RequestJson(updated_reviewer): RequestJson<Option<ReviewerDto>>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let Some(updated_reviewer) = updated_reviewer else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };
    if reviewer_id != updated_reviewer.id {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Reviewer id mismatch")),
        ));
    }

    match state.store.reviewer_exists(reviewer_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Reviewer not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state
        .store
        .update_reviewer(updated_reviewer.into_entity())
        .await
    {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong")),
        )),
        Err(e) => {
            log::error!("Reviewer update failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong")),
            ))
        }
    }
}

/// Fire-and-forget: an unknown reviewer id still answers 204.
pub async fn delete_reviewer<S: Store>(
    State(state): State<AppState<S>>,
    Path(reviewer_id): Path<Id>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let reviewer_to_delete = match state.store.get_reviewer(reviewer_id).await {
        Ok(Some(reviewer)) => reviewer,
        Ok(None) => return Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    match state.store.delete_reviewer(reviewer_to_delete).await {
        Ok(true) => {}
        Ok(false) => log::error!("Something went wrong deleting reviewer {}", reviewer_id),
        Err(e) => log::error!("Reviewer delete failed: {:#}", e),
    }

    Ok(StatusCode::NO_CONTENT)
}
