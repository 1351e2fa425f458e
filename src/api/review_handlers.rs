use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::Deserialize;

use crate::api::handlers::{AppState, ErrorResponse};
use crate::dto::ReviewDto;
use crate::model::Id;
use crate::store::traits::Store;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreateQuery {
    pub reviewer_id: Id,
    pub poke_id: Id,
}

pub async fn list_reviews<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<ReviewDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.list_reviews().await {
        Ok(reviews) => Ok(Json(reviews.iter().map(ReviewDto::from_entity).collect())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn get_review<S: Store>(
    State(state): State<AppState<S>>,
    Path(review_id): Path<Id>,
) -> Result<Json<ReviewDto>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.review_exists(review_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Review not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state.store.get_review(review_id).await {
        Ok(Some(review)) => Ok(Json(ReviewDto::from_entity(&review))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Review not found")),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

/// No existence gate: an unrecognized Pokémon id yields an empty list,
/// not a 404.
pub async fn get_reviews_for_pokemon<S: Store>(
    State(state): State<AppState<S>>,
    Path(poke_id): Path<Id>,
) -> Result<Json<Vec<ReviewDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.get_reviews_of_pokemon(poke_id).await {
        Ok(reviews) => Ok(Json(reviews.iter().map(ReviewDto::from_entity).collect())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

/// Reviews carry no duplicate-title precondition; both foreign keys come
/// from the query string. Dangling ids surface as a persistence failure.
pub async fn create_review<S: Store>(
    State(state): State<AppState<S>>,
    Query(query): Query<ReviewCreateQuery>,
    RequestJson(review_create): RequestJson<Option<ReviewDto>>,
) -> Result<(StatusCode, String), (StatusCode, Json<ErrorResponse>)> {
    let Some(review_create) = review_create else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };

    match state
        .store
        .create_review(review_create.into_entity(query.poke_id, query.reviewer_id))
        .await
    {
        Ok(true) => Ok((StatusCode::OK, "Successfully Created".to_string())),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong")),
        )),
        Err(e) => {
            log::error!("Review insert failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong")),
            ))
        }
    }
}

pub async fn update_review<S: Store>(
    State(state): State<AppState<S>>,
    Path(review_id): Path<Id>,
    RequestJson(updated_review): RequestJson<Option<ReviewDto>>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let Some(updated_review) = updated_review else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };
    if review_id != updated_review.id {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Review id mismatch")),
        ));
    }

    let existing = match state.store.get_review(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Review not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    // The update keeps the review attached to its original pokemon and
    // reviewer; only the reviewed content changes.
    match state
        .store
        .update_review(updated_review.into_entity(existing.pokemon_id, existing.reviewer_id))
        .await
    {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong")),
        )),
        Err(e) => {
            log::error!("Review update failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong")),
            ))
        }
    }
}

/// Fire-and-forget: an unknown review id still answers 204.
pub async fn delete_review<S: Store>(
    State(state): State<AppState<S>>,
    Path(review_id): Path<Id>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let review_to_delete = match state.store.get_review(review_id).await {
        Ok(Some(review)) => review,
        Ok(None) => return Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    match state.store.delete_review(review_to_delete).await {
        Ok(true) => {}
        Ok(false) => log::error!("Something went wrong deleting review {}", review_id),
        Err(e) => log::error!("Review delete failed: {:#}", e),
    }

    Ok(StatusCode::NO_CONTENT)
}
