use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};

use crate::api::handlers::{names_match, AppState, ErrorResponse};
use crate::dto::{CategoryDto, PokemonDto};
use crate::model::Id;
use crate::store::traits::Store;

pub async fn list_categories<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<CategoryDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.list_categories().await {
        Ok(categories) => Ok(Json(
            categories.iter().map(CategoryDto::from_entity).collect(),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn get_category<S: Store>(
    State(state): State<AppState<S>>,
    Path(category_id): Path<Id>,
) -> Result<Json<CategoryDto>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.category_exists(category_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Category not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state.store.get_category(category_id).await {
        Ok(Some(category)) => Ok(Json(CategoryDto::from_entity(&category))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Category not found")),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

/// No existence gate: an unknown category yields an empty list.
pub async fn get_pokemon_by_category<S: Store>(
    State(state): State<AppState<S>>,
    Path(category_id): Path<Id>,
) -> Result<Json<Vec<PokemonDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.get_pokemon_by_category(category_id).await {
        Ok(pokemon) => Ok(Json(pokemon.iter().map(PokemonDto::from_entity).collect())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn create_category<S: Store>(
    State(state): State<AppState<S>>,
    RequestJson(category_create): RequestJson<Option<CategoryDto>>,
) -> Result<(StatusCode, String), (StatusCode, Json<ErrorResponse>)> {
    let Some(category_create) = category_create else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };

    let categories = match state.store.list_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };
    if categories
        .iter()
        .any(|c| names_match(&c.name, &category_create.name))
    {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("Category already exists")),
        ));
    }

    match state.store.create_category(category_create.into_entity()).await {
        Ok(true) => Ok((StatusCode::OK, "Successfully created".to_string())),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong while saving")),
        )),
        Err(e) => {
            log::error!("Category insert failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong while saving")),
            ))
        }
    }
}

pub async fn update_category<S: Store>(
    State(state): State<AppState<S>>,
    Path(category_id): Path<Id>,
    RequestJson(updated_category): RequestJson<Option<CategoryDto>>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let Some(updated_category) = updated_category else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };
    if category_id != updated_category.id {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Category id mismatch")),
        ));
    }

    match state.store.category_exists(category_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Category not found")),
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
        .update_category(updated_category.into_entity())
        .await
    {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong")),
        )),
        Err(e) => {
            log::error!("Category update failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong")),
            ))
        }
    }
}

/// Unknown ids are a 404 here, unlike the owner/review/reviewer deletes.
pub async fn delete_category<S: Store>(
    State(state): State<AppState<S>>,
    Path(category_id): Path<Id>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.store.category_exists(category_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Category not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    let category_to_delete = match state.store.get_category(category_id).await {
        Ok(Some(category)) => category,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Category not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    // Delete is fire-and-forget: failures land in the log, not the response.
    match state.store.delete_category(category_to_delete).await {
        Ok(true) => {}
        Ok(false) => log::error!("Something went wrong deleting category {}", category_id),
        Err(e) => log::error!("Category delete failed: {:#}", e),
    }

    Ok(StatusCode::NO_CONTENT)
}
