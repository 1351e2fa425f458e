use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::Deserialize;

use crate::api::handlers::{names_match, AppState, ErrorResponse};
use crate::dto::{OwnerDto, PokemonDto};
use crate::model::Id;
use crate::store::traits::Store;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerCreateQuery {
    pub country_id: Id,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerUpdateQuery {
    pub owner_id: Id,
}

pub async fn list_owners<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<OwnerDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.list_owners().await {
        Ok(owners) => Ok(Json(owners.iter().map(OwnerDto::from_entity).collect())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn get_owner<S: Store>(
    State(state): State<AppState<S>>,
    Path(owner_id): Path<Id>,
) -> Result<Json<OwnerDto>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.owner_exists(owner_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Owner not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state.store.get_owner(owner_id).await {
        Ok(Some(owner)) => Ok(Json(OwnerDto::from_entity(&owner))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Owner not found")),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn get_pokemon_by_owner<S: Store>(
    State(state): State<AppState<S>>,
    Path(owner_id): Path<Id>,
) -> Result<Json<Vec<PokemonDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.owner_exists(owner_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Owner not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state.store.get_pokemon_by_owner(owner_id).await {
        Ok(pokemon) => Ok(Json(pokemon.iter().map(PokemonDto::from_entity).collect())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

/// The owner's country comes from the `countryId` query parameter, not the
/// body. A dangling country id surfaces as a persistence failure.
pub async fn create_owner<S: Store>(
    State(state): State<AppState<S>>,
    Query(query): Query<OwnerCreateQuery>,
    RequestJson(owner_create): RequestJson<Option<OwnerDto>>,
) -> Result<(StatusCode, String), (StatusCode, Json<ErrorResponse>)> {
    let Some(owner_create) = owner_create else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };

    let owners = match state.store.list_owners().await {
        Ok(owners) => owners,
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };
    if owners
        .iter()
        .any(|o| names_match(&o.last_name, &owner_create.last_name))
    {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("Owner already exists")),
        ));
    }

    match state
        .store
        .create_owner(owner_create.into_entity(query.country_id))
        .await
    {
        Ok(true) => Ok((StatusCode::OK, "Successfully created owner".to_string())),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong while saving")),
        )),
        Err(e) => {
            log::error!("Owner insert failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong while saving")),
            ))
        }
    }
}

/// The owner id to update is a query parameter rather than a path segment.
pub async fn update_owner<S: Store>(
    State(state): State<AppState<S>>,
    Query(query): Query<OwnerUpdateQuery>,
    RequestJson(update_owner): RequestJson<Option<OwnerDto>>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let Some(update_owner) = update_owner else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };
    if query.owner_id != update_owner.id {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Owner id mismatch")),
        ));
    }

    let existing = match state.store.get_owner(query.owner_id).await {
        Ok(Some(owner)) => owner,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Owner not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    // The transfer shape carries no country; the stored link is kept.
    match state
        .store
        .update_owner(update_owner.into_entity(existing.country_id))
        .await
    {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong")),
        )),
        Err(e) => {
            log::error!("Owner update failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong")),
            ))
        }
    }
}

/// Fire-and-forget: an unknown owner id still answers 204.
pub async fn delete_owner<S: Store>(
    State(state): State<AppState<S>>,
    Path(owner_id): Path<Id>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.store.owner_exists(owner_id).await {
        Ok(true) => {}
        Ok(false) => return Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    let owner_to_delete = match state.store.get_owner(owner_id).await {
        Ok(Some(owner)) => owner,
        Ok(None) => return Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    match state.store.delete_owner(owner_to_delete).await {
        Ok(true) => {}
        Ok(false) => log::error!("Something went wrong deleting owner {}", owner_id),
        Err(e) => log::error!("Owner delete failed: {:#}", e),
    }

    Ok(StatusCode::NO_CONTENT)
}
