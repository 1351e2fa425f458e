use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use serde::Deserialize;

use crate::api::handlers::{names_match, AppState, ErrorResponse};
use crate::dto::PokemonDto;
use crate::model::{Id, Pokemon};
use crate::store::traits::Store;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonUpdateQuery {
    pub owner_id: Id,
    pub category_id: Id,
}

/// Everything parsed out of the multipart create request.
struct PokemonCreateParts {
    file_name: String,
    image: Vec<u8>,
    owner_id: Option<Id>,
    category_id: Option<Id>,
    pokemon: Option<PokemonDto>,
}

pub async fn list_pokemon<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<PokemonDto>>, (StatusCode, Json<ErrorResponse>)> {
    let pokemon = match state.store.list_pokemon().await {
        Ok(pokemon) => pokemon,
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    let mut dtos = Vec::with_capacity(pokemon.len());
    for p in &pokemon {
        let categories = match state.store.get_categories_of_pokemon(p.id).await {
            Ok(categories) => categories,
            Err(e) => {
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(&e.to_string())),
                ))
            }
        };
        dtos.push(PokemonDto::from_entity_with_categories(p, &categories));
    }

    Ok(Json(dtos))
}

pub async fn get_pokemon<S: Store>(
    State(state): State<AppState<S>>,
    Path(poke_id): Path<Id>,
) -> Result<Json<PokemonDto>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.pokemon_exists(poke_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Pokemon not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    let pokemon = match state.store.get_pokemon(poke_id).await {
        Ok(Some(pokemon)) => pokemon,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Pokemon not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    match state.store.get_categories_of_pokemon(poke_id).await {
        Ok(categories) => Ok(Json(PokemonDto::from_entity_with_categories(
            &pokemon,
            &categories,
        ))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn get_pokemon_rating<S: Store>(
    State(state): State<AppState<S>>,
    Path(poke_id): Path<Id>,
) -> Result<Json<f64>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.pokemon_exists(poke_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Pokemon not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state.store.get_pokemon_rating(poke_id).await {
        Ok(rating) => Ok(Json(rating)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

async fn read_create_parts(
    multipart: &mut Multipart,
) -> Result<PokemonCreateParts, (StatusCode, Json<ErrorResponse>)> {
    let mut parts = PokemonCreateParts {
        file_name: String::new(),
        image: Vec::new(),
        owner_id: None,
        category_id: None,
        pokemon: None,
    };

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(&e.to_string())),
        )
    })? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                parts.file_name = field.file_name().unwrap_or("upload").to_string();
                parts.image = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new(&e.to_string())),
                        )
                    })?
                    .to_vec();
            }
            "ownerId" | "categoryId" | "pokemon" => {
                let text = field.text().await.map_err(|e| {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse::new(&e.to_string())),
                    )
                })?;
                match name.as_str() {
                    "ownerId" => parts.owner_id = text.trim().parse().ok(),
                    "categoryId" => parts.category_id = text.trim().parse().ok(),
                    _ => parts.pokemon = serde_json::from_str(&text).ok(),
                }
            }
            _ => {}
        }
    }

    Ok(parts)
}

/// Multipart create: `image` file part, `ownerId`/`categoryId` form fields,
/// `pokemon` JSON part. The image is forwarded to the media host only after
/// the row is committed; a failed upload does not undo the insert.
pub async fn create_pokemon<S: Store>(
    State(state): State<AppState<S>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, String), (StatusCode, Json<ErrorResponse>)> {
    let parts = read_create_parts(&mut multipart).await?;

    if parts.image.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No file uploaded.")),
        ));
    }
    let Some(pokemon_create) = parts.pokemon else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };
    let (Some(owner_id), Some(category_id)) = (parts.owner_id, parts.category_id) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "ownerId and categoryId form fields are required",
            )),
        ));
    };

    let existing = match state.store.list_pokemon().await {
        Ok(pokemon) => pokemon,
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };
    if existing
        .iter()
        .any(|p: &Pokemon| names_match(&p.name, &pokemon_create.name))
    {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("Pokemon already exists")),
        ));
    }

    match state
        .store
        .create_pokemon(owner_id, category_id, pokemon_create.into_entity())
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong")),
            ))
        }
        Err(e) => {
            log::error!("Pokemon insert failed: {:#}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong")),
            ));
        }
    }

    if let Err(e) = state.media.upload(&parts.file_name, parts.image).await {
        log::error!("Image upload to media host failed: {}", e);
    }

    Ok((StatusCode::OK, "Successfully Created".to_string()))
}

pub async fn update_pokemon<S: Store>(
    State(state): State<AppState<S>>,
    Path(poke_id): Path<Id>,
    Query(query): Query<PokemonUpdateQuery>,
    RequestJson(update_pokemon): RequestJson<Option<PokemonDto>>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let Some(update_pokemon) = update_pokemon else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };
    if poke_id != update_pokemon.id {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Pokemon id mismatch")),
        ));
    }

    match state.store.pokemon_exists(poke_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Pokemon not found")),
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
        .update_pokemon(query.owner_id, query.category_id, update_pokemon.into_entity())
        .await
    {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong")),
        )),
        Err(e) => {
            log::error!("Pokemon update failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong")),
            ))
        }
    }
}

/// Dependent reviews are removed first; the store does not cascade them.
pub async fn delete_pokemon<S: Store>(
    State(state): State<AppState<S>>,
    Path(poke_id): Path<Id>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.store.pokemon_exists(poke_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Pokemon not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    let reviews_to_delete = match state.store.get_reviews_of_pokemon(poke_id).await {
        Ok(reviews) => reviews,
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };
    let pokemon_to_delete = match state.store.get_pokemon(poke_id).await {
        Ok(Some(pokemon)) => pokemon,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Pokemon not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    if !reviews_to_delete.is_empty() {
        match state.store.delete_reviews(reviews_to_delete).await {
            Ok(true) => {}
            Ok(false) => {
                log::error!("Something went wrong deleting reviews of pokemon {}", poke_id)
            }
            Err(e) => log::error!("Review cascade delete failed: {:#}", e),
        }
    }

    match state.store.delete_pokemon(pokemon_to_delete).await {
        Ok(true) => {}
        Ok(false) => log::error!("Something went wrong deleting pokemon {}", poke_id),
        Err(e) => log::error!("Pokemon delete failed: {:#}", e),
    }

    Ok(StatusCode::NO_CONTENT)
}
