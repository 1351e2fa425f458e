use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};

use crate::api::handlers::{names_match, AppState, ErrorResponse};
use crate::dto::CountryDto;
use crate::model::Id;
use crate::store::traits::Store;

pub async fn list_countries<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<CountryDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.list_countries().await {
        Ok(countries) => Ok(Json(countries.iter().map(CountryDto::from_entity).collect())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn get_country<S: Store>(
    State(state): State<AppState<S>>,
    Path(country_id): Path<Id>,
) -> Result<Json<CountryDto>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.country_exists(country_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Country not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state.store.get_country(country_id).await {
        Ok(Some(country)) => Ok(Json(CountryDto::from_entity(&country))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Country not found")),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

/// No existence gate; an unknown owner maps to a null body.
pub async fn get_country_of_owner<S: Store>(
    State(state): State<AppState<S>>,
    Path(owner_id): Path<Id>,
) -> Result<Json<Option<CountryDto>>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.get_country_by_owner(owner_id).await {
        Ok(country) => Ok(Json(country.as_ref().map(CountryDto::from_entity))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(&e.to_string())),
        )),
    }
}

pub async fn create_country<S: Store>(
    State(state): State<AppState<S>>,
    RequestJson(country_create): RequestJson<Option<CountryDto>>,
) -> Result<(StatusCode, String), (StatusCode, Json<ErrorResponse>)> {
    let Some(country_create) = country_create else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };

    let countries = match state.store.list_countries().await {
        Ok(countries) => countries,
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };
    if countries
        .iter()
        .any(|c| names_match(&c.name, &country_create.name))
    {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new("Country already exists")),
        ));
    }

    match state.store.create_country(country_create.into_entity()).await {
        Ok(true) => Ok((StatusCode::OK, "Successfully created country".to_string())),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong while saving")),
        )),
        Err(e) => {
            log::error!("Country insert failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong while saving")),
            ))
        }
    }
}

pub async fn update_country<S: Store>(
    State(state): State<AppState<S>>,
    Path(country_id): Path<Id>,
    RequestJson(update_country): RequestJson<Option<CountryDto>>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let Some(update_country) = update_country else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Request body is required")),
        ));
    };
    if country_id != update_country.id {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Country id mismatch")),
        ));
    }

    match state.store.country_exists(country_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Country not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    match state.store.update_country(update_country.into_entity()).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Something went wrong")),
        )),
        Err(e) => {
            log::error!("Country update failed: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Something went wrong")),
            ))
        }
    }
}

/// Unknown ids are a 404 here, unlike the owner/review/reviewer deletes.
pub async fn delete_country<S: Store>(
    State(state): State<AppState<S>>,
    Path(country_id): Path<Id>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.store.country_exists(country_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Country not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }

    let country_to_delete = match state.store.get_country(country_id).await {
        Ok(Some(country)) => country,
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Country not found")),
            ))
        }
        Err(e) => {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    };

    match state.store.delete_country(country_to_delete).await {
        Ok(true) => {}
        Ok(false) => log::error!("Something went wrong deleting country {}", country_id),
        Err(e) => log::error!("Country delete failed: {:#}", e),
    }

    Ok(StatusCode::NO_CONTENT)
}
