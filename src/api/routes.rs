use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::handlers::{self, AppState};
use crate::api::{
    category_handlers, country_handlers, owner_handlers, pokemon_handlers, review_handlers,
    reviewer_handlers,
};
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Categories
        .route("/api/category", get(category_handlers::list_categories::<S>))
        .route("/api/category", post(category_handlers::create_category::<S>))
        .route(
            "/api/category/:category_id",
            get(category_handlers::get_category::<S>),
        )
        .route(
            "/api/category/:category_id",
            put(category_handlers::update_category::<S>),
        )
        .route(
            "/api/category/:category_id",
            delete(category_handlers::delete_category::<S>),
        )
        .route(
            "/api/category/pokemon/:category_id",
            get(category_handlers::get_pokemon_by_category::<S>),
        )
        // Countries
        .route("/api/country", get(country_handlers::list_countries::<S>))
        .route("/api/country", post(country_handlers::create_country::<S>))
        .route(
            "/api/country/:country_id",
            get(country_handlers::get_country::<S>),
        )
        .route(
            "/api/country/:country_id",
            put(country_handlers::update_country::<S>),
        )
        .route(
            "/api/country/:country_id",
            delete(country_handlers::delete_country::<S>),
        )
        // Country of an owner lives outside the /api/country root
        .route(
            "/owners/:owner_id",
            get(country_handlers::get_country_of_owner::<S>),
        )
        // Owners
        .route("/api/owner", get(owner_handlers::list_owners::<S>))
        .route("/api/owner", post(owner_handlers::create_owner::<S>))
        // Owner updates address the owner via the ownerId query parameter
        .route("/api/owner", put(owner_handlers::update_owner::<S>))
        .route("/api/owner/:owner_id", get(owner_handlers::get_owner::<S>))
        .route(
            "/api/owner/:owner_id",
            delete(owner_handlers::delete_owner::<S>),
        )
        .route(
            "/api/owner/:owner_id/pokemon",
            get(owner_handlers::get_pokemon_by_owner::<S>),
        )
        // Pokemon
        .route("/api/pokemon", get(pokemon_handlers::list_pokemon::<S>))
        .route("/api/pokemon", post(pokemon_handlers::create_pokemon::<S>))
        .route(
            "/api/pokemon/:poke_id",
            get(pokemon_handlers::get_pokemon::<S>),
        )
        .route(
            "/api/pokemon/:poke_id",
            put(pokemon_handlers::update_pokemon::<S>),
        )
        .route(
            "/api/pokemon/:poke_id",
            delete(pokemon_handlers::delete_pokemon::<S>),
        )
        .route(
            "/api/pokemon/:poke_id/rating",
            get(pokemon_handlers::get_pokemon_rating::<S>),
        )
        // Reviews
        .route("/api/review", get(review_handlers::list_reviews::<S>))
        .route("/api/review", post(review_handlers::create_review::<S>))
        .route(
            "/api/review/:review_id",
            get(review_handlers::get_review::<S>),
        )
        .route(
            "/api/review/:review_id",
            put(review_handlers::update_review::<S>),
        )
        .route(
            "/api/review/:review_id",
            delete(review_handlers::delete_review::<S>),
        )
        .route(
            "/api/review/pokemon/:poke_id",
            get(review_handlers::get_reviews_for_pokemon::<S>),
        )
        // Reviewers
        .route("/api/reviewer", get(reviewer_handlers::list_reviewers::<S>))
        .route(
            "/api/reviewer",
            post(reviewer_handlers::create_reviewer::<S>),
        )
        .route(
            "/api/reviewer/:reviewer_id",
            get(reviewer_handlers::get_reviewer::<S>),
        )
        .route(
            "/api/reviewer/:reviewer_id",
            put(reviewer_handlers::update_reviewer::<S>),
        )
        .route(
            "/api/reviewer/:reviewer_id",
            delete(reviewer_handlers::delete_reviewer::<S>),
        )
        .route(
            "/api/reviewer/:reviewer_id/reviews",
            get(reviewer_handlers::get_reviews_by_reviewer::<S>),
        )
        // Any panic that escapes a handler becomes a generic 500 problem
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
}
