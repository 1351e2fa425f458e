use crate::model::{Category, Country, Id, Owner, Pokemon, Review, Reviewer};
use anyhow::Result;

// One repository trait per entity. Mutations commit immediately and report
// success as "at least one row affected"; a commit that affects nothing
// surfaces as Ok(false), driver failures as Err.

#[async_trait::async_trait]
pub trait CategoryStore: Send + Sync {
    async fn category_exists(&self, id: Id) -> Result<bool>;
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn get_category(&self, id: Id) -> Result<Option<Category>>;
    async fn get_pokemon_by_category(&self, category_id: Id) -> Result<Vec<Pokemon>>;
    async fn create_category(&self, category: Category) -> Result<bool>;
    async fn update_category(&self, category: Category) -> Result<bool>;
    async fn delete_category(&self, category: Category) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait CountryStore: Send + Sync {
    async fn country_exists(&self, id: Id) -> Result<bool>;
    async fn list_countries(&self) -> Result<Vec<Country>>;
    async fn get_country(&self, id: Id) -> Result<Option<Country>>;
    async fn get_country_by_owner(&self, owner_id: Id) -> Result<Option<Country>>;
    async fn create_country(&self, country: Country) -> Result<bool>;
    async fn update_country(&self, country: Country) -> Result<bool>;
    async fn delete_country(&self, country: Country) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait OwnerStore: Send + Sync {
    async fn owner_exists(&self, id: Id) -> Result<bool>;
    async fn list_owners(&self) -> Result<Vec<Owner>>;
    async fn get_owner(&self, id: Id) -> Result<Option<Owner>>;
    async fn get_pokemon_by_owner(&self, owner_id: Id) -> Result<Vec<Pokemon>>;
    async fn create_owner(&self, owner: Owner) -> Result<bool>;
    async fn update_owner(&self, owner: Owner) -> Result<bool>;
    async fn delete_owner(&self, owner: Owner) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait PokemonStore: Send + Sync {
    async fn pokemon_exists(&self, id: Id) -> Result<bool>;
    async fn list_pokemon(&self) -> Result<Vec<Pokemon>>;
    async fn get_pokemon(&self, id: Id) -> Result<Option<Pokemon>>;
    /// Categories joined to a Pokémon, feeding the DTO's derived name list.
    async fn get_categories_of_pokemon(&self, poke_id: Id) -> Result<Vec<Category>>;
    /// Mean review rating; 0 when the Pokémon has no reviews.
    async fn get_pokemon_rating(&self, poke_id: Id) -> Result<f64>;
    /// Inserts the Pokémon plus one owner and one category join row in a
    /// single transaction.
    async fn create_pokemon(&self, owner_id: Id, category_id: Id, pokemon: Pokemon)
        -> Result<bool>;
    /// Replaces the join rows wholesale. Reports Ok(false) with nothing
    /// written when no category join row exists for this Pokémon: an update
    /// cannot move a Pokémon into a category-less state.
    async fn update_pokemon(&self, owner_id: Id, category_id: Id, pokemon: Pokemon)
        -> Result<bool>;
    async fn delete_pokemon(&self, pokemon: Pokemon) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait ReviewStore: Send + Sync {
    async fn review_exists(&self, id: Id) -> Result<bool>;
    async fn list_reviews(&self) -> Result<Vec<Review>>;
    async fn get_review(&self, id: Id) -> Result<Option<Review>>;
    async fn get_reviews_of_pokemon(&self, poke_id: Id) -> Result<Vec<Review>>;
    async fn create_review(&self, review: Review) -> Result<bool>;
    async fn update_review(&self, review: Review) -> Result<bool>;
    async fn delete_review(&self, review: Review) -> Result<bool>;
    /// Bulk delete, used when a Pokémon is removed and its reviews cascade.
    async fn delete_reviews(&self, reviews: Vec<Review>) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait ReviewerStore: Send + Sync {
    async fn reviewer_exists(&self, id: Id) -> Result<bool>;
    async fn list_reviewers(&self) -> Result<Vec<Reviewer>>;
    async fn get_reviewer(&self, id: Id) -> Result<Option<Reviewer>>;
    async fn get_reviews_by_reviewer(&self, reviewer_id: Id) -> Result<Vec<Review>>;
    async fn create_reviewer(&self, reviewer: Reviewer) -> Result<bool>;
    async fn update_reviewer(&self, reviewer: Reviewer) -> Result<bool>;
    async fn delete_reviewer(&self, reviewer: Reviewer) -> Result<bool>;
}

pub trait Store:
    CategoryStore
    + CountryStore
    + OwnerStore
    + PokemonStore
    + ReviewStore
    + ReviewerStore
    + Send
    + Sync
{
}
