//! One-shot demo dataset, loaded when the server is started with the
//! `seeddata` argument. Goes through the repository layer so the seeded
//! rows take the same path as API writes.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::model::{Category, Country, Id, Owner, Pokemon, Review, Reviewer};
use crate::store::traits::Store;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("Invalid seed date {}-{}-{}", year, month, day))
}

fn id_by<T>(items: &[T], name: &str, get: impl Fn(&T) -> (&str, Id)) -> Result<Id> {
    items
        .iter()
        .map(|item| get(item))
        .find(|(n, _)| *n == name)
        .map(|(_, id)| id)
        .ok_or_else(|| anyhow!("Seed row '{}' was not created", name))
}

pub async fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    // Countries first; owners reference them.
    for name in ["Kanto", "Johto", "Hoenn"] {
        store.create_country(Country::new(name.to_string())).await?;
    }
    let countries = store.list_countries().await?;
    let kanto = id_by(&countries, "Kanto", |c| (c.name.as_str(), c.id))?;
    let johto = id_by(&countries, "Johto", |c| (c.name.as_str(), c.id))?;
    let hoenn = id_by(&countries, "Hoenn", |c| (c.name.as_str(), c.id))?;

    for (first, last, gym, country_id) in [
        ("Ash", "Ketchum", "Pallet Gym", kanto),
        ("Misty", "Williams", "Cerulean Gym", johto),
        ("Brock", "Harrison", "Pewter Gym", hoenn),
    ] {
        store
            .create_owner(Owner::new(
                first.to_string(),
                last.to_string(),
                gym.to_string(),
                country_id,
            ))
            .await?;
    }
    let owners = store.list_owners().await?;
    let ash = id_by(&owners, "Ketchum", |o| (o.last_name.as_str(), o.id))?;
    let misty = id_by(&owners, "Williams", |o| (o.last_name.as_str(), o.id))?;
    let brock = id_by(&owners, "Harrison", |o| (o.last_name.as_str(), o.id))?;

    for name in ["Electric", "Water", "Leaf"] {
        store
            .create_category(Category::new(name.to_string()))
            .await?;
    }
    let categories = store.list_categories().await?;
    let electric = id_by(&categories, "Electric", |c| (c.name.as_str(), c.id))?;
    let water = id_by(&categories, "Water", |c| (c.name.as_str(), c.id))?;
    let leaf = id_by(&categories, "Leaf", |c| (c.name.as_str(), c.id))?;

    store
        .create_pokemon(
            ash,
            electric,
            Pokemon::new("Pikachu".to_string(), date(1903, 1, 1)?),
        )
        .await?;
    store
        .create_pokemon(
            misty,
            water,
            Pokemon::new("Squirtle".to_string(), date(1903, 1, 1)?),
        )
        .await?;
    store
        .create_pokemon(
            brock,
            leaf,
            Pokemon::new("Venusaur".to_string(), date(1903, 1, 1)?),
        )
        .await?;
    let pokemon = store.list_pokemon().await?;
    let pikachu = id_by(&pokemon, "Pikachu", |p| (p.name.as_str(), p.id))?;
    let squirtle = id_by(&pokemon, "Squirtle", |p| (p.name.as_str(), p.id))?;
    let venusaur = id_by(&pokemon, "Venusaur", |p| (p.name.as_str(), p.id))?;

    for (first, last) in [("Teddy", "Smith"), ("Taylor", "Jones")] {
        store
            .create_reviewer(Reviewer::new(first.to_string(), last.to_string()))
            .await?;
    }
    let reviewers = store.list_reviewers().await?;
    let teddy = id_by(&reviewers, "Smith", |r| (r.last_name.as_str(), r.id))?;
    let taylor = id_by(&reviewers, "Jones", |r| (r.last_name.as_str(), r.id))?;

    for (title, text, rating, pokemon_id, reviewer_id) in [
        (
            "Pikachu",
            "Pikachu is the best pokemon, because it is electric",
            5,
            pikachu,
            teddy,
        ),
        (
            "Pikachu",
            "Pikachu is the best at killing rocks",
            5,
            pikachu,
            taylor,
        ),
        (
            "Squirtle",
            "Squirtle is a solid water type",
            4,
            squirtle,
            teddy,
        ),
        (
            "Venusaur",
            "Venusaur takes too long to grow up",
            3,
            venusaur,
            taylor,
        ),
    ] {
        store
            .create_review(Review::new(
                title.to_string(),
                text.to_string(),
                rating,
                pokemon_id,
                reviewer_id,
            ))
            .await?;
    }

    Ok(())
}
