//! Wire-facing transfer shapes and their entity conversions.
//!
//! Every entity pair maps symmetrically field by field through an explicit
//! `{from_entity, into_entity}` pair. The one exception is `PokemonDto`,
//! whose forward direction can also derive the flattened category-name list
//! from the Pokémon–Category join.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Category, Country, Id, Owner, Pokemon, Review, Reviewer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default)]
    pub id: Id,
    pub name: String,
}

impl CategoryDto {
    pub fn from_entity(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }

    pub fn into_entity(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    #[serde(default)]
    pub id: Id,
    pub name: String,
}

impl CountryDto {
    pub fn from_entity(country: &Country) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
        }
    }

    pub fn into_entity(self) -> Country {
        Country {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    #[serde(default)]
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
}

impl OwnerDto {
    pub fn from_entity(owner: &Owner) -> Self {
        Self {
            id: owner.id,
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            gym: owner.gym.clone(),
        }
    }

    /// The country reference is not part of the transfer shape; it is
    /// resolved from the request's query parameters instead.
    pub fn into_entity(self, country_id: Id) -> Owner {
        Owner {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            gym: self.gym,
            country_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDto {
    #[serde(default)]
    pub id: Id,
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl PokemonDto {
    /// Shallow mapping, used where the source rows were fetched without
    /// their category joins (nested listings by owner or category).
    pub fn from_entity(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            birth_date: pokemon.birth_date,
            image: None,
            categories: None,
        }
    }

    /// Forward mapping with the derived field: category names flattened
    /// from the join table.
    pub fn from_entity_with_categories(pokemon: &Pokemon, categories: &[Category]) -> Self {
        Self {
            categories: Some(categories.iter().map(|c| c.name.clone()).collect()),
            ..Self::from_entity(pokemon)
        }
    }

    pub fn into_entity(self) -> Pokemon {
        Pokemon {
            id: self.id,
            name: self.name,
            birth_date: self.birth_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    #[serde(default)]
    pub id: Id,
    pub title: String,
    pub text: String,
    pub rating: i32,
}

impl ReviewDto {
    pub fn from_entity(review: &Review) -> Self {
        Self {
            id: review.id,
            title: review.title.clone(),
            text: review.text.clone(),
            rating: review.rating,
        }
    }

    /// Both foreign keys come from query parameters, not the body.
    pub fn into_entity(self, pokemon_id: Id, reviewer_id: Id) -> Review {
        Review {
            id: self.id,
            title: self.title,
            text: self.text,
            rating: self.rating,
            pokemon_id,
            reviewer_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerDto {
    #[serde(default)]
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
}

impl ReviewerDto {
    pub fn from_entity(reviewer: &Reviewer) -> Self {
        Self {
            id: reviewer.id,
            first_name: reviewer.first_name.clone(),
            last_name: reviewer.last_name.clone(),
        }
    }

    pub fn into_entity(self) -> Reviewer {
        Reviewer {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_its_dto() {
        let category = Category {
            id: 7,
            name: "Water".to_string(),
        };
        let dto = CategoryDto::from_entity(&category);
        assert_eq!(dto.id, 7);
        assert_eq!(dto.name, "Water");
        assert_eq!(dto.into_entity(), category);
    }

    #[test]
    fn pokemon_dto_derives_category_names_from_joined_rows() {
        let pokemon = Pokemon {
            id: 1,
            name: "Squirtle".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1998, 3, 1).unwrap(),
        };
        let categories = vec![
            Category {
                id: 1,
                name: "Water".to_string(),
            },
            Category {
                id: 2,
                name: "Starter".to_string(),
            },
        ];

        let dto = PokemonDto::from_entity_with_categories(&pokemon, &categories);
        assert_eq!(
            dto.categories,
            Some(vec!["Water".to_string(), "Starter".to_string()])
        );

        // Shallow mapping leaves the derived field out entirely.
        let shallow = PokemonDto::from_entity(&pokemon);
        assert_eq!(shallow.categories, None);
    }

    #[test]
    fn pokemon_dto_serializes_in_camel_case_and_omits_empty_optionals() {
        let pokemon = Pokemon {
            id: 3,
            name: "Pikachu".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1996, 2, 27).unwrap(),
        };
        let json = serde_json::to_value(PokemonDto::from_entity(&pokemon)).unwrap();
        assert_eq!(json["birthDate"], "1996-02-27");
        assert!(json.get("categories").is_none());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn create_bodies_may_omit_the_id() {
        let dto: OwnerDto =
            serde_json::from_str(r#"{"firstName":"Ash","lastName":"Ketchum","gym":"Pallet"}"#)
                .unwrap();
        assert_eq!(dto.id, 0);
        let owner = dto.into_entity(4);
        assert_eq!(owner.country_id, 4);
    }
}
