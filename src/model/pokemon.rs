use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::Id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: Id,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl Pokemon {
    pub fn new(name: String, birth_date: NaiveDate) -> Self {
        Self {
            id: 0,
            name,
            birth_date,
        }
    }
}

/// One edge of the Pokémon–Owner many-to-many relationship.
///
/// Join rows are dropped and recreated wholesale when a Pokémon's owner
/// changes; they carry no identity of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonOwner {
    pub pokemon_id: Id,
    pub owner_id: Id,
}

/// One edge of the Pokémon–Category many-to-many relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonCategory {
    pub pokemon_id: Id,
    pub category_id: Id,
}
