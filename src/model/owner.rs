use serde::{Deserialize, Serialize};

use crate::model::Id;

/// A Pokémon owner. Belongs to exactly one country; linked to its Pokémon
/// through the `pokemon_owners` join table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
    pub country_id: Id,
}

impl Owner {
    pub fn new(first_name: String, last_name: String, gym: String, country_id: Id) -> Self {
        Self {
            id: 0,
            first_name,
            last_name,
            gym,
            country_id,
        }
    }
}
