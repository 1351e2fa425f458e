use serde::{Deserialize, Serialize};

use crate::model::Id;

/// A review of a single Pokémon by a single reviewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Id,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: Id,
    pub reviewer_id: Id,
}

impl Review {
    pub fn new(title: String, text: String, rating: i32, pokemon_id: Id, reviewer_id: Id) -> Self {
        Self {
            id: 0,
            title,
            text,
            rating,
            pokemon_id,
            reviewer_id,
        }
    }
}

/// Arithmetic mean of a set of review ratings. An unreviewed Pokémon rates
/// 0 rather than dividing by zero.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.iter().sum::<i32>() as f64 / ratings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rating_of_no_reviews_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_rating_is_the_arithmetic_mean() {
        assert_eq!(average_rating(&[3, 4, 5]), 4.0);
        assert_eq!(average_rating(&[5]), 5.0);
        assert_eq!(average_rating(&[1, 2]), 1.5);
    }
}
