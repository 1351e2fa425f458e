use anyhow::{Context, Result};
use sqlx::Row;

use crate::model::{average_rating, Category, Id, Pokemon, PokemonCategory, PokemonOwner};
use crate::store::postgres::PostgresStore;
use crate::store::traits::PokemonStore;

#[async_trait::async_trait]
impl PokemonStore for PostgresStore {
    async fn pokemon_exists(&self, id: Id) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM pokemon WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check pokemon existence")?;

        Ok(row.get(0))
    }

    async fn list_pokemon(&self) -> Result<Vec<Pokemon>> {
        let rows = sqlx::query("SELECT id, name, birth_date FROM pokemon ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list pokemon")?;

        let pokemon = rows
            .into_iter()
            .map(|row| Pokemon {
                id: row.get("id"),
                name: row.get("name"),
                birth_date: row.get("birth_date"),
            })
            .collect();

        Ok(pokemon)
    }

    async fn get_pokemon(&self, id: Id) -> Result<Option<Pokemon>> {
        let row = sqlx::query("SELECT id, name, birth_date FROM pokemon WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch pokemon")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Pokemon {
            id: row.get("id"),
            name: row.get("name"),
            birth_date: row.get("birth_date"),
        }))
    }

    async fn get_categories_of_pokemon(&self, poke_id: Id) -> Result<Vec<Category>> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.name
            FROM categories c
            JOIN pokemon_categories pc ON pc.category_id = c.id
            WHERE pc.pokemon_id = $1
            ORDER BY c.id
            "#,
        )
        .bind(poke_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list categories for pokemon")?;

        let categories = rows
            .into_iter()
            .map(|row| Category {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect();

        Ok(categories)
    }

    async fn get_pokemon_rating(&self, poke_id: Id) -> Result<f64> {
        let rows = sqlx::query("SELECT rating FROM reviews WHERE pokemon_id = $1")
            .bind(poke_id)
            .fetch_all(&self.pool)
            .await
            .context("Failed to fetch ratings for pokemon")?;

        let ratings: Vec<i32> = rows.into_iter().map(|row| row.get("rating")).collect();

        Ok(average_rating(&ratings))
    }

    async fn create_pokemon(
        &self,
        owner_id: Id,
        category_id: Id,
        pokemon: Pokemon,
    ) -> Result<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin pokemon insert transaction")?;

        let row = sqlx::query("INSERT INTO pokemon (name, birth_date) VALUES ($1, $2) RETURNING id")
            .bind(&pokemon.name)
            .bind(pokemon.birth_date)
            .fetch_one(&mut *tx)
            .await
            .context("Failed to insert pokemon")?;
        let poke_id: Id = row.get("id");

        let pokemon_owner = PokemonOwner {
            pokemon_id: poke_id,
            owner_id,
        };
        sqlx::query("INSERT INTO pokemon_owners (pokemon_id, owner_id) VALUES ($1, $2)")
            .bind(pokemon_owner.pokemon_id)
            .bind(pokemon_owner.owner_id)
            .execute(&mut *tx)
            .await
            .context("Failed to insert pokemon owner join row")?;

        let pokemon_category = PokemonCategory {
            pokemon_id: poke_id,
            category_id,
        };
        sqlx::query("INSERT INTO pokemon_categories (pokemon_id, category_id) VALUES ($1, $2)")
            .bind(pokemon_category.pokemon_id)
            .bind(pokemon_category.category_id)
            .execute(&mut *tx)
            .await
            .context("Failed to insert pokemon category join row")?;

        tx.commit()
            .await
            .context("Failed to commit pokemon insert")?;

        Ok(true)
    }

    async fn update_pokemon(
        &self,
        owner_id: Id,
        category_id: Id,
        pokemon: Pokemon,
    ) -> Result<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin pokemon update transaction")?;

        // Owner join is replaced only when both the old join row and the new
        // owner are present; otherwise the owner link is left untouched.
        let owner_join = sqlx::query("SELECT owner_id FROM pokemon_owners WHERE pokemon_id = $1")
            .bind(pokemon.id)
            .fetch_optional(&mut *tx)
            .await
            .context("Failed to fetch pokemon owner join row")?;
        let owner_exists: bool =
            sqlx::query("SELECT EXISTS(SELECT 1 FROM owners WHERE id = $1)")
                .bind(owner_id)
                .fetch_one(&mut *tx)
                .await
                .context("Failed to check owner existence")?
                .get(0);

        if owner_join.is_some() && owner_exists {
            let replacement = PokemonOwner {
                pokemon_id: pokemon.id,
                owner_id,
            };
            sqlx::query("DELETE FROM pokemon_owners WHERE pokemon_id = $1")
                .bind(pokemon.id)
                .execute(&mut *tx)
                .await
                .context("Failed to remove old pokemon owner join row")?;
            sqlx::query("INSERT INTO pokemon_owners (pokemon_id, owner_id) VALUES ($1, $2)")
                .bind(replacement.pokemon_id)
                .bind(replacement.owner_id)
                .execute(&mut *tx)
                .await
                .context("Failed to insert new pokemon owner join row")?;
        }

        // The category join is mandatory: without an existing join row and a
        // valid replacement category, the whole update is abandoned.
        let category_join =
            sqlx::query("SELECT category_id FROM pokemon_categories WHERE pokemon_id = $1")
                .bind(pokemon.id)
                .fetch_optional(&mut *tx)
                .await
                .context("Failed to fetch pokemon category join row")?;
        let category_exists: bool =
            sqlx::query("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(category_id)
                .fetch_one(&mut *tx)
                .await
                .context("Failed to check category existence")?
                .get(0);

        if category_join.is_none() || !category_exists {
            tx.rollback()
                .await
                .context("Failed to roll back pokemon update")?;
            return Ok(false);
        }

        let replacement = PokemonCategory {
            pokemon_id: pokemon.id,
            category_id,
        };
        sqlx::query("DELETE FROM pokemon_categories WHERE pokemon_id = $1")
            .bind(pokemon.id)
            .execute(&mut *tx)
            .await
            .context("Failed to remove old pokemon category join row")?;
        sqlx::query("INSERT INTO pokemon_categories (pokemon_id, category_id) VALUES ($1, $2)")
            .bind(replacement.pokemon_id)
            .bind(replacement.category_id)
            .execute(&mut *tx)
            .await
            .context("Failed to insert new pokemon category join row")?;

        let result = sqlx::query("UPDATE pokemon SET name = $2, birth_date = $3 WHERE id = $1")
            .bind(pokemon.id)
            .bind(&pokemon.name)
            .bind(pokemon.birth_date)
            .execute(&mut *tx)
            .await
            .context("Failed to update pokemon")?;

        tx.commit()
            .await
            .context("Failed to commit pokemon update")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_pokemon(&self, pokemon: Pokemon) -> Result<bool> {
        let result = sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(pokemon.id)
            .execute(&self.pool)
            .await
            .context("Failed to delete pokemon")?;

        Ok(result.rows_affected() > 0)
    }
}
