use anyhow::{Context, Result};
use sqlx::Row;

use crate::model::{Id, Owner, Pokemon};
use crate::store::postgres::PostgresStore;
use crate::store::traits::OwnerStore;

#[async_trait::async_trait]
impl OwnerStore for PostgresStore {
    async fn owner_exists(&self, id: Id) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM owners WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check owner existence")?;

        Ok(row.get(0))
    }

    async fn list_owners(&self) -> Result<Vec<Owner>> {
        let rows =
            sqlx::query("SELECT id, first_name, last_name, gym, country_id FROM owners ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .context("Failed to list owners")?;

        let owners = rows
            .into_iter()
            .map(|row| Owner {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                gym: row.get("gym"),
                country_id: row.get("country_id"),
            })
            .collect();

        Ok(owners)
    }

    async fn get_owner(&self, id: Id) -> Result<Option<Owner>> {
        let row =
            sqlx::query("SELECT id, first_name, last_name, gym, country_id FROM owners WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to fetch owner")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Owner {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            gym: row.get("gym"),
            country_id: row.get("country_id"),
        }))
    }

    async fn get_pokemon_by_owner(&self, owner_id: Id) -> Result<Vec<Pokemon>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.name, p.birth_date
            FROM pokemon p
            JOIN pokemon_owners po ON po.pokemon_id = p.id
            WHERE po.owner_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list pokemon for owner")?;

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

    async fn create_owner(&self, owner: Owner) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO owners (first_name, last_name, gym, country_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.gym)
        .bind(owner.country_id)
        .execute(&self.pool)
        .await
        .context("Failed to insert owner")?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_owner(&self, owner: Owner) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE owners SET first_name = $2, last_name = $3, gym = $4 WHERE id = $1",
        )
        .bind(owner.id)
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.gym)
        .execute(&self.pool)
        .await
        .context("Failed to update owner")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_owner(&self, owner: Owner) -> Result<bool> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(owner.id)
            .execute(&self.pool)
            .await
            .context("Failed to delete owner")?;

        Ok(result.rows_affected() > 0)
    }
}
