use anyhow::{Context, Result};
use sqlx::Row;

use crate::model::{Country, Id};
use crate::store::postgres::PostgresStore;
use crate::store::traits::CountryStore;

#[async_trait::async_trait]
impl CountryStore for PostgresStore {
    async fn country_exists(&self, id: Id) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM countries WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check country existence")?;

        Ok(row.get(0))
    }

    async fn list_countries(&self) -> Result<Vec<Country>> {
        let rows = sqlx::query("SELECT id, name FROM countries ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list countries")?;

        let countries = rows
            .into_iter()
            .map(|row| Country {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect();

        Ok(countries)
    }

    async fn get_country(&self, id: Id) -> Result<Option<Country>> {
        let row = sqlx::query("SELECT id, name FROM countries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch country")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Country {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    async fn get_country_by_owner(&self, owner_id: Id) -> Result<Option<Country>> {
        let row = sqlx::query(
            r#"
            SELECT c.id, c.name
            FROM countries c
            JOIN owners o ON o.country_id = c.id
            WHERE o.id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch country for owner")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Country {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    async fn create_country(&self, country: Country) -> Result<bool> {
        let result = sqlx::query("INSERT INTO countries (name) VALUES ($1)")
            .bind(&country.name)
            .execute(&self.pool)
            .await
            .context("Failed to insert country")?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_country(&self, country: Country) -> Result<bool> {
        let result = sqlx::query("UPDATE countries SET name = $2 WHERE id = $1")
            .bind(country.id)
            .bind(&country.name)
            .execute(&self.pool)
            .await
            .context("Failed to update country")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_country(&self, country: Country) -> Result<bool> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(country.id)
            .execute(&self.pool)
            .await
            .context("Failed to delete country")?;

        Ok(result.rows_affected() > 0)
    }
}
