use anyhow::{Context, Result};
use sqlx::Row;

use crate::model::{Category, Id, Pokemon};
use crate::store::postgres::PostgresStore;
use crate::store::traits::CategoryStore;

#[async_trait::async_trait]
impl CategoryStore for PostgresStore {
    async fn category_exists(&self, id: Id) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check category existence")?;

        Ok(row.get(0))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let rows = sqlx::query("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list categories")?;

        let categories = rows
            .into_iter()
            .map(|row| Category {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect();

        Ok(categories)
    }

    async fn get_category(&self, id: Id) -> Result<Option<Category>> {
        let row = sqlx::query("SELECT id, name FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch category")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Category {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    async fn get_pokemon_by_category(&self, category_id: Id) -> Result<Vec<Pokemon>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.name, p.birth_date
            FROM pokemon p
            JOIN pokemon_categories pc ON pc.pokemon_id = p.id
            WHERE pc.category_id = $1
            ORDER BY p.id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list pokemon for category")?;

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

    async fn create_category(&self, category: Category) -> Result<bool> {
        let result = sqlx::query("INSERT INTO categories (name) VALUES ($1)")
            .bind(&category.name)
            .execute(&self.pool)
            .await
            .context("Failed to insert category")?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_category(&self, category: Category) -> Result<bool> {
        let result = sqlx::query("UPDATE categories SET name = $2 WHERE id = $1")
            .bind(category.id)
            .bind(&category.name)
            .execute(&self.pool)
            .await
            .context("Failed to update category")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_category(&self, category: Category) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category.id)
            .execute(&self.pool)
            .await
            .context("Failed to delete category")?;

        Ok(result.rows_affected() > 0)
    }
}
