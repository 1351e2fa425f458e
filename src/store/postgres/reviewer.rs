use anyhow::{Context, Result};
use sqlx::Row;

use crate::model::{Id, Review, Reviewer};
use crate::store::postgres::PostgresStore;
use crate::store::traits::ReviewerStore;

#[async_trait::async_trait]
impl ReviewerStore for PostgresStore {
    async fn reviewer_exists(&self, id: Id) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM reviewers WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check reviewer existence")?;

        Ok(row.get(0))
    }

    async fn list_reviewers(&self) -> Result<Vec<Reviewer>> {
        let rows = sqlx::query("SELECT id, first_name, last_name FROM reviewers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list reviewers")?;

        let reviewers = rows
            .into_iter()
            .map(|row| Reviewer {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
            })
            .collect();

        Ok(reviewers)
    }

    async fn get_reviewer(&self, id: Id) -> Result<Option<Reviewer>> {
        let row = sqlx::query("SELECT id, first_name, last_name FROM reviewers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch reviewer")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Reviewer {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
        }))
    }

    async fn get_reviews_by_reviewer(&self, reviewer_id: Id) -> Result<Vec<Review>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, text, rating, pokemon_id, reviewer_id
            FROM reviews
            WHERE reviewer_id = $1
            ORDER BY id
            "#,
        )
        .bind(reviewer_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list reviews for reviewer")?;

        let reviews = rows
            .into_iter()
            .map(|row| Review {
                id: row.get("id"),
                title: row.get("title"),
                text: row.get("text"),
                rating: row.get("rating"),
                pokemon_id: row.get("pokemon_id"),
                reviewer_id: row.get("reviewer_id"),
            })
            .collect();

        Ok(reviews)
    }

    async fn create_reviewer(&self, reviewer: Reviewer) -> Result<bool> {
        let result = sqlx::query("INSERT INTO reviewers (first_name, last_name) VALUES ($1, $2)")
            .bind(&reviewer.first_name)
            .bind(&reviewer.last_name)
            .execute(&self.pool)
            .await
            .context("Failed to insert reviewer")?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_reviewer(&self, reviewer: Reviewer) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE reviewers SET first_name = $2, last_name = $3 WHERE id = $1",
        )
        .bind(reviewer.id)
        .bind(&reviewer.first_name)
        .bind(&reviewer.last_name)
        .execute(&self.pool)
        .await
        .context("Failed to update reviewer")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_reviewer(&self, reviewer: Reviewer) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reviewers WHERE id = $1")
            .bind(reviewer.id)
            .execute(&self.pool)
            .await
            .context("Failed to delete reviewer")?;

        Ok(result.rows_affected() > 0)
    }
}
