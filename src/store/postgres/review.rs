use anyhow::{Context, Result};
use sqlx::Row;

use crate::model::{Id, Review};
use crate::store::postgres::PostgresStore;
use crate::store::traits::ReviewStore;

fn review_from_row(row: &sqlx::postgres::PgRow) -> Review {
    Review {
        id: row.get("id"),
        title: row.get("title"),
        text: row.get("text"),
        rating: row.get("rating"),
        pokemon_id: row.get("pokemon_id"),
        reviewer_id: row.get("reviewer_id"),
    }
}

#[async_trait::async_trait]
impl ReviewStore for PostgresStore {
    async fn review_exists(&self, id: Id) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM reviews WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check review existence")?;

        Ok(row.get(0))
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        let rows = sqlx::query(
            "SELECT id, title, text, rating, pokemon_id, reviewer_id FROM reviews ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list reviews")?;

        Ok(rows.iter().map(review_from_row).collect())
    }

    async fn get_review(&self, id: Id) -> Result<Option<Review>> {
        let row = sqlx::query(
            "SELECT id, title, text, rating, pokemon_id, reviewer_id FROM reviews WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch review")?;

        Ok(row.as_ref().map(review_from_row))
    }

    async fn get_reviews_of_pokemon(&self, poke_id: Id) -> Result<Vec<Review>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, text, rating, pokemon_id, reviewer_id
            FROM reviews
            WHERE pokemon_id = $1
            ORDER BY id
            "#,
        )
        .bind(poke_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list reviews for pokemon")?;

        Ok(rows.iter().map(review_from_row).collect())
    }

    async fn create_review(&self, review: Review) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO reviews (title, text, rating, pokemon_id, reviewer_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&review.title)
        .bind(&review.text)
        .bind(review.rating)
        .bind(review.pokemon_id)
        .bind(review.reviewer_id)
        .execute(&self.pool)
        .await
        .context("Failed to insert review")?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_review(&self, review: Review) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE reviews SET title = $2, text = $3, rating = $4 WHERE id = $1",
        )
        .bind(review.id)
        .bind(&review.title)
        .bind(&review.text)
        .bind(review.rating)
        .execute(&self.pool)
        .await
        .context("Failed to update review")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_review(&self, review: Review) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(review.id)
            .execute(&self.pool)
            .await
            .context("Failed to delete review")?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_reviews(&self, reviews: Vec<Review>) -> Result<bool> {
        let ids: Vec<Id> = reviews.iter().map(|review| review.id).collect();
        if ids.is_empty() {
            return Ok(false);
        }

        let result = sqlx::query("DELETE FROM reviews WHERE id = ANY($1)")
            .bind(&ids)
            .execute(&self.pool)
            .await
            .context("Failed to delete reviews")?;

        Ok(result.rows_affected() > 0)
    }
}
