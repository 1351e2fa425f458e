mod category;
mod country;
mod owner;
mod pokemon;
mod review;
mod reviewer;

use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::store::traits::Store;

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Bring the schema up to date. Statements are idempotent so this is
    /// safe to run on every startup.
    pub async fn migrate(&self) -> Result<()> {
        const SCHEMA: &[&str] = &[
            "CREATE TABLE IF NOT EXISTS categories (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS countries (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS owners (
                id SERIAL PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                gym TEXT NOT NULL,
                country_id INTEGER NOT NULL REFERENCES countries(id)
            )",
            "CREATE TABLE IF NOT EXISTS pokemon (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                birth_date DATE NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS reviewers (
                id SERIAL PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL
            )",
            "CREATE TABLE IF NOT EXISTS reviews (
                id SERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                text TEXT NOT NULL,
                rating INTEGER NOT NULL,
                pokemon_id INTEGER NOT NULL REFERENCES pokemon(id),
                reviewer_id INTEGER NOT NULL REFERENCES reviewers(id)
            )",
            "CREATE TABLE IF NOT EXISTS pokemon_owners (
                pokemon_id INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
                owner_id INTEGER NOT NULL REFERENCES owners(id) ON DELETE CASCADE,
                PRIMARY KEY (pokemon_id, owner_id)
            )",
            "CREATE TABLE IF NOT EXISTS pokemon_categories (
                pokemon_id INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE,
                category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE CASCADE,
                PRIMARY KEY (pokemon_id, category_id)
            )",
        ];

        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("Failed to run schema migration")?;
        }

        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Store for PostgresStore {}
