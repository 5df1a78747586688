//! Test helpers: migrated in-memory database, seeded fixtures and an app
//! router wired the same way the server wires it.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, header},
};
use foodgram::{
    AppState,
    config::{
        AuthConfig, Config, DatabaseConfig, LoggingConfig, ServerConfig, ShoppingListConfig,
    },
};
use sqlx::SqlitePool;

pub const JWT_SECRET: &str = "test_secret_key_minimum_32_characters_long";
pub const FONT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/DejaVuSans.ttf");

pub fn test_config(font_path: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: ":memory:".to_string(),
            max_connections: 1,
        },
        auth: AuthConfig {
            jwt_secret: JWT_SECRET.to_string(),
            jwt_lifetime_seconds: 3600,
        },
        logging: LoggingConfig::default(),
        shopping_list: ShoppingListConfig {
            font_path: font_path.to_string(),
            title: "Shopping list".to_string(),
        },
    }
}

/// Single-connection in-memory database with every migration applied
pub async fn setup_pool() -> anyhow::Result<SqlitePool> {
    let pool = foodgram::create_pool(":memory:", 1).await?;
    foodgram::migrate(&pool).await?;

    Ok(pool)
}

pub fn app(pool: SqlitePool) -> Router {
    app_with_font(pool, FONT_PATH)
}

pub fn app_with_font(pool: SqlitePool, font_path: &str) -> Router {
    foodgram::router(AppState::new(test_config(font_path), pool))
}

pub async fn create_user(pool: &SqlitePool, id: &str) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO user (id, email, username, created_at) VALUES (?, ?, ?, 0)")
        .bind(id)
        .bind(format!("{id}@example.com"))
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn create_ingredient(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    measurement_unit: &str,
) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO ingredient (id, name, measurement_unit) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(measurement_unit)
        .execute(pool)
        .await?;

    Ok(())
}

/// Recipe owned by `author_id` with `(ingredient_id, amount)` pairs
pub async fn create_recipe(
    pool: &SqlitePool,
    id: &str,
    author_id: &str,
    name: &str,
    ingredients: &[(&str, i64)],
) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO recipe (id, author_id, name, image, text, cooking_time, created_at)
         VALUES (?, ?, ?, NULL, '', 30, 0)",
    )
    .bind(id)
    .bind(author_id)
    .bind(name)
    .execute(pool)
    .await?;

    for (ingredient_id, amount) in ingredients {
        sqlx::query(
            "INSERT INTO recipe_ingredient (recipe_id, ingredient_id, amount) VALUES (?, ?, ?)",
        )
        .bind(id)
        .bind(ingredient_id)
        .bind(amount)
        .execute(pool)
        .await?;
    }

    Ok(())
}

pub fn token(user_id: &str) -> String {
    foodgram::auth::generate_token(user_id, JWT_SECRET, 3600).unwrap()
}

pub fn authed_request(method: Method, uri: &str, user_id: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token(user_id)))
        .body(Body::empty())
        .unwrap()
}
