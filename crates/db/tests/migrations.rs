use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use sqlx_migrator::{Migrate, Plan};

async fn migrated_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(pool)
}

#[tokio::test]
async fn test_migrations_create_tables() -> anyhow::Result<()> {
    let pool = migrated_pool().await?;

    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(&pool)
    .await?;
    let tables: Vec<String> = tables.into_iter().map(|t| t.0).collect();

    for expected in [
        "ingredient",
        "recipe",
        "recipe_ingredient",
        "shopping_cart",
        "user",
    ] {
        assert!(tables.contains(&expected.to_owned()), "missing table {expected}");
    }

    Ok(())
}

#[tokio::test]
async fn test_cart_rejects_duplicate_recipe() -> anyhow::Result<()> {
    let pool = migrated_pool().await?;

    sqlx::query("INSERT INTO user (id, email, username, created_at) VALUES ('u1', 'u1@foodgram.localhost', 'u1', 0)")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO recipe (id, author_id, name, cooking_time, created_at) VALUES ('r1', 'u1', 'Soup', 30, 0)")
        .execute(&pool)
        .await?;

    let insert = "INSERT INTO shopping_cart (user_id, recipe_id, created_at) VALUES ('u1', 'r1', 0)";
    sqlx::query(insert).execute(&pool).await?;

    assert!(sqlx::query(insert).execute(&pool).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_ingredient_name_and_unit_are_unique() -> anyhow::Result<()> {
    let pool = migrated_pool().await?;

    sqlx::query("INSERT INTO ingredient (id, name, measurement_unit) VALUES ('i1', 'Salt', 'g')")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO ingredient (id, name, measurement_unit) VALUES ('i2', 'Salt', 'kg')")
        .execute(&pool)
        .await?;

    let duplicate =
        sqlx::query("INSERT INTO ingredient (id, name, measurement_unit) VALUES ('i3', 'Salt', 'g')")
            .execute(&pool)
            .await;
    assert!(duplicate.is_err());

    Ok(())
}
