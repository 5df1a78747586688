use foodgram_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

/// Short recipe representation returned by the cart endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct RecipeMinified {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

pub async fn find_recipe(
    pool: &sqlx::SqlitePool,
    id: impl Into<String>,
) -> anyhow::Result<Option<RecipeMinified>> {
    let statement = Query::select()
        .columns([Recipe::Id, Recipe::Name, Recipe::Image, Recipe::CookingTime])
        .from(Recipe::Table)
        .and_where(Expr::col(Recipe::Id).eq(id.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, RecipeMinified, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}
