use foodgram_db::table::{Ingredient, RecipeIngredient, ShoppingCart};
use foodgram_shopping::RawLineItem;
use sea_query::{Alias, Expr, ExprTrait, Func, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

/// Put a recipe in the user's cart.
///
/// Returns `false` when the recipe was already there.
pub async fn add_to_cart(
    pool: &sqlx::SqlitePool,
    user_id: impl Into<String>,
    recipe_id: impl Into<String>,
) -> anyhow::Result<bool> {
    let statement = Query::insert()
        .into_table(ShoppingCart::Table)
        .columns([
            ShoppingCart::UserId,
            ShoppingCart::RecipeId,
            ShoppingCart::CreatedAt,
        ])
        .values_panic([
            user_id.into().into(),
            recipe_id.into().into(),
            super::now().into(),
        ])
        .on_conflict(
            OnConflict::columns([ShoppingCart::UserId, ShoppingCart::RecipeId])
                .do_nothing()
                .to_owned(),
        )
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}

/// Take a recipe out of the user's cart.
///
/// Returns `false` when the recipe was not there.
pub async fn remove_from_cart(
    pool: &sqlx::SqlitePool,
    user_id: impl Into<String>,
    recipe_id: impl Into<String>,
) -> anyhow::Result<bool> {
    let statement = Query::delete()
        .from_table(ShoppingCart::Table)
        .and_where(Expr::col(ShoppingCart::UserId).eq(user_id.into()))
        .and_where(Expr::col(ShoppingCart::RecipeId).eq(recipe_id.into()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}

/// Ingredient totals over every recipe in the user's cart.
///
/// Rows are grouped by `(name, measurement_unit)` and ordered by total
/// descending, then name. The same name may come back under several units;
/// the aggregation step decides which one is kept.
pub async fn cart_line_items(
    pool: &sqlx::SqlitePool,
    user_id: impl Into<String>,
) -> anyhow::Result<Vec<RawLineItem>> {
    let total = Alias::new("total");

    let statement = Query::select()
        .expr_as(
            Expr::col((Ingredient::Table, Ingredient::Name)),
            Alias::new("name"),
        )
        .expr_as(
            Expr::col((Ingredient::Table, Ingredient::MeasurementUnit)),
            Alias::new("measurement_unit"),
        )
        .expr_as(
            Func::sum(Expr::col((RecipeIngredient::Table, RecipeIngredient::Amount))),
            total.clone(),
        )
        .from(RecipeIngredient::Table)
        .inner_join(
            Ingredient::Table,
            Expr::col((Ingredient::Table, Ingredient::Id))
                .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
        )
        .inner_join(
            ShoppingCart::Table,
            Expr::col((ShoppingCart::Table, ShoppingCart::RecipeId))
                .equals((RecipeIngredient::Table, RecipeIngredient::RecipeId)),
        )
        .and_where(Expr::col((ShoppingCart::Table, ShoppingCart::UserId)).eq(user_id.into()))
        .group_by_columns([
            (Ingredient::Table, Ingredient::Name),
            (Ingredient::Table, Ingredient::MeasurementUnit),
        ])
        .order_by(total, Order::Desc)
        .order_by((Ingredient::Table, Ingredient::Name), Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, RawLineItem, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}
