use foodgram_db::table::User;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

pub async fn user_exists(pool: &sqlx::SqlitePool, id: impl Into<String>) -> anyhow::Result<bool> {
    let statement = Query::select()
        .column(User::Id)
        .from(User::Table)
        .and_where(Expr::col(User::Id).eq(id.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}
