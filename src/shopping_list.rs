use std::sync::Arc;

use foodgram_shopping::{FontCache, RenderOptions, aggregate_records, render};
use sqlx::SqlitePool;

use crate::error::AppError;

pub const FILENAME: &str = "shopping_list.pdf";

/// Builds the PDF shopping list for everything in the user's cart.
///
/// Font loading and rendering are CPU/disk bound and run on the blocking pool.
#[tracing::instrument(skip(pool, fonts, options))]
pub async fn export(
    pool: &SqlitePool,
    fonts: Arc<FontCache>,
    options: RenderOptions,
    user_id: &str,
) -> Result<Vec<u8>, AppError> {
    let records = crate::query::cart_line_items(pool, user_id).await?;
    let list = aggregate_records(records)?;

    tracing::debug!(entries = list.len(), "Rendering shopping list");

    let pdf = tokio::task::spawn_blocking(move || {
        let font = fonts.get()?;
        render(&list, &font, &options)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(pdf)
}

/// Writes the user's shopping list PDF to `output` and returns its size.
///
/// Fails when the user does not exist; nothing is written in that case.
pub async fn export_to_file(
    state: &crate::AppState,
    user_id: &str,
    output: &std::path::Path,
) -> anyhow::Result<usize> {
    if !crate::query::user_exists(&state.pool, user_id).await? {
        anyhow::bail!("user {user_id} not found");
    }

    let pdf = export(
        &state.pool,
        state.fonts.clone(),
        state.render_options(),
        user_id,
    )
    .await?;

    tokio::fs::write(output, &pdf).await?;

    Ok(pdf.len())
}
