use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::IntoResponse,
};

use super::AppState;
use crate::{
    auth::AuthUser,
    error::AppError,
    query::{add_to_cart, find_recipe, remove_from_cart},
};

/// POST /api/recipes/{id}/shopping_cart
pub async fn add(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let Some(recipe) = find_recipe(&state.pool, &id).await? else {
        return Err(AppError::NotFound);
    };

    if !add_to_cart(&state.pool, &user.user_id, &id).await? {
        return Err(AppError::BadRequest(
            "Recipe was not added to the shopping cart".to_owned(),
        ));
    }

    tracing::info!(user_id = %user.user_id, recipe_id = %id, "Recipe added to shopping cart");

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// DELETE /api/recipes/{id}/shopping_cart
pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if find_recipe(&state.pool, &id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    if !remove_from_cart(&state.pool, &user.user_id, &id).await? {
        return Err(AppError::BadRequest(
            "Recipe is not in the shopping cart".to_owned(),
        ));
    }

    tracing::info!(user_id = %user.user_id, recipe_id = %id, "Recipe removed from shopping cart");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/recipes/download_shopping_cart
pub async fn download(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let pdf = crate::shopping_list::export(
        &state.pool,
        state.fonts.clone(),
        state.render_options(),
        &user.user_id,
    )
    .await?;

    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_owned()),
            (
                CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    crate::shopping_list::FILENAME
                ),
            ),
        ],
        pdf,
    ))
}
