use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use foodgram_shopping::{FontCache, RenderOptions};
use sqlx::SqlitePool;

use crate::auth::auth_middleware;

mod health;
mod shopping_cart;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub pool: SqlitePool,
    pub fonts: Arc<FontCache>,
}

impl AppState {
    pub fn new(config: crate::config::Config, pool: SqlitePool) -> Self {
        let fonts = Arc::new(FontCache::new(&config.shopping_list.font_path));

        Self {
            config,
            pool,
            fonts,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.config.shopping_list.title.to_owned(),
            ..Default::default()
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/recipes/{id}/shopping_cart",
            post(shopping_cart::add).delete(shopping_cart::remove),
        )
        .route(
            "/recipes/download_shopping_cart",
            get(shopping_cart::download),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .nest("/api", api)
        .with_state(app_state)
}
