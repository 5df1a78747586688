use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use foodgram_shopping::ShoppingListError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication credentials were not provided.")]
    Unauthorized,

    #[error("Not found.")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Shopping list error: {0}")]
    ShoppingList(#[from] ShoppingListError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ShoppingList(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let message = match self {
            AppError::ShoppingList(e) => {
                tracing::error!("Shopping list error: {e}");
                "Failed to build the shopping list.".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e:?}");
                "An unexpected error occurred. Please try again later.".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e}");
                "An unexpected error occurred. Please try again later.".to_string()
            }
            e => e.to_string(),
        };

        (status_code, Json(json!({ "errors": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::BadRequest("nope".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ShoppingListError::MalformedLineItem {
                index: 0,
                field: "name"
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_details_are_not_leaked() {
        let response = AppError::Internal("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(!body.contains("secret detail"));
        assert!(body.contains("errors"));
    }
}
