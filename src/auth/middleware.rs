use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use super::{AUTH_COOKIE_NAME, validate_token};
use crate::{error::AppError, routes::AppState};

/// Authenticated user inserted into request extensions
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
}

/// Token from `Authorization: Bearer <token>` (or `Token <token>`),
/// falling back to the `auth_token` cookie
fn extract_token(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            value
                .strip_prefix("Bearer ")
                .or_else(|| value.strip_prefix("Token "))
        })
        .map(|token| token.trim().to_owned())
        .filter(|token| !token.is_empty());

    from_header.or_else(|| jar.get(AUTH_COOKIE_NAME).map(|c| c.value().to_owned()))
}

/// Validates the JWT, checks the user still exists and inserts [`AuthUser`]
///
/// Responds with 401 when:
/// - no token is present
/// - the token is invalid or expired
/// - the user was deleted
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(token) = extract_token(req.headers(), &jar) else {
        tracing::debug!("Missing credentials");
        return AppError::Unauthorized.into_response();
    };

    let claims = match validate_token(&token, &state.config.auth.jwt_secret) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Invalid JWT token: {e}");
            return AppError::Unauthorized.into_response();
        }
    };

    match crate::query::user_exists(&state.pool, &claims.sub).await {
        Ok(true) => {
            req.extensions_mut().insert(AuthUser {
                user_id: claims.sub,
            });
            next.run(req).await
        }
        Ok(false) => {
            tracing::warn!("User {} not found", claims.sub);
            AppError::Unauthorized.into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum_extra::extract::cookie::Cookie;

    #[test]
    fn test_bearer_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        let jar = CookieJar::new().add(Cookie::new(AUTH_COOKIE_NAME, "from-cookie"));

        assert_eq!(
            extract_token(&headers, &jar).as_deref(),
            Some("from-header")
        );
    }

    #[test]
    fn test_token_scheme_is_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Token abc"));

        assert_eq!(
            extract_token(&headers, &CookieJar::new()).as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_cookie_fallback() {
        let jar = CookieJar::new().add(Cookie::new(AUTH_COOKIE_NAME, "from-cookie"));

        assert_eq!(
            extract_token(&HeaderMap::new(), &jar).as_deref(),
            Some("from-cookie")
        );
    }

    #[test]
    fn test_unknown_scheme_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));

        assert_eq!(extract_token(&headers, &CookieJar::new()), None);
    }
}
