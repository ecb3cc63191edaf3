use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::graphql::Identity;

/// Resolves the `authorization` header into an [`Identity`] for the request.
///
/// Accepts the raw token or `Bearer <token>`. Missing or unknown tokens yield
/// an anonymous identity; the operations decide whether that is enough.
pub async fn identity_middleware(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let caller = match extract_token(&headers) {
        Some(token) => state
            .auth_service
            .resolve_token(&token)
            .await
            .map_err(|e| ApiError::internal(format!("Token lookup failed: {e}")))?,
        None => None,
    };

    if let Some(caller) = &caller {
        tracing::Span::current().record("user_id", caller.id.as_str());
    }

    request.extensions_mut().insert(Identity(caller));
    Ok(next.run(request).await)
}

fn extract_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("authorization")?.to_str().ok()?.trim();
    let token = match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        None if value.eq_ignore_ascii_case("bearer") => "",
        _ => value,
    };

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
