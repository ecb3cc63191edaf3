use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    extract::State,
    response::{Html, IntoResponse},
};
use std::sync::Arc;

use super::AppState;
use crate::graphql::Identity;

/// `POST /graphql`
pub async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner().data(identity);
    state.schema.execute(request).await.into()
}

/// `GET /graphql`
pub async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
