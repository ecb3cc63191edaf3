use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use url::Url;

use super::operations;
use crate::domain::MovieEntryInput;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{message}")]
    Graphql {
        message: String,
        code: Option<String>,
        reason: Option<String>,
    },

    #[error("Response contained no data for `{0}`")]
    MissingData(&'static str),
}

impl ClientError {
    /// Operation-level error code, e.g. `UPDATE_MOVIE_ENTRY_ERROR`.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Graphql { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Failure kind, e.g. `FORBIDDEN`.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Graphql { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }
}

/// A movie entry as the server renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub stars: i32,
    pub created_at: String,
    pub updated_at: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: String,
    pub token: String,
}

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphQLResponse {
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphQLErrorBody>,
}

#[derive(Deserialize)]
struct GraphQLErrorBody {
    message: String,
    #[serde(default)]
    extensions: Option<ErrorExtensions>,
}

#[derive(Deserialize, Default)]
struct ErrorExtensions {
    code: Option<String>,
    reason: Option<String>,
}

#[derive(Clone)]
pub struct JournalClient {
    client: Client,
    endpoint: Url,
    token: Option<String>,
}

impl JournalClient {
    pub fn new(endpoint: &str, token: Option<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("cinelog/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
            token,
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
        field: &'static str,
    ) -> Result<T, ClientError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&GraphQLRequest { query, variables });

        if let Some(token) = &self.token {
            request = request.header("authorization", token);
        }

        let response: GraphQLResponse = request.send().await?.error_for_status()?.json().await?;
        decode_field(response, field)
    }

    pub async fn movie_entry(&self, id: &str) -> Result<EntryRecord, ClientError> {
        self.execute(operations::GET_MOVIE_ENTRY, json!({ "id": id }), "movieEntry")
            .await
    }

    pub async fn movie_entries(&self) -> Result<Vec<EntryRecord>, ClientError> {
        self.execute(operations::GET_MOVIE_ENTRIES, json!({}), "movieEntries")
            .await
    }

    pub async fn search_movie_entries(&self, title: &str) -> Result<Vec<EntryRecord>, ClientError> {
        self.execute(
            operations::SEARCH_MOVIE_ENTRIES,
            json!({ "title": title }),
            "searchMovieEntries",
        )
        .await
    }

    pub async fn create_movie_entry(
        &self,
        input: &MovieEntryInput,
    ) -> Result<EntryRecord, ClientError> {
        self.execute(
            operations::CREATE_MOVIE_ENTRY,
            json!({ "input": entry_input(input) }),
            "createMovieEntry",
        )
        .await
    }

    pub async fn update_movie_entry(
        &self,
        id: &str,
        input: &MovieEntryInput,
    ) -> Result<EntryRecord, ClientError> {
        self.execute(
            operations::UPDATE_MOVIE_ENTRY,
            json!({ "id": id, "input": entry_input(input) }),
            "updateMovieEntry",
        )
        .await
    }

    pub async fn delete_movie_entry(&self, id: &str) -> Result<EntryRecord, ClientError> {
        self.execute(
            operations::DELETE_MOVIE_ENTRY,
            json!({ "id": id }),
            "deleteMovieEntry",
        )
        .await
    }

    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AccountRecord, ClientError> {
        self.execute(
            operations::CREATE_USER,
            json!({ "input": { "username": username, "email": email, "password": password } }),
            "createUser",
        )
        .await
    }

    pub async fn login_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AccountRecord, ClientError> {
        self.execute(
            operations::LOGIN_USER,
            json!({ "input": { "username": username, "password": password } }),
            "loginUser",
        )
        .await
    }
}

fn entry_input(input: &MovieEntryInput) -> serde_json::Value {
    json!({
        "title": input.title,
        "description": input.description,
        "stars": input.stars,
        "user": input.user.clone().unwrap_or_default(),
    })
}

fn decode_field<T: DeserializeOwned>(
    response: GraphQLResponse,
    field: &'static str,
) -> Result<T, ClientError> {
    if let Some(first) = response.errors.into_iter().next() {
        let extensions = first.extensions.unwrap_or_default();
        return Err(ClientError::Graphql {
            message: first.message,
            code: extensions.code,
            reason: extensions.reason,
        });
    }

    let value = response
        .data
        .and_then(|mut data| data.get_mut(field).map(serde_json::Value::take))
        .filter(|value| !value.is_null())
        .ok_or(ClientError::MissingData(field))?;

    Ok(serde_json::from_value(value)?)
}
