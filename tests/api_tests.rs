use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use cinelog::config::Config;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const ENTRY_FIELDS: &str = "id title description stars createdAt updatedAt user";

async fn spawn_app() -> Router {
    let mut config = Config::default();
    let db_path = std::env::temp_dir().join(format!("cinelog-api-{}.db", uuid::Uuid::new_v4()));
    config.general.database_path = format!("sqlite:{}?mode=rwc", db_path.display());
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;

    let state = cinelog::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    cinelog::api::router(state)
}

async fn graphql(app: &Router, token: Option<&str>, query: &str, variables: Value) -> Value {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }

    let body = json!({ "query": query, "variables": variables }).to_string();
    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

struct TestUser {
    id: String,
    token: String,
}

async fn create_user(app: &Router, username: &str) -> TestUser {
    let body = graphql(
        app,
        None,
        "mutation($input: CreateUserInput!) { createUser(input: $input) { id username token } }",
        json!({ "input": {
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "correct horse battery",
        }}),
    )
    .await;

    let user = &body["data"]["createUser"];
    assert_eq!(user["username"], username, "createUser failed: {body}");
    TestUser {
        id: user["id"].as_str().unwrap().to_string(),
        token: user["token"].as_str().unwrap().to_string(),
    }
}

fn entry_input(title: &str, description: &str, stars: i64, user: &str) -> Value {
    json!({ "title": title, "description": description, "stars": stars, "user": user })
}

async fn create_entry(app: &Router, user: &TestUser, input: Value) -> Value {
    graphql(
        app,
        Some(&user.token),
        &format!(
            "mutation($input: MovieEntryInput!) {{ createMovieEntry(input: $input) {{ {ENTRY_FIELDS} }} }}"
        ),
        json!({ "input": input }),
    )
    .await
}

async fn update_entry(app: &Router, user: &TestUser, id: &str, input: Value) -> Value {
    graphql(
        app,
        Some(&user.token),
        &format!(
            "mutation($id: ID!, $input: MovieEntryInput!) {{ updateMovieEntry(id: $id, input: $input) {{ {ENTRY_FIELDS} }} }}"
        ),
        json!({ "id": id, "input": input }),
    )
    .await
}

async fn delete_entry(app: &Router, user: &TestUser, id: &str) -> Value {
    graphql(
        app,
        Some(&user.token),
        &format!("mutation($id: ID!) {{ deleteMovieEntry(id: $id) {{ {ENTRY_FIELDS} }} }}"),
        json!({ "id": id }),
    )
    .await
}

async fn get_entry(app: &Router, token: Option<&str>, id: &str) -> Value {
    graphql(
        app,
        token,
        &format!("query($id: ID!) {{ movieEntry(id: $id) {{ {ENTRY_FIELDS} }} }}"),
        json!({ "id": id }),
    )
    .await
}

fn error_extension<'a>(body: &'a Value, key: &str) -> &'a str {
    body["errors"][0]["extensions"][key]
        .as_str()
        .unwrap_or_else(|| panic!("no `{key}` extension in {body}"))
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = spawn_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["database"], true);
}

#[tokio::test]
async fn test_playground_served_on_get() {
    let app = spawn_app().await;

    let response = app
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() {
    let app = spawn_app().await;

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_arrival_scenario() {
    let app = spawn_app().await;
    let u1 = create_user(&app, "u1_viewer").await;
    let u2 = create_user(&app, "u2_viewer").await;

    let created = create_entry(
        &app,
        &u1,
        entry_input("Arrival", "Linguistics and time", 2, &u1.id),
    )
    .await;
    let entry = &created["data"]["createMovieEntry"];
    assert_eq!(entry["title"], "Arrival");
    assert_eq!(entry["stars"], 2);
    assert_eq!(entry["user"], u1.id.as_str());
    let id = entry["id"].as_str().unwrap().to_string();

    let updated = update_entry(
        &app,
        &u1,
        &id,
        entry_input("Arrival (2016)", "Linguistics and time", 3, &u1.id),
    )
    .await;
    assert_eq!(updated["data"]["updateMovieEntry"]["title"], "Arrival (2016)");
    assert_eq!(updated["data"]["updateMovieEntry"]["stars"], 3);
    assert_eq!(updated["data"]["updateMovieEntry"]["id"], id.as_str());

    let forbidden = update_entry(
        &app,
        &u2,
        &id,
        entry_input("Arrival", "Hijacked", 0, &u2.id),
    )
    .await;
    assert_eq!(error_extension(&forbidden, "code"), "UPDATE_MOVIE_ENTRY_ERROR");
    assert_eq!(error_extension(&forbidden, "reason"), "FORBIDDEN");

    let still = get_entry(&app, Some(&u1.token), &id).await;
    assert_eq!(still["data"]["movieEntry"]["title"], "Arrival (2016)");
    assert_eq!(still["data"]["movieEntry"]["description"], "Linguistics and time");
    assert_eq!(still["data"]["movieEntry"]["stars"], 3);
}

#[tokio::test]
async fn test_create_ignores_client_supplied_owner() {
    let app = spawn_app().await;
    let u1 = create_user(&app, "owner_one").await;
    let u2 = create_user(&app, "owner_two").await;

    let created = create_entry(
        &app,
        &u1,
        entry_input("Heat", "Bank robbery epic", 1, &u2.id),
    )
    .await;

    assert_eq!(created["data"]["createMovieEntry"]["user"], u1.id.as_str());
}

#[tokio::test]
async fn test_round_trip_preserves_fields() {
    let app = spawn_app().await;
    let user = create_user(&app, "roundtrip").await;

    let created = create_entry(
        &app,
        &user,
        entry_input("Solaris", "Memory on a distant planet", 4, &user.id),
    )
    .await;
    let id = created["data"]["createMovieEntry"]["id"].as_str().unwrap();

    let fetched = get_entry(&app, Some(&user.token), id).await;
    let entry = &fetched["data"]["movieEntry"];
    assert_eq!(entry["title"], "Solaris");
    assert_eq!(entry["description"], "Memory on a distant planet");
    assert_eq!(entry["stars"], 4);
    assert!(entry["createdAt"].as_str().unwrap().parse::<i64>().is_ok());
}

#[tokio::test]
async fn test_invalid_input_is_rejected() {
    let app = spawn_app().await;
    let user = create_user(&app, "validator").await;

    for input in [
        entry_input("Up", "Long enough", 2, &user.id),
        entry_input("Arrival", "ok", 2, &user.id),
        entry_input("Arrival", "Long enough", 5, &user.id),
        entry_input("Arrival", "Long enough", -1, &user.id),
        entry_input(&"x".repeat(257), "Long enough", 2, &user.id),
    ] {
        let body = create_entry(&app, &user, input).await;
        assert_eq!(error_extension(&body, "code"), "CREATE_MOVIE_ENTRY_ERROR");
        assert_eq!(error_extension(&body, "reason"), "INVALID_INPUT");
    }

    let boundary = create_entry(
        &app,
        &user,
        entry_input(&"x".repeat(256), &"y".repeat(5000), 0, &user.id),
    )
    .await;
    assert!(boundary["errors"].is_null(), "unexpected errors: {boundary}");
}

#[tokio::test]
async fn test_update_with_invalid_input_is_rejected() {
    let app = spawn_app().await;
    let user = create_user(&app, "editor").await;

    let created = create_entry(
        &app,
        &user,
        entry_input("Stalker", "A walk through the Zone", 3, &user.id),
    )
    .await;
    let id = created["data"]["createMovieEntry"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    for input in [
        entry_input("No", "A walk through the Zone", 3, &user.id),
        entry_input("Stalker", "ok", 3, &user.id),
        entry_input("Stalker", "A walk through the Zone", 7, &user.id),
    ] {
        let body = update_entry(&app, &user, &id, input).await;
        assert_eq!(error_extension(&body, "code"), "UPDATE_MOVIE_ENTRY_ERROR");
        assert_eq!(error_extension(&body, "reason"), "INVALID_INPUT");
    }

    let unchanged = get_entry(&app, Some(&user.token), &id).await;
    assert_eq!(unchanged["data"]["movieEntry"]["title"], "Stalker");
    assert_eq!(unchanged["data"]["movieEntry"]["stars"], 3);
}

#[tokio::test]
async fn test_update_advances_updated_at_only() {
    let app = spawn_app().await;
    let user = create_user(&app, "clockwatcher").await;

    let created = create_entry(
        &app,
        &user,
        entry_input("Tenet", "Inverted entropy heist", 2, &user.id),
    )
    .await;
    let before = &created["data"]["createMovieEntry"];
    let id = before["id"].as_str().unwrap().to_string();
    let created_at: i64 = before["createdAt"].as_str().unwrap().parse().unwrap();
    let first_updated_at: i64 = before["updatedAt"].as_str().unwrap().parse().unwrap();
    assert_eq!(created_at, first_updated_at);

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let updated = update_entry(
        &app,
        &user,
        &id,
        entry_input("Tenet", "Inverted entropy heist", 4, &user.id),
    )
    .await;
    let after = &updated["data"]["updateMovieEntry"];
    let new_created_at: i64 = after["createdAt"].as_str().unwrap().parse().unwrap();
    let new_updated_at: i64 = after["updatedAt"].as_str().unwrap().parse().unwrap();

    assert_eq!(new_created_at, created_at);
    assert!(
        new_updated_at > first_updated_at,
        "updatedAt did not advance: {first_updated_at} -> {new_updated_at}"
    );
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = spawn_app().await;
    let user = create_user(&app, "seeker").await;
    let missing = "00000000-0000-0000-0000-000000000000";

    let get = get_entry(&app, Some(&user.token), missing).await;
    assert_eq!(error_extension(&get, "code"), "GET_MOVIE_ENTRY_ERROR");
    assert_eq!(error_extension(&get, "reason"), "NOT_FOUND");

    let update = update_entry(
        &app,
        &user,
        missing,
        entry_input("Arrival", "Long enough", 2, &user.id),
    )
    .await;
    assert_eq!(error_extension(&update, "reason"), "NOT_FOUND");

    let delete = delete_entry(&app, &user, missing).await;
    assert_eq!(error_extension(&delete, "code"), "DELETE_MOVIE_ENTRY_ERROR");
    assert_eq!(error_extension(&delete, "reason"), "NOT_FOUND");
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let app = spawn_app().await;
    let user = create_user(&app, "deleter").await;

    let created = create_entry(
        &app,
        &user,
        entry_input("Alien", "In space no one can hear", 3, &user.id),
    )
    .await;
    let id = created["data"]["createMovieEntry"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let first = delete_entry(&app, &user, &id).await;
    let snapshot = &first["data"]["deleteMovieEntry"];
    assert_eq!(snapshot["id"], id.as_str());
    assert_eq!(snapshot["title"], "Alien");

    let second = delete_entry(&app, &user, &id).await;
    assert_eq!(error_extension(&second, "reason"), "NOT_FOUND");
}

#[tokio::test]
async fn test_entries_are_scoped_to_owner() {
    let app = spawn_app().await;
    let a = create_user(&app, "alice").await;
    let b = create_user(&app, "bob").await;

    let created = create_entry(
        &app,
        &a,
        entry_input("Arrival", "Linguistics and time", 2, &a.id),
    )
    .await;
    let id = created["data"]["createMovieEntry"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let list_query = format!("{{ movieEntries {{ {ENTRY_FIELDS} }} }}");
    let b_list = graphql(&app, Some(&b.token), &list_query, json!({})).await;
    assert_eq!(b_list["data"]["movieEntries"], json!([]));

    let a_list = graphql(&app, Some(&a.token), &list_query, json!({})).await;
    assert_eq!(a_list["data"]["movieEntries"].as_array().unwrap().len(), 1);

    let b_get = get_entry(&app, Some(&b.token), &id).await;
    assert_eq!(error_extension(&b_get, "reason"), "FORBIDDEN");

    let b_delete = delete_entry(&app, &b, &id).await;
    assert_eq!(error_extension(&b_delete, "reason"), "FORBIDDEN");
}

#[tokio::test]
async fn test_anonymous_requests_are_not_authenticated() {
    let app = spawn_app().await;

    let list = graphql(
        &app,
        None,
        &format!("{{ movieEntries {{ {ENTRY_FIELDS} }} }}"),
        json!({}),
    )
    .await;
    assert_eq!(error_extension(&list, "code"), "GET_MOVIE_ENTRIES_ERROR");
    assert_eq!(error_extension(&list, "reason"), "NOT_AUTHENTICATED");

    let bogus = graphql(
        &app,
        Some("not-a-real-token"),
        &format!("{{ movieEntries {{ {ENTRY_FIELDS} }} }}"),
        json!({}),
    )
    .await;
    assert_eq!(error_extension(&bogus, "reason"), "NOT_AUTHENTICATED");
}

#[tokio::test]
async fn test_anonymous_entry_operations_are_not_authenticated() {
    let app = spawn_app().await;
    let owner = create_user(&app, "keeper").await;

    let created = create_entry(
        &app,
        &owner,
        entry_input("Arrival", "Linguistics and time", 2, &owner.id),
    )
    .await;
    let id = created["data"]["createMovieEntry"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    let input = entry_input("Arrival", "Linguistics and time", 4, &owner.id);

    let get = get_entry(&app, None, &id).await;
    assert_eq!(error_extension(&get, "code"), "GET_MOVIE_ENTRY_ERROR");
    assert_eq!(error_extension(&get, "reason"), "NOT_AUTHENTICATED");

    let create = graphql(
        &app,
        None,
        &format!(
            "mutation($input: MovieEntryInput!) {{ createMovieEntry(input: $input) {{ {ENTRY_FIELDS} }} }}"
        ),
        json!({ "input": input }),
    )
    .await;
    assert_eq!(error_extension(&create, "code"), "CREATE_MOVIE_ENTRY_ERROR");
    assert_eq!(error_extension(&create, "reason"), "NOT_AUTHENTICATED");

    let update = graphql(
        &app,
        None,
        &format!(
            "mutation($id: ID!, $input: MovieEntryInput!) {{ updateMovieEntry(id: $id, input: $input) {{ {ENTRY_FIELDS} }} }}"
        ),
        json!({ "id": id, "input": input }),
    )
    .await;
    assert_eq!(error_extension(&update, "code"), "UPDATE_MOVIE_ENTRY_ERROR");
    assert_eq!(error_extension(&update, "reason"), "NOT_AUTHENTICATED");

    let delete = graphql(
        &app,
        None,
        &format!("mutation($id: ID!) {{ deleteMovieEntry(id: $id) {{ {ENTRY_FIELDS} }} }}"),
        json!({ "id": id }),
    )
    .await;
    assert_eq!(error_extension(&delete, "code"), "DELETE_MOVIE_ENTRY_ERROR");
    assert_eq!(error_extension(&delete, "reason"), "NOT_AUTHENTICATED");

    let intact = get_entry(&app, Some(&owner.token), &id).await;
    assert_eq!(intact["data"]["movieEntry"]["stars"], 2);
}

#[tokio::test]
async fn test_search_is_public_and_case_insensitive() {
    let app = spawn_app().await;
    let user = create_user(&app, "searcher").await;

    create_entry(
        &app,
        &user,
        entry_input("Arrival", "Linguistics and time", 2, &user.id),
    )
    .await;
    create_entry(
        &app,
        &user,
        entry_input("Arrival 2", "Not the same film", 1, &user.id),
    )
    .await;

    let body = graphql(
        &app,
        None,
        &format!("query($t: String!) {{ searchMovieEntries(title: $t) {{ {ENTRY_FIELDS} }} }}"),
        json!({ "t": "arrival" }),
    )
    .await;

    let results = body["data"]["searchMovieEntries"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Arrival");
}

#[tokio::test]
async fn test_bearer_prefix_is_accepted() {
    let app = spawn_app().await;
    let user = create_user(&app, "bearer").await;

    let bearer = format!("Bearer {}", user.token);
    let body = graphql(
        &app,
        Some(&bearer),
        &format!("{{ movieEntries {{ {ENTRY_FIELDS} }} }}"),
        json!({}),
    )
    .await;

    assert!(body["errors"].is_null(), "unexpected errors: {body}");
}

#[tokio::test]
async fn test_login_and_duplicate_registration() {
    let app = spawn_app().await;
    let user = create_user(&app, "loginuser").await;

    let login_query =
        "mutation($input: LoginInput!) { loginUser(input: $input) { id token } }";

    let ok = graphql(
        &app,
        None,
        login_query,
        json!({ "input": { "username": "loginuser", "password": "correct horse battery" } }),
    )
    .await;
    assert_eq!(ok["data"]["loginUser"]["id"], user.id.as_str());
    assert_eq!(ok["data"]["loginUser"]["token"], user.token.as_str());

    let wrong = graphql(
        &app,
        None,
        login_query,
        json!({ "input": { "username": "loginuser", "password": "nope nope nope" } }),
    )
    .await;
    assert_eq!(error_extension(&wrong, "code"), "LOGIN_USER_ERROR");
    assert_eq!(error_extension(&wrong, "reason"), "INVALID_CREDENTIALS");

    let duplicate = graphql(
        &app,
        None,
        "mutation($input: CreateUserInput!) { createUser(input: $input) { id } }",
        json!({ "input": {
            "username": "loginuser",
            "email": "other@example.com",
            "password": "correct horse battery",
        }}),
    )
    .await;
    assert_eq!(error_extension(&duplicate, "code"), "CREATE_USER_ERROR");
    assert_eq!(error_extension(&duplicate, "reason"), "CONFLICT");
}
