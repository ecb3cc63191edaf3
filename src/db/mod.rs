use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::config::SecurityConfig;
use crate::domain::movie_entry::{MovieEntry, MovieEntryDraft};

pub mod migrator;
pub mod repositories;

pub use repositories::user::User;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
        let path_str = path_str.split('?').next().unwrap_or(path_str);
        if !path_str.starts_with(":memory:") {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn movie_entry_repo(&self) -> repositories::movie_entry::MovieEntryRepository {
        repositories::movie_entry::MovieEntryRepository::new(self.conn.clone())
    }

    // ========== Movie Entry Repository Methods ==========

    pub async fn get_movie_entry(&self, id: &str) -> Result<Option<MovieEntry>> {
        self.movie_entry_repo().get(id).await
    }

    pub async fn list_movie_entries_for_user(&self, user_id: &str) -> Result<Vec<MovieEntry>> {
        self.movie_entry_repo().list_by_user(user_id).await
    }

    pub async fn find_movie_entries_by_title(&self, title: &str) -> Result<Vec<MovieEntry>> {
        self.movie_entry_repo().find_by_title(title).await
    }

    pub async fn create_movie_entry(
        &self,
        user_id: &str,
        draft: &MovieEntryDraft,
    ) -> Result<MovieEntry> {
        self.movie_entry_repo().create(user_id, draft).await
    }

    pub async fn update_movie_entry(
        &self,
        existing: &MovieEntry,
        draft: &MovieEntryDraft,
    ) -> Result<Option<MovieEntry>> {
        self.movie_entry_repo().update_content(existing, draft).await
    }

    pub async fn delete_movie_entry(&self, id: &str) -> Result<bool> {
        self.movie_entry_repo().delete(id).await
    }

    // ========== User Repository Methods ==========

    #[must_use]
    pub fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<User> {
        self.user_repo()
            .create(username, email, password, config)
            .await
    }

    pub async fn user_exists(&self, username: &str, email: &str) -> Result<bool> {
        self.user_repo().exists(username, email).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn verify_user_password(&self, username: &str, password: &str) -> Result<bool> {
        self.user_repo().verify_password(username, password).await
    }

    pub async fn verify_api_key(&self, api_key: &str) -> Result<Option<User>> {
        self.user_repo().verify_api_key(api_key).await
    }

    pub async fn get_user_api_key(&self, username: &str) -> Result<Option<String>> {
        self.user_repo().get_api_key(username).await
    }

    pub async fn regenerate_user_api_key(&self, username: &str) -> Result<String> {
        self.user_repo().regenerate_api_key(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie_entry::MovieEntryInput;

    async fn test_store() -> Store {
        let db_path =
            std::env::temp_dir().join(format!("cinelog-store-test-{}.db", uuid::Uuid::new_v4()));
        Store::new(&format!("sqlite:{}", db_path.display()))
            .await
            .expect("Failed to open test store")
    }

    fn fast_security() -> SecurityConfig {
        SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            ..SecurityConfig::default()
        }
    }

    fn draft(title: &str, stars: i32) -> MovieEntryDraft {
        MovieEntryInput {
            title: title.to_string(),
            description: "Seen on a rainy evening.".to_string(),
            stars,
            user: None,
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_movie_entry_lifecycle() {
        let store = test_store().await;
        let user = store
            .create_user("alice", "alice@example.com", "hunter2hunter2", &fast_security())
            .await
            .unwrap();

        let created = store
            .create_movie_entry(&user.id, &draft("Arrival", 2))
            .await
            .unwrap();
        assert_eq!(created.user, user.id);
        assert!(created.created_at > 0);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = store.get_movie_entry(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        let updated = store
            .update_movie_entry(&fetched, &draft("Arrival (2016)", 3))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Arrival (2016)");
        assert_eq!(updated.stars.get(), 3);
        assert_eq!(updated.user, user.id);
        assert_eq!(updated.created_at, created.created_at);

        assert!(store.delete_movie_entry(&created.id).await.unwrap());
        assert!(!store.delete_movie_entry(&created.id).await.unwrap());
        assert!(store.get_movie_entry(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_title_search_is_case_insensitive_and_exact() {
        let store = test_store().await;
        let user = store
            .create_user("bob", "bob@example.com", "hunter2hunter2", &fast_security())
            .await
            .unwrap();

        store
            .create_movie_entry(&user.id, &draft("Arrival", 1))
            .await
            .unwrap();
        store
            .create_movie_entry(&user.id, &draft("Arrival Day", 1))
            .await
            .unwrap();

        let found = store.find_movie_entries_by_title("aRRival").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Arrival");

        assert!(store.find_movie_entries_by_title("Arr.*").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_hook_rejects_invalid_rows() {
        use crate::entities::movie_entries;
        use sea_orm::{ActiveModelTrait, NotSet, Set};

        let store = test_store().await;
        let user = store
            .create_user("carol", "carol@example.com", "hunter2hunter2", &fast_security())
            .await
            .unwrap();

        let result = movie_entries::ActiveModel {
            id: Set("bad".to_string()),
            title: Set("Alien".to_string()),
            title_key: NotSet,
            description: Set("In space no one can hear you scream.".to_string()),
            stars: Set(5),
            user_id: Set(user.id),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(&store.conn)
        .await;

        assert!(result.is_err());
        assert!(store.get_movie_entry("bad").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejected_draft_surfaces_as_invalid_input() {
        use crate::domain::error::{JournalError, JournalErrorKind};
        use crate::domain::movie_entry::Stars;

        let store = test_store().await;
        let user = store
            .create_user("erin", "erin@example.com", "hunter2hunter2", &fast_security())
            .await
            .unwrap();

        let unchecked = MovieEntryDraft {
            title: "Up".to_string(),
            description: "Balloons over the city.".to_string(),
            stars: Stars::try_from(2).unwrap(),
        };
        let err = store
            .create_movie_entry(&user.id, &unchecked)
            .await
            .unwrap_err();

        assert_eq!(JournalError::from(err).kind(), JournalErrorKind::InvalidInput);
        assert!(store.list_movie_entries_for_user(&user.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_key_lookup() {
        let store = test_store().await;
        let user = store
            .create_user("dave", "dave@example.com", "hunter2hunter2", &fast_security())
            .await
            .unwrap();

        let found = store.verify_api_key(&user.api_key).await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(store.verify_api_key("nope").await.unwrap().is_none());

        let rotated = store.regenerate_user_api_key("dave").await.unwrap();
        assert_ne!(rotated, user.api_key);
        assert!(store.verify_api_key(&user.api_key).await.unwrap().is_none());
        assert!(store.verify_user_password("dave", "hunter2hunter2").await.unwrap());
        assert!(!store.verify_user_password("dave", "wrong").await.unwrap());
    }
}
