use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryFilter, Set,
};

use crate::domain::movie_entry::{MovieEntry, MovieEntryDraft, Stars, title_key};
use crate::entities::{movie_entries, prelude::*};

impl TryFrom<movie_entries::Model> for MovieEntry {
    type Error = anyhow::Error;

    fn try_from(model: movie_entries::Model) -> Result<Self> {
        let stars = Stars::try_from(model.stars)
            .with_context(|| format!("Stored movie entry {} has a corrupt rating", model.id))?;

        Ok(Self {
            id: model.id,
            title: model.title,
            description: model.description,
            stars,
            user: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

fn into_entries(models: Vec<movie_entries::Model>) -> Result<Vec<MovieEntry>> {
    models.into_iter().map(MovieEntry::try_from).collect()
}

pub struct MovieEntryRepository {
    conn: DatabaseConnection,
}

impl MovieEntryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: &str) -> Result<Option<MovieEntry>> {
        let model = MovieEntries::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query movie entry by ID")?;

        model.map(MovieEntry::try_from).transpose()
    }

    /// Entries owned by `user_id`, in storage order.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<MovieEntry>> {
        let models = MovieEntries::find()
            .filter(movie_entries::Column::UserId.eq(user_id))
            .all(&self.conn)
            .await
            .context("Failed to list movie entries for user")?;

        into_entries(models)
    }

    /// Entries of any owner whose title equals `title` ignoring case.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<MovieEntry>> {
        let models = MovieEntries::find()
            .filter(movie_entries::Column::TitleKey.eq(title_key(title)))
            .all(&self.conn)
            .await
            .context("Failed to search movie entries by title")?;

        into_entries(models)
    }

    pub async fn create(&self, user_id: &str, draft: &MovieEntryDraft) -> Result<MovieEntry> {
        let model = movie_entries::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            title: Set(draft.title.clone()),
            title_key: NotSet,
            description: Set(draft.description.clone()),
            stars: Set(draft.stars.into()),
            user_id: Set(user_id.to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(&self.conn)
        .await
        .context("Failed to insert movie entry")?;

        MovieEntry::try_from(model)
    }

    /// Overwrites title, description and stars of `existing`; the owner is
    /// never touched. Returns `None` when the row vanished in the meantime.
    pub async fn update_content(
        &self,
        existing: &MovieEntry,
        draft: &MovieEntryDraft,
    ) -> Result<Option<MovieEntry>> {
        let active = movie_entries::ActiveModel {
            id: Unchanged(existing.id.clone()),
            title: Set(draft.title.clone()),
            title_key: NotSet,
            description: Set(draft.description.clone()),
            stars: Set(draft.stars.into()),
            user_id: Unchanged(existing.user.clone()),
            created_at: Unchanged(existing.created_at),
            updated_at: Unchanged(existing.updated_at),
        };

        match active.update(&self.conn).await {
            Ok(model) => MovieEntry::try_from(model).map(Some),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(anyhow::Error::new(e).context("Failed to update movie entry")),
        }
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = MovieEntries::delete_by_id(id.to_string())
            .exec(&self.conn)
            .await
            .context("Failed to delete movie entry")?;

        Ok(result.rows_affected > 0)
    }
}
