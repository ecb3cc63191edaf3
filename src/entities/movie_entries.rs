use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use crate::domain::movie_entry::{check_fields, title_key};

const REJECTED_PREFIX: &str = "movie entry rejected: ";

/// The reason `before_save` refused a row, if `err` came from it.
#[must_use]
pub fn rejection_reason(err: &DbErr) -> Option<&str> {
    match err {
        DbErr::Custom(msg) => msg.strip_prefix(REJECTED_PREFIX),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "movie_entries")]
pub struct Model {
    /// UUID v4
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,

    /// Lower-cased title, kept in sync by `before_save`.
    #[sea_orm(indexed)]
    pub title_key: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Mood rating, 0..=4
    pub stars: i32,

    #[sea_orm(indexed)]
    pub user_id: String,

    /// Epoch milliseconds
    pub created_at: i64,

    /// Epoch milliseconds
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

fn current<V>(value: &ActiveValue<V>) -> Option<&V>
where
    V: Into<sea_orm::Value>,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Storage-level validation; re-checks every content field regardless of
    /// what the caller validated, and maintains timestamps and `title_key`.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let title = current(&self.title).cloned().unwrap_or_default();
        let description = current(&self.description).cloned().unwrap_or_default();
        let stars = current(&self.stars).copied().unwrap_or(-1);

        check_fields(&title, &description, stars)
            .map_err(|e| DbErr::Custom(format!("{REJECTED_PREFIX}{e}")))?;

        if current(&self.user_id).is_none_or(String::is_empty) {
            return Err(DbErr::Custom(format!(
                "{REJECTED_PREFIX}\"user\" is required"
            )));
        }

        let now = chrono::Utc::now().timestamp_millis();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        self.title_key = Set(title_key(&title));

        Ok(self)
    }
}
