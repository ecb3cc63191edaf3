use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// UUID v4
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(unique)]
    pub email: String,

    /// Argon2id password hash
    pub password_hash: String,

    /// Random bearer token (64-char hex string)
    #[sea_orm(unique)]
    pub api_key: String,

    /// Epoch milliseconds
    pub created_at: i64,

    /// Epoch milliseconds
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_entries::Entity")]
    MovieEntries,
}

impl Related<super::movie_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
