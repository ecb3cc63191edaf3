pub use super::movie_entries::Entity as MovieEntries;
pub use super::users::Entity as Users;
