pub mod movie_entry;
pub mod user;
