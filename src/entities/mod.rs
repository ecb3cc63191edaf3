pub mod prelude;

pub mod movie_entries;
pub mod users;
