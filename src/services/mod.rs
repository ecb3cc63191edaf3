pub mod auth_service;
pub use auth_service::{Account, AuthError, AuthService};

pub mod auth_service_impl;
pub use auth_service_impl::SeaOrmAuthService;

pub mod movie_entry_service;
pub use movie_entry_service::MovieEntryService;

pub mod movie_entry_service_impl;
pub use movie_entry_service_impl::SeaOrmMovieEntryService;
