mod entries;
mod init;
mod user;

pub use entries::cmd_entries;
pub use init::cmd_init;
pub use user::{cmd_user_create, cmd_user_token};
