//! User command handlers

use crate::config::Config;
use crate::db::Store;
use crate::services::{AuthService, SeaOrmAuthService};

async fn auth_service(config: &Config) -> anyhow::Result<SeaOrmAuthService> {
    let store = Store::new(&config.general.database_path).await?;
    Ok(SeaOrmAuthService::new(store, config.security.clone()))
}

pub async fn cmd_user_create(
    config: &Config,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let account = auth_service(config)
        .await?
        .register(username, email, password)
        .await?;

    println!("Created user {} ({})", account.username, account.id);
    println!("Token: {}", account.token);
    println!();
    println!("Use it with: CINELOG_TOKEN={} cinelog entries list", account.token);

    Ok(())
}

pub async fn cmd_user_token(config: &Config, username: &str, regenerate: bool) -> anyhow::Result<()> {
    let service = auth_service(config).await?;

    let token = if regenerate {
        service.regenerate_api_key(username).await?
    } else {
        service.get_api_key(username).await?
    };

    println!("{token}");
    Ok(())
}
