use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::{Any, AnyConnection, Pool};

use crate::config::DatabaseConfig;

// Alias para el pool compartido; el driver concreto sale de la URL
pub type DbPool = Pool<Any>;

pub type DbConnection = AnyConnection;

pub async fn init_db(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime)
        .idle_timeout(config.idle_timeout)
        .connect(&config.url)
        .await
}
