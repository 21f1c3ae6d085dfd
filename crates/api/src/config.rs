use animewall_db::DbConfig;

/// Server configuration loaded from environment variables.
///
/// Built once in `main` and shared through [`AppState`](crate::state::AppState).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Document store settings.
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var         | Default    |
    /// |-----------------|------------|
    /// | `HOST`          | `0.0.0.0`  |
    /// | `PORT`          | `8000`     |
    /// | `DATABASE_URL`  | unset      |
    /// | `DATABASE_NAME` | unset      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        Self {
            host,
            port,
            db: DbConfig::from_env(),
        }
    }
}
