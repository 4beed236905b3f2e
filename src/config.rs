use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Process-wide configuration, resolved once on first access.
/// Environment variables prefixed with `STOCKROOM_` override the defaults,
/// e.g. `STOCKROOM_DATABASE_URL` or `STOCKROOM_HASH__T_COST`.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid configuration, falling back to defaults");
        Config::default()
    })
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub loglevel: String,
    pub hash: HashConfig,
}

/// Argon2id cost parameters. The defaults are the argon2 crate's own
/// (19 MiB memory, 2 iterations, 1 lane); raise them per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashConfig {
    pub m_cost: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:inventory.db".to_string(),
            loglevel: "info".to_string(),
            hash: HashConfig::default(),
        }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            m_cost: 19 * 1024,
            t_cost: 2,
            p_cost: 1,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("STOCKROOM_").split("__"))
            .extract()
    }
}
