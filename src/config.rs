use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub surrealdb: SurrealDbConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans over OTLP/gRPC in addition to stdout logging.
    pub otlp: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    /// Any SurrealDB endpoint: `surrealkv://users.db`, `mem://`, `ws://host:port`.
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub namespace: String,
    pub database: String,
    /// Define tables and indexes at startup.
    pub apply_schema: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "account-service".to_string(),
                },
                server: ServerConfig {
                    host: "0.0.0.0".to_string(),
                    port: 5000,
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                    otlp: false,
                },
                surrealdb: SurrealDbConfig {
                    endpoint: "surrealkv://users.db".to_string(),
                    username: None,
                    password: None,
                    namespace: "accounts".to_string(),
                    database: "accounts".to_string(),
                    apply_schema: true,
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}
