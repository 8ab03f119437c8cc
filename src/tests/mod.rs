mod account;

pub mod utils;

use std::sync::Arc;

use ::surrealdb::{Surreal, engine::any::Any};
use serde::Deserialize;

use crate::config::SurrealDbConfig;
use crate::container::Container;
use crate::infrastructure::databases::{schema, surrealdb};

use rstest::*;

pub struct TestContext {
    pub db: Arc<Surreal<Any>>,
    pub container: Arc<Container>,
}

pub async fn connect_memory() -> Surreal<Any> {
    let config = SurrealDbConfig {
        endpoint: "mem://".to_string(),
        username: None,
        password: None,
        namespace: "test".to_string(),
        database: "test".to_string(),
        apply_schema: true,
    };

    surrealdb::connect(&config).await.unwrap()
}

#[fixture]
pub async fn context() -> TestContext {
    let connection = connect_memory().await;

    schema::apply(&connection).await.unwrap();

    let db = Arc::new(connection);

    let container = Arc::new(Container::new(db.clone()));

    TestContext { db, container }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Status {
    message: String,
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
