use serde::{Deserialize, Serialize};
use surrealdb::sql::{Id, Thing};

use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::repositories::repository::RepositoryError;

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct SurrealAccountCreate {
    username: String,
    password: String,
}

impl From<CreateAccount> for SurrealAccountCreate {
    fn from(acc: CreateAccount) -> Self {
        SurrealAccountCreate {
            username: acc.username,
            password: acc.password,
        }
    }
}

impl TryFrom<SurrealAccount> for Account {
    type Error = RepositoryError;

    fn try_from(acc: SurrealAccount) -> Result<Self, Self::Error> {
        match acc.id.id {
            Id::Number(id) => Ok(Account {
                id,
                username: acc.username,
                password: acc.password,
            }),
            id => Err(RepositoryError::Persistence(format!(
                "account record has a non-numeric id: {id}"
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SurrealCount {
    pub count: i64,
}
