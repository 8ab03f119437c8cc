use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::error::{Api, Db};

use crate::domain::models::account::{Account, CreateAccount};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate, SurrealCount};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Any>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Any>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

// Record keys are random positive integers: no shared counter record for
// concurrent inserts to contend on. A colliding key is rejected by CREATE,
// never overwritten.
const CREATE_ACCOUNT: &str = "CREATE ONLY type::thing($table, rand::int(1, 9223372036854775807)) CONTENT $content";

impl From<surrealdb::Error> for RepositoryError {
    fn from(error: surrealdb::Error) -> Self {
        match &error {
            surrealdb::Error::Db(Db::IndexExists { .. }) => {
                RepositoryError::UniqueViolation(error.to_string())
            }
            // Remote engines only carry the rendered message.
            surrealdb::Error::Api(Api::Query(message)) if message.contains("already contains") => {
                RepositoryError::UniqueViolation(message.to_owned())
            }
            _ => RepositoryError::Persistence(error.to_string()),
        }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, new_account: CreateAccount) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .query(CREATE_ACCOUNT)
            .bind(("table", ACCOUNT))
            .bind(("content", SurrealAccountCreate::from(new_account)))
            .await?
            .take(0)?;

        account
            .ok_or_else(|| RepositoryError::Persistence("account was not created".to_string()))?
            .try_into()
    }

    async fn is_account(&self, username: &str) -> RepositoryResult<bool> {
        let mut res = self
            .db
            .query("(SELECT count() FROM type::table($table) WHERE username = type::string($username) GROUP ALL)[0] or { count: 0 }")
            .bind(("table", ACCOUNT))
            .bind(("username", username.to_owned()))
            .await?;

        let counter = res.take::<Option<SurrealCount>>(0)?;

        Ok(counter.is_some_and(|counter| counter.count > 0))
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE username = type::string($username) LIMIT 1")
            .bind(("table", ACCOUNT))
            .bind(("username", username.to_owned()))
            .await?
            .take(0)?;

        account.map(TryInto::try_into).transpose()
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let mut res = self
            .db
            .query("(SELECT count() FROM type::table($table) GROUP ALL)[0] or { count: 0 }")
            .bind(("table", ACCOUNT))
            .await?;

        let counter = res.take::<Option<SurrealCount>>(0)?;

        Ok(counter.map_or(0, |counter| counter.count.max(0) as u64))
    }
}
