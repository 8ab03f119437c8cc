use async_trait::async_trait;

use crate::domain::models::account::{Account, CreateAccount};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn is_account(&self, username: &str) -> RepositoryResult<bool>;
    async fn create(&self, new_account: CreateAccount) -> RepositoryResult<Account>;
    /// Exact, case-sensitive match.
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<Account>>;
    async fn count(&self) -> RepositoryResult<u64>;
}
