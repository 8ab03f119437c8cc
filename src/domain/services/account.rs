use async_trait::async_trait;

use crate::domain::error::AccountResult;
use crate::domain::models::account::{Account, CreateAccount, Credentials};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn register(&self, new_account: CreateAccount) -> AccountResult<Account>;
    async fn login(&self, credentials: Credentials) -> AccountResult<Account>;
}
