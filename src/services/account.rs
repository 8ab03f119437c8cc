use std::sync::Arc;

use crate::domain::{
    error::{AccountError, AccountResult},
    models::account::{Account, CreateAccount, Credentials},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use async_trait::async_trait;
use subtle::ConstantTimeEq;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    async fn is_account(&self, username: &str) -> AccountResult<bool> {
        Ok(self.repository.is_account(username).await?)
    }

    async fn find_by_username(&self, username: &str) -> AccountResult<Option<Account>> {
        Ok(self.repository.find_by_username(username).await?)
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn register(&self, new_account: CreateAccount) -> AccountResult<Account> {
        // The unique index decides; this only spares the insert.
        if self.is_account(&new_account.username).await? {
            return Err(AccountError::UsernameExists);
        }

        Ok(self.repository.create(new_account).await?)
    }

    async fn login(&self, credentials: Credentials) -> AccountResult<Account> {
        let account = match self.find_by_username(&credentials.username).await? {
            Some(account) => account,
            None => return Err(AccountError::InvalidCredentials),
        };

        if !verify_password(&credentials.password, &account.password) {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(account)
    }
}

/// Byte-exact, case-sensitive comparison of a submitted password against the stored one.
pub fn verify_password(password: &str, stored: &str) -> bool {
    password.as_bytes().ct_eq(stored.as_bytes()).into()
}
