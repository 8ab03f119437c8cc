use crate::api::dto::validation::{is_password, is_username};
use crate::domain::models::account::{CreateAccount, Credentials};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CreateAccountDTO {
    #[validate(custom(function = "is_username"))]
    #[schema(examples("alice"))]
    pub username: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("pw1"))]
    pub password: String,
}

/// Login bodies are only checked for shape; any string pair is looked up as is.
#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CredentialsDTO {
    #[schema(examples("alice"))]
    pub username: String,

    #[schema(examples("pw1"))]
    pub password: String,
}

/// Body of every register and login response.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusDTO {
    #[schema(examples("success", "fail", "username_exists"))]
    pub message: String,
}

impl StatusDTO {
    pub fn success() -> Self {
        Self::new("success")
    }

    pub fn fail() -> Self {
        Self::new("fail")
    }

    pub fn username_exists() -> Self {
        Self::new("username_exists")
    }

    fn new(message: &str) -> Self {
        StatusDTO {
            message: message.to_string(),
        }
    }
}

impl From<CreateAccountDTO> for CreateAccount {
    fn from(create_account: CreateAccountDTO) -> Self {
        CreateAccount {
            username: create_account.username,
            password: create_account.password,
        }
    }
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            username: credentials.username,
            password: credentials.password,
        }
    }
}
