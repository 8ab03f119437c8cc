use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::{AccountError, AppError};
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{CreateAccountDTO, CredentialsDTO, StatusDTO};

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(register).service(login);
}

#[utoipa::path(
    responses(
        (status = 201, body = StatusDTO, description = "Account created", example = json!({"message": "success"})),
        (status = 200, body = StatusDTO, description = "Username already taken", example = json!({"message": "username_exists"})),
        (status = 400, body = StatusDTO, description = "Account could not be stored", example = json!({"message": "fail"})),
        (status = 422, body = AppError, example = json!(AppError::example_422()))
    ),
    request_body = CreateAccountDTO,
    tag = "Account",
)]
#[post("/register")]
pub async fn register(
    payload: Json<CreateAccountDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account_dto = payload.into_inner();

    match account_service.register(account_dto.into()).await {
        Ok(account) => {
            tracing::info!(account_id = account.id, "account registered");
            Ok(HttpResponse::Created().json(StatusDTO::success()))
        }
        Err(AccountError::UsernameExists) => Ok(HttpResponse::Ok().json(StatusDTO::username_exists())),
        Err(error) => {
            tracing::warn!(%error, "account registration failed");
            Ok(HttpResponse::BadRequest().json(StatusDTO::fail()))
        }
    }
}

#[utoipa::path(
    responses(
        (status = 200, body = StatusDTO, description = "Login result; failures are reported in the body", example = json!({"message": "success"})),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 422, body = AppError, example = json!(AppError::example_422()))
    ),
    request_body = CredentialsDTO,
    tag = "Account"
)]
#[post("/login")]
pub async fn login(
    payload: Json<CredentialsDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let credentials_dto = payload.into_inner();

    match account_service.login(credentials_dto.into()).await {
        Ok(_) => Ok(HttpResponse::Ok().json(StatusDTO::success())),
        Err(AccountError::Repository(error)) => {
            tracing::warn!(%error, "account lookup failed");
            Ok(HttpResponse::Ok().json(StatusDTO::fail()))
        }
        Err(_) => Ok(HttpResponse::Ok().json(StatusDTO::fail())),
    }
}
