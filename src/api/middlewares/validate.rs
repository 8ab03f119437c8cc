use crate::domain::error::AppError;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::{JsonBody, Payload};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use validator::Validate;

const MAX_PAYLOAD_SIZE: usize = 32 * 1024;

/// JSON body extractor that also runs `Validate`, answering with an
/// `AppError` body instead of actix's plain-text rejection.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        JsonBody::new(
            req,
            payload,
            Some(&|mime| mime.type_() == mime::APPLICATION && mime.subtype() == mime::JSON),
            true,
        )
        .limit(MAX_PAYLOAD_SIZE)
        .map(|res: Result<T, _>| match res {
            Ok(payload) => payload
                .validate()
                .map(|_| Json(payload))
                .map_err(AppError::from),
            Err(err) => {
                tracing::debug!(error = %err, "rejected request body");
                Err(AppError::from(err))
            }
        })
        .boxed_local()
    }
}
