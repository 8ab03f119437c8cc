use actix_web::HttpResponse;

use crate::domain::error::AppResult;

/// Account outcomes are rendered as status bodies by the handlers, so the
/// error side only carries request rejections.
pub type ApiResult = AppResult<HttpResponse>;
