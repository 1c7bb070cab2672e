use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::middlewares::RequestTrace;
use crate::models::{ApiResponse, ErrorCode, ErrorResponse};

pub async fn get_user(
    service: &UserService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(user))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                user_id,
                "Failed to get user: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::InternalServerError,
                    "Failed to get user",
                )),
            )
        }
    }
}
