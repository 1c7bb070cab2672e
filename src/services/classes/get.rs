use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequestTrace;
use crate::models::{ApiResponse, ErrorCode, ErrorResponse};

pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_detail(class_id).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(class))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                class_id,
                "Failed to get class details: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::InternalServerError,
                    "Failed to get class details",
                )),
            )
        }
    }
}
