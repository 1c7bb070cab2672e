use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::middlewares::RequestTrace;
use crate::models::{ApiResponse, ErrorCode, ErrorResponse};

pub async fn get_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(subject))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                subject_id,
                "Failed to get subject: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::InternalServerError,
                    "Failed to get subject",
                )),
            )
        }
    }
}
