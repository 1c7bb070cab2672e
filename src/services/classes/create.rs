use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::middlewares::RequestTrace;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, CreatedResource, ErrorCode, ErrorResponse};
use crate::utils::validate::validate_create_class;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_create_class(&class_data) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            ErrorCode::ValidationFailed,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    // teacherId / subjectId 的存在性由外键约束保证
    match storage.create_class(class_data).await {
        Ok(class) => {
            info!(
                "Class {} created with invite code {}",
                class.id, class.invite_code
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(CreatedResource { id: class.id })))
        }
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                "Failed to create class: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::ClassCreationFailed,
                    "Failed to create class",
                )),
            )
        }
    }
}
