use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::middlewares::RequestTrace;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, CreatedResource, ErrorCode, ErrorResponse};
use crate::utils::validate::validate_create_subject;

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_create_subject(&subject_data) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            ErrorCode::ValidationFailed,
            msg,
        )));
    }

    let storage = service.get_storage(request);
    let code = subject_data.code.clone();

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!("Subject {} ({}) created", subject.id, subject.code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(CreatedResource { id: subject.id })))
        }
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ErrorResponse::new(
                ErrorCode::SubjectCodeExists,
                format!("Subject code already exists: {code}"),
            ),
        )),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                "Failed to create subject: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::SubjectCreationFailed,
                    "Failed to create subject",
                )),
            )
        }
    }
}
