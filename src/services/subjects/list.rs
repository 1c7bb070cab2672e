use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::middlewares::RequestTrace;
use crate::models::{ErrorCode, ErrorResponse, subjects::requests::SubjectQueryParams};

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    query: SubjectQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects_with_pagination(query.into()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                "Failed to fetch subjects: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::SubjectListFailed,
                    "Failed to fetch subjects",
                )),
            )
        }
    }
}
