use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::middlewares::RequestTrace;
use crate::models::{ErrorCode, ErrorResponse, classes::requests::ClassQueryParams};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes_with_pagination(query.into()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                "Failed to fetch classes: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::ClassListFailed,
                    "Failed to fetch classes",
                )),
            )
        }
    }
}
