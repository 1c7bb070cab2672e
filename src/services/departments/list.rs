use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use crate::middlewares::RequestTrace;
use crate::models::{ErrorCode, ErrorResponse, departments::requests::DepartmentQueryParams};

pub async fn list_departments(
    service: &DepartmentService,
    request: &HttpRequest,
    query: DepartmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_departments_with_pagination(query.into()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                "Failed to fetch departments: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::DepartmentListFailed,
                    "Failed to fetch departments",
                )),
            )
        }
    }
}
