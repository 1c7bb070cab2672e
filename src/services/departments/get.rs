use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DepartmentService;
use crate::middlewares::RequestTrace;
use crate::models::{ApiResponse, ErrorCode, ErrorResponse};

pub async fn get_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_department_by_id(department_id).await {
        Ok(Some(department)) => Ok(HttpResponse::Ok().json(ApiResponse::success(department))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            ErrorCode::DepartmentNotFound,
            "Department not found",
        ))),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                department_id,
                "Failed to get department: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::InternalServerError,
                    "Failed to get department",
                )),
            )
        }
    }
}
