use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::DepartmentService;
use crate::middlewares::RequestTrace;
use crate::models::departments::requests::CreateDepartmentRequest;
use crate::models::{ApiResponse, CreatedResource, ErrorCode, ErrorResponse};
use crate::utils::validate::validate_create_department;

pub async fn create_department(
    service: &DepartmentService,
    request: &HttpRequest,
    department_data: CreateDepartmentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_create_department(&department_data) {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            ErrorCode::ValidationFailed,
            msg,
        )));
    }

    let storage = service.get_storage(request);
    let code = department_data.code.clone();

    match storage.create_department(department_data).await {
        Ok(department) => {
            info!("Department {} ({}) created", department.id, department.code);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(CreatedResource { id: department.id })))
        }
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ErrorResponse::new(
                ErrorCode::DepartmentCodeExists,
                format!("Department code already exists: {code}"),
            ),
        )),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                "Failed to create department: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::DepartmentCreationFailed,
                    "Failed to create department",
                )),
            )
        }
    }
}
