use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::departments::requests::{CreateDepartmentRequest, DepartmentQueryParams};
use crate::services::DepartmentService;
use crate::utils::{FirstValueQuery, SafeDepartmentIdI64};

// 懒加载的全局 DEPARTMENT_SERVICE 实例
static DEPARTMENT_SERVICE: Lazy<DepartmentService> = Lazy::new(DepartmentService::new_lazy);

pub async fn list_departments(
    req: HttpRequest,
    query: FirstValueQuery<DepartmentQueryParams>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .list_departments(&req, query.into_inner())
        .await
}

pub async fn create_department(
    req: HttpRequest,
    department_data: web::Json<CreateDepartmentRequest>,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .create_department(&req, department_data.into_inner())
        .await
}

pub async fn get_department(
    req: HttpRequest,
    department_id: SafeDepartmentIdI64,
) -> ActixResult<HttpResponse> {
    DEPARTMENT_SERVICE
        .get_department(&req, department_id.0)
        .await
}

// 配置路由
pub fn configure_departments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/departments")
            .service(
                web::resource("")
                    .route(web::get().to(list_departments))
                    .route(web::post().to(create_department)),
            )
            .service(web::resource("/{department_id}").route(web::get().to(get_department))),
    );
}
