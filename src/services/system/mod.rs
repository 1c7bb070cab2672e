use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::models::{ApiResponse, AppStartTime, system::responses::HealthStatus};

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 健康检查，不访问数据库
    pub async fn health(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let uptime_seconds = request
            .app_data::<web::Data<AppStartTime>>()
            .map(|start| {
                (chrono::Utc::now() - start.start_datetime)
                    .num_seconds()
                    .max(0)
            })
            .unwrap_or_default();

        Ok(HttpResponse::Ok().json(ApiResponse::success(HealthStatus {
            status: "ok".to_string(),
            uptime_seconds,
        })))
    }
}
