use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::middlewares::RequestTrace;
use crate::models::{ErrorCode, ErrorResponse, users::requests::UserQueryParams};

pub async fn list_users(
    service: &UserService,
    request: &HttpRequest,
    query: UserQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users_with_pagination(query.into()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!(
                request_id = %RequestTrace::request_id(request),
                "Failed to fetch users: {}", e
            );
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::UserListFailed,
                    "Failed to fetch users",
                )),
            )
        }
    }
}
