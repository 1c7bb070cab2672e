use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::users::requests::UserQueryParams;
use crate::services::UserService;
use crate::utils::{FirstValueQuery, SafeUserIdI64};

// 懒加载的全局 USER_SERVICE 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn list_users(
    req: HttpRequest,
    query: FirstValueQuery<UserQueryParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req, query.into_inner()).await
}

pub async fn get_user(req: HttpRequest, user_id: SafeUserIdI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&req, user_id.0).await
}

// 配置路由（只读，用户由身份服务创建）
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(web::resource("").route(web::get().to(list_users)))
            .service(web::resource("/{user_id}").route(web::get().to(get_user))),
    );
}
