use super::entities::UserRole;
use crate::models::common::pagination::{PageWindow, PaginationQuery};
use serde::Deserialize;
use ts_rs::TS;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    // 匹配姓名或邮箱
    #[ts(optional)]
    pub search: Option<String>,
    #[ts(optional)]
    pub role: Option<UserRole>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub window: PageWindow,
    pub search: Option<String>,
    pub role: Option<UserRole>,
}

impl From<UserQueryParams> for UserListQuery {
    fn from(params: UserQueryParams) -> Self {
        Self {
            window: params.pagination.resolve(),
            search: params.search,
            role: params.role,
        }
    }
}
