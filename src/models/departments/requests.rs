use crate::models::common::pagination::{PageWindow, PaginationQuery};
use serde::Deserialize;
use ts_rs::TS;

// 院系查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    // 匹配院系名称或代码
    #[ts(optional)]
    pub search: Option<String>,
}

// 院系列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct DepartmentListQuery {
    pub window: PageWindow,
    pub search: Option<String>,
}

impl From<DepartmentQueryParams> for DepartmentListQuery {
    fn from(params: DepartmentQueryParams) -> Self {
        Self {
            window: params.pagination.resolve(),
            search: params.search,
        }
    }
}

// 创建院系请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct CreateDepartmentRequest {
    pub code: String,
    pub name: String,
    #[ts(optional)]
    pub description: Option<String>,
}
