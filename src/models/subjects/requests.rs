use crate::models::common::pagination::{PageWindow, PaginationQuery};
use serde::Deserialize;
use ts_rs::TS;

// 科目查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    // 匹配科目名称或代码
    #[ts(optional)]
    pub search: Option<String>,
    // 匹配院系名称
    #[ts(optional)]
    pub department: Option<String>,
}

// 科目列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct SubjectListQuery {
    pub window: PageWindow,
    pub search: Option<String>,
    pub department: Option<String>,
}

impl From<SubjectQueryParams> for SubjectListQuery {
    fn from(params: SubjectQueryParams) -> Self {
        Self {
            window: params.pagination.resolve(),
            search: params.search,
            department: params.department,
        }
    }
}

// 创建科目请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub department_id: i64,
    pub name: String,
    pub code: String,
    #[ts(optional)]
    pub description: Option<String>,
}
