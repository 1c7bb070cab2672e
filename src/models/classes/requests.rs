use super::entities::ClassStatus;
use crate::models::common::pagination::{PageWindow, PaginationQuery};
use serde::Deserialize;
use ts_rs::TS;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    // 匹配班级名称或邀请码
    #[ts(optional)]
    pub search: Option<String>,
    // 匹配科目名称
    #[ts(optional)]
    pub subject: Option<String>,
    // 匹配教师姓名
    #[ts(optional)]
    pub teacher: Option<String>,
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClassListQuery {
    pub window: PageWindow,
    pub search: Option<String>,
    pub subject: Option<String>,
    pub teacher: Option<String>,
}

impl From<ClassQueryParams> for ClassListQuery {
    fn from(params: ClassQueryParams) -> Self {
        Self {
            window: params.pagination.resolve(),
            search: params.search,
            subject: params.subject,
            teacher: params.teacher,
        }
    }
}

// 创建班级请求
//
// teacherId / subjectId 不做存在性校验，由数据库外键约束保证。
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    #[ts(optional)]
    pub teacher_id: Option<i64>,
    #[ts(optional)]
    pub subject_id: Option<i64>,
    #[ts(optional)]
    pub capacity: Option<i32>,
    #[ts(optional)]
    pub description: Option<String>,
    #[ts(optional)]
    pub status: Option<ClassStatus>,
    #[ts(optional)]
    pub banner_url: Option<String>,
    #[ts(optional)]
    pub banner_cld_pub_id: Option<String>,
}
