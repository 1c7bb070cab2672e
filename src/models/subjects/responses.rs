use super::entities::Subject;
use crate::models::common::pagination::PaginatedResponse;
use crate::models::departments::responses::DepartmentSummary;
use serde::Serialize;
use ts_rs::TS;

// 班级中展示的科目信息
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectSummary {
    pub id: i64,
    pub department_id: i64,
    pub name: String,
    pub code: String,
}

// 科目列表项 / 详情：附带所属院系
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectWithDepartment {
    #[serde(flatten)]
    #[ts(flatten)]
    pub subject: Subject,
    pub department: Option<DepartmentSummary>,
}

// 科目列表响应
pub type SubjectListResponse = PaginatedResponse<SubjectWithDepartment>;
