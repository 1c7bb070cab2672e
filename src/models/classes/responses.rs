use super::entities::Class;
use crate::models::common::pagination::PaginatedResponse;
use crate::models::departments::responses::DepartmentSummary;
use crate::models::subjects::responses::SubjectSummary;
use crate::models::users::responses::TeacherSummary;
use serde::Serialize;
use ts_rs::TS;

// 班级列表项：班级字段 + 左连接得到的科目、教师（可能为空）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    pub subject: Option<SubjectSummary>,
    pub teacher: Option<TeacherSummary>,
}

// 班级详情：在列表项基础上附带科目所属院系
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub class: Class,
    pub subject: Option<SubjectSummary>,
    pub department: Option<DepartmentSummary>,
    pub teacher: Option<TeacherSummary>,
}

// 班级列表响应
pub type ClassListResponse = PaginatedResponse<ClassListItem>;
