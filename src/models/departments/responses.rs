use super::entities::Department;
use crate::models::common::pagination::PaginatedResponse;
use serde::Serialize;
use ts_rs::TS;

// 班级、科目中展示的院系信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentSummary {
    pub id: i64,
    pub code: String,
    pub name: String,
}

// 院系列表响应
pub type DepartmentListResponse = PaginatedResponse<Department>;
