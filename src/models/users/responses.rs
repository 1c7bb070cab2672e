use super::entities::User;
use crate::models::common::pagination::PaginatedResponse;
use serde::Serialize;
use ts_rs::TS;

// 班级中展示的教师信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct TeacherSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

// 用户列表响应
pub type UserListResponse = PaginatedResponse<User>;
