//! 数据模型定义
//!
//! - `entities`: 对外暴露的业务实体
//! - `requests`: 请求参数
//! - `responses`: 响应结构

pub mod classes;
pub mod common;
pub mod departments;
pub mod subjects;
pub mod system;
pub mod users;

pub use common::pagination::{PageWindow, PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::{ApiResponse, CreatedResource, ErrorResponse};

/// 程序启动时间，用于健康检查中的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// API 错误代码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    InvalidIdentifier = 1002,

    // 用户 2xxx
    UserNotFound = 2004,
    UserListFailed = 2005,

    // 班级 3xxx
    ClassCreationFailed = 3001,
    ClassListFailed = 3002,
    ClassNotFound = 3004,

    // 科目 4xxx
    SubjectCreationFailed = 4001,
    SubjectListFailed = 4002,
    SubjectNotFound = 4004,
    SubjectCodeExists = 4009,

    // 院系 5xxx
    DepartmentCreationFailed = 5001,
    DepartmentListFailed = 5002,
    DepartmentNotFound = 5004,
    DepartmentCodeExists = 5009,

    InternalServerError = 9000,
}
