use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

// 成功响应：{ "data": ... }
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub data: T,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self { data }
    }
}

// 错误响应：{ "code": ..., "error": "..." }
//
// 只携带面向调用方的简短描述，存储层的错误细节仅写入日志。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ErrorResponse {
    pub code: i32,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            error: error.into(),
        }
    }
}

// 创建成功后返回的新记录 ID
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct CreatedResource {
    pub id: i64,
}
