use serde::Serialize;
use ts_rs::TS;

// 健康检查
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthStatus {
    pub status: String,
    // 自进程启动以来的秒数
    pub uptime_seconds: i64,
}
