use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;
// 数据库的 OFFSET 为有符号 64 位整数
const MAX_OFFSET: u64 = i64::MAX as u64;

// 分页查询参数（原始字符串）
//
// 非法值不会让请求失败，而是在 `resolve` 时回退到默认值，
// 所以这里不做任何数值反序列化。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[ts(optional)]
    pub page: Option<String>,
    #[ts(optional)]
    pub limit: Option<String>,
}

impl PaginationQuery {
    pub fn resolve(&self) -> PageWindow {
        PageWindow::resolve(self.page.as_deref(), self.limit.as_deref())
    }
}

/// 归一化后的分页窗口
///
/// 保证 `page >= 1`、`1 <= limit <= 100`，`offset = (page - 1) * limit`（饱和）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl PageWindow {
    /// 解析原始的 page / limit 参数
    ///
    /// 与前端约定的宽松策略：无法解析（或为 0）时使用默认值，
    /// 负数提升到 1，limit 超过上限时截断为 100。
    pub fn resolve(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = match parse_leading_int(page) {
            Some(p) if p != 0 => p.max(1) as u64,
            _ => DEFAULT_PAGE,
        };

        let limit = match parse_leading_int(limit) {
            Some(l) if l != 0 => (l.max(1) as u64).min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        };

        Self {
            page,
            limit,
            offset: (page - 1).saturating_mul(limit).min(MAX_OFFSET),
        }
    }

    /// 根据总数计算总页数，`total == 0` 时为 0
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

/// 解析字符串开头的整数部分（如 "12abc" -> 12，"3.7" -> 3）
///
/// 前导空白会被忽略，溢出时饱和到 i64 的边界。
fn parse_leading_int(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -value } else { value })
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_page: i64,
}

impl PaginationInfo {
    pub fn new(window: PageWindow, total: u64) -> Self {
        Self {
            page: window.page as i64,
            limit: window.limit as i64,
            total: total as i64,
            total_page: window.total_pages(total) as i64,
        }
    }
}

// 分页列表响应：{ "data": [...], "pagination": {...} }
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}
