//! SQL 辅助函数
//!
//! 用户输入的搜索词在进入 LIKE 之前必须转义通配符，否则 `%` / `_`
//! 会被当成模式而不是字面量。

use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, Condition};

/// LIKE 语句使用的转义字符，查询中显式声明 `ESCAPE '\'`
pub const LIKE_ESCAPE: char = '\\';

/// 转义 LIKE 模式中的特殊字符（`\`、`%`、`_`）
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// 生成子串匹配模式 `%needle%`
pub fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like_pattern(needle))
}

/// 大小写不敏感的子串匹配
///
/// 生成 `LOWER(table.column) LIKE LOWER('%needle%') ESCAPE '\'`。
/// 列和模式都交给数据库的 LOWER 处理，两侧的大小写折叠规则一致
/// （SQLite 内置的 LOWER 只折叠 ASCII）。
pub fn ilike_contains<C: ColumnTrait>(column: C, needle: &str) -> Condition {
    Condition::all().add(Expr::cust_with_exprs(
        "$1 LIKE $2 ESCAPE $3",
        [
            Func::lower(Expr::col((column.entity_name(), column))).into(),
            Func::lower(Expr::val(contains_pattern(needle))).into(),
            Expr::val(LIKE_ESCAPE.to_string()),
        ],
    ))
}

/// 空字符串或纯空白视为未提供
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_wildcards() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("%_%"), "\\%\\_\\%");
    }

    #[test]
    fn test_escape_backslash() {
        assert_eq!(escape_like_pattern("C:\\path"), "C:\\\\path");
        assert_eq!(escape_like_pattern("end\\"), "end\\\\");
    }

    #[test]
    fn test_escape_plain_and_empty() {
        assert_eq!(escape_like_pattern(""), "");
        assert_eq!(escape_like_pattern("Algebra II"), "Algebra II");
        assert_eq!(escape_like_pattern("数学"), "数学");
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("%"), "%\\%%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" math ")), Some("math"));
    }
}
