use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级状态
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum ClassStatus {
    Draft, // 草稿
    #[default]
    Active, // 开放中
    Archived, // 已归档
}

impl ClassStatus {
    pub const DRAFT: &'static str = "draft";
    pub const ACTIVE: &'static str = "active";
    pub const ARCHIVED: &'static str = "archived";
}

impl<'de> Deserialize<'de> for ClassStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ClassStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid class status: '{s}'. supported: draft, active, archived"
            ))
        })
    }
}

impl std::fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassStatus::Draft => write!(f, "{}", ClassStatus::DRAFT),
            ClassStatus::Active => write!(f, "{}", ClassStatus::ACTIVE),
            ClassStatus::Archived => write!(f, "{}", ClassStatus::ARCHIVED),
        }
    }
}

impl std::str::FromStr for ClassStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ClassStatus::DRAFT => Ok(ClassStatus::Draft),
            ClassStatus::ACTIVE => Ok(ClassStatus::Active),
            ClassStatus::ARCHIVED => Ok(ClassStatus::Archived),
            _ => Err(format!("Invalid class status: {s}")),
        }
    }
}

// 上课时间段
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassSchedule {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 邀请码
    pub invite_code: String,
    // 教师ID
    pub teacher_id: Option<i64>,
    // 科目ID
    pub subject_id: Option<i64>,
    // 容量
    pub capacity: i32,
    // 班级描述
    pub description: Option<String>,
    pub status: ClassStatus,
    pub banner_url: Option<String>,
    pub banner_cld_pub_id: Option<String>,
    pub schedules: Vec<ClassSchedule>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_str() {
        for status in [ClassStatus::Draft, ClassStatus::Active, ClassStatus::Archived] {
            assert_eq!(status.to_string().parse::<ClassStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("closed".parse::<ClassStatus>().is_err());
        let err = serde_json::from_str::<ClassStatus>("\"closed\"").unwrap_err();
        assert!(err.to_string().contains("invalid class status"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ClassStatus::Archived).unwrap(),
            "\"archived\""
        );
        assert_eq!(ClassStatus::default(), ClassStatus::Active);
    }
}
