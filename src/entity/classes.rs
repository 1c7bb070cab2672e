//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub invite_code: String,
    pub teacher_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub capacity: i32,
    pub description: Option<String>,
    pub status: String,
    pub banner_url: Option<String>,
    pub banner_cld_pub_id: Option<String>,
    pub schedules: Json,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        use crate::models::classes::entities::{Class, ClassStatus};
        use chrono::{DateTime, Utc};

        Class {
            id: self.id,
            name: self.name,
            invite_code: self.invite_code,
            teacher_id: self.teacher_id,
            subject_id: self.subject_id,
            capacity: self.capacity,
            description: self.description,
            status: self
                .status
                .parse::<ClassStatus>()
                .unwrap_or(ClassStatus::Active),
            banner_url: self.banner_url,
            banner_cld_pub_id: self.banner_cld_pub_id,
            schedules: serde_json::from_value(self.schedules).unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
