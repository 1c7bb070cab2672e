//! 列表查询的过滤条件
//!
//! 每个过滤器把可选的查询参数折叠成一个 `Condition::all()`，
//! 计数查询和分页查询共用同一个条件，避免两边不一致。

use sea_orm::{ColumnTrait, Condition};

use crate::entity::{classes, departments, subjects, users};
use crate::models::{
    classes::requests::ClassListQuery, departments::requests::DepartmentListQuery,
    subjects::requests::SubjectListQuery, users::entities::UserRole,
    users::requests::UserListQuery,
};
use crate::utils::{ilike_contains, non_blank};

/// 班级列表过滤
///
/// - `search`: 班级名称 OR 邀请码
/// - `subject`: 左连接的科目名称
/// - `teacher`: 左连接的教师姓名
#[derive(Debug, Clone, Default)]
pub struct ClassFilter<'a> {
    pub search: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub teacher: Option<&'a str>,
}

impl<'a> ClassFilter<'a> {
    pub fn from_query(query: &'a ClassListQuery) -> Self {
        Self {
            search: non_blank(query.search.as_deref()),
            subject: non_blank(query.subject.as_deref()),
            teacher: non_blank(query.teacher.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.subject.is_none() && self.teacher.is_none()
    }

    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all();

        if let Some(search) = self.search {
            cond = cond.add(
                Condition::any()
                    .add(ilike_contains(classes::Column::Name, search))
                    .add(ilike_contains(classes::Column::InviteCode, search)),
            );
        }
        if let Some(subject) = self.subject {
            cond = cond.add(ilike_contains(subjects::Column::Name, subject));
        }
        if let Some(teacher) = self.teacher {
            cond = cond.add(ilike_contains(users::Column::Name, teacher));
        }

        cond
    }
}

/// 科目列表过滤
#[derive(Debug, Clone, Default)]
pub struct SubjectFilter<'a> {
    pub search: Option<&'a str>,
    pub department: Option<&'a str>,
}

impl<'a> SubjectFilter<'a> {
    pub fn from_query(query: &'a SubjectListQuery) -> Self {
        Self {
            search: non_blank(query.search.as_deref()),
            department: non_blank(query.department.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.department.is_none()
    }

    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all();

        if let Some(search) = self.search {
            cond = cond.add(
                Condition::any()
                    .add(ilike_contains(subjects::Column::Name, search))
                    .add(ilike_contains(subjects::Column::Code, search)),
            );
        }
        if let Some(department) = self.department {
            cond = cond.add(ilike_contains(departments::Column::Name, department));
        }

        cond
    }
}

/// 院系列表过滤
#[derive(Debug, Clone, Default)]
pub struct DepartmentFilter<'a> {
    pub search: Option<&'a str>,
}

impl<'a> DepartmentFilter<'a> {
    pub fn from_query(query: &'a DepartmentListQuery) -> Self {
        Self {
            search: non_blank(query.search.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none()
    }

    pub fn condition(&self) -> Condition {
        match self.search {
            Some(search) => Condition::all().add(
                Condition::any()
                    .add(ilike_contains(departments::Column::Name, search))
                    .add(ilike_contains(departments::Column::Code, search)),
            ),
            None => Condition::all(),
        }
    }
}

/// 用户列表过滤
#[derive(Debug, Clone, Default)]
pub struct UserFilter<'a> {
    pub search: Option<&'a str>,
    pub role: Option<UserRole>,
}

impl<'a> UserFilter<'a> {
    pub fn from_query(query: &'a UserListQuery) -> Self {
        Self {
            search: non_blank(query.search.as_deref()),
            role: query.role,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.role.is_none()
    }

    pub fn condition(&self) -> Condition {
        let mut cond = Condition::all();

        if let Some(search) = self.search {
            cond = cond.add(
                Condition::any()
                    .add(ilike_contains(users::Column::Name, search))
                    .add(ilike_contains(users::Column::Email, search)),
            );
        }
        if let Some(role) = self.role {
            cond = cond.add(users::Column::Role.eq(role.to_string()));
        }

        cond
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{
        DbBackend, EntityTrait, JoinType, QueryFilter, QuerySelect, QueryTrait, RelationTrait,
    };

    fn class_query(
        search: Option<&str>,
        subject: Option<&str>,
        teacher: Option<&str>,
    ) -> ClassListQuery {
        ClassListQuery {
            search: search.map(String::from),
            subject: subject.map(String::from),
            teacher: teacher.map(String::from),
            ..Default::default()
        }
    }

    fn class_sql(filter: &ClassFilter<'_>) -> String {
        let mut select = classes::Entity::find()
            .join(JoinType::LeftJoin, classes::Relation::Subject.def())
            .join(JoinType::LeftJoin, classes::Relation::Teacher.def());
        if !filter.is_empty() {
            select = select.filter(filter.condition());
        }
        select.build(DbBackend::Sqlite).to_string()
    }

    #[test]
    fn test_empty_filter_has_no_where() {
        let query = class_query(None, Some("  "), Some(""));
        let filter = ClassFilter::from_query(&query);
        assert!(filter.is_empty());

        let sql = class_sql(&filter);
        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("LEFT JOIN \"subjects\""));
        assert!(sql.contains("LEFT JOIN \"users\""));
    }

    #[test]
    fn test_search_matches_name_or_invite_code() {
        let query = class_query(Some("ABC"), None, None);
        let sql = class_sql(&ClassFilter::from_query(&query));

        assert!(sql.contains("LOWER(\"classes\".\"name\") LIKE LOWER('%ABC%')"));
        assert!(sql.contains("LOWER(\"classes\".\"invite_code\") LIKE LOWER('%ABC%')"));
        assert!(sql.contains(" OR "));
        assert!(sql.contains("ESCAPE"));
    }

    #[test]
    fn test_categories_are_conjoined() {
        let query = class_query(Some("bio"), Some("Biology"), Some("Ada"));
        let sql = class_sql(&ClassFilter::from_query(&query));

        assert!(sql.contains("LOWER(\"subjects\".\"name\") LIKE LOWER('%Biology%')"));
        assert!(sql.contains("LOWER(\"users\".\"name\") LIKE LOWER('%Ada%')"));
        assert!(sql.matches(" AND ").count() >= 2);
    }

    #[test]
    fn test_wildcards_are_escaped() {
        let query = class_query(None, Some("%"), Some("a_b"));
        let filter = ClassFilter::from_query(&query);
        let sql = class_sql(&filter);

        assert!(!sql.contains("LIKE '%%%'"));
        assert!(sql.contains("\\%"));
        assert!(sql.contains("\\_b"));
    }

    #[test]
    fn test_postgres_rendering_uses_lower() {
        let query = class_query(Some("x"), None, None);
        let sql = classes::Entity::find()
            .filter(ClassFilter::from_query(&query).condition())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains("LOWER(\"classes\".\"name\")"));
        assert!(sql.contains("ESCAPE"));
    }

    #[test]
    fn test_subject_filter_joins_department_name() {
        let query = SubjectListQuery {
            department: Some("Science".into()),
            ..Default::default()
        };
        let filter = SubjectFilter::from_query(&query);
        let sql = subjects::Entity::find()
            .join(JoinType::LeftJoin, subjects::Relation::Department.def())
            .filter(filter.condition())
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("LOWER(\"departments\".\"name\") LIKE LOWER('%Science%')"));
    }

    #[test]
    fn test_department_filter() {
        let empty = DepartmentListQuery::default();
        assert!(DepartmentFilter::from_query(&empty).is_empty());

        let query = DepartmentListQuery {
            search: Some("CS".into()),
            ..Default::default()
        };
        let sql = departments::Entity::find()
            .filter(DepartmentFilter::from_query(&query).condition())
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("LOWER(\"departments\".\"code\") LIKE LOWER('%CS%')"));
    }

    #[test]
    fn test_user_role_filter() {
        let query = UserListQuery {
            role: Some(UserRole::Teacher),
            ..Default::default()
        };
        let filter = UserFilter::from_query(&query);
        assert!(!filter.is_empty());

        let sql = users::Entity::find()
            .filter(filter.condition())
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("\"users\".\"role\" = 'teacher'"));
    }
}
