//! 科目存储操作

use super::SeaOrmStorage;
use super::filters::SubjectFilter;
use super::projections::{read_department, select_department};
use crate::entity::subjects::{self, ActiveModel, Column, Entity as Subjects};
use crate::errors::{ClassHubError, Result};
use crate::models::{
    PaginationInfo,
    departments::responses::DepartmentSummary,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery},
        responses::{SubjectListResponse, SubjectWithDepartment},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QueryResult, QuerySelect, RelationTrait, Select, Set,
};

struct SubjectRow {
    subject: subjects::Model,
    department: Option<DepartmentSummary>,
}

impl FromQueryResult for SubjectRow {
    fn from_query_result(res: &QueryResult, pre: &str) -> std::result::Result<Self, DbErr> {
        Ok(Self {
            subject: subjects::Model::from_query_result(res, pre)?,
            department: read_department(res)?,
        })
    }
}

impl From<SubjectRow> for SubjectWithDepartment {
    fn from(row: SubjectRow) -> Self {
        Self {
            subject: row.subject.into_subject(),
            department: row.department,
        }
    }
}

fn joined_select(filter: &SubjectFilter<'_>) -> Select<Subjects> {
    let select =
        Subjects::find().join(JoinType::LeftJoin, subjects::Relation::Department.def());

    if filter.is_empty() {
        select
    } else {
        select.filter(filter.condition())
    }
}

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            department_id: Set(req.department_id),
            name: Set(req.name.trim().to_string()),
            code: Set(req.code),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| match ClassHubError::from(e) {
                // 代码重复交给服务层返回 409
                err if err.is_unique_violation() => err,
                err => ClassHubError::database_operation(format!("创建科目失败: {}", err.message())),
            })?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目（附带院系）
    pub async fn get_subject_by_id_impl(
        &self,
        subject_id: i64,
    ) -> Result<Option<SubjectWithDepartment>> {
        let row = select_department(joined_select(&SubjectFilter::default()))
            .filter(Column::Id.eq(subject_id))
            .into_model::<SubjectRow>()
            .one(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(row.map(SubjectWithDepartment::from))
    }

    /// 分页列出科目
    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let window = query.window;
        let filter = SubjectFilter::from_query(&query);

        let total = joined_select(&filter)
            .count(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询科目总数失败: {e}")))?;

        let rows = select_department(joined_select(&filter))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .into_model::<SubjectRow>()
            .all(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(SubjectListResponse {
            data: rows.into_iter().map(SubjectWithDepartment::from).collect(),
            pagination: PaginationInfo::new(window, total),
        })
    }
}
