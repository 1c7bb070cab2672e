//! 班级存储操作

use super::SeaOrmStorage;
use super::filters::ClassFilter;
use super::projections::{
    read_department, read_subject, read_teacher, select_department, select_subject,
    select_teacher,
};
use crate::entity::classes::{self, ActiveModel, Column, Entity as Classes};
use crate::entity::subjects;
use crate::errors::{ClassHubError, Result};
use crate::models::{
    PaginationInfo,
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest},
        responses::{ClassDetail, ClassListItem, ClassListResponse},
    },
    departments::responses::DepartmentSummary,
    subjects::responses::SubjectSummary,
    users::responses::TeacherSummary,
};
use crate::utils::random_code::generate_random_code;
use crate::utils::validate::DEFAULT_CLASS_CAPACITY;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QueryResult, QuerySelect, RelationTrait, Select, Set,
};
use tracing::warn;

pub(crate) const INVITE_CODE_LENGTH: usize = 8;
// 邀请码碰撞时的最大插入次数
const INVITE_CODE_ATTEMPTS: usize = 3;

// 列表行：班级 + 科目 + 教师
struct ClassListRow {
    class: classes::Model,
    subject: Option<SubjectSummary>,
    teacher: Option<TeacherSummary>,
}

impl FromQueryResult for ClassListRow {
    fn from_query_result(res: &QueryResult, pre: &str) -> std::result::Result<Self, DbErr> {
        Ok(Self {
            class: classes::Model::from_query_result(res, pre)?,
            subject: read_subject(res)?,
            teacher: read_teacher(res)?,
        })
    }
}

impl From<ClassListRow> for ClassListItem {
    fn from(row: ClassListRow) -> Self {
        Self {
            class: row.class.into_class(),
            subject: row.subject,
            teacher: row.teacher,
        }
    }
}

// 详情行：在列表行基础上多出科目所属院系
struct ClassDetailRow {
    class: classes::Model,
    subject: Option<SubjectSummary>,
    department: Option<DepartmentSummary>,
    teacher: Option<TeacherSummary>,
}

impl FromQueryResult for ClassDetailRow {
    fn from_query_result(res: &QueryResult, pre: &str) -> std::result::Result<Self, DbErr> {
        Ok(Self {
            class: classes::Model::from_query_result(res, pre)?,
            subject: read_subject(res)?,
            department: read_department(res)?,
            teacher: read_teacher(res)?,
        })
    }
}

impl From<ClassDetailRow> for ClassDetail {
    fn from(row: ClassDetailRow) -> Self {
        Self {
            class: row.class.into_class(),
            subject: row.subject,
            department: row.department,
            teacher: row.teacher,
        }
    }
}

/// 班级左连接科目、教师，并应用过滤条件
///
/// 计数和分页必须都从这里构造，保证两者的谓词完全一致。
fn joined_select(filter: &ClassFilter<'_>) -> Select<Classes> {
    let select = Classes::find()
        .join(JoinType::LeftJoin, classes::Relation::Subject.def())
        .join(JoinType::LeftJoin, classes::Relation::Teacher.def());

    if filter.is_empty() {
        select
    } else {
        select.filter(filter.condition())
    }
}

impl SeaOrmStorage {
    /// 创建班级
    ///
    /// 邀请码依赖唯一索引去重，碰撞时重新生成。
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let mut attempt = 1;
        loop {
            let invite_code = generate_random_code(INVITE_CODE_LENGTH);
            match self.insert_class(&req, invite_code).await {
                Err(e) if e.is_unique_violation() && attempt < INVITE_CODE_ATTEMPTS => {
                    warn!("邀请码冲突，重新生成 (第 {} 次): {}", attempt, e.message());
                    attempt += 1;
                }
                Err(e) if e.is_unique_violation() => {
                    return Err(ClassHubError::database_operation(format!(
                        "创建班级失败: 邀请码连续冲突 {attempt} 次"
                    )));
                }
                result => return result,
            }
        }
    }

    async fn insert_class(&self, req: &CreateClassRequest, invite_code: String) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            invite_code: Set(invite_code),
            teacher_id: Set(req.teacher_id),
            subject_id: Set(req.subject_id),
            capacity: Set(req.capacity.unwrap_or(DEFAULT_CLASS_CAPACITY)),
            description: Set(req.description.clone()),
            status: Set(req.status.unwrap_or_default().to_string()),
            banner_url: Set(req.banner_url.clone()),
            banner_cld_pub_id: Set(req.banner_cld_pub_id.clone()),
            // 新建班级没有课表
            schedules: Set(serde_json::json!([])),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            let err = ClassHubError::from(e);
            if err.is_unique_violation() {
                err
            } else {
                ClassHubError::database_operation(format!("创建班级失败: {}", err.message()))
            }
        })?;

        Ok(result.into_class())
    }

    /// 获取班级详情（科目、院系、教师）
    pub async fn get_class_detail_impl(&self, class_id: i64) -> Result<Option<ClassDetail>> {
        let select = joined_select(&ClassFilter::default())
            .join(JoinType::LeftJoin, subjects::Relation::Department.def())
            .filter(Column::Id.eq(class_id));
        let select = select_teacher(select_department(select_subject(select)));

        let row = select
            .into_model::<ClassDetailRow>()
            .one(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询班级详情失败: {e}")))?;

        Ok(row.map(ClassDetail::from))
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let window = query.window;
        let filter = ClassFilter::from_query(&query);

        let total = joined_select(&filter)
            .count(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询班级总数失败: {e}")))?;

        let select = select_teacher(select_subject(joined_select(&filter)));
        let rows = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .into_model::<ClassListRow>()
            .all(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(ClassListResponse {
            data: rows.into_iter().map(ClassListItem::from).collect(),
            pagination: PaginationInfo::new(window, total),
        })
    }
}
