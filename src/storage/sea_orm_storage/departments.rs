//! 院系存储操作

use super::SeaOrmStorage;
use super::filters::DepartmentFilter;
use crate::entity::departments::{ActiveModel, Column, Entity as Departments};
use crate::errors::{ClassHubError, Result};
use crate::models::{
    PaginationInfo,
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery},
        responses::DepartmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建院系
    pub async fn create_department_impl(&self, req: CreateDepartmentRequest) -> Result<Department> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(req.code),
            name: Set(req.name.trim().to_string()),
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
                err => ClassHubError::database_operation(format!("创建院系失败: {}", err.message())),
            })?;

        Ok(result.into_department())
    }

    /// 通过 ID 获取院系
    pub async fn get_department_by_id_impl(&self, department_id: i64) -> Result<Option<Department>> {
        let result = Departments::find_by_id(department_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询院系失败: {e}")))?;

        Ok(result.map(|m| m.into_department()))
    }

    /// 分页列出院系
    pub async fn list_departments_with_pagination_impl(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse> {
        let window = query.window;
        let filter = DepartmentFilter::from_query(&query);

        let mut select = Departments::find();
        if !filter.is_empty() {
            select = select.filter(filter.condition());
        }

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询院系总数失败: {e}")))?;

        let departments = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .all(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询院系列表失败: {e}")))?;

        Ok(DepartmentListResponse {
            data: departments.into_iter().map(|m| m.into_department()).collect(),
            pagination: PaginationInfo::new(window, total),
        })
    }
}
