//! 用户存储操作（只读，用户由身份服务写入）

use super::SeaOrmStorage;
use super::filters::UserFilter;
use crate::entity::users::{Column, Entity as Users};
use crate::errors::{ClassHubError, Result};
use crate::models::{
    PaginationInfo,
    users::{entities::User, requests::UserListQuery, responses::UserListResponse},
};
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let window = query.window;
        let filter = UserFilter::from_query(&query);

        let mut select = Users::find();
        if !filter.is_empty() {
            select = select.filter(filter.condition());
        }

        let total = select
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询用户总数失败: {e}")))?;

        let users = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .offset(window.offset)
            .limit(window.limit)
            .all(&self.db)
            .await
            .map_err(|e| ClassHubError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(UserListResponse {
            data: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo::new(window, total),
        })
    }
}
