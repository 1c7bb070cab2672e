use std::sync::Arc;

use crate::models::{
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest},
        responses::{ClassDetail, ClassListResponse},
    },
    departments::{
        entities::Department,
        requests::{CreateDepartmentRequest, DepartmentListQuery},
        responses::DepartmentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery},
        responses::{SubjectListResponse, SubjectWithDepartment},
    },
    users::{entities::User, requests::UserListQuery, responses::UserListResponse},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 班级管理方法
    // 创建班级（自动生成邀请码）
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级详情（科目、院系、教师）
    async fn get_class_detail(&self, class_id: i64) -> Result<Option<ClassDetail>>;
    // 列出班级（过滤 + 分页）
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<SubjectWithDepartment>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;

    /// 院系管理方法
    async fn create_department(&self, department: CreateDepartmentRequest)
    -> Result<Department>;
    async fn get_department_by_id(&self, department_id: i64) -> Result<Option<Department>>;
    async fn list_departments_with_pagination(
        &self,
        query: DepartmentListQuery,
    ) -> Result<DepartmentListResponse>;

    /// 用户查询方法（用户由身份服务创建）
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
