//! 左连接列的读取
//!
//! 连接表的列统一以别名前缀选出（`sub_`、`tch_`、`dep_`），
//! 主键为 NULL 表示左连接没有匹配，对应投影为 `None`。

use sea_orm::{DbErr, EntityTrait, QueryResult, QuerySelect, Select};

use crate::entity::{departments, subjects, users};
use crate::models::{
    departments::responses::DepartmentSummary, subjects::responses::SubjectSummary,
    users::responses::TeacherSummary,
};

/// 选出科目投影列
pub(super) fn select_subject<E: EntityTrait>(select: Select<E>) -> Select<E> {
    select
        .column_as(subjects::Column::Id, "sub_id")
        .column_as(subjects::Column::DepartmentId, "sub_department_id")
        .column_as(subjects::Column::Name, "sub_name")
        .column_as(subjects::Column::Code, "sub_code")
}

/// 选出教师投影列
pub(super) fn select_teacher<E: EntityTrait>(select: Select<E>) -> Select<E> {
    select
        .column_as(users::Column::Id, "tch_id")
        .column_as(users::Column::Name, "tch_name")
        .column_as(users::Column::Email, "tch_email")
        .column_as(users::Column::Image, "tch_image")
}

/// 选出院系投影列
pub(super) fn select_department<E: EntityTrait>(select: Select<E>) -> Select<E> {
    select
        .column_as(departments::Column::Id, "dep_id")
        .column_as(departments::Column::Code, "dep_code")
        .column_as(departments::Column::Name, "dep_name")
}

pub(super) fn read_subject(res: &QueryResult) -> Result<Option<SubjectSummary>, DbErr> {
    let Some(id) = res.try_get::<Option<i64>>("", "sub_id")? else {
        return Ok(None);
    };

    Ok(Some(SubjectSummary {
        id,
        department_id: res.try_get("", "sub_department_id")?,
        name: res.try_get("", "sub_name")?,
        code: res.try_get("", "sub_code")?,
    }))
}

pub(super) fn read_teacher(res: &QueryResult) -> Result<Option<TeacherSummary>, DbErr> {
    let Some(id) = res.try_get::<Option<i64>>("", "tch_id")? else {
        return Ok(None);
    };

    Ok(Some(TeacherSummary {
        id,
        name: res.try_get("", "tch_name")?,
        email: res.try_get("", "tch_email")?,
        image: res.try_get("", "tch_image")?,
    }))
}

pub(super) fn read_department(res: &QueryResult) -> Result<Option<DepartmentSummary>, DbErr> {
    let Some(id) = res.try_get::<Option<i64>>("", "dep_id")? else {
        return Ok(None);
    };

    Ok(Some(DepartmentSummary {
        id,
        code: res.try_get("", "dep_code")?,
        name: res.try_get("", "dep_name")?,
    }))
}
