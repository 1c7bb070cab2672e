//! 请求参数提取器
//!
//! 非整数的 ID 直接在提取阶段返回 400，处理函数只会拿到合法的 i64。
//! 查询字符串中重复出现的参数只保留第一次出现的值。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse,
    dev::Payload,
    error::{InternalError, QueryPayloadError},
    web,
};
use futures_util::future::{Ready, ready};
use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

use super::parameter_error_handler::query_error_handler;
use crate::models::{ErrorCode, ErrorResponse};

fn parse_path_i64(req: &HttpRequest, param: &str) -> Result<i64, String> {
    let raw = req.match_info().get(param).unwrap_or_default();
    raw.trim().parse::<i64>().map_err(|_| raw.to_string())
}

fn invalid_id_error(label: &str, raw: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        ErrorCode::InvalidIdentifier,
        format!("Invalid {label} id"),
    ));
    InternalError::from_response(format!("invalid {label} id: '{raw}'"), response).into()
}

macro_rules! define_safe_i64_extractors {
    ($($name:ident($param:literal, $label:literal)),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(
                        parse_path_i64(req, $param)
                            .map($name)
                            .map_err(|raw| invalid_id_error($label, &raw)),
                    )
                }
            }
        )*
    };
}

define_safe_i64_extractors! {
    SafeClassIdI64("class_id", "class"),
    SafeSubjectIdI64("subject_id", "subject"),
    SafeDepartmentIdI64("department_id", "department"),
    SafeUserIdI64("user_id", "user"),
}

/// 查询参数提取器
///
/// 与 `web::Query` 不同，`?page=1&page=2` 这样的重复参数不会被拒绝，
/// 取第一次出现的值。解析失败时仍返回统一的 400 响应。
#[derive(Debug, Clone)]
pub struct FirstValueQuery<T>(pub T);

impl<T> FirstValueQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }

    /// 从原始查询字符串解析
    pub fn from_query(query: &str) -> Result<Self, QueryPayloadError>
    where
        T: DeserializeOwned,
    {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)?.into_inner();

        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(fields))
            .map(FirstValueQuery)
            .map_err(|e| QueryPayloadError::Deserialize(serde::de::value::Error::custom(e)))
    }
}

impl<T: DeserializeOwned> FromRequest for FirstValueQuery<T> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_query(req.query_string()).map_err(|e| query_error_handler(e, req)))
    }
}
