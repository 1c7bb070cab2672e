use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::classes::requests::CreateClassRequest;
use crate::models::departments::requests::CreateDepartmentRequest;
use crate::models::subjects::requests::CreateSubjectRequest;

pub const MAX_NAME_LENGTH: usize = 255;
pub const DEFAULT_CLASS_CAPACITY: i32 = 50;
pub const MAX_CLASS_CAPACITY: i32 = 1000;

static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/?#]+[^\s]*$").expect("Invalid url regex"));

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,50}$").expect("Invalid code regex"));

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name must not be empty");
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err("Name must be at most 255 characters");
    }
    Ok(())
}

pub fn validate_capacity(capacity: i32) -> Result<(), &'static str> {
    // 容量校验：1 <= x <= 1000
    if !(1..=MAX_CLASS_CAPACITY).contains(&capacity) {
        return Err("Capacity must be between 1 and 1000");
    }
    Ok(())
}

pub fn validate_banner_url(url: &str) -> Result<(), &'static str> {
    if !HTTP_URL_RE.is_match(url) {
        return Err("Banner URL must be an http(s) URL");
    }
    Ok(())
}

pub fn validate_code(code: &str) -> Result<(), &'static str> {
    // 代码格式校验：只能包含字母、数字、下划线或连字符
    if !CODE_RE.is_match(code) {
        return Err("Code must be 1-50 letters, numbers, underscores or hyphens");
    }
    Ok(())
}

/// 校验创建班级请求，返回所有不合法的字段说明
pub fn validate_create_class(req: &CreateClassRequest) -> Result<(), String> {
    let mut errors = Vec::new();

    if let Err(e) = validate_name(&req.name) {
        errors.push(e);
    }
    if let Err(e) = validate_capacity(req.capacity.unwrap_or(DEFAULT_CLASS_CAPACITY)) {
        errors.push(e);
    }
    if let Some(url) = req.banner_url.as_deref()
        && let Err(e) = validate_banner_url(url)
    {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

pub fn validate_create_subject(req: &CreateSubjectRequest) -> Result<(), String> {
    let errors: Vec<&str> = [validate_name(&req.name), validate_code(&req.code)]
        .into_iter()
        .filter_map(Result::err)
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

pub fn validate_create_department(req: &CreateDepartmentRequest) -> Result<(), String> {
    let errors: Vec<&str> = [validate_name(&req.name), validate_code(&req.code)]
        .into_iter()
        .filter_map(Result::err)
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_request(name: &str) -> CreateClassRequest {
        CreateClassRequest {
            name: name.to_string(),
            teacher_id: None,
            subject_id: None,
            capacity: None,
            description: None,
            status: None,
            banner_url: None,
            banner_cld_pub_id: None,
        }
    }

    #[test]
    fn test_minimal_class_is_valid() {
        assert!(validate_create_class(&class_request("Physics 101")).is_ok());
    }

    #[test]
    fn test_blank_name() {
        let err = validate_create_class(&class_request("   ")).unwrap_err();
        assert!(err.contains("Name must not be empty"));
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(validate_capacity(0).is_err());
        assert!(validate_capacity(-1).is_err());
        assert!(validate_capacity(1).is_ok());
        assert!(validate_capacity(1000).is_ok());
        assert!(validate_capacity(1001).is_err());
    }

    #[test]
    fn test_errors_are_joined() {
        let mut req = class_request("");
        req.capacity = Some(0);
        req.banner_url = Some("ftp://example.com/banner.png".into());
        let err = validate_create_class(&req).unwrap_err();
        assert_eq!(err.matches("; ").count(), 2);
    }

    #[test]
    fn test_banner_url() {
        assert!(validate_banner_url("https://res.cloudinary.com/demo/banner.png").is_ok());
        assert!(validate_banner_url("http://localhost:8000/a.png").is_ok());
        assert!(validate_banner_url("javascript:alert(1)").is_err());
        assert!(validate_banner_url("https://").is_err());
    }

    #[test]
    fn test_code() {
        assert!(validate_code("CS-101").is_ok());
        assert!(validate_code("MATH_2").is_ok());
        assert!(validate_code("").is_err());
        assert!(validate_code("has space").is_err());
    }
}
