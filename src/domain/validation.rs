//! Sign-up 表单字段校验
//!
//! 校验规则与注册页面一一对应：必填、邮箱格式、密码组成、两次密码一致。
//! 所有错误都是字段级的、可恢复的，由前端内联展示，不会向上抛出。

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::signup::SignupForm;

/// 密码最小长度
pub const MIN_PASSWORD_LENGTH: usize = 8;

// 使用 lazy_static 初始化正则表达式，避免每次调用方法时都重新编译
lazy_static! {
    /// 邮箱格式正则（local@domain.tld，大小写不敏感）
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").unwrap();

    /// 大写字母
    static ref UPPER_CASE_REGEX: Regex = Regex::new(r"[A-Z]").unwrap();

    /// 小写字母
    static ref LOWER_CASE_REGEX: Regex = Regex::new(r"[a-z]").unwrap();

    /// 特殊符号，与前端提示使用同一字符集
    static ref SYMBOL_REGEX: Regex = Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).unwrap();
}

/// 密码是否包含大写字母
pub fn has_upper_case(password: &str) -> bool {
    UPPER_CASE_REGEX.is_match(password)
}

/// 密码是否包含小写字母
pub fn has_lower_case(password: &str) -> bool {
    LOWER_CASE_REGEX.is_match(password)
}

/// 密码是否包含特殊符号
pub fn has_symbol(password: &str) -> bool {
    SYMBOL_REGEX.is_match(password)
}

/// 检查邮箱格式是否有效
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// 字段级校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    Required,
    InvalidFormat,
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingSymbol,
    Mismatch,
}

impl ValidationError {
    /// 前端内联展示的提示文案
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Required => "This field is required",
            ValidationError::InvalidFormat => "Invalid email address",
            ValidationError::TooShort => "Password must be at least 8 characters long",
            ValidationError::MissingUppercase => {
                "Password must contain at least one uppercase letter"
            }
            ValidationError::MissingLowercase => {
                "Password must contain at least one lowercase letter"
            }
            ValidationError::MissingSymbol => "Password must contain at least one symbol",
            ValidationError::Mismatch => "Passwords do not match",
        }
    }
}

/// 按字段聚合的校验错误
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub first_name: Vec<ValidationError>,
    pub last_name: Vec<ValidationError>,
    pub email: Vec<ValidationError>,
    pub password: Vec<ValidationError>,
    pub confirm_password: Vec<ValidationError>,
}

impl FieldErrors {
    /// 所有字段均无错误
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
            && self.confirm_password.is_empty()
    }
}

/// 必填校验，适用于姓名字段
pub fn validate_required(value: &str) -> Vec<ValidationError> {
    if value.is_empty() {
        vec![ValidationError::Required]
    } else {
        Vec::new()
    }
}

/// 邮箱校验：先必填，再检查格式
pub fn validate_email(email: &str) -> Vec<ValidationError> {
    if email.is_empty() {
        vec![ValidationError::Required]
    } else if !is_valid_email(email) {
        vec![ValidationError::InvalidFormat]
    } else {
        Vec::new()
    }
}

/// 密码校验
///
/// 长度与三类字符规则各自独立评估，一次性全部上报，不做短路。
pub fn validate_password(password: &str) -> Vec<ValidationError> {
    if password.is_empty() {
        return vec![ValidationError::Required];
    }

    let mut errors = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(ValidationError::TooShort);
    }
    if !has_upper_case(password) {
        errors.push(ValidationError::MissingUppercase);
    }
    if !has_lower_case(password) {
        errors.push(ValidationError::MissingLowercase);
    }
    if !has_symbol(password) {
        errors.push(ValidationError::MissingSymbol);
    }
    errors
}

/// 确认密码校验：先必填，再检查与密码一致
pub fn validate_confirm_password(confirm: &str, password: &str) -> Vec<ValidationError> {
    if confirm.is_empty() {
        vec![ValidationError::Required]
    } else if confirm != password {
        vec![ValidationError::Mismatch]
    } else {
        Vec::new()
    }
}

/// 提交时对整个表单做校验，各字段互相独立
pub fn validate_form(form: &SignupForm) -> FieldErrors {
    FieldErrors {
        first_name: validate_required(form.first_name()),
        last_name: validate_required(form.last_name()),
        email: validate_email(form.email()),
        password: validate_password(form.password()),
        confirm_password: validate_confirm_password(form.confirm_password(), form.password()),
    }
}
