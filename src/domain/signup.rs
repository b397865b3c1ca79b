//! 注册表单状态
//!
//! 表单状态仅存在于内存中，生命周期与渲染出的注册页面一致：
//! 挂载时创建，每次输入事件更新，离开页面或提交成功后丢弃。

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::validation::{has_lower_case, has_symbol, has_upper_case};

/// 注册表单的可编辑字段
///
/// 字段名与前端使用的 camelCase 名称一一对应。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl FromStr for SignupField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(SignupField::FirstName),
            "lastName" => Ok(SignupField::LastName),
            "email" => Ok(SignupField::Email),
            "password" => Ok(SignupField::Password),
            "confirmPassword" => Ok(SignupField::ConfirmPassword),
            _ => Err(()),
        }
    }
}

impl Display for SignupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignupField::FirstName => "firstName",
            SignupField::LastName => "lastName",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
        };
        write!(f, "{}", name)
    }
}

/// 密码组成条件
///
/// 仅用于前端实时高亮提示，不直接作为独立字段参与提交校验。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordConditions {
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_symbol: bool,
}

impl PasswordConditions {
    /// 根据当前密码计算全部条件，纯函数，无副作用
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_upper_case: has_upper_case(password),
            has_lower_case: has_lower_case(password),
            has_symbol: has_symbol(password),
        }
    }
}

/// 注册表单状态
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    // 不变量: conditions 始终等于 PasswordConditions::evaluate(password)
    conditions: PasswordConditions,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 更新单个字段
    ///
    /// 更新密码时同步重算组成条件，保证提示实时、不漂移，
    /// 与提交时校验是否执行无关。
    pub fn set_field(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::FirstName => self.first_name = value,
            SignupField::LastName => self.last_name = value,
            SignupField::Email => self.email = value,
            SignupField::Password => {
                self.password = value;
                self.conditions = PasswordConditions::evaluate(&self.password);
            }
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn conditions(&self) -> PasswordConditions {
        self.conditions
    }

    /// 清空表单，回到初始挂载状态
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// 构造提交给注册服务的载荷，confirmPassword 不外传
    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// 提交给账号注册服务的载荷
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

// 密码不进入日志
impl fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str() {
        assert_eq!("firstName".parse(), Ok(SignupField::FirstName));
        assert_eq!("confirmPassword".parse(), Ok(SignupField::ConfirmPassword));
        assert!("birthday".parse::<SignupField>().is_err());
    }

    #[test]
    fn test_field_display_roundtrip() {
        for field in [
            SignupField::FirstName,
            SignupField::LastName,
            SignupField::Email,
            SignupField::Password,
            SignupField::ConfirmPassword,
        ] {
            assert_eq!(field.to_string().parse(), Ok(field));
        }
    }

    #[test]
    fn test_conditions_track_password_changes() {
        let mut form = SignupForm::new();
        assert_eq!(form.conditions(), PasswordConditions::default());

        form.set_field(SignupField::Password, "abc".to_string());
        assert_eq!(
            form.conditions(),
            PasswordConditions {
                has_upper_case: false,
                has_lower_case: true,
                has_symbol: false,
            }
        );

        form.set_field(SignupField::Password, "Abc!".to_string());
        assert_eq!(
            form.conditions(),
            PasswordConditions {
                has_upper_case: true,
                has_lower_case: true,
                has_symbol: true,
            }
        );

        // 清空密码后条件全部复位
        form.set_field(SignupField::Password, String::new());
        assert_eq!(form.conditions(), PasswordConditions::default());
    }

    #[test]
    fn test_conditions_are_pure_function_of_password() {
        let mut form = SignupForm::new();
        for password in ["", "abc", "ABC", "Abc", "Abc!", "ABC!", "!!!", "密码Aa!"] {
            form.set_field(SignupField::Password, password.to_string());
            assert_eq!(form.conditions(), PasswordConditions::evaluate(password));
        }
    }

    #[test]
    fn test_other_fields_do_not_touch_conditions() {
        let mut form = SignupForm::new();
        form.set_field(SignupField::Password, "Abc!".to_string());
        let conditions = form.conditions();

        form.set_field(SignupField::FirstName, "Ada".to_string());
        form.set_field(SignupField::ConfirmPassword, "Abc!".to_string());
        assert_eq!(form.conditions(), conditions);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = SignupForm::new();
        form.set_field(SignupField::FirstName, "Ada".to_string());
        form.set_field(SignupField::Password, "Strong1!".to_string());
        form.clear();

        assert_eq!(form.first_name(), "");
        assert_eq!(form.password(), "");
        assert_eq!(form.conditions(), PasswordConditions::default());
    }

    #[test]
    fn test_payload_excludes_confirm_password() {
        let mut form = SignupForm::new();
        form.set_field(SignupField::FirstName, "Ada".to_string());
        form.set_field(SignupField::LastName, "Lovelace".to_string());
        form.set_field(SignupField::Email, "ada@example.com".to_string());
        form.set_field(SignupField::Password, "Strong1!".to_string());
        form.set_field(SignupField::ConfirmPassword, "Strong1!".to_string());

        let payload = form.payload();
        assert_eq!(payload.first_name, "Ada");
        assert_eq!(payload.last_name, "Lovelace");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.password, "Strong1!");
    }

    #[test]
    fn test_payload_debug_masks_password() {
        let payload = RegistrationPayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Strong1!".to_string(),
        };
        let debug = format!("{:?}", payload);
        assert!(debug.contains("ada@example.com"));
        assert!(!debug.contains("Strong1!"));
    }
}
