//! Sign-up 表单命令
//!
//! 注册页面的输入与提交事件都通过这里的命令进入 Rust 侧，
//! 命令按到达顺序同步处理，返回值由前端直接渲染。

use std::str::FromStr;
use std::sync::Arc;

use tauri::State;

use crate::application::signup_service::{
    SignupFormView, SignupService, SubmitOutcome, ValidationOutcome,
};
use crate::domain::signup::SignupField;
use crate::error::AppError;

/// Type alias for the managed SignupService state
type SignupState = Arc<SignupService>;

/// 解析前端传来的字段名，未知字段直接拒绝
fn parse_field(field: &str) -> Result<SignupField, String> {
    SignupField::from_str(field)
        .map_err(|_| AppError::validation(format!("未知的表单字段: {}", field)).into())
}

/// 获取当前表单视图
#[tauri::command]
pub fn get_signup_form(state: State<'_, SignupState>) -> Result<SignupFormView, String> {
    state.form_view().map_err(|e| e.to_string())
}

/// 更新单个表单字段
///
/// `field` 为前端的 camelCase 字段名；更新密码时返回的视图中
/// 已带有重新计算后的密码组成条件。
#[tauri::command]
pub fn update_signup_field(
    state: State<'_, SignupState>,
    field: String,
    value: String,
) -> Result<SignupFormView, String> {
    let field = parse_field(&field)?;
    state.update_field(field, value).map_err(|e| e.to_string())
}

/// 提交时校验，不触发提交
#[tauri::command]
pub fn validate_signup_form(state: State<'_, SignupState>) -> Result<ValidationOutcome, String> {
    state.validate().map_err(|e| e.to_string())
}

/// 校验并提交表单
///
/// 校验失败时返回字段错误并阻断提交；校验通过则把载荷
/// 移交注册服务并清空表单。
#[tauri::command]
pub async fn submit_signup(state: State<'_, SignupState>) -> Result<SubmitOutcome, String> {
    state.submit().await.map_err(|e| e.to_string())
}

/// 重置表单
#[tauri::command]
pub fn reset_signup_form(state: State<'_, SignupState>) -> Result<(), String> {
    state.reset().map_err(|e| e.to_string())
}
