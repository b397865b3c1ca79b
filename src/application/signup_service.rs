//! Sign-up 表单控制器
//!
//! 持有注册页面的表单状态：字段更新、提交时校验、提交移交。
//! 每个输入事件都是一次同步调用，处理完成后才会处理下一个事件，
//! 不存在跨线程共享的可变状态（Mutex 仅满足 Tauri 托管状态的要求）。

use std::sync::{Arc, Mutex, MutexGuard};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::application::registration_service::RegistrationService;
use crate::domain::signup::{PasswordConditions, SignupField, SignupForm};
use crate::domain::validation::{validate_form, FieldErrors};
use crate::error::{AppError, Result};

/// 表单视图，返回给前端渲染
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFormView {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// 密码组成条件，随密码输入实时更新
    pub conditions: PasswordConditions,
}

/// 提交时校验结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub valid: bool,
    pub errors: FieldErrors,
}

/// 提交结果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    /// 载荷是否已移交注册服务
    pub submitted: bool,
    /// 提交成功时的 submission id
    pub submission_id: Option<String>,
    /// 阻断提交的字段错误
    pub errors: FieldErrors,
}

/// Sign-up 表单服务
pub struct SignupService {
    form: Mutex<SignupForm>,
    registration: Arc<dyn RegistrationService>,
}

impl SignupService {
    pub fn new(registration: Arc<dyn RegistrationService>) -> Self {
        Self {
            form: Mutex::new(SignupForm::new()),
            registration,
        }
    }

    fn lock_form(&self) -> Result<MutexGuard<'_, SignupForm>> {
        self.form
            .lock()
            .map_err(|e| AppError::internal(format!("Failed to acquire form lock: {}", e)))
    }

    /// 更新单个字段并返回最新视图
    pub fn update_field(&self, field: SignupField, value: String) -> Result<SignupFormView> {
        let mut form = self.lock_form()?;
        form.set_field(field, value);
        Ok(Self::view_of(&form))
    }

    /// 当前表单视图
    pub fn form_view(&self) -> Result<SignupFormView> {
        let form = self.lock_form()?;
        Ok(Self::view_of(&form))
    }

    /// 提交时校验，不修改任何状态
    pub fn validate(&self) -> Result<ValidationOutcome> {
        let form = self.lock_form()?;
        let errors = validate_form(&form);
        Ok(ValidationOutcome {
            valid: errors.is_empty(),
            errors,
        })
    }

    /// 重置表单到初始状态
    pub fn reset(&self) -> Result<()> {
        self.lock_form()?.clear();
        Ok(())
    }

    /// 校验并提交
    ///
    /// 任一字段校验失败则保持表单不变并阻断提交；
    /// 校验通过则将载荷移交注册服务，成功后清空表单。
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let payload = {
            let form = self.lock_form()?;
            let errors = validate_form(&form);
            if !errors.is_empty() {
                warn!("Sign-up submission blocked by field validation errors");
                return Ok(SubmitOutcome {
                    submitted: false,
                    submission_id: None,
                    errors,
                });
            }
            form.payload()
            // 移交注册服务期间不持有表单锁
        };

        let submission_id = self.registration.register(&payload).await?;
        info!(
            "Sign-up payload handed off to registration service: {}",
            submission_id
        );
        self.lock_form()?.clear();

        Ok(SubmitOutcome {
            submitted: true,
            submission_id: Some(submission_id),
            errors: FieldErrors::default(),
        })
    }

    fn view_of(form: &SignupForm) -> SignupFormView {
        SignupFormView {
            first_name: form.first_name().to_string(),
            last_name: form.last_name().to_string(),
            email: form.email().to_string(),
            password: form.password().to_string(),
            confirm_password: form.confirm_password().to_string(),
            conditions: form.conditions(),
        }
    }
}
