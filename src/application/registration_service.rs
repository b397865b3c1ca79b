//! 账号注册服务协作方
//!
//! 真实的账号创建服务尚未接入，目前的实现仅在本地日志中记录提交载荷。
//! 通过 trait 抽象出接口边界，后续接入后端时只需替换实现。

use async_trait::async_trait;
use log::info;
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::domain::signup::RegistrationPayload;
use crate::error::Result;

/// 账号注册服务接口
///
/// 提交校验通过后，表单控制器将载荷交给该协作方，
/// 返回本次提交的 submission id。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    async fn register(&self, payload: &RegistrationPayload) -> Result<String>;
}

/// 仅记录日志的注册服务实现
#[derive(Debug, Default)]
pub struct LoggingRegistrationService;

impl LoggingRegistrationService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RegistrationService for LoggingRegistrationService {
    async fn register(&self, payload: &RegistrationPayload) -> Result<String> {
        let submission_id = Uuid::new_v4().to_string();
        // TODO: 注册接口上线后替换为真实的网络调用
        info!(
            "Form submitted: submission_id={}, payload={:?}",
            submission_id, payload
        );
        Ok(submission_id)
    }
}
