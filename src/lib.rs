//! Bootcampr Desktop Library
//!
//! 桌面端注册（Sign Up）模块
pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod utils;

// 重新导出常用类型
pub use application::registration_service::{LoggingRegistrationService, RegistrationService};
pub use application::signup_service::SignupService;
pub use domain::signup::SignupField;
