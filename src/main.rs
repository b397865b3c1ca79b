// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod api;
mod application;
mod config;
mod domain;
mod error;
mod utils;

use std::sync::Arc;

use application::registration_service::{LoggingRegistrationService, RegistrationService};
use application::signup_service::SignupService;
use config::setting::{Setting, SETTING};
use log::error;
use tauri::{WebviewUrl, WebviewWindowBuilder};
use utils::logging;

fn main() {
    // 注意: 日志系统将在 Builder 插件注册时初始化

    // 加载用户设置
    let user_setting = match Setting::load(None) {
        Ok(config) => config,
        Err(e) => {
            error!("加载配置失败: {}", e);
            // 如果加载失败，使用默认配置
            let default_config = Setting::default();
            // 尝试保存默认配置
            if let Err(e) = default_config.save(None) {
                error!("保存默认配置失败: {}", e);
            }
            default_config
        }
    };

    // 确保配置已保存到全局 SETTING 变量中
    {
        let mut global_setting = SETTING
            .write()
            .expect("Failed to acquire write lock on SETTING");
        *global_setting = user_setting.clone();
    }

    // 运行应用
    run_app(user_setting);
}

// 运行应用程序
fn run_app(user_setting: Setting) {
    use tauri::Builder;

    // 注册服务目前为日志占位实现，接入后端后在这里替换
    let registration: Arc<dyn RegistrationService> = Arc::new(LoggingRegistrationService::new());
    let signup_service = Arc::new(SignupService::new(registration));

    Builder::default()
        .plugin(logging::get_builder().build())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {}))
        .manage(signup_service)
        .setup(move |app| {
            let win_builder = WebviewWindowBuilder::new(app, "main", WebviewUrl::default())
                .title("Bootcampr")
                .inner_size(800.0, 600.0)
                .min_inner_size(800.0, 600.0);

            // 如果启用了静默启动，则初始不可见
            let win_builder = if user_setting.general.silent_start {
                win_builder.visible(false)
            } else {
                win_builder
            };

            let _window = win_builder.build().expect("Failed to build main window");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::signup::get_signup_form,
            api::signup::update_signup_field,
            api::signup::validate_signup_form,
            api::signup::submit_signup,
            api::signup::reset_signup_form,
            api::navigation::open_signin_window,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
