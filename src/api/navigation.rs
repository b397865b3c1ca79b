//! 页面导航命令
//!
//! 注册页提供跳转到已有账号登录页的入口。

use tauri::{AppHandle, Manager};

/// 打开登录窗口
///
/// 如果登录窗口已存在则显示并聚焦，否则新建一个。
#[tauri::command]
pub fn open_signin_window(app_handle: AppHandle) -> Result<(), String> {
    if let Some(window) = app_handle.get_webview_window("signin") {
        window
            .set_focus()
            .map_err(|e| format!("Failed to focus sign-in window: {}", e))?;
        return window
            .show()
            .map_err(|e| format!("Failed to show sign-in window: {}", e));
    }

    use tauri::{WebviewUrl, WebviewWindowBuilder};

    WebviewWindowBuilder::new(&app_handle, "signin", WebviewUrl::App("/sign-in".into()))
        .title("Sign In")
        .inner_size(800.0, 600.0)
        .min_inner_size(800.0, 600.0)
        .resizable(true)
        .center()
        .build()
        .map_err(|e| format!("Failed to create sign-in window: {}", e))?;

    Ok(())
}
