use super::utils::get_setting_path;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

// 全局设置实例
pub static SETTING: Lazy<RwLock<Setting>> = Lazy::new(|| RwLock::new(Setting::default()));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ThemeMode {
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "system")]
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSetting {
    pub silent_start: bool,
    pub auto_check_update: bool,
    pub theme: ThemeMode,
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
}

fn default_theme_color() -> String {
    "catppuccin".to_string()
}

// 关于
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutSetting {
    // 应用版本
    pub version: String,
}

// 主设置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub general: GeneralSetting,
    pub about: AboutSetting,
}

impl Setting {
    /// 获取当前设置的克隆
    pub fn get_instance() -> Self {
        SETTING.read().unwrap().clone()
    }

    /// 创建默认设置
    pub fn default() -> Self {
        Self {
            general: GeneralSetting {
                silent_start: false,
                auto_check_update: true,
                theme: ThemeMode::System,
                theme_color: "catppuccin".to_string(),
            },
            about: AboutSetting {
                version: "0.1.0".to_string(),
            },
        }
    }

    /// 加载设置
    ///
    /// 如果指定了设置文件路径，则从该路径加载设置
    /// 否则从默认配置目录加载设置
    pub fn load(setting_path: Option<PathBuf>) -> Result<Self> {
        let _setting_path = if let Some(path) = setting_path {
            path
        } else {
            get_setting_path()?
        };

        if let Some(setting_str) = fs::read_to_string(&_setting_path).ok() {
            let setting: Setting =
                serde_json::from_str(&setting_str).with_context(|| "无法解析设置文件")?;

            // 更新全局设置
            SETTING.write().unwrap().clone_from(&setting);

            Ok(setting)
        } else {
            // 如果设置文件不存在，则创建默认设置并保存
            let default_setting = Setting::default();
            default_setting.save(None)?;
            Ok(default_setting)
        }
    }

    /// 保存设置
    ///
    /// 如果指定了设置文件路径，则保存到该路径
    /// 否则保存到默认配置目录
    pub fn save(&self, setting_path: Option<PathBuf>) -> Result<()> {
        let _setting_path = if let Some(path) = setting_path {
            path
        } else {
            get_setting_path()?
        };

        // 确保目录存在
        if let Some(parent) = _setting_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // 将设置序列化为 JSON 格式
        let setting_str = serde_json::to_string_pretty(self)?;

        // 写入文件
        fs::write(&_setting_path, setting_str)
            .with_context(|| format!("无法写入设置文件: {:?}", _setting_path))?;
        // 更新全局设置
        SETTING.write().unwrap().clone_from(self);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_setting_default() {
        let setting = Setting::default();
        assert_eq!(setting.general.silent_start, false);
        assert_eq!(setting.general.auto_check_update, true);
        assert_eq!(setting.general.theme_color, "catppuccin");
        assert_eq!(setting.about.version, "0.1.0");
    }

    #[test]
    #[serial]
    fn test_setting_save_load() -> Result<()> {
        // 创建临时目录
        let temp_dir = tempdir()?;
        let setting_path = temp_dir.path().join("test_setting.json");

        // 创建默认设置并保存
        let setting = Setting::default();
        setting.save(Some(setting_path.clone()))?;

        // 加载设置
        let loaded_setting = Setting::load(Some(setting_path))?;

        // 验证加载的设置与保存的设置一致
        assert_eq!(
            loaded_setting.general.silent_start,
            setting.general.silent_start
        );
        assert_eq!(
            loaded_setting.general.theme_color,
            setting.general.theme_color
        );
        assert_eq!(loaded_setting.about.version, setting.about.version);

        Ok(())
    }

    #[test]
    #[serial]
    fn test_save_updates_global_setting() -> Result<()> {
        let temp_dir = tempdir()?;
        let setting_path = temp_dir.path().join("test_setting.json");

        let mut setting = Setting::default();
        setting.general.silent_start = true;
        setting.save(Some(setting_path))?;

        assert_eq!(Setting::get_instance().general.silent_start, true);

        // 还原全局状态，避免影响其他测试
        SETTING.write().unwrap().clone_from(&Setting::default());
        Ok(())
    }
}
