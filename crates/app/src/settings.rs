use config::Config;
use oshirase_core::config::AppConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 环境变量：设置文件所在目录，未设置时回退到当前工作目录。
pub const SETTINGS_DIR_ENV: &str = "OSHIRASE_HOME";
/// 设置文件名。
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// # Summary
/// 解析默认设置文件路径。
///
/// # Logic
/// 1. 若设置了 `OSHIRASE_HOME`，在该目录下取 `settings.toml`。
/// 2. 否则取当前工作目录下的 `settings.toml`。
///
/// # Returns
/// * 默认设置文件路径。
pub fn default_settings_path() -> PathBuf {
    match env::var_os(SETTINGS_DIR_ENV) {
        Some(dir) => PathBuf::from(dir).join(SETTINGS_FILE_NAME),
        None => PathBuf::from(SETTINGS_FILE_NAME),
    }
}

/// # Summary
/// 读取设置文件，返回未类型化的配置视图。
///
/// # Logic
/// 各渠道小节延迟到构造发送器时再单独反序列化，
/// 单个小节损坏不影响其他渠道的构造。
///
/// # Arguments
/// * `path` - 设置文件路径。
///
/// # Returns
/// * 成功返回配置视图，失败返回 `config::ConfigError`。
pub fn load(path: &Path) -> Result<Config, config::ConfigError> {
    debug!("Reading settings file, {}", path.display());

    Config::builder()
        .add_source(config::File::from(path))
        .build()
}

/// # Summary
/// 生成设置文件模板。
///
/// # Logic
/// 1. 将 `AppConfig::default()` 序列化为 TOML。
/// 2. 写入目标路径（存在则覆盖）。
///
/// # Arguments
/// * `path` - 模板输出路径。
///
/// # Returns
/// * 成功返回 `Ok(())`。
pub fn write_template(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let template = toml::to_string_pretty(&AppConfig::default())?;
    fs::write(path, template)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oshirase_core::config::{EmailConfig, SocialConfig};

    #[test]
    fn test_template_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);

        write_template(&path).expect("template write");
        let settings = load(&path).expect("template should load back");

        let email: EmailConfig = settings.get("email").expect("email section");
        assert_eq!(email.smtp_port, 587);
        let social: SocialConfig = settings.get("social").expect("social section");
        assert_eq!(social.consumer_key, "");
    }
}
