//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `TEAMBOARD__*` 覆盖
//! （双下划线表示嵌套，如 `TEAMBOARD__API__BASE_URL=https://...`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSection,
}

/// [api] 段：后端地址、请求超时、可选固定 Token
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 单次请求超时（秒）；超时按普通调用失败处理
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 固定 Bearer Token（通常不配，登录后用 with_token 挂）
    pub token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            token: None,
        }
    }
}

/// 从 config 目录加载配置，环境变量 TEAMBOARD__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 TEAMBOARD__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("TEAMBOARD")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api.base_url, "http://localhost:8000/api");
        assert_eq!(cfg.api.timeout_secs, 15);
        assert!(cfg.api.token.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teamboard.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            "[api]\nbase_url = \"https://board.example.com/api\"\ntimeout_secs = 30"
        )
        .unwrap();

        let cfg = load_config(Some(path)).unwrap();
        assert_eq!(cfg.api.base_url, "https://board.example.com/api");
        assert_eq!(cfg.api.timeout_secs, 30);
    }
}
