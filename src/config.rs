use serde::{Deserialize, Serialize};
use std::env;

use crate::models::StartIn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 启动时写入内置（系统）抽奖配置
    #[serde(default = "default_true")]
    pub seed_system_configs: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seed_system_configs: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// 是否提供目录选择能力（关闭后导出/导入不可用）
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// 常用位置 (desktop / documents ...) 所在的根目录
    #[serde(default = "default_directory_root")]
    pub root: String,
    #[serde(default)]
    pub default_start_in: StartIn,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            root: default_directory_root(),
            default_start_in: StartIn::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_max_content_length")]
    pub max_content_length: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            max_content_length: default_max_content_length(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_directory_root() -> String {
    "./data".to_string()
}

fn default_max_content_length() -> usize {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            storage: StorageConfig::default(),
            directory: DirectoryConfig::default(),
            feedback: FeedbackConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 尝试读取配置文件，如果不存在则完全依赖环境变量
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => {
                toml::from_str(&config_str).map_err(|e| format!("解析配置文件失败: {e}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Config file {config_path} not found, using defaults and environment");
                Config::default()
            }
            Err(e) => {
                return Err(format!("无法读取配置文件 {config_path}: {e}").into());
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// 环境变量覆盖（即便文件存在时也覆盖）
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            self.server.port = p;
        }
        if let Ok(v) = env::var("SEED_SYSTEM_CONFIGS")
            && let Ok(b) = v.parse()
        {
            self.storage.seed_system_configs = b;
        }
        if let Ok(v) = env::var("DIRECTORY_PICKER_ENABLED")
            && let Ok(b) = v.parse()
        {
            self.directory.enabled = b;
        }
        if let Ok(v) = env::var("DIRECTORY_ROOT") {
            self.directory.root = v;
        }
        if let Ok(v) = env::var("DIRECTORY_DEFAULT_START_IN") {
            match v.parse() {
                Ok(start_in) => self.directory.default_start_in = start_in,
                Err(e) => log::warn!("Ignoring DIRECTORY_DEFAULT_START_IN: {e}"),
            }
        }
        if let Ok(v) = env::var("FEEDBACK_MAX_CONTENT_LENGTH")
            && let Ok(n) = v.parse()
        {
            self.feedback.max_content_length = n;
        }
    }
}
