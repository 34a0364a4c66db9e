//! 配置服务
//!
//! 配置文件位置：`<config_dir>/tpm/config.json`，不存在时使用默认值。
//! 环境变量 `TPM_API_BASE_URL` 优先于文件中的 `apiBaseUrl`，
//! 由调用方通过 [`AppConfig::apply_env_overrides`] 应用，不会写回文件。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖 API 地址的环境变量
pub const API_BASE_URL_ENV: &str = "TPM_API_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const CONFIG_DIR_NAME: &str = "tpm";
const CONFIG_FILE_NAME: &str = "config.json";

/// 配置加载/保存错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot determine the user configuration directory")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// TPM REST 服务地址
    pub api_base_url: String,
    /// 界面语言代码（vi-VN / en-US）
    pub language: String,
    pub theme: Theme,
    /// 请求超时（秒），为空或 0 表示不限制
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            language: Language::default().code().to_string(),
            theme: Theme::default(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Parsed language, falling back to the default for unknown codes.
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language '{}', using default", self.language);
            Language::default()
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_BASE_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                log::info!("API base URL overridden by {API_BASE_URL_ENV}");
                self.api_base_url = url.to_string();
            }
        }
    }
}

/// `<config_dir>/tpm`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认配置文件路径
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::with_path(config_dir()?.join(CONFIG_FILE_NAME)))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", self.path.display());
                Ok(AppConfig::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let text = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(write_err)
    }
}
