use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 分析服务地址（不含末尾 `/`）
    pub base_url: String,
    /// 单个请求的超时秒数，`None` 表示不设超时
    pub request_timeout_secs: Option<u64>,
    /// 批量模式下同时进行的分析数量
    pub max_concurrent: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: None,
            max_concurrent: 4,
            verbose_logging: false,
        }
    }
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    max_concurrent: Option<usize>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 从环境变量覆盖默认配置
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// 依次应用配置文件和环境变量
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        let config = match config_file {
            Some(path) => Self::default().with_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_env())
    }

    /// 应用 TOML 配置文件
    pub fn with_file(self, path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::file(path, e))?;
        self.with_toml(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    fn with_toml(self, content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(Self {
            base_url: file.base_url.unwrap_or(self.base_url),
            request_timeout_secs: file.request_timeout_secs.or(self.request_timeout_secs),
            max_concurrent: file.max_concurrent.unwrap_or(self.max_concurrent),
            verbose_logging: file.verbose_logging.unwrap_or(self.verbose_logging),
        })
    }

    /// 应用环境变量
    pub fn with_env(self) -> Self {
        Self {
            base_url: std::env::var("CREDCHECK_BASE_URL").unwrap_or(self.base_url),
            request_timeout_secs: std::env::var("CREDCHECK_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).or(self.request_timeout_secs),
            max_concurrent: std::env::var("CREDCHECK_MAX_CONCURRENT").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_concurrent),
            verbose_logging: std::env::var("CREDCHECK_VERBOSE").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 请求超时（0 视为不设超时）
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// 拼接接口地址
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// 校验配置
    pub fn validate(&self) -> AppResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::Config("base_url 不能为空".to_string()));
        }
        if self.max_concurrent == 0 {
            return Err(AppError::Config("max_concurrent 必须大于 0".to_string()));
        }
        Ok(())
    }
}
