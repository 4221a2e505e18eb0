//! 错误类型
//!
//! 三类核心错误对应三种处理策略：
//! - 校验错误：阻止发送，立即提示
//! - 摘要请求错误：非致命，只记录日志
//! - 分析请求错误：致命，提示用户并清理加载状态

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// 分析失败且服务端没有给出 detail 时的默认提示
pub const GENERIC_ANALYSIS_FAILURE: &str = "Analysis failed";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入校验失败
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 摘要请求失败
    #[error("摘要请求失败: {0}")]
    SummaryRequest(#[source] RequestError),

    /// 分析请求失败
    #[error("分析请求失败: {0}")]
    AnalysisRequest(#[source] RequestError),

    /// 文件读取失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}

/// 输入校验错误
///
/// Display 文本直接展示给用户
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter text.")]
    EmptyText,
    #[error("Please enter a URL.")]
    EmptyUrl,
    #[error("Please upload an image.")]
    NoImage,
    /// 批量条目没有任何输入
    #[error("条目 {label} 没有提供 text / url / image 中的任何一个")]
    MissingInput { label: String },
    /// 批量条目同时提供了多个输入
    #[error("条目 {label} 只能提供 text / url / image 中的一个, 实际提供了 {count} 个")]
    MultipleInputs { label: String, count: usize },
}

/// 单次 HTTP 请求的错误
#[derive(Debug, Error)]
pub enum RequestError {
    /// 网络层失败（连接、超时等）
    #[error("请求 {endpoint} 失败: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// 服务端返回非 200 状态
    #[error("{endpoint} 返回状态 {status}: {}", .detail.as_deref().unwrap_or("<no detail>"))]
    Status {
        endpoint: String,
        status: StatusCode,
        detail: Option<String>,
    },

    /// 响应体无法解析
    #[error("无法解析 {endpoint} 的响应: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RequestError {
    /// 展示给用户的错误信息
    ///
    /// 非 200 响应优先使用服务端的 `detail`，缺失时退回通用提示
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Transport { source, .. } => source.to_string(),
            RequestError::Status { detail, .. } => detail
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| GENERIC_ANALYSIS_FAILURE.to_string()),
            RequestError::Decode { source, .. } => source.to_string(),
        }
    }
}

impl AppError {
    /// 创建文件读取错误
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_detail() {
        let err = RequestError::Status {
            endpoint: "/analyze".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: Some("bad input".to_string()),
        };
        assert_eq!(err.user_message(), "bad input");
    }

    #[test]
    fn test_status_error_falls_back_to_generic_message() {
        let err = RequestError::Status {
            endpoint: "/analyze".to_string(),
            status: StatusCode::BAD_GATEWAY,
            detail: None,
        };
        assert_eq!(err.user_message(), GENERIC_ANALYSIS_FAILURE);

        let err = RequestError::Status {
            endpoint: "/analyze".to_string(),
            status: StatusCode::BAD_GATEWAY,
            detail: Some(String::new()),
        };
        assert_eq!(err.user_message(), GENERIC_ANALYSIS_FAILURE);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::EmptyText.to_string(), "Please enter text.");
        assert_eq!(ValidationError::EmptyUrl.to_string(), "Please enter a URL.");
        assert_eq!(ValidationError::NoImage.to_string(), "Please upload an image.");
    }
}
