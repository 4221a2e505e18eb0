/// 可信度分析服务客户端
///
/// 封装 `/summarize` 与 `/analyze` 两个接口的调用和响应解析
use crate::config::Config;
use crate::error::RequestError;
use crate::infrastructure::{HttpExecutor, HttpReply};
use crate::models::analysis::{AnalyzeResponse, ErrorBody};
use crate::models::{AnalysisResult, InputPayload, SummaryResult};
use crate::utils::logging::truncate_text;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const SUMMARIZE_PATH: &str = "/summarize";
pub const ANALYZE_PATH: &str = "/analyze";

/// 分析服务客户端
#[derive(Debug, Clone)]
pub struct CredibilityClient {
    executor: HttpExecutor,
    summarize_url: String,
    analyze_url: String,
}

impl CredibilityClient {
    /// 创建新的分析服务客户端
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::with_executor(
            HttpExecutor::new(config.request_timeout())?,
            config,
        ))
    }

    /// 使用已有的执行器创建客户端
    pub fn with_executor(executor: HttpExecutor, config: &Config) -> Self {
        Self {
            executor,
            summarize_url: config.endpoint(SUMMARIZE_PATH),
            analyze_url: config.endpoint(ANALYZE_PATH),
        }
    }

    /// 生成摘要和关键论断（快速请求）
    ///
    /// 非 200 响应的错误体只记录，不解析
    pub async fn summarize(&self, payload: &InputPayload) -> Result<SummaryResult, RequestError> {
        let reply = self.send(SUMMARIZE_PATH, &self.summarize_url, payload).await?;

        if reply.status != StatusCode::OK {
            debug!(
                "摘要接口错误响应: {}",
                truncate_text(&reply.body_text(), 200)
            );
            return Err(RequestError::Status {
                endpoint: SUMMARIZE_PATH.to_string(),
                status: reply.status,
                detail: None,
            });
        }

        decode(SUMMARIZE_PATH, &reply)
    }

    /// 完整可信度分析（慢速请求）
    ///
    /// 非 200 响应从 `{detail}` 中提取错误信息；命中服务端缓存的响应会被自动解包
    pub async fn analyze(&self, payload: &InputPayload) -> Result<AnalysisResult, RequestError> {
        let reply = self.send(ANALYZE_PATH, &self.analyze_url, payload).await?;

        if reply.status != StatusCode::OK {
            let detail = serde_json::from_slice::<ErrorBody>(&reply.body)
                .ok()
                .and_then(|body| body.detail_text());
            if detail.is_none() {
                warn!(
                    "分析接口返回 {} 且没有 detail: {}",
                    reply.status,
                    truncate_text(&reply.body_text(), 200)
                );
            }
            return Err(RequestError::Status {
                endpoint: ANALYZE_PATH.to_string(),
                status: reply.status,
                detail,
            });
        }

        decode::<AnalyzeResponse>(ANALYZE_PATH, &reply).map(AnalyzeResponse::into_result)
    }

    async fn send(
        &self,
        endpoint: &str,
        url: &str,
        payload: &InputPayload,
    ) -> Result<HttpReply, RequestError> {
        self.executor
            .post_json(url, payload)
            .await
            .map_err(|source| RequestError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, reply: &HttpReply) -> Result<T, RequestError> {
    serde_json::from_slice(&reply.body).map_err(|source| RequestError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
