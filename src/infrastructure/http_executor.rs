//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"发送 JSON"的能力

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// 一次请求的原始响应
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpReply {
    /// 响应体文本（用于日志）
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP 执行器
///
/// 职责：
/// - 持有 reqwest::Client（内部是 Arc，clone 代价很小）
/// - 暴露 post_json() 能力
/// - 不认识 summarize / analyze 的响应结构
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// 创建新的 HTTP 执行器
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// POST 一个 JSON 请求体，返回状态码和原始响应体
    ///
    /// 非 2xx 状态不视为错误，由调用方决定如何处理
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<HttpReply, reqwest::Error> {
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        debug!("POST {} -> {} ({} 字节)", url, status, body.len());

        Ok(HttpReply { status, body })
    }
}
