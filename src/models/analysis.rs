//! 分析服务返回的数据结构

use serde::{Deserialize, Serialize};

/// `/summarize` 的返回
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    /// 关键论断，可能为空
    #[serde(default)]
    pub claims: Vec<String>,
}

/// `/analyze` 的返回
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 可信度分数，范围 [0, 100]
    pub credibility_score: f64,
    pub explanation: String,
    #[serde(default)]
    pub supporting_sources: Vec<SourceMatch>,
    /// 服务端附带的免责声明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
    /// 服务端实际分析的文本（URL / 图片模式下由服务端提取）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
}

/// 一条支撑来源
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMatch {
    #[serde(default)]
    pub domain: Option<String>,
    /// 相似度，范围 [0, 1]
    pub similarity_score: f64,
    #[serde(default)]
    pub summary: String,
    pub source_url: String,
}

/// `/analyze` 响应体的两种形态
///
/// 命中服务端缓存时结果包在 `content` 里
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum AnalyzeResponse {
    Cached {
        #[allow(dead_code)]
        message: Option<String>,
        content: AnalysisResult,
    },
    Direct(AnalysisResult),
}

impl AnalyzeResponse {
    pub(crate) fn into_result(self) -> AnalysisResult {
        match self {
            AnalyzeResponse::Cached { content, .. } => content,
            AnalyzeResponse::Direct(result) => result,
        }
    }
}

/// 非 200 响应的错误体
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// 提取 detail 文本
    ///
    /// detail 不是字符串时（例如校验错误列表）按 JSON 原样输出
    pub(crate) fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
