//! 分数与相似度的展示规则
//!
//! 所有函数都是纯函数，渲染层只负责把结果画出来

use crate::models::{AnalysisResult, SourceMatch};
use regex::Regex;
use std::f64::consts::PI;

/// 分数环的半径
pub const GAUGE_RADIUS: f64 = 54.0;

/// 达到该相似度即为高相似
pub const HIGH_SIMILARITY_THRESHOLD: f64 = 0.7;

/// 来源没有域名且无法从链接中解析时的显示名
pub const FALLBACK_SOURCE_NAME: &str = "Source";

/// 支撑程度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportTier {
    Strong,
    Moderate,
    Low,
}

impl SupportTier {
    /// 根据取整后的分数分档
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            SupportTier::Strong
        } else if score >= 50 {
            SupportTier::Moderate
        } else {
            SupportTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SupportTier::Strong => "Strong Support",
            SupportTier::Moderate => "Moderate Support",
            SupportTier::Low => "Low Support",
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            SupportTier::Strong => ColorToken::Green,
            SupportTier::Moderate => ColorToken::Amber,
            SupportTier::Low => ColorToken::Red,
        }
    }
}

/// 颜色标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Green,
    Amber,
    Red,
}

impl ColorToken {
    pub fn hex(self) -> &'static str {
        match self {
            ColorToken::Green => "#3fb950",
            ColorToken::Amber => "#d29922",
            ColorToken::Red => "#f85149",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorToken::Green => (63, 185, 80),
            ColorToken::Amber => (210, 153, 34),
            ColorToken::Red => (248, 81, 73),
        }
    }
}

/// 把原始分数取整到 0..=100
///
/// 数字、分档和分数环都使用这个值
pub fn round_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// 分数环
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreGauge {
    /// 可见弧长占周长的比例
    pub fraction: f64,
    pub circumference: f64,
    /// stroke-dashoffset：周长减去可见弧长
    pub dash_offset: f64,
}

impl ScoreGauge {
    pub fn for_score(score: u8) -> Self {
        let circumference = 2.0 * PI * GAUGE_RADIUS;
        let fraction = f64::from(score) / 100.0;
        Self {
            fraction,
            circumference,
            dash_offset: circumference - fraction * circumference,
        }
    }

    /// 宽度为 `width` 的进度条中应填充的格数
    pub fn filled_cells(&self, width: usize) -> usize {
        ((self.fraction * width as f64).round() as usize).min(width)
    }
}

/// 分数展示
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreDisplay {
    pub value: u8,
    pub tier: SupportTier,
    pub gauge: ScoreGauge,
}

impl ScoreDisplay {
    pub fn from_raw(raw: f64) -> Self {
        let value = round_score(raw);
        Self {
            value,
            tier: SupportTier::from_score(value),
            gauge: ScoreGauge::for_score(value),
        }
    }
}

/// 来源相似度标记（没有低相似档）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityTag {
    High,
    Medium,
}

impl SimilarityTag {
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity >= HIGH_SIMILARITY_THRESHOLD {
            SimilarityTag::High
        } else {
            SimilarityTag::Medium
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SimilarityTag::High => "high similarity",
            SimilarityTag::Medium => "medium similarity",
        }
    }
}

/// 单条来源的展示
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDisplay {
    pub name: String,
    pub tag: SimilarityTag,
    /// 相似度百分比（取整）
    pub match_percent: u32,
    pub summary: String,
    pub url: String,
}

impl SourceDisplay {
    pub fn from_source(source: &SourceMatch) -> Self {
        Self {
            name: source_name(source),
            tag: SimilarityTag::from_similarity(source.similarity_score),
            match_percent: (source.similarity_score * 100.0).round().max(0.0) as u32,
            summary: source.summary.clone(),
            url: source.source_url.clone(),
        }
    }
}

/// 来源列表：空列表有明确的占位状态
#[derive(Debug, Clone, PartialEq)]
pub enum SourcesDisplay {
    NoneFound,
    Items(Vec<SourceDisplay>),
}

/// 整个分析结果的展示
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisDisplay {
    pub score: ScoreDisplay,
    pub explanation: String,
    pub sources: SourcesDisplay,
    pub disclaimer: Option<String>,
    /// 服务端从链接或图片中提取并实际分析的文本
    pub analyzed_text: Option<String>,
}

impl AnalysisDisplay {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let sources = if result.supporting_sources.is_empty() {
            SourcesDisplay::NoneFound
        } else {
            SourcesDisplay::Items(
                result
                    .supporting_sources
                    .iter()
                    .map(SourceDisplay::from_source)
                    .collect(),
            )
        };

        Self {
            score: ScoreDisplay::from_raw(result.credibility_score),
            explanation: result.explanation.clone(),
            sources,
            disclaimer: result
                .disclaimer
                .clone()
                .filter(|d| !d.trim().is_empty()),
            analyzed_text: result
                .extracted_text
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        }
    }
}

/// 来源显示名：域名 → 链接中的主机名 → "Source"
fn source_name(source: &SourceMatch) -> String {
    if let Some(domain) = source.domain.as_deref().map(str::trim) {
        if !domain.is_empty() {
            return domain.to_string();
        }
    }
    host_of(&source.source_url).unwrap_or_else(|| FALLBACK_SOURCE_NAME.to_string())
}

fn host_of(url: &str) -> Option<String> {
    let re = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://([^/?#@]+@)?([^/?#:]+)").ok()?;
    re.captures(url.trim())
        .and_then(|cap| cap.get(2))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(domain: Option<&str>, similarity: f64, url: &str) -> SourceMatch {
        SourceMatch {
            domain: domain.map(str::to_string),
            similarity_score: similarity,
            summary: "summary".to_string(),
            source_url: url.to_string(),
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(SupportTier::from_score(100), SupportTier::Strong);
        assert_eq!(SupportTier::from_score(80), SupportTier::Strong);
        assert_eq!(SupportTier::from_score(79), SupportTier::Moderate);
        assert_eq!(SupportTier::from_score(50), SupportTier::Moderate);
        assert_eq!(SupportTier::from_score(49), SupportTier::Low);
        assert_eq!(SupportTier::from_score(0), SupportTier::Low);
    }

    #[test]
    fn test_tier_uses_rounded_score() {
        assert_eq!(ScoreDisplay::from_raw(79.5).tier, SupportTier::Strong);
        assert_eq!(ScoreDisplay::from_raw(79.4).tier, SupportTier::Moderate);
        assert_eq!(ScoreDisplay::from_raw(49.5).tier, SupportTier::Moderate);
        assert_eq!(ScoreDisplay::from_raw(49.49).tier, SupportTier::Low);
    }

    #[test]
    fn test_labels_and_colors() {
        assert_eq!(SupportTier::Strong.label(), "Strong Support");
        assert_eq!(SupportTier::Moderate.label(), "Moderate Support");
        assert_eq!(SupportTier::Low.label(), "Low Support");
        assert_eq!(SupportTier::Strong.color(), ColorToken::Green);
        assert_eq!(SupportTier::Moderate.color(), ColorToken::Amber);
        assert_eq!(SupportTier::Low.color(), ColorToken::Red);
        assert_eq!(ColorToken::Amber.hex(), "#d29922");
    }

    #[test]
    fn test_rounding_is_consistent_for_number_and_arc() {
        let display = ScoreDisplay::from_raw(73.6);
        assert_eq!(display.value, 74);
        assert_eq!(display.tier, SupportTier::Moderate);
        assert!((display.gauge.fraction - 0.74).abs() < 1e-12);

        let expected_offset = display.gauge.circumference * (1.0 - 0.74);
        assert!((display.gauge.dash_offset - expected_offset).abs() < 1e-9);
        assert!((display.gauge.circumference - 2.0 * PI * 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_score_clamps() {
        assert_eq!(round_score(-3.0), 0);
        assert_eq!(round_score(100.4), 100);
        assert_eq!(round_score(250.0), 100);
        assert_eq!(round_score(f64::NAN), 0);
    }

    #[test]
    fn test_gauge_cells() {
        assert_eq!(ScoreGauge::for_score(0).filled_cells(20), 0);
        assert_eq!(ScoreGauge::for_score(74).filled_cells(20), 15);
        assert_eq!(ScoreGauge::for_score(100).filled_cells(20), 20);
    }

    #[test]
    fn test_similarity_boundary() {
        assert_eq!(SimilarityTag::from_similarity(0.7), SimilarityTag::High);
        assert_eq!(SimilarityTag::from_similarity(0.95), SimilarityTag::High);
        assert_eq!(SimilarityTag::from_similarity(0.69999), SimilarityTag::Medium);
        assert_eq!(SimilarityTag::from_similarity(0.0), SimilarityTag::Medium);
    }

    #[test]
    fn test_source_display() {
        let display = SourceDisplay::from_source(&source(
            Some("www.reuters.com"),
            0.823,
            "https://www.reuters.com/x",
        ));
        assert_eq!(display.name, "www.reuters.com");
        assert_eq!(display.match_percent, 82);
        assert_eq!(display.tag, SimilarityTag::High);
    }

    #[test]
    fn test_source_name_fallbacks() {
        let display =
            SourceDisplay::from_source(&source(None, 0.5, "https://apnews.com/article/abc?x=1"));
        assert_eq!(display.name, "apnews.com");

        let display = SourceDisplay::from_source(&source(
            Some("  "),
            0.5,
            "http://user@host.example:8080/p",
        ));
        assert_eq!(display.name, "host.example");

        let display = SourceDisplay::from_source(&source(None, 0.5, "not a url"));
        assert_eq!(display.name, FALLBACK_SOURCE_NAME);
    }

    #[test]
    fn test_empty_sources_use_placeholder() {
        let result = AnalysisResult {
            credibility_score: 0.0,
            explanation: "No supporting articles found among considered sources.".to_string(),
            supporting_sources: vec![],
            disclaimer: None,
            extracted_text: Some("   ".to_string()),
        };
        let display = AnalysisDisplay::from_result(&result);
        assert_eq!(display.sources, SourcesDisplay::NoneFound);
        assert_eq!(display.analyzed_text, None);
    }
}
