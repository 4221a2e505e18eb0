//! 纯文本格式化
//!
//! 终端视图在这些文本上加颜色

use crate::models::SummaryResult;
use crate::services::scoring::{
    AnalysisDisplay, ColorToken, ScoreGauge, SimilarityTag, SourceDisplay, SourcesDisplay,
};
use crate::utils::logging::truncate_text;

pub const SUMMARY_PENDING_TEXT: &str = "Generating AI Summary...";
pub const CLAIMS_PENDING_TEXT: &str = "Extracting key claims...";
pub const SUMMARY_FAILED_TEXT: &str = "Could not generate summary.";
pub const CLAIMS_TITLE: &str = "Key Claims Identified:";
pub const NO_SOURCES_TEXT: &str = "No supporting sources found.";
pub const ANALYSIS_ERROR_PREFIX: &str = "An error occurred during analysis: ";
pub const ANALYZED_TEXT_LABEL: &str = "Analyzed text: ";

/// 分数条宽度
pub const GAUGE_WIDTH: usize = 20;

/// 分析文本预览的最大字符数
pub const ANALYZED_TEXT_PREVIEW: usize = 160;

/// 一行输出的样式，由终端视图映射成颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Score(ColorToken),
    Plain,
    /// 占位和附注，弱化显示
    Muted,
    Source(SimilarityTag),
}

/// 带样式的一行文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub style: LineStyle,
    pub text: String,
}

impl StyledLine {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(LineStyle::Plain, "")
    }
}

/// 区域标题：`── Summary ───────...`
pub fn heading(title: &str) -> String {
    format!(
        "── {} {}",
        title,
        "─".repeat(40usize.saturating_sub(title.chars().count()))
    )
}

/// 把分数环画成一行进度条
pub fn gauge_bar(gauge: &ScoreGauge, width: usize) -> String {
    let filled = gauge.filled_cells(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// 摘要区的文本行
///
/// 没有关键论断时不输出论断标题
pub fn summary_lines(summary: &SummaryResult) -> Vec<String> {
    let mut lines = vec![summary.summary.trim().to_string()];
    if !summary.claims.is_empty() {
        lines.push(String::new());
        lines.push(CLAIMS_TITLE.to_string());
        lines.extend(summary.claims.iter().map(|claim| format!("  • {}", claim.trim())));
    }
    lines
}

/// 分数行：`74/100  ███████████████░░░░░  Moderate Support`
pub fn score_line(display: &AnalysisDisplay) -> String {
    format!(
        "{:>3}/100  {}  {}",
        display.score.value,
        gauge_bar(&display.score.gauge, GAUGE_WIDTH),
        display.score.tier.label()
    )
}

/// 单条来源的标题行：`www.bbc.com · 82% Match · high similarity`
pub fn source_header(source: &SourceDisplay) -> String {
    format!(
        "{} · {}% Match · {}",
        source.name,
        source.match_percent,
        source.tag.label()
    )
}

/// 单条来源的正文行
pub fn source_body(source: &SourceDisplay) -> Vec<String> {
    let mut lines = Vec::new();
    if !source.summary.trim().is_empty() {
        lines.push(format!("    {}", source.summary.trim()));
    }
    lines.push(format!("    Read Source: {}", source.url));
    lines
}

/// 结果区的全部行
///
/// 没有支撑来源时输出占位文本；服务端返回了提取的文本时附上预览
pub fn analysis_lines(display: &AnalysisDisplay) -> Vec<StyledLine> {
    let mut lines = vec![
        StyledLine::new(LineStyle::Heading, heading("Credibility")),
        StyledLine::new(
            LineStyle::Score(display.score.tier.color()),
            score_line(display),
        ),
        StyledLine::blank(),
        StyledLine::new(LineStyle::Plain, display.explanation.trim()),
    ];

    if let Some(text) = &display.analyzed_text {
        lines.push(StyledLine::new(
            LineStyle::Muted,
            format!(
                "{}{}",
                ANALYZED_TEXT_LABEL,
                truncate_text(text, ANALYZED_TEXT_PREVIEW)
            ),
        ));
    }

    lines.push(StyledLine::blank());
    lines.push(StyledLine::new(LineStyle::Heading, heading("Supporting Sources")));

    match &display.sources {
        SourcesDisplay::NoneFound => {
            lines.push(StyledLine::new(LineStyle::Muted, NO_SOURCES_TEXT));
        }
        SourcesDisplay::Items(sources) => {
            for source in sources {
                lines.push(StyledLine::new(
                    LineStyle::Source(source.tag),
                    format!("• {}", source_header(source)),
                ));
                lines.extend(
                    source_body(source)
                        .into_iter()
                        .map(|line| StyledLine::new(LineStyle::Plain, line)),
                );
            }
        }
    }

    if let Some(disclaimer) = &display.disclaimer {
        lines.push(StyledLine::blank());
        lines.push(StyledLine::new(LineStyle::Muted, disclaimer.trim()));
    }
    lines.push(StyledLine::blank());
    lines
}

/// 分析错误提示文本
pub fn analysis_error_message(message: &str) -> String {
    format!("{}{}", ANALYSIS_ERROR_PREFIX, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisResult, SourceMatch};
    use crate::services::scoring::ScoreDisplay;

    fn analysis(sources: Vec<SourceMatch>, extracted_text: Option<&str>) -> AnalysisDisplay {
        AnalysisDisplay::from_result(&AnalysisResult {
            credibility_score: 73.6,
            explanation: "Moderate Support: 3 out of 4 trusted sources agree.".to_string(),
            supporting_sources: sources,
            disclaimer: Some("Assistive tool only.".to_string()),
            extracted_text: extracted_text.map(str::to_string),
        })
    }

    fn texts(lines: &[StyledLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn test_gauge_bar() {
        let bar = gauge_bar(&ScoreGauge::for_score(74), 20);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 15);
        assert_eq!(bar.chars().count(), 20);
    }

    #[test]
    fn test_summary_lines_without_claims() {
        let summary = SummaryResult {
            summary: "A short summary.".to_string(),
            claims: vec![],
        };
        assert_eq!(summary_lines(&summary), vec!["A short summary.".to_string()]);
    }

    #[test]
    fn test_summary_lines_with_claims() {
        let summary = SummaryResult {
            summary: "S".to_string(),
            claims: vec!["Claim one".to_string(), "Claim two".to_string()],
        };
        let lines = summary_lines(&summary);
        assert!(lines.contains(&CLAIMS_TITLE.to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("  • Claim two"));
    }

    #[test]
    fn test_score_line() {
        let display = AnalysisDisplay {
            score: ScoreDisplay::from_raw(73.6),
            explanation: String::new(),
            sources: SourcesDisplay::NoneFound,
            disclaimer: None,
            analyzed_text: None,
        };
        let line = score_line(&display);
        assert!(line.starts_with(" 74/100"));
        assert!(line.ends_with("Moderate Support"));
    }

    #[test]
    fn test_source_header() {
        let source = SourceDisplay {
            name: "www.bbc.com".to_string(),
            tag: SimilarityTag::High,
            match_percent: 82,
            summary: String::new(),
            url: "https://www.bbc.com/news/1".to_string(),
        };
        assert_eq!(source_header(&source), "www.bbc.com · 82% Match · high similarity");
        assert_eq!(
            source_body(&source),
            vec!["    Read Source: https://www.bbc.com/news/1".to_string()]
        );
    }

    #[test]
    fn test_analysis_lines_without_sources_show_placeholder() {
        let lines = analysis_lines(&analysis(vec![], None));
        let placeholder = lines
            .iter()
            .find(|line| line.text == NO_SOURCES_TEXT)
            .expect("应该输出占位文本");
        assert_eq!(placeholder.style, LineStyle::Muted);
        assert_eq!(
            lines[1].style,
            LineStyle::Score(ColorToken::Amber),
            "73.6 取整为 74，属于中等支撑"
        );
        assert!(!texts(&lines).iter().any(|t| t.starts_with(ANALYZED_TEXT_LABEL)));
        assert!(texts(&lines).contains(&"Assistive tool only."));
    }

    #[test]
    fn test_analysis_lines_tag_each_source() {
        let source = |similarity: f64| SourceMatch {
            domain: Some("www.reuters.com".to_string()),
            similarity_score: similarity,
            summary: "Same figures.".to_string(),
            source_url: "https://www.reuters.com/world/1".to_string(),
        };
        let display = analysis(vec![source(0.7), source(0.69)], None);
        let lines = analysis_lines(&display);

        let headers: Vec<&StyledLine> = lines
            .iter()
            .filter(|line| matches!(line.style, LineStyle::Source(_)))
            .collect();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].style, LineStyle::Source(SimilarityTag::High));
        assert_eq!(headers[0].text, "• www.reuters.com · 70% Match · high similarity");
        assert_eq!(headers[1].style, LineStyle::Source(SimilarityTag::Medium));
        assert!(headers[1].text.ends_with("medium similarity"));
        assert!(!texts(&lines).contains(&NO_SOURCES_TEXT));
    }

    #[test]
    fn test_analysis_lines_preview_extracted_text() {
        let long_text = "word ".repeat(100);
        let lines = analysis_lines(&analysis(vec![], Some(&long_text)));
        let preview = lines
            .iter()
            .find(|line| line.text.starts_with(ANALYZED_TEXT_LABEL))
            .expect("应该输出分析文本预览");
        assert_eq!(preview.style, LineStyle::Muted);
        assert!(preview.text.ends_with("..."));
        assert_eq!(
            preview.text.chars().count(),
            ANALYZED_TEXT_LABEL.chars().count() + ANALYZED_TEXT_PREVIEW + 3
        );
    }

    #[test]
    fn test_analysis_error_message() {
        assert_eq!(
            analysis_error_message("bad input"),
            "An error occurred during analysis: bad input"
        );
    }
}
