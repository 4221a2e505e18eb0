//! 终端视图
//!
//! 结果写 stdout，错误提示写 stderr，加载指示是 stderr 上的 spinner

use crate::models::{AnalysisResult, SummaryResult};
use crate::services::scoring::{AnalysisDisplay, ColorToken, SimilarityTag};
use crate::ui::format::{
    self, LineStyle, StyledLine, CLAIMS_PENDING_TEXT, SUMMARY_FAILED_TEXT, SUMMARY_PENDING_TEXT,
};
use crate::ui::view::ResultView;
use colored::{Color, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// 终端视图
#[derive(Default)]
pub struct TerminalView {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    fn spinner(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 输出一组行，spinner 可见时先暂停它，避免输出被覆盖
    fn emit(&self, lines: &[String]) {
        let print = || {
            for line in lines {
                println!("{}", line);
            }
        };
        match self.spinner().as_ref() {
            Some(bar) => bar.suspend(print),
            None => print(),
        }
    }

    fn heading(title: &str) -> String {
        format::heading(title).bold().to_string()
    }
}

fn color_of(token: ColorToken) -> Color {
    let (r, g, b) = token.rgb();
    Color::TrueColor { r, g, b }
}

fn paint(line: &StyledLine) -> String {
    let text = line.text.as_str();
    match line.style {
        LineStyle::Heading => text.bold().to_string(),
        LineStyle::Score(token) => text.color(color_of(token)).bold().to_string(),
        LineStyle::Plain => text.to_string(),
        LineStyle::Muted => text.dimmed().to_string(),
        LineStyle::Source(tag) => {
            let token = match tag {
                SimilarityTag::High => ColorToken::Green,
                SimilarityTag::Medium => ColorToken::Amber,
            };
            text.color(color_of(token)).to_string()
        }
    }
}

impl ResultView for TerminalView {
    fn show_summary_pending(&self) {
        self.emit(&[
            Self::heading("Summary"),
            SUMMARY_PENDING_TEXT.dimmed().to_string(),
            CLAIMS_PENDING_TEXT.dimmed().to_string(),
            String::new(),
        ]);
    }

    fn render_summary(&self, summary: &SummaryResult) {
        let mut lines = vec![Self::heading("Summary")];
        lines.extend(format::summary_lines(summary));
        lines.push(String::new());
        self.emit(&lines);
    }

    fn show_summary_failed(&self) {
        self.emit(&[
            Self::heading("Summary"),
            SUMMARY_FAILED_TEXT.yellow().to_string(),
            String::new(),
        ]);
    }

    fn show_loading(&self) {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message("Analyzing credibility against trusted sources...");
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.spinner().replace(bar) {
            previous.finish_and_clear();
        }
    }

    fn hide_loading(&self) {
        if let Some(bar) = self.spinner().take() {
            bar.finish_and_clear();
        }
    }

    fn render_analysis(&self, analysis: &AnalysisResult) {
        let display = AnalysisDisplay::from_result(analysis);
        let lines: Vec<String> = format::analysis_lines(&display).iter().map(paint).collect();
        self.emit(&lines);
    }

    fn notify_error(&self, message: &str) {
        let print = || eprintln!("{} {}", "✖".red().bold(), message.red());
        match self.spinner().as_ref() {
            Some(bar) => bar.suspend(print),
            None => print(),
        }
    }
}
