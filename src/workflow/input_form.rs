//! 交互模式的表单状态
//!
//! 对应分标签页的输入表单：每个模式一个字段，切换模式不清空字段

use crate::models::{InputMode, RawInput};

/// 交互命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// 切换输入模式
    SwitchMode(InputMode),
    /// 提交当前模式的字段
    Analyze,
    /// 填充当前字段并提交
    FillAndAnalyze(String),
    /// 显示当前表单
    Show,
    Help,
    Quit,
    /// 无法识别的命令
    Unknown(String),
    /// 空行
    Empty,
}

impl FormCommand {
    /// 解析一行输入
    ///
    /// 以 `:` 开头的是命令，其余内容视为当前字段的值
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return FormCommand::Empty;
        }

        let Some(command) = trimmed.strip_prefix(':') else {
            return FormCommand::FillAndAnalyze(trimmed.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("mode" | "m"), Some(name)) => match InputMode::from_str(name) {
                Some(mode) => FormCommand::SwitchMode(mode),
                None => FormCommand::Unknown(trimmed.to_string()),
            },
            (Some("analyze" | "a"), None) => FormCommand::Analyze,
            (Some("show" | "s"), None) => FormCommand::Show,
            (Some("help" | "h" | "?"), None) => FormCommand::Help,
            (Some("quit" | "q" | "exit"), None) => FormCommand::Quit,
            _ => FormCommand::Unknown(trimmed.to_string()),
        }
    }
}

/// 表单
#[derive(Debug, Clone, Default)]
pub struct InputForm {
    mode: InputMode,
    raw: RawInput,
}

impl InputForm {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            raw: RawInput::default(),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn raw(&self) -> &RawInput {
        &self.raw
    }

    pub fn switch_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// 填充当前模式的字段
    pub fn fill(&mut self, value: impl Into<String>) {
        self.raw.set(self.mode, value);
    }

    /// 表单概览，当前模式前加 `>`
    pub fn describe(&self) -> Vec<String> {
        InputMode::ALL
            .iter()
            .map(|mode| {
                let marker = if *mode == self.mode { ">" } else { " " };
                let value = match mode {
                    InputMode::Text => crate::utils::truncate_text(&self.raw.text, 60),
                    InputMode::Url => self.raw.url.clone(),
                    InputMode::Image => self
                        .raw
                        .image
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                };
                format!("{} {:<5} {}", marker, mode.name(), value)
            })
            .collect()
    }
}

pub const HELP_TEXT: &str = "\
:mode text|url|image  切换输入模式（字段内容保留）
:analyze              提交当前模式的字段
:show                 显示当前表单
:help                 显示帮助
:quit                 退出
其他任意内容          填入当前字段并立即分析";
