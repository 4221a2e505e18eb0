use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 输入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// 纯文本
    #[default]
    Text,
    /// 文章链接
    Url,
    /// 图片文件
    Image,
}

impl InputMode {
    /// 所有模式，按界面标签页顺序
    pub const ALL: [InputMode; 3] = [InputMode::Text, InputMode::Url, InputMode::Image];

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::Url => "url",
            InputMode::Image => "image",
        }
    }

    /// 从名称解析模式（忽略大小写和首尾空白）
    pub fn from_str(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(InputMode::Text),
            "url" | "link" => Some(InputMode::Url),
            "image" | "img" => Some(InputMode::Image),
            _ => None,
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 请求体
///
/// 序列化后恰好只有一个键：`{"text": ..}` / `{"url": ..}` / `{"image": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPayload {
    Text(String),
    Url(String),
    /// data URL 形式的图片：`data:<mime>;base64,<data>`
    Image(String),
}

impl InputPayload {
    /// 对应的输入模式
    pub fn mode(&self) -> InputMode {
        match self {
            InputPayload::Text(_) => InputMode::Text,
            InputPayload::Url(_) => InputMode::Url,
            InputPayload::Image(_) => InputMode::Image,
        }
    }

    /// 用于日志的简短描述，不输出图片数据本身
    pub fn describe(&self) -> String {
        match self {
            InputPayload::Text(text) => format!("text ({} 字符)", text.chars().count()),
            InputPayload::Url(url) => format!("url {}", url),
            InputPayload::Image(data) => format!("image ({} 字节编码数据)", data.len()),
        }
    }
}

/// 表单原始输入，每种模式一个字段
///
/// 切换模式不会清空其他字段，发送时只读取当前模式的字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub text: String,
    pub url: String,
    pub image: Option<PathBuf>,
}

impl RawInput {
    /// 只填充一个字段的输入
    pub fn single(mode: InputMode, value: impl Into<String>) -> Self {
        let mut raw = Self::default();
        raw.set(mode, value);
        raw
    }

    /// 填充指定模式的字段
    pub fn set(&mut self, mode: InputMode, value: impl Into<String>) {
        let value = value.into();
        match mode {
            InputMode::Text => self.text = value,
            InputMode::Url => self.url = value,
            InputMode::Image => {
                let trimmed = value.trim();
                self.image = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
            }
        }
    }
}
