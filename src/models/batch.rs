//! 批量分析文件的数据结构
//!
//! ```toml
//! max_concurrent = 4
//!
//! [[items]]
//! label = "头条"
//! url = "https://example.com/news/1"
//!
//! [[items]]
//! text = "The city council approved the budget on Monday."
//!
//! [[items]]
//! image = "screenshots/post.png"
//! ```

use crate::error::ValidationError;
use crate::models::payload::{InputMode, RawInput};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 批量文件
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchFile {
    /// 同时进行的分析数量，缺省时使用配置值
    #[serde(default)]
    pub max_concurrent: Option<usize>,
    #[serde(default)]
    pub items: Vec<BatchItem>,
    /// 文件路径（不从 TOML 读取）
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

/// 批量文件中的一条输入
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchItem {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<PathBuf>,
}

impl BatchItem {
    /// 显示用标签，缺省为 `#序号`（从1开始）
    pub fn display_label(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1))
    }

    /// 确定条目的输入模式
    ///
    /// 必须恰好提供一种输入
    pub fn mode(&self, index: usize) -> Result<InputMode, ValidationError> {
        let provided: Vec<InputMode> = [
            self.text.as_ref().map(|_| InputMode::Text),
            self.url.as_ref().map(|_| InputMode::Url),
            self.image.as_ref().map(|_| InputMode::Image),
        ]
        .into_iter()
        .flatten()
        .collect();

        match provided.as_slice() {
            [mode] => Ok(*mode),
            [] => Err(ValidationError::MissingInput {
                label: self.display_label(index),
            }),
            many => Err(ValidationError::MultipleInputs {
                label: self.display_label(index),
                count: many.len(),
            }),
        }
    }

    /// 转为表单输入
    ///
    /// 相对图片路径以批量文件所在目录为基准
    pub fn to_raw_input(&self, base_dir: Option<&Path>) -> RawInput {
        let image = self.image.as_ref().map(|path| match base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.clone(),
        });
        RawInput {
            text: self.text.clone().unwrap_or_default(),
            url: self.url.clone().unwrap_or_default(),
            image,
        }
    }
}
