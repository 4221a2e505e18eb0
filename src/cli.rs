//! 命令行参数

use crate::config::Config;
use crate::models::InputMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 新闻可信度检查客户端
#[derive(Debug, Parser)]
#[command(name = "credcheck", version, about)]
pub struct Cli {
    /// 分析服务地址
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// TOML 配置文件
    #[arg(long, short = 'c', global = true, env = "CREDCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// 请求超时秒数（0 表示不设超时）
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// 输出详细日志
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 分析一段文本
    Text {
        /// 要分析的文本
        text: String,
    },
    /// 分析一篇文章链接
    Url {
        /// 文章链接
        url: String,
    },
    /// 分析一张图片（由服务端识别文字）
    Image {
        /// 图片路径
        path: PathBuf,
    },
    /// 批量分析 TOML 文件中的所有条目
    Batch {
        /// 批量文件路径
        file: PathBuf,
        /// 同时进行的分析数量，优先于批量文件中的 `max_concurrent`
        #[arg(long, short = 'j', env = "CREDCHECK_MAX_CONCURRENT")]
        max_concurrent: Option<usize>,
    },
    /// 交互模式
    Interactive,
}

impl Command {
    /// 单次分析命令对应的模式和输入
    pub fn single_input(&self) -> Option<(InputMode, String)> {
        match self {
            Command::Text { text } => Some((InputMode::Text, text.clone())),
            Command::Url { url } => Some((InputMode::Url, url.clone())),
            Command::Image { path } => {
                Some((InputMode::Image, path.to_string_lossy().into_owned()))
            }
            Command::Batch { .. } | Command::Interactive => None,
        }
    }

    /// 显式指定的批量并发数（`-j` 或 `CREDCHECK_MAX_CONCURRENT`）
    ///
    /// 优先级：显式指定 → 批量文件 → 配置
    pub fn concurrency_override(&self) -> Option<usize> {
        match self {
            Command::Batch { max_concurrent, .. } => max_concurrent.filter(|n| *n > 0),
            _ => None,
        }
    }
}

impl Cli {
    /// 命令行参数覆盖配置
    ///
    /// 批量并发数不在这里合并，见 [`Command::concurrency_override`]
    pub fn apply(&self, config: Config) -> Config {
        Config {
            base_url: self.base_url.clone().unwrap_or(config.base_url),
            request_timeout_secs: self.timeout.or(config.request_timeout_secs),
            verbose_logging: self.verbose || config.verbose_logging,
            ..config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "credcheck",
            "--base-url",
            "http://factcheck.local",
            "batch",
            "items.toml",
            "-j",
            "8",
        ]);
        let config = cli.apply(Config::default());
        assert_eq!(config.base_url, "http://factcheck.local");
        assert_eq!(cli.command.concurrency_override(), Some(8));
        assert!(cli.command.single_input().is_none());
    }

    #[test]
    fn test_concurrency_override_only_for_batch() {
        let cli = Cli::parse_from(["credcheck", "batch", "items.toml", "-j", "0"]);
        assert_eq!(cli.command.concurrency_override(), None);

        let cli = Cli::parse_from(["credcheck", "text", "claim"]);
        assert_eq!(cli.command.concurrency_override(), None);
    }

    #[test]
    fn test_single_input() {
        let cli = Cli::parse_from(["credcheck", "url", "https://example.com/a"]);
        assert_eq!(
            cli.command.single_input(),
            Some((InputMode::Url, "https://example.com/a".to_string()))
        );
    }
}
