//! 应用入口 - 编排层
//!
//! 持有 AnalysisFlow 和终端视图，负责单次分析和交互模式。
//! 交互模式下每次提交都等待完成后才读取下一行，不会出现并发的重复提交。

use crate::clients::CredibilityClient;
use crate::config::Config;
use crate::models::InputMode;
use crate::models::RawInput;
use crate::orchestrator::batch_processor;
use crate::ui::TerminalView;
use crate::utils::logging::log_startup;
use crate::workflow::input_form::HELP_TEXT;
use crate::workflow::{AnalysisFlow, DispatchOutcome, FormCommand, InputForm};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// 应用主结构
pub struct App {
    config: Config,
    flow: AnalysisFlow,
    view: TerminalView,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        let client = CredibilityClient::new(&config).context("无法创建 HTTP 客户端")?;

        Ok(Self {
            flow: AnalysisFlow::new(client),
            view: TerminalView::new(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 单次分析
    ///
    /// # 返回
    /// 分析请求成功返回 true；输入无效或分析失败返回 false
    pub async fn run_once(&self, mode: InputMode, value: &str) -> Result<bool> {
        log_startup(&self.config.base_url, "单次分析");

        let raw = RawInput::single(mode, value);
        match self.flow.submit(mode, &raw, &self.view).await {
            Ok(outcome) => Ok(outcome.is_success()),
            Err(_) => Ok(false),
        }
    }

    /// 交互模式
    pub async fn run_interactive(&self) -> Result<()> {
        log_startup(&self.config.base_url, "交互模式");
        println!("{}\n", HELP_TEXT);

        let mut form = InputForm::new(InputMode::Text);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        loop {
            stdout
                .write_all(format!("[{}]> ", form.mode()).as_bytes())
                .await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await.context("读取输入失败")? else {
                break;
            };

            match FormCommand::parse(&line) {
                FormCommand::Empty => {}
                FormCommand::SwitchMode(mode) => {
                    form.switch_mode(mode);
                    debug!("切换到 {} 模式", mode);
                }
                FormCommand::Show => {
                    for line in form.describe() {
                        println!("{}", line);
                    }
                }
                FormCommand::Help => println!("{}", HELP_TEXT),
                FormCommand::Quit => break,
                FormCommand::Unknown(command) => {
                    println!("未知命令: {} (输入 :help 查看帮助)", command)
                }
                FormCommand::Analyze => {
                    self.submit_form(&form).await;
                }
                FormCommand::FillAndAnalyze(value) => {
                    form.fill(value);
                    self.submit_form(&form).await;
                }
            }
        }

        info!("👋 退出交互模式");
        Ok(())
    }

    /// 批量模式
    ///
    /// `concurrency` 为命令行显式指定的并发数，优先于批量文件
    pub async fn run_batch(&self, batch_path: &Path, concurrency: Option<usize>) -> Result<bool> {
        log_startup(&self.config.base_url, "批量分析");
        let stats = batch_processor::process_batch_file(
            &self.flow,
            &self.view,
            batch_path,
            &self.config,
            concurrency,
        )
        .await?;
        Ok(stats.failed == 0)
    }

    async fn submit_form(&self, form: &InputForm) -> Option<DispatchOutcome> {
        self.flow
            .submit(form.mode(), form.raw(), &self.view)
            .await
            .ok()
    }
}
