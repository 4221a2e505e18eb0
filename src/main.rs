use anyhow::Result;
use clap::Parser;
use credcheck::cli::{Cli, Command};
use credcheck::{logger, App, Config};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 加载配置：默认值 → 配置文件 → 环境变量 → 命令行
    let config = cli.apply(Config::load(cli.config.as_deref())?);

    // 初始化日志
    logger::init(config.verbose_logging);

    let app = App::initialize(config)?;

    let success = match &cli.command {
        Command::Batch { file, .. } => {
            app.run_batch(file, cli.command.concurrency_override())
                .await?
        }
        Command::Interactive => {
            app.run_interactive().await?;
            true
        }
        command => match command.single_input() {
            Some((mode, value)) => app.run_once(mode, &value).await?,
            None => true,
        },
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
