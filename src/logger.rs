//! 日志初始化
//!
//! 日志写到 stderr，stdout 只输出渲染结果

use tracing_subscriber::EnvFilter;

/// 默认日志级别
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "credcheck=debug"
    } else {
        "credcheck=info"
    }
}

/// 初始化日志
///
/// `RUST_LOG` 优先于 `verbose`
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
