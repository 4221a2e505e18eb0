/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `base_url`: 分析服务地址
/// - `mode`: 运行方式（单次 / 交互 / 批量）
pub fn log_startup(base_url: &str, mode: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {}", mode);
    info!("🌐 分析服务: {}", base_url);
    info!("{}", "=".repeat(60));
}

/// 记录批量条目加载信息
///
/// # 参数
/// - `total`: 条目总数
/// - `max_concurrent`: 最大并发数
pub fn log_items_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待分析的条目", total);
    info!("📋 最多同时进行 {} 个分析", max_concurrent);
}

/// 记录单个条目开始
pub fn log_item_start(index: usize, total: usize, label: &str, description: &str) {
    info!("📄 [{}/{}] {} 开始分析: {}", index, total, label, description);
}

/// 记录单个条目完成
pub fn log_item_complete(index: usize, total: usize, label: &str, success: bool) {
    if success {
        info!("✅ [{}/{}] {} 分析完成", index, total, label);
    } else {
        info!("❌ [{}/{}] {} 分析失败", index, total, label);
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
pub fn print_final_stats(success: usize, failed: usize, total: usize) {
    info!("{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
