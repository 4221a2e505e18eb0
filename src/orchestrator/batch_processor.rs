//! 批量分析处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **批量加载**：读取 TOML 批量文件
//! 2. **逐条校验**：每个条目必须恰好提供一种输入
//! 3. **并发控制**：使用 Semaphore 限制同时进行的分析数量
//! 4. **按序输出**：每个条目渲染到自己的 ReportView，全部完成后按文件顺序回放
//! 5. **全局统计**：汇总成功和失败数量

use crate::config::Config;
use crate::models::{load_batch_file, BatchFile};
use crate::ui::{ReportView, ResultView};
use crate::utils::logging::{
    log_item_complete, log_item_start, log_items_loaded, print_final_stats,
};
use crate::workflow::AnalysisFlow;
use anyhow::Result;
use futures::future::join_all;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, warn};

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

/// 单个条目的处理结果
pub struct ItemReport {
    pub label: String,
    pub view: ReportView,
    pub success: bool,
}

/// 加载批量文件、处理并输出到目标视图
pub async fn process_batch_file<V: ResultView + ?Sized>(
    flow: &AnalysisFlow,
    output: &V,
    batch_path: &Path,
    config: &Config,
    concurrency: Option<usize>,
) -> Result<ProcessingStats> {
    let batch = load_batch_file(batch_path).await?;

    if batch.items.is_empty() {
        warn!("⚠️ 批量文件中没有任何条目");
        return Ok(ProcessingStats::default());
    }

    let reports = process_batch(flow, &batch, concurrency, config.max_concurrent).await;

    for report in &reports {
        println!("\n══ {} ══", report.label);
        report.view.replay(output);
    }

    let stats = summarize(&reports);
    print_final_stats(stats.success, stats.failed, stats.total);
    Ok(stats)
}

/// 确定并发数：显式指定 → 批量文件 → 配置，0 视为未指定
pub fn resolve_concurrency(
    explicit: Option<usize>,
    from_file: Option<usize>,
    default_concurrency: usize,
) -> usize {
    explicit
        .filter(|n| *n > 0)
        .or(from_file.filter(|n| *n > 0))
        .unwrap_or(default_concurrency)
        .max(1)
}

/// 并发处理所有条目，结果按文件顺序返回
pub async fn process_batch(
    flow: &AnalysisFlow,
    batch: &BatchFile,
    concurrency: Option<usize>,
    default_concurrency: usize,
) -> Vec<ItemReport> {
    let max_concurrent =
        resolve_concurrency(concurrency, batch.max_concurrent, default_concurrency);
    let total = batch.items.len();
    log_items_loaded(total, max_concurrent);

    let semaphore = Arc::new(Semaphore::new(max_concurrent));
    let base_dir = batch.file_path.as_deref().and_then(Path::parent);

    let mut handles = Vec::with_capacity(total);

    for (idx, item) in batch.items.iter().enumerate() {
        let label = item.display_label(idx);
        let view = ReportView::new();

        let mode = match item.mode(idx) {
            Ok(mode) => mode,
            Err(e) => {
                error!("[{}] ❌ 条目无效: {}", label, e);
                view.notify_error(&e.to_string());
                handles.push(tokio::spawn(async move {
                    ItemReport {
                        label,
                        view,
                        success: false,
                    }
                }));
                continue;
            }
        };

        let raw = item.to_raw_input(base_dir);
        let flow = flow.clone();
        let semaphore = semaphore.clone();

        handles.push(tokio::spawn(async move {
            // Semaphore 不会被关闭，acquire 失败时按无限制处理
            let _permit = semaphore.acquire_owned().await.ok();
            log_item_start(idx + 1, total, &label, mode.name());

            let success = match flow.submit(mode, &raw, &view).await {
                Ok(outcome) => outcome.is_success(),
                Err(_) => false,
            };

            log_item_complete(idx + 1, total, &label, success);
            ItemReport {
                label,
                view,
                success,
            }
        }));
    }

    let mut reports = Vec::with_capacity(total);
    for (idx, joined) in join_all(handles).await.into_iter().enumerate() {
        match joined {
            Ok(report) => reports.push(report),
            Err(e) => {
                let label = batch.items[idx].display_label(idx);
                error!("[{}] 任务执行失败: {}", label, e);
                let view = ReportView::new();
                view.notify_error(&format!("任务执行失败: {}", e));
                reports.push(ItemReport {
                    label,
                    view,
                    success: false,
                });
            }
        }
    }
    reports
}

/// 汇总统计
pub fn summarize(reports: &[ItemReport]) -> ProcessingStats {
    let success = reports.iter().filter(|r| r.success).count();
    ProcessingStats {
        success,
        failed: reports.len() - success,
        total: reports.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_concurrency_precedence() {
        assert_eq!(resolve_concurrency(Some(8), Some(2), 4), 8);
        assert_eq!(resolve_concurrency(None, Some(2), 4), 2);
        assert_eq!(resolve_concurrency(None, None, 4), 4);
        assert_eq!(resolve_concurrency(Some(0), Some(0), 4), 4);
        assert_eq!(resolve_concurrency(None, None, 0), 1);
    }

    #[test]
    fn test_summarize_counts() {
        let report = |success| ItemReport {
            label: "item".to_string(),
            view: ReportView::new(),
            success,
        };
        let stats = summarize(&[report(true), report(false), report(true)]);
        assert_eq!(
            stats,
            ProcessingStats {
                success: 2,
                failed: 1,
                total: 3
            }
        );
    }
}
