//! 分析流程 - 流程层
//!
//! 核心职责：一次用户操作触发两个互相独立的请求
//!
//! 流程：
//! 1. 摘要区进入等待状态
//! 2. 并发发出 `/summarize`（快）和 `/analyze`（慢）
//! 3. 每个请求完成后立即由自己的处理器写入自己的区域，先到先写
//!
//! 摘要失败只记录日志；分析失败提示用户，加载指示在任何退出路径上都会被清除

use crate::clients::CredibilityClient;
use crate::error::{AppError, AppResult};
use crate::models::{AnalysisResult, InputMode, InputPayload, RawInput, SummaryResult};
use crate::services::build_payload;
use crate::ui::format::analysis_error_message;
use crate::ui::{LoadingGuard, ResultView};
use tracing::{error, info, warn};

/// 一次分析的结果
#[derive(Debug)]
pub struct DispatchOutcome {
    /// 摘要请求失败时为 None
    pub summary: Option<SummaryResult>,
    pub analysis: AppResult<AnalysisResult>,
}

impl DispatchOutcome {
    /// 分析请求是否成功（摘要不影响结果）
    pub fn is_success(&self) -> bool {
        self.analysis.is_ok()
    }
}

/// 分析流程
///
/// - 不持有视图，视图由调用方传入
/// - 不读取任何共享的"当前模式"，模式由调用方显式传入
#[derive(Debug, Clone)]
pub struct AnalysisFlow {
    client: CredibilityClient,
}

impl AnalysisFlow {
    /// 创建新的分析流程
    pub fn new(client: CredibilityClient) -> Self {
        Self { client }
    }

    /// 校验输入、构建请求体并发起分析
    ///
    /// 校验失败或图片读取失败时立即提示，不发出任何请求
    pub async fn submit<V: ResultView + ?Sized>(
        &self,
        mode: InputMode,
        raw: &RawInput,
        view: &V,
    ) -> AppResult<DispatchOutcome> {
        let payload = match build_payload(mode, raw).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("输入无效，未发送请求: {}", e);
                view.notify_error(&e.to_string());
                return Err(e);
            }
        };

        Ok(self.dispatch(&payload, view).await)
    }

    /// 对同一个请求体并发发出摘要和分析请求
    pub async fn dispatch<V: ResultView + ?Sized>(
        &self,
        payload: &InputPayload,
        view: &V,
    ) -> DispatchOutcome {
        info!("🔍 开始分析: {}", payload.describe());
        view.show_summary_pending();

        let summary_task = async {
            match self.client.summarize(payload).await {
                Ok(summary) => {
                    info!("✓ 摘要已生成，关键论断 {} 条", summary.claims.len());
                    view.render_summary(&summary);
                    Some(summary)
                }
                Err(e) => {
                    warn!("⚠️ {}", AppError::SummaryRequest(e));
                    view.show_summary_failed();
                    None
                }
            }
        };

        let analysis_task = async {
            let _loading = LoadingGuard::show(view);

            match self.client.analyze(payload).await {
                Ok(analysis) => {
                    info!(
                        "✓ 分析完成: 可信度 {:.1}, 支撑来源 {} 条",
                        analysis.credibility_score,
                        analysis.supporting_sources.len()
                    );
                    view.render_analysis(&analysis);
                    Ok(analysis)
                }
                Err(e) => {
                    error!("❌ 分析失败: {}", e);
                    view.notify_error(&analysis_error_message(&e.user_message()));
                    Err(AppError::AnalysisRequest(e))
                }
            }
        };

        let (summary, analysis) = tokio::join!(summary_task, analysis_task);

        DispatchOutcome { summary, analysis }
    }
}
