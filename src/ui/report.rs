//! 记录型视图
//!
//! 批量模式下每个条目渲染到自己的 ReportView，全部完成后按顺序回放到终端

use crate::models::{AnalysisResult, SummaryResult};
use crate::ui::view::ResultView;
use std::sync::{Mutex, MutexGuard};

/// 视图事件
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SummaryPending,
    Summary(SummaryResult),
    SummaryFailed,
    LoadingShown,
    LoadingHidden,
    Analysis(AnalysisResult),
    Error(String),
}

/// 记录所有视图事件
#[derive(Debug, Default)]
pub struct ReportView {
    events: Mutex<Vec<ViewEvent>>,
}

impl ReportView {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ViewEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, event: ViewEvent) {
        self.lock().push(event);
    }

    /// 已记录事件的副本
    pub fn events(&self) -> Vec<ViewEvent> {
        self.lock().clone()
    }

    /// 加载指示当前是否可见
    pub fn is_loading(&self) -> bool {
        let mut loading = false;
        for event in self.lock().iter() {
            match event {
                ViewEvent::LoadingShown => loading = true,
                ViewEvent::LoadingHidden => loading = false,
                _ => {}
            }
        }
        loading
    }

    /// 按记录顺序回放到另一个视图，加载指示不回放
    pub fn replay<V: ResultView + ?Sized>(&self, target: &V) {
        for event in self.events() {
            match event {
                ViewEvent::SummaryPending => target.show_summary_pending(),
                ViewEvent::Summary(summary) => target.render_summary(&summary),
                ViewEvent::SummaryFailed => target.show_summary_failed(),
                ViewEvent::Analysis(analysis) => target.render_analysis(&analysis),
                ViewEvent::Error(message) => target.notify_error(&message),
                ViewEvent::LoadingShown | ViewEvent::LoadingHidden => {}
            }
        }
    }
}

impl ResultView for ReportView {
    fn show_summary_pending(&self) {
        self.push(ViewEvent::SummaryPending);
    }

    fn render_summary(&self, summary: &SummaryResult) {
        self.push(ViewEvent::Summary(summary.clone()));
    }

    fn show_summary_failed(&self) {
        self.push(ViewEvent::SummaryFailed);
    }

    fn show_loading(&self) {
        self.push(ViewEvent::LoadingShown);
    }

    fn hide_loading(&self) {
        self.push(ViewEvent::LoadingHidden);
    }

    fn render_analysis(&self, analysis: &AnalysisResult) {
        self.push(ViewEvent::Analysis(analysis.clone()));
    }

    fn notify_error(&self, message: &str) {
        self.push(ViewEvent::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::view::LoadingGuard;

    #[test]
    fn test_loading_guard_clears_on_drop() {
        let view = ReportView::new();
        {
            let _guard = LoadingGuard::show(&view);
            assert!(view.is_loading());
        }
        assert!(!view.is_loading());
        assert_eq!(
            view.events(),
            vec![ViewEvent::LoadingShown, ViewEvent::LoadingHidden]
        );
    }

    #[test]
    fn test_replay_skips_loading_events() {
        let source = ReportView::new();
        source.show_summary_pending();
        source.show_loading();
        source.show_summary_failed();
        source.hide_loading();
        source.notify_error("boom");

        let target = ReportView::new();
        source.replay(&target);
        assert_eq!(
            target.events(),
            vec![
                ViewEvent::SummaryPending,
                ViewEvent::SummaryFailed,
                ViewEvent::Error("boom".to_string()),
            ]
        );
    }
}
