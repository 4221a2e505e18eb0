use crate::models::{AnalysisResult, SummaryResult};

/// 结果展示接口
///
/// 方法都接收 `&self`：两个并发请求的处理器共享同一个视图，
/// 各自只写自己的区域
pub trait ResultView {
    /// 摘要区进入等待状态
    fn show_summary_pending(&self);

    /// 摘要区显示摘要和关键论断
    fn render_summary(&self, summary: &SummaryResult);

    /// 摘要区显示"无法生成"状态（非阻塞）
    fn show_summary_failed(&self);

    /// 显示分析请求的加载指示
    fn show_loading(&self);

    /// 清除加载指示
    fn hide_loading(&self);

    /// 结果区显示完整分析结果
    fn render_analysis(&self, analysis: &AnalysisResult);

    /// 阻塞式错误提示
    fn notify_error(&self, message: &str);
}

/// 加载指示守卫
///
/// 创建时显示加载指示，析构时清除，覆盖成功、失败和取消所有退出路径
pub struct LoadingGuard<'a, V: ResultView + ?Sized> {
    view: &'a V,
}

impl<'a, V: ResultView + ?Sized> LoadingGuard<'a, V> {
    pub fn show(view: &'a V) -> Self {
        view.show_loading();
        Self { view }
    }
}

impl<V: ResultView + ?Sized> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.hide_loading();
    }
}
