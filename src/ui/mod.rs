//! 渲染层
//!
//! 输出分为互不重叠的区域：摘要区、结果区、加载指示和错误提示。
//! 每个区域只由一个响应处理器写入。

pub mod format;
pub mod report;
pub mod terminal;
pub mod view;

pub use report::{ReportView, ViewEvent};
pub use terminal::TerminalView;
pub use view::{LoadingGuard, ResultView};
