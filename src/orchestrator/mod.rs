//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 创建 HTTP 客户端和 AnalysisFlow
//! - 单次分析、交互模式
//!
//! ### `batch_processor` - 批量分析处理器
//! - 加载批量文件，控制并发数量（Semaphore）
//! - 按文件顺序输出每个条目的结果和全局统计
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator (单次 / 交互 / 批量)
//!     ↓
//! workflow::AnalysisFlow (一次用户操作 → 两个并发请求)
//!     ↓
//! services (payload 构建 / 图片编码 / 分数规则)  +  ui (区域渲染)
//!     ↓
//! clients::CredibilityClient
//!     ↓
//! infrastructure::HttpExecutor
//! ```

pub mod app;
pub mod batch_processor;

pub use app::App;
pub use batch_processor::{process_batch, ProcessingStats};
