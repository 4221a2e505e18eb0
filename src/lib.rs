//! # credcheck
//!
//! 新闻可信度检查的命令行客户端：收集文本、链接或图片，
//! 交给外部分析服务，并渲染可信度分数、摘要和支撑来源。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有 HTTP 客户端，只暴露"发送 JSON"的能力
//!
//! ### ② 客户端与能力层（Clients / Services）
//! - `CredibilityClient` - `/summarize` 与 `/analyze` 两个接口
//! - `build_payload` - 按显式传入的模式构建并校验请求体（含图片编码）
//! - `scoring` - 分数分档、分数环、相似度标记
//!
//! ### ③ 渲染层（UI）
//! - `ResultView` - 互不重叠的输出区域
//! - `TerminalView` / `ReportView` - 终端输出 / 记录后回放
//!
//! ### ④ 流程层（Workflow）
//! - `AnalysisFlow` - 一次操作，两个并发请求，各自更新自己的区域
//! - `InputForm` - 交互模式的表单状态
//!
//! ### ⑤ 编排层（Orchestration）
//! - `App` - 单次分析 / 交互模式
//! - `batch_processor` - 批量分析，控制并发

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::CredibilityClient;
pub use config::Config;
pub use error::{AppError, AppResult, RequestError, ValidationError};
pub use infrastructure::HttpExecutor;
pub use models::{AnalysisResult, InputMode, InputPayload, RawInput, SourceMatch, SummaryResult};
pub use orchestrator::App;
pub use ui::{ReportView, ResultView, TerminalView, ViewEvent};
pub use workflow::{AnalysisFlow, DispatchOutcome};
