pub mod analysis;
pub mod batch;
pub mod loaders;
pub mod payload;

pub use analysis::{AnalysisResult, SourceMatch, SummaryResult};
pub use batch::{BatchFile, BatchItem};
pub use loaders::load_batch_file;
pub use payload::{InputMode, InputPayload, RawInput};
