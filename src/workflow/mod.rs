pub mod analysis_flow;
pub mod input_form;

pub use analysis_flow::{AnalysisFlow, DispatchOutcome};
pub use input_form::{FormCommand, InputForm};
