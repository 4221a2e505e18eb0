pub mod image_encoder;
pub mod payload_builder;
pub mod scoring;

pub use image_encoder::encode_image_file;
pub use payload_builder::build_payload;
pub use scoring::{AnalysisDisplay, ScoreDisplay, SimilarityTag, SupportTier};
