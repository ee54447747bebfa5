pub mod definition;
pub mod step;

pub use definition::{build_pipeline_definition, PipelineDefinition};
pub use step::{CodecAttachment, Direction, PipelineStep, ProcessorDefinition};
