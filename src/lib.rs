//! RouteFlow Rust Library
//!
//! Este crate actúa como fachada de RouteFlow:
//! - Re-exporta el modelo de pipeline y la clause de codecs (`route-core`).
//! - Re-exporta el catálogo de formatos (`route-domain`).
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub use route_core::{build_pipeline_definition, CodecAttachment, CoreBuilderError,
                     DataFormatClause, Direction, PipelineDefinition, PipelineStep,
                     ProcessorDefinition};
pub use route_domain::DataFormat;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_message() {
        let e = CoreBuilderError::UnsupportedOperation("encode".into()).to_string();
        assert_eq!(e, "unknown data format operation: encode");
    }

    #[test]
    fn facade_exposes_the_fluent_surface() {
        let step = PipelineStep::new("out").marshal().gzip();
        assert_eq!(step.attachments[0].direction, Direction::Marshal);
    }
}
