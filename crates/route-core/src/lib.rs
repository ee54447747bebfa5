//! route-core: modelo de definición de pipelines + clause de codecs.
pub mod builder;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod model;

pub use builder::DataFormatClause;
pub use errors::CoreBuilderError;
pub use model::{build_pipeline_definition, CodecAttachment, Direction, PipelineDefinition,
                PipelineStep, ProcessorDefinition};

#[cfg(test)]
mod tests {
    use super::*;
    use route_domain::{DataFormat, JsonLibrary};

    #[test]
    fn fluent_chain_builds_a_definition_with_stable_hash() {
        // Armado típico: un paso marshal comprimido y un paso unmarshal JSON.
        let ingest = PipelineStep::new("ingest").unmarshal()
                                               .json_library(JsonLibrary::Jackson);
        let publish = PipelineStep::new("publish").marshal().gzip();

        let def = build_pipeline_definition(vec![ingest, publish]);
        assert_eq!(def.len(), 2);
        assert!(!def.is_empty());

        // Mismos pasos → mismo hash; el id de instancia difiere.
        let ingest2 = PipelineStep::new("ingest").unmarshal()
                                                 .json_library(JsonLibrary::Jackson);
        let publish2 = PipelineStep::new("publish").marshal().gzip();
        let def2 = build_pipeline_definition(vec![ingest2, publish2]);
        assert_eq!(def.definition_hash, def2.definition_hash);
        assert_ne!(def.id, def2.id);
    }

    #[test]
    fn changing_a_format_changes_the_definition_hash() {
        let a = build_pipeline_definition(vec![PipelineStep::new("out").marshal().zip()]);
        let b = build_pipeline_definition(vec![PipelineStep::new("out").marshal().zip_level(9)]);
        assert_ne!(a.definition_hash, b.definition_hash);
    }

    #[test]
    fn attachments_survive_serde_round_trip() {
        let step = PipelineStep::new("out").marshal().base64();
        let json = serde_json::to_value(&step).expect("step serializes");
        let back: PipelineStep = serde_json::from_value(json).expect("step deserializes");
        assert_eq!(back.attachments.len(), 1);
        assert!(matches!(back.attachments[0].format, DataFormat::Base64(_)));
    }
}
