use route_core::{build_pipeline_definition, PipelineStep, ProcessorDefinition};
use route_domain::JsonLibrary;

/// Demo: arma una definición de dos pasos con codecs en ambas direcciones y
/// la imprime junto con su hash reproducible.
fn run_codec_demo() {
    println!("== RouteFlow demo: definición con codecs ==");

    let ingest = PipelineStep::new("ingest").unmarshal()
                                            .json_library(JsonLibrary::Jackson);
    let publish = PipelineStep::new("publish").marshal()
                                              .base64()
                                              .marshal()
                                              .gzip();

    let def = build_pipeline_definition(vec![ingest, publish]);
    println!("pasos: {}", def.len());
    for step in &def.steps {
        for att in &step.attachments {
            println!("  {} -> {} ({})", step.id, att.format.name(), att.direction);
        }
    }
    println!("definition_hash: {}", def.definition_hash);

    match serde_json::to_string_pretty(&def) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("no se pudo serializar la definición: {}", e),
    }
}

fn main() {
    run_codec_demo();
}
