//! Uso end-to-end de la fachada: encadenado fluido clause → paso → clause
//! sobre el mismo handle, y construcción de la definición final.

use indexmap::IndexMap;
use routeflow_rust::{build_pipeline_definition, DataFormat, Direction, PipelineStep,
                     ProcessorDefinition};

#[test]
fn chained_clauses_accumulate_attachments_in_call_order() {
    let mut ns = IndexMap::new();
    ns.insert("ord".to_string(), "http://example.org/order".to_string());

    let step = PipelineStep::new("secure-out").marshal()
                                              .secure_xml_namespaces("//ord:cc", ns, true)
                                              .marshal()
                                              .base64()
                                              .marshal()
                                              .gzip();

    let names: Vec<&str> = step.attachments.iter().map(|a| a.format.name()).collect();
    assert_eq!(names, vec!["xml-security", "base64", "gzip"]);
    assert!(step.attachments.iter().all(|a| a.direction == Direction::Marshal));
}

#[test]
fn mixed_directions_on_one_step_keep_their_own_direction() {
    let step = PipelineStep::new("bridge").unmarshal()
                                          .csv_lazy_load()
                                          .marshal()
                                          .json();

    assert_eq!(step.attachments.len(), 2);
    assert_eq!(step.attachments[0].direction, Direction::Unmarshal);
    assert!(matches!(step.attachments[0].format, DataFormat::Csv(ref c) if c.lazy_load));
    assert_eq!(step.attachments[1].direction, Direction::Marshal);

    let def = build_pipeline_definition(vec![step]);
    assert_eq!(def.len(), 1);
    assert!(!def.definition_hash.is_empty());
}
