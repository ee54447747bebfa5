use route_core::{build_pipeline_definition, CoreBuilderError, DataFormatClause, Direction,
                 PipelineStep};

#[test]
fn text_driven_assembly_smoke() {
    // La dirección puede venir de configuración textual; el resto del armado
    // es idéntico al camino tipado.
    let direction: Direction = "marshal".parse().expect("known operation");
    let step = DataFormatClause::new(PipelineStep::new("out"), direction).zip_level(6);

    let def = build_pipeline_definition(vec![step]);
    assert_eq!(def.len(), 1);
    assert_eq!(def.steps[0].attachments.len(), 1);
    assert_eq!(def.steps[0].attachments[0].direction, Direction::Marshal);
    assert_eq!(def.definition_hash.len(), 64, "blake3 hex digest expected");
}

#[test]
fn unknown_operation_fails_before_any_attach() {
    let err = "transcode".parse::<Direction>().unwrap_err();
    assert_eq!(err, CoreBuilderError::UnsupportedOperation("transcode".to_string()));
    // Sin dirección válida no hay clause, por lo tanto no hay registro
    // posible sobre ningún paso.
}
