//! Round-trip tests for the descriptor JSON projection.
//!
//! The projection is a compatibility surface: reconstructing descriptors
//! from it must yield structurally equal values, including for the deepest
//! built-in schemas (Natural Questions).

use tasklab::{get_task, Feature, Features, TaskType};

fn roundtrip(schema: &Features) -> Features {
    let json = schema.to_json().unwrap();
    Features::from_json(json).unwrap()
}

#[test]
fn scalar_and_sequence_roundtrip() {
    let schema = Features::from_pairs([
        ("id", Feature::string()),
        ("score", Feature::float()),
        ("count", Feature::int64()),
        ("flags", Feature::sequence(Feature::boolean())),
    ])
    .unwrap();
    assert_eq!(roundtrip(&schema), schema);
}

#[test]
fn nested_struct_roundtrip() {
    let schema = Features::from_pairs([(
        "answers",
        Feature::sequence(
            Feature::struct_of([
                ("text", Feature::string()),
                ("answer_start", Feature::int32()),
            ])
            .unwrap(),
        ),
    )])
    .unwrap();
    assert_eq!(roundtrip(&schema), schema);
}

#[test]
fn natural_questions_schemas_roundtrip() {
    // The deepest built-in shape: tokenized HTML context, long/short answer
    // byte spans, yes/no class label.
    let template = get_task(TaskType::QuestionAnsweringAbstractiveNq)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(roundtrip(template.input_schema()), *template.input_schema());
    assert_eq!(roundtrip(template.label_schema()), *template.label_schema());
}

#[test]
fn all_builtin_default_schemas_roundtrip() {
    for task in tasklab::registry().tasks() {
        let template = get_task(task).unwrap().build().unwrap();
        assert_eq!(
            roundtrip(template.input_schema()),
            *template.input_schema(),
            "input schema of {task}"
        );
        assert_eq!(
            roundtrip(template.label_schema()),
            *template.label_schema(),
            "label schema of {task}"
        );
    }
}

#[test]
fn column_order_survives_roundtrip() {
    let schema = Features::from_pairs([
        ("zulu", Feature::string()),
        ("alpha", Feature::string()),
        ("mike", Feature::string()),
    ])
    .unwrap();
    let restored = roundtrip(&schema);
    assert_eq!(
        restored.column_names().collect::<Vec<_>>(),
        vec!["zulu", "alpha", "mike"]
    );
}
