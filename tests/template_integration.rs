//! End-to-end tests for the adapter-facing template workflow:
//! look up a family, bind dataset column names, attach to dataset metadata.

use tasklab::{
    get_task, registry, ClassLabel, ColumnRole, DatasetInfo, Error, Feature, Features, TaskType,
};

#[test]
fn extractive_qa_default_shapes() {
    let template = get_task(TaskType::QuestionAnsweringExtractive)
        .unwrap()
        .build()
        .unwrap();

    let input = template.input_schema();
    assert_eq!(
        input.column_names().collect::<Vec<_>>(),
        vec!["question", "context"]
    );
    assert_eq!(input.get("question"), Some(&Feature::string()));
    assert_eq!(input.get("context"), Some(&Feature::string()));

    let expected_answers = Feature::sequence(
        Feature::struct_of([
            ("text", Feature::string()),
            ("answer_start", Feature::int32()),
        ])
        .unwrap(),
    );
    assert_eq!(template.label_schema().get("answers"), Some(&expected_answers));
}

#[test]
fn multiple_choice_without_context_has_no_context_column() {
    let template = get_task(TaskType::QuestionAnsweringMultipleChoiceWithoutContext)
        .unwrap()
        .build()
        .unwrap();

    let input = template.input_schema();
    assert_eq!(
        input.column_names().collect::<Vec<_>>(),
        vec!["question", "options"]
    );
    assert_eq!(
        input.get("options"),
        Some(&Feature::sequence(Feature::string()))
    );
    assert_eq!(template.context_column(), None);
}

#[test]
fn role_rename_renames_derived_schema_key() {
    let template = get_task(TaskType::QuestionAnsweringExtractive)
        .unwrap()
        .question_column("q")
        .build()
        .unwrap();

    let input = template.input_schema();
    assert!(input.contains("q"));
    assert!(!input.contains("question"));
    // Sibling column untouched.
    assert_eq!(input.get("context"), Some(&Feature::string()));
    assert_eq!(template.question_column(), Some("q"));
}

#[test]
fn task_categories_order_ancestors_first() {
    let hotpot = get_task(TaskType::QuestionAnsweringHotpot)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        hotpot.task_categories(),
        &[
            TaskType::QuestionAnswering,
            TaskType::QuestionAnsweringExtractive,
            TaskType::QuestionAnsweringHotpot,
        ]
    );

    let relation = get_task(TaskType::EventRelationExtraction)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        relation.task_categories(),
        &[TaskType::EventExtraction, TaskType::EventRelationExtraction]
    );

    // A root family lists only itself.
    let ner = get_task(TaskType::NamedEntityRecognition)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(ner.task_categories(), &[TaskType::NamedEntityRecognition]);
}

#[test]
fn every_registered_task_builds_with_defaults() {
    for task in registry().tasks() {
        let template = get_task(task).unwrap().build().unwrap();
        assert_eq!(template.task(), task);
        assert!(
            template.task_categories().last() == Some(&task),
            "categories of {task} must end with the leaf"
        );
    }
}

#[test]
fn unknown_task_code_fails() {
    let result = "does_not_exist".parse::<TaskType>();
    assert!(matches!(result, Err(Error::UnknownTask(_))));
}

#[test]
fn emotion_adapter_workflow() {
    // Mirrors a classification adapter: dataset features carry the concrete
    // label names, the template's label slot is filled from them.
    let class_names = ["sadness", "joy", "love", "anger", "fear", "surprise"];
    let labels = ClassLabel::new(class_names).unwrap();

    let features = Features::from_pairs([
        ("text", Feature::string()),
        ("label", Feature::ClassLabel(labels.clone())),
    ])
    .unwrap();

    let info = DatasetInfo::new("emotion")
        .with_features(features)
        .with_supervised_keys("text", "label")
        .with_task_template(
            get_task(TaskType::EmotionClassification)
                .unwrap()
                .text_column("text")
                .label_column("label")
                .class_labels(labels.clone())
                .build()
                .unwrap(),
        );

    let template = &info.task_templates()[0];
    assert_eq!(
        template.task_categories(),
        &[TaskType::TextClassification, TaskType::EmotionClassification]
    );
    assert_eq!(
        template.label_schema().get("label"),
        Some(&Feature::ClassLabel(labels))
    );
}

#[test]
fn ner_adapter_workflow() {
    // Mirrors a BIO-tagged NER adapter (tokens + per-token tag sequence).
    let tags = ClassLabel::new(["O", "B-person", "I-person", "B-location", "I-location"]).unwrap();

    let template = get_task(TaskType::NamedEntityRecognition)
        .unwrap()
        .tokens_column("tokens")
        .tags_column("tags")
        .class_labels(tags.clone())
        .build()
        .unwrap();

    assert_eq!(
        template.input_schema().get("tokens"),
        Some(&Feature::sequence(Feature::string()))
    );
    assert_eq!(
        template.label_schema().get("tags"),
        Some(&Feature::sequence(Feature::ClassLabel(tags)))
    );
    assert_eq!(template.column(ColumnRole::Tags), Some("tags"));
}

#[test]
fn hotpot_supporting_facts_shape() {
    let template = get_task(TaskType::QuestionAnsweringHotpot)
        .unwrap()
        .build()
        .unwrap();

    let label = template.label_schema();
    assert_eq!(
        label.column_names().collect::<Vec<_>>(),
        vec!["answers", "supporting_facts"]
    );
    assert_eq!(
        label.get("supporting_facts"),
        Some(&Feature::sequence(
            Feature::struct_of([("title", Feature::string()), ("sent_id", Feature::int32())])
                .unwrap()
        ))
    );
}

#[test]
fn open_domain_defaults_use_query_column() {
    let template = get_task(TaskType::QuestionAnsweringOpenDomain)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(template.context_column(), Some("query"));
    assert!(template.input_schema().contains("query"));
    assert_eq!(
        template.label_schema().get("answers"),
        Some(&Feature::sequence(Feature::string()))
    );
}

#[test]
fn text_to_sql_adapter_workflow() {
    let template = get_task(TaskType::TextToSql)
        .unwrap()
        .question_column("question")
        .query_column("query")
        .build()
        .unwrap();
    assert_eq!(template.input_schema().get("question"), Some(&Feature::string()));
    assert_eq!(template.label_schema().get("query"), Some(&Feature::string()));
}
