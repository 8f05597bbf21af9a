//! Text-classification task families.
//!
//! The label slot is an open class label: datasets supply concrete names via
//! [`TemplateBuilder::class_labels`](crate::TemplateBuilder::class_labels)
//! (e.g. emotion names, star ratings, spam/legitimate).

use crate::features::{Feature, Features};
use crate::tasks::template::{RoleColumns, TaskDef};
use crate::tasks::{ColumnRole, TaskType};
use crate::Result;

pub(crate) static DEFS: &[&TaskDef] = &[
    &TEXT_CLASSIFICATION,
    &SENTIMENT_CLASSIFICATION,
    &EMOTION_CLASSIFICATION,
    &SPAM_IDENTIFICATION,
];

const COLUMNS: &[(ColumnRole, &str)] = &[(ColumnRole::Text, "text"), (ColumnRole::Label, "label")];
const REQUIRED_INPUT: &[ColumnRole] = &[ColumnRole::Text];
const REQUIRED_LABEL: &[ColumnRole] = &[ColumnRole::Label];

static TEXT_CLASSIFICATION: TaskDef = TaskDef {
    task: TaskType::TextClassification,
    parent: None,
    columns: COLUMNS,
    required_input: REQUIRED_INPUT,
    required_label: REQUIRED_LABEL,
    input_schema: super::event_extraction::text_input,
    label_schema: class_label,
};

static SENTIMENT_CLASSIFICATION: TaskDef = TaskDef {
    task: TaskType::SentimentClassification,
    parent: Some(TaskType::TextClassification),
    columns: COLUMNS,
    required_input: REQUIRED_INPUT,
    required_label: REQUIRED_LABEL,
    input_schema: super::event_extraction::text_input,
    label_schema: class_label,
};

static EMOTION_CLASSIFICATION: TaskDef = TaskDef {
    task: TaskType::EmotionClassification,
    parent: Some(TaskType::TextClassification),
    columns: COLUMNS,
    required_input: REQUIRED_INPUT,
    required_label: REQUIRED_LABEL,
    input_schema: super::event_extraction::text_input,
    label_schema: class_label,
};

static SPAM_IDENTIFICATION: TaskDef = TaskDef {
    task: TaskType::SpamIdentification,
    parent: Some(TaskType::TextClassification),
    columns: COLUMNS,
    required_input: REQUIRED_INPUT,
    required_label: REQUIRED_LABEL,
    input_schema: super::event_extraction::text_input,
    label_schema: class_label,
};

pub(super) fn class_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Label),
        Feature::class_label(std::iter::empty::<String>())?,
    )])
}
