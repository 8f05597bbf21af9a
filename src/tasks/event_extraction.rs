//! Event-extraction task families.
//!
//! `event_extraction` is the root; entity, argument, and relation extraction
//! specialize it, each re-binding the event column to its own payload shape.

use crate::features::{Feature, Features};
use crate::tasks::template::{RoleColumns, TaskDef};
use crate::tasks::{ColumnRole, TaskType};
use crate::Result;

pub(crate) static DEFS: &[&TaskDef] = &[
    &EVENT_EXTRACTION,
    &EVENT_ENTITY_EXTRACTION,
    &EVENT_ARGUMENTS_EXTRACTION,
    &EVENT_RELATION_EXTRACTION,
];

const REQUIRED_INPUT: &[ColumnRole] = &[ColumnRole::Text];
const REQUIRED_LABEL: &[ColumnRole] = &[ColumnRole::Event];

static EVENT_EXTRACTION: TaskDef = TaskDef {
    task: TaskType::EventExtraction,
    parent: None,
    columns: &[(ColumnRole::Text, "text"), (ColumnRole::Event, "event")],
    required_input: REQUIRED_INPUT,
    required_label: REQUIRED_LABEL,
    input_schema: text_input,
    label_schema: event_string_label,
};

static EVENT_ENTITY_EXTRACTION: TaskDef = TaskDef {
    task: TaskType::EventEntityExtraction,
    parent: Some(TaskType::EventExtraction),
    columns: &[
        (ColumnRole::Text, "text"),
        (ColumnRole::Event, "event_entity"),
    ],
    required_input: REQUIRED_INPUT,
    required_label: REQUIRED_LABEL,
    input_schema: text_input,
    label_schema: event_string_label,
};

static EVENT_ARGUMENTS_EXTRACTION: TaskDef = TaskDef {
    task: TaskType::EventArgumentsExtraction,
    parent: Some(TaskType::EventExtraction),
    columns: &[
        (ColumnRole::Text, "text"),
        (ColumnRole::Event, "arguments"),
    ],
    required_input: REQUIRED_INPUT,
    required_label: REQUIRED_LABEL,
    input_schema: text_input,
    label_schema: event_sequence_label,
};

static EVENT_RELATION_EXTRACTION: TaskDef = TaskDef {
    task: TaskType::EventRelationExtraction,
    parent: Some(TaskType::EventExtraction),
    columns: &[(ColumnRole::Text, "text"), (ColumnRole::Event, "relation")],
    required_input: REQUIRED_INPUT,
    required_label: REQUIRED_LABEL,
    input_schema: text_input,
    label_schema: event_sequence_label,
};

pub(super) fn text_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(cols.name_or_key(ColumnRole::Text), Feature::string())])
}

fn event_string_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(cols.name_or_key(ColumnRole::Event), Feature::string())])
}

fn event_sequence_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Event),
        Feature::sequence(Feature::string()),
    )])
}
