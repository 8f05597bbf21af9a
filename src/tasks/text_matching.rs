//! Text-matching task families.

use crate::features::{Feature, Features};
use crate::tasks::template::{RoleColumns, TaskDef};
use crate::tasks::{ColumnRole, TaskType};
use crate::Result;

pub(crate) static DEFS: &[&TaskDef] = &[&TEXT_MATCHING, &TEXT_MATCHING_MULTIPLE_CHOICE];

static TEXT_MATCHING: TaskDef = TaskDef {
    task: TaskType::TextMatching,
    parent: None,
    columns: &[(ColumnRole::Text, "text"), (ColumnRole::Label, "label")],
    required_input: &[ColumnRole::Text],
    required_label: &[ColumnRole::Label],
    input_schema: super::event_extraction::text_input,
    label_schema: super::text_classification::class_label,
};

static TEXT_MATCHING_MULTIPLE_CHOICE: TaskDef = TaskDef {
    task: TaskType::TextMatchingMultipleChoice,
    parent: Some(TaskType::TextMatching),
    columns: &[
        (ColumnRole::Text, "text"),
        (ColumnRole::Options, "options"),
        (ColumnRole::Label, "label"),
    ],
    required_input: &[ColumnRole::Text, ColumnRole::Options],
    required_label: &[ColumnRole::Label],
    input_schema: text_options_input,
    label_schema: super::text_classification::class_label,
};

fn text_options_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (cols.name_or_key(ColumnRole::Text), Feature::string()),
        (
            cols.name_or_key(ColumnRole::Options),
            Feature::sequence(Feature::string()),
        ),
    ])
}
