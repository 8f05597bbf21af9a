//! Sequence-labeling task families.

use crate::features::{Feature, Features};
use crate::tasks::template::{RoleColumns, TaskDef};
use crate::tasks::{ColumnRole, TaskType};
use crate::Result;

pub(crate) static DEFS: &[&TaskDef] = &[&NAMED_ENTITY_RECOGNITION];

static NAMED_ENTITY_RECOGNITION: TaskDef = TaskDef {
    task: TaskType::NamedEntityRecognition,
    parent: None,
    columns: &[(ColumnRole::Tokens, "tokens"), (ColumnRole::Tags, "tags")],
    required_input: &[ColumnRole::Tokens],
    required_label: &[ColumnRole::Tags],
    input_schema: tokens_input,
    label_schema: tags_label,
};

fn tokens_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Tokens),
        Feature::sequence(Feature::string()),
    )])
}

/// Per-token BIO tags; datasets fill the tag names via `class_labels`.
fn tags_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Tags),
        Feature::sequence(Feature::class_label(std::iter::empty::<String>())?),
    )])
}
