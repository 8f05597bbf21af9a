//! Generation task families.

use crate::features::{Feature, Features};
use crate::tasks::template::{RoleColumns, TaskDef};
use crate::tasks::{ColumnRole, TaskType};
use crate::Result;

pub(crate) static DEFS: &[&TaskDef] = &[&CODE_GENERATION, &TEXT_TO_SQL];

static CODE_GENERATION: TaskDef = TaskDef {
    task: TaskType::CodeGeneration,
    parent: None,
    columns: &[(ColumnRole::Translation, "translation")],
    required_input: &[ColumnRole::Translation],
    required_label: &[],
    input_schema: translation_input,
    label_schema: empty_label,
};

static TEXT_TO_SQL: TaskDef = TaskDef {
    task: TaskType::TextToSql,
    parent: None,
    columns: &[
        (ColumnRole::Question, "question"),
        (ColumnRole::Query, "query"),
    ],
    required_input: &[ColumnRole::Question],
    required_label: &[ColumnRole::Query],
    input_schema: question_input,
    label_schema: query_label,
};

/// Language-pair record; datasets with other pairs override `input_schema`.
fn translation_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Translation),
        Feature::struct_of([("en", Feature::string()), ("python", Feature::string())])?,
    )])
}

fn empty_label(_cols: &RoleColumns) -> Result<Features> {
    Ok(Features::new())
}

fn question_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(cols.name_or_key(ColumnRole::Question), Feature::string())])
}

fn query_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(cols.name_or_key(ColumnRole::Query), Feature::string())])
}
