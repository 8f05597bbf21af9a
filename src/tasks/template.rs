//! Task templates: frozen shape contracts binding a task family to a
//! dataset's concrete column names.

use crate::features::{ClassLabel, Feature, Features};
use crate::tasks::{ColumnRole, TaskType};
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::Serialize;

// =============================================================================
// Role Columns
// =============================================================================

/// Ordered binding of column roles to concrete column names.
///
/// Serializes as flattened `<role>_column` entries, e.g.
/// `"question_column": "question"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleColumns(IndexMap<ColumnRole, String>);

impl RoleColumns {
    pub(crate) fn set(&mut self, role: ColumnRole, name: impl Into<String>) {
        self.0.insert(role, name.into());
    }

    /// Column name bound to a role, if the role exists in this family.
    pub fn get(&self, role: ColumnRole) -> Option<&str> {
        self.0.get(&role).map(String::as_str)
    }

    /// Whether a role exists in this family.
    pub fn contains(&self, role: ColumnRole) -> bool {
        self.0.contains_key(&role)
    }

    /// Column name bound to a role, falling back to the role's canonical key.
    ///
    /// Family default-schema builders use this; the builder seeds every
    /// family role with a default name, so the fallback only covers
    /// malformed custom definitions.
    pub fn name_or_key(&self, role: ColumnRole) -> &str {
        self.get(role).unwrap_or_else(|| role.key())
    }

    /// Iterate `(role, column name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnRole, &str)> {
        self.0.iter().map(|(role, name)| (*role, name.as_str()))
    }

    /// Number of roles.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no roles are bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RoleColumns {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (role, name) in &self.0 {
            map.serialize_entry(&format!("{}_column", role.key()), name)?;
        }
        map.end()
    }
}

// =============================================================================
// Task Definitions
// =============================================================================

/// Static definition of one task family.
///
/// Definitions are declared once per family, registered into the
/// [`TaskRegistry`](crate::TaskRegistry), and never mutated. The schema
/// builder functions receive the *current* role-column bindings, so renaming
/// a role column renames the derived schema key.
pub struct TaskDef {
    /// The task type this family defines.
    pub task: TaskType,
    /// The family this one specializes, if any.
    pub parent: Option<TaskType>,
    /// Default `(role, column name)` bindings, in declaration order.
    pub columns: &'static [(ColumnRole, &'static str)],
    /// Roles whose columns must be present in the input schema.
    pub required_input: &'static [ColumnRole],
    /// Roles whose columns must be present in the label schema.
    pub required_label: &'static [ColumnRole],
    /// Default input schema, derived from the current role columns.
    pub input_schema: fn(&RoleColumns) -> Result<Features>,
    /// Default label schema, derived from the current role columns.
    pub label_schema: fn(&RoleColumns) -> Result<Features>,
}

impl TaskDef {
    fn has_role(&self, role: ColumnRole) -> bool {
        self.columns.iter().any(|(r, _)| *r == role)
    }

    fn default_columns(&self) -> RoleColumns {
        let mut columns = RoleColumns::default();
        for (role, name) in self.columns {
            columns.set(*role, *name);
        }
        columns
    }
}

impl std::fmt::Debug for TaskDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskDef")
            .field("task", &self.task)
            .field("parent", &self.parent)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Task Template
// =============================================================================

/// Frozen binding of a task family to a dataset's concrete column names.
///
/// Templates are immutable once built; consumers read role-column names and
/// schemas off them for the lifetime of a dataset-info object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskTemplate {
    task: TaskType,
    task_categories: Vec<TaskType>,
    #[serde(flatten)]
    columns: RoleColumns,
    input_schema: Features,
    label_schema: Features,
}

impl TaskTemplate {
    /// The concrete task type.
    pub fn task(&self) -> TaskType {
        self.task
    }

    /// Specialization chain, most general first, ending with this task.
    ///
    /// A consumer can check membership to ask "is this usable as a generic
    /// QA example" even when the concrete template is a specialized variant.
    pub fn task_categories(&self) -> &[TaskType] {
        &self.task_categories
    }

    /// Role-column bindings.
    pub fn columns(&self) -> &RoleColumns {
        &self.columns
    }

    /// Column name bound to a role, if the role exists in this family.
    pub fn column(&self, role: ColumnRole) -> Option<&str> {
        self.columns.get(role)
    }

    /// Column holding the question, if this family has one.
    pub fn question_column(&self) -> Option<&str> {
        self.column(ColumnRole::Question)
    }

    /// Column holding the context, if this family has one.
    pub fn context_column(&self) -> Option<&str> {
        self.column(ColumnRole::Context)
    }

    /// Column holding the answers, if this family has one.
    pub fn answers_column(&self) -> Option<&str> {
        self.column(ColumnRole::Answers)
    }

    /// Column holding the input text, if this family has one.
    pub fn text_column(&self) -> Option<&str> {
        self.column(ColumnRole::Text)
    }

    /// Column holding the label, if this family has one.
    pub fn label_column(&self) -> Option<&str> {
        self.column(ColumnRole::Label)
    }

    /// Columns consumed as model input.
    pub fn input_schema(&self) -> &Features {
        &self.input_schema
    }

    /// Columns holding ground truth.
    pub fn label_schema(&self) -> &Features {
        &self.label_schema
    }
}

// =============================================================================
// Template Builder
// =============================================================================

/// Builder for a [`TaskTemplate`].
///
/// Obtained from [`get_task`](crate::get_task) (or
/// [`TaskRegistry::template`](crate::TaskRegistry::template)); seeded with
/// the family's default role-column names. [`build`](Self::build) installs
/// the family default for any schema not overridden and freezes the result.
#[derive(Debug)]
pub struct TemplateBuilder {
    def: &'static TaskDef,
    task_categories: Vec<TaskType>,
    overrides: IndexMap<ColumnRole, String>,
    input_schema: Option<Features>,
    label_schema: Option<Features>,
    class_labels: Option<ClassLabel>,
}

impl TemplateBuilder {
    pub(crate) fn new(def: &'static TaskDef, task_categories: Vec<TaskType>) -> Self {
        Self {
            def,
            task_categories,
            overrides: IndexMap::new(),
            input_schema: None,
            label_schema: None,
            class_labels: None,
        }
    }

    /// The task type this builder produces templates for.
    pub fn task(&self) -> TaskType {
        self.def.task
    }

    /// Override the column name bound to a role.
    ///
    /// Overriding a role the family does not declare is rejected by
    /// [`build`](Self::build).
    pub fn column(mut self, role: ColumnRole, name: impl Into<String>) -> Self {
        self.overrides.insert(role, name.into());
        self
    }

    /// Override the question column name.
    pub fn question_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Question, name)
    }

    /// Override the context column name.
    pub fn context_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Context, name)
    }

    /// Override the answers column name.
    pub fn answers_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Answers, name)
    }

    /// Override the options column name.
    pub fn options_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Options, name)
    }

    /// Override the supporting-facts column name.
    pub fn supporting_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Supporting, name)
    }

    /// Override the text column name.
    pub fn text_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Text, name)
    }

    /// Override the event column name.
    pub fn event_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Event, name)
    }

    /// Override the label column name.
    pub fn label_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Label, name)
    }

    /// Override the tokens column name.
    pub fn tokens_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Tokens, name)
    }

    /// Override the tags column name.
    pub fn tags_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Tags, name)
    }

    /// Override the query column name.
    pub fn query_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Query, name)
    }

    /// Override the translation column name.
    pub fn translation_column(self, name: impl Into<String>) -> Self {
        self.column(ColumnRole::Translation, name)
    }

    /// Replace the family's default input schema.
    ///
    /// The override must be complete: every required input role column of
    /// the family must appear in it.
    pub fn input_schema(mut self, schema: Features) -> Self {
        self.input_schema = Some(schema);
        self
    }

    /// Replace the family's default label schema.
    ///
    /// The override must be complete: every required label role column of
    /// the family must appear in it.
    pub fn label_schema(mut self, schema: Features) -> Self {
        self.label_schema = Some(schema);
        self
    }

    /// Supply concrete class-label names for the family's label slot.
    ///
    /// Family defaults declare an open class label (empty name list);
    /// datasets fill it here. Mutually exclusive with a full label-schema
    /// override.
    pub fn class_labels(mut self, labels: ClassLabel) -> Self {
        self.class_labels = Some(labels);
        self
    }

    /// Freeze into a [`TaskTemplate`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Schema`] if a role override names a role the
    /// family does not declare, if two roles collide on the same column
    /// name, if an explicit schema override omits a required role column,
    /// or if [`class_labels`](Self::class_labels) is used on a family with
    /// no class-label slot.
    pub fn build(self) -> Result<TaskTemplate> {
        let def = self.def;

        let mut columns = def.default_columns();
        for (role, name) in self.overrides {
            if !def.has_role(role) {
                return Err(Error::schema(format!(
                    "task {} has no {role} role column",
                    def.task
                )));
            }
            columns.set(role, name);
        }

        let input_schema = match self.input_schema {
            Some(schema) => {
                check_required(def.task, "input", &schema, def.required_input, &columns)?;
                schema
            }
            None => (def.input_schema)(&columns)?,
        };

        let label_schema = match (self.label_schema, self.class_labels) {
            (Some(_), Some(_)) => {
                return Err(Error::schema(format!(
                    "task {}: label schema override and class_labels are mutually exclusive",
                    def.task
                )));
            }
            (Some(schema), None) => {
                check_required(def.task, "label", &schema, def.required_label, &columns)?;
                schema
            }
            (None, Some(labels)) => {
                let schema = (def.label_schema)(&columns)?;
                fill_class_labels(def.task, schema, &labels)?
            }
            (None, None) => (def.label_schema)(&columns)?,
        };

        Ok(TaskTemplate {
            task: def.task,
            task_categories: self.task_categories,
            columns,
            input_schema,
            label_schema,
        })
    }
}

fn check_required(
    task: TaskType,
    side: &str,
    schema: &Features,
    required: &[ColumnRole],
    columns: &RoleColumns,
) -> Result<()> {
    for role in required {
        let column = columns.name_or_key(*role);
        if !schema.contains(column) {
            return Err(Error::schema(format!(
                "task {task}: {side} schema override is missing the {role} role column {column:?}"
            )));
        }
    }
    Ok(())
}

/// Replace every class-label slot in a default schema with concrete names.
fn fill_class_labels(task: TaskType, schema: Features, labels: &ClassLabel) -> Result<Features> {
    fn fill(feature: &Feature, labels: &ClassLabel, filled: &mut usize) -> Feature {
        match feature {
            Feature::ClassLabel(_) => {
                *filled += 1;
                Feature::ClassLabel(labels.clone())
            }
            Feature::Sequence { feature } => Feature::Sequence {
                feature: Box::new(fill(feature, labels, filled)),
            },
            Feature::Struct { fields } => Feature::Struct {
                fields: fields
                    .iter()
                    .map(|(name, f)| (name.clone(), fill(f, labels, filled)))
                    .collect(),
            },
            value @ Feature::Value { .. } => value.clone(),
        }
    }

    let mut filled = 0;
    let result = Features::from_pairs(
        schema
            .iter()
            .map(|(name, feature)| (name, fill(feature, labels, &mut filled))),
    )?;
    if filled == 0 {
        return Err(Error::schema(format!(
            "task {task} has no class-label slot to fill"
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::get_task;

    #[test]
    fn test_unknown_role_override_rejected() {
        let result = get_task(TaskType::EventExtraction)
            .unwrap()
            .question_column("q")
            .build();
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_schema_override_missing_required_column() {
        let schema = Features::from_pairs([("question", Feature::string())]).unwrap();
        let result = get_task(TaskType::QuestionAnsweringExtractive)
            .unwrap()
            .input_schema(schema)
            .build();
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_schema_override_checks_renamed_column() {
        // The required-column check follows the current role bindings.
        let schema = Features::from_pairs([
            ("q", Feature::string()),
            ("passage", Feature::string()),
        ])
        .unwrap();
        let template = get_task(TaskType::QuestionAnsweringExtractive)
            .unwrap()
            .question_column("q")
            .context_column("passage")
            .input_schema(schema)
            .build()
            .unwrap();
        assert_eq!(template.question_column(), Some("q"));
    }

    #[test]
    fn test_role_rename_collision_rejected() {
        let result = get_task(TaskType::QuestionAnsweringExtractive)
            .unwrap()
            .question_column("shared")
            .context_column("shared")
            .build();
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_class_labels_fill_label_slot() {
        let labels = ClassLabel::new(["sadness", "joy"]).unwrap();
        let template = get_task(TaskType::EmotionClassification)
            .unwrap()
            .class_labels(labels.clone())
            .build()
            .unwrap();
        assert_eq!(
            template.label_schema().get("label"),
            Some(&Feature::ClassLabel(labels))
        );
    }

    #[test]
    fn test_class_labels_rejected_without_slot() {
        let labels = ClassLabel::new(["a", "b"]).unwrap();
        let result = get_task(TaskType::EventExtraction)
            .unwrap()
            .class_labels(labels)
            .build();
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_template_serialization_flattens_columns() {
        let template = get_task(TaskType::QuestionAnsweringExtractive)
            .unwrap()
            .question_column("q")
            .build()
            .unwrap();
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["task"], "qa_extractive");
        assert_eq!(json["question_column"], "q");
        assert_eq!(json["context_column"], "context");
        assert_eq!(json["input_schema"]["q"]["_type"], "Value");
    }
}
