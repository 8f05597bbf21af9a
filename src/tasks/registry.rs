//! Process-wide task-template registry.
//!
//! The registry is an explicit table built once from the enumerated family
//! definitions; there is no import-order-triggered registration. It is
//! populated before any lookup happens and never mutated afterwards, so
//! lookups need no locking.

use crate::tasks::template::{TaskDef, TemplateBuilder};
use crate::tasks::{
    event_extraction, generation, question_answering, sequence_labeling, text_classification,
    text_matching, TaskType,
};
use crate::{Error, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static REGISTRY: Lazy<TaskRegistry> = Lazy::new(TaskRegistry::builtin);

/// The process-wide registry holding every built-in task family.
pub fn registry() -> &'static TaskRegistry {
    &REGISTRY
}

/// Look a task family up in the process-wide registry and start a template.
///
/// This is the entry point dataset adapters use:
///
/// ```rust
/// use tasklab::{get_task, TaskType};
///
/// let template = get_task(TaskType::QuestionAnsweringExtractive)?
///     .question_column("question")
///     .build()?;
/// assert_eq!(template.task(), TaskType::QuestionAnsweringExtractive);
/// # Ok::<(), tasklab::Error>(())
/// ```
///
/// # Errors
///
/// Fails with [`Error::UnknownTask`] if the task type is not registered.
pub fn get_task(task: TaskType) -> Result<TemplateBuilder> {
    REGISTRY.template(task)
}

/// Keyed catalog mapping task types to their family definitions.
///
/// Most callers use the process-wide instance via [`registry`] / [`get_task`];
/// a standalone registry is useful for tests and for hosting custom families.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    defs: IndexMap<TaskType, &'static TaskDef>,
}

impl TaskRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in task family.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let families = [
            question_answering::DEFS,
            event_extraction::DEFS,
            text_classification::DEFS,
            sequence_labeling::DEFS,
            text_matching::DEFS,
            generation::DEFS,
        ];
        for defs in families {
            for &def in defs {
                // The built-in tables list every task type exactly once.
                registry
                    .register(def)
                    .expect("built-in task definitions are unique");
            }
        }
        registry
    }

    /// Register a task family definition.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DuplicateTask`] if the task type is already
    /// registered. Registration happens during initialization; a duplicate
    /// means two families claim the same task type and is reported rather
    /// than resolved by overwrite.
    pub fn register(&mut self, def: &'static TaskDef) -> Result<()> {
        if self.defs.contains_key(&def.task) {
            return Err(Error::duplicate_task(def.task.code()));
        }
        self.defs.insert(def.task, def);
        Ok(())
    }

    /// Look up a family definition by task type.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownTask`] if the task type is not registered.
    pub fn lookup(&self, task: TaskType) -> Result<&'static TaskDef> {
        self.defs
            .get(&task)
            .copied()
            .ok_or_else(|| Error::unknown_task(task.code()))
    }

    /// Start a template builder for a task type, seeded with the family's
    /// default role-column names.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownTask`] if the task type (or an ancestor in
    /// its specialization chain) is not registered, and with
    /// [`Error::Schema`] if the chain is cyclic.
    pub fn template(&self, task: TaskType) -> Result<TemplateBuilder> {
        let def = self.lookup(task)?;
        let categories = self.task_categories(def)?;
        Ok(TemplateBuilder::new(def, categories))
    }

    /// Specialization chain for a definition, most general first, ending
    /// with the definition's own task type.
    fn task_categories(&self, def: &'static TaskDef) -> Result<Vec<TaskType>> {
        let mut chain = vec![def.task];
        let mut current = def;
        while let Some(parent) = current.parent {
            if chain.contains(&parent) {
                return Err(Error::schema(format!(
                    "cyclic task specialization at {parent}"
                )));
            }
            current = self.lookup(parent)?;
            chain.push(current.task);
        }
        chain.reverse();
        Ok(chain)
    }

    /// Registered task types, in registration order.
    pub fn tasks(&self) -> impl Iterator<Item = TaskType> + '_ {
        self.defs.keys().copied()
    }

    /// Number of registered task families.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether no families are registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_task_type_registered() {
        for task in TaskType::all() {
            let def = registry().lookup(*task).unwrap();
            assert_eq!(def.task, *task);
        }
        assert_eq!(registry().len(), TaskType::all().len());
    }

    #[test]
    fn test_lookup_reports_requested_task() {
        for task in registry().tasks() {
            let template = get_task(task).unwrap().build().unwrap();
            assert_eq!(template.task(), task);
        }
    }

    #[test]
    fn test_empty_registry_lookup_fails() {
        let registry = TaskRegistry::new();
        let result = registry.lookup(TaskType::QuestionAnswering);
        assert!(matches!(result, Err(Error::UnknownTask(_))));
    }

    #[test]
    fn test_duplicate_registration_fails_fast() {
        let mut registry = TaskRegistry::builtin();
        let def = registry.lookup(TaskType::QuestionAnswering).unwrap();
        let result = registry.register(def);
        assert!(matches!(result, Err(Error::DuplicateTask(_))));
    }

    #[test]
    fn test_ancestors_precede_leaf() {
        let template = get_task(TaskType::QuestionAnsweringMultipleChoiceQasc)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            template.task_categories(),
            &[
                TaskType::QuestionAnswering,
                TaskType::QuestionAnsweringMultipleChoice,
                TaskType::QuestionAnsweringMultipleChoiceQasc,
            ]
        );
    }

    #[test]
    fn test_missing_parent_is_unknown_task() {
        static ORPHAN: TaskDef = TaskDef {
            task: TaskType::TextMatching,
            parent: Some(TaskType::QuestionAnswering),
            columns: &[],
            required_input: &[],
            required_label: &[],
            input_schema: |_| Ok(crate::Features::new()),
            label_schema: |_| Ok(crate::Features::new()),
        };
        let mut registry = TaskRegistry::new();
        registry.register(&ORPHAN).unwrap();
        let result = registry.template(TaskType::TextMatching);
        assert!(matches!(result, Err(Error::UnknownTask(_))));
    }
}
