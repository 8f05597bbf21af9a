//! Task families, templates, and the process-wide template registry.
//!
//! A task family declares the shape contract shared by every dataset of that
//! task: which role columns exist (question, context, answers, ...), which
//! column names they default to, and what the default input/label schemas
//! look like. Families form a shallow specialization lattice — extractive QA
//! specializes question answering, QASC multiple choice specializes multiple
//! choice — so generic tooling can program against an ancestor's contract
//! while dataset-specific tooling uses the leaf's.
//!
//! Dataset adapters obtain a [`TemplateBuilder`] from [`get_task`], override
//! the role-column names their raw format uses, and attach the frozen
//! [`TaskTemplate`] to their dataset metadata:
//!
//! ```rust
//! use tasklab::{get_task, TaskType};
//!
//! let template = get_task(TaskType::QuestionAnsweringExtractive)?
//!     .question_column("question")
//!     .context_column("context")
//!     .answers_column("answers")
//!     .build()?;
//! assert!(template.input_schema().contains("question"));
//! # Ok::<(), tasklab::Error>(())
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

mod event_extraction;
mod generation;
mod question_answering;
mod registry;
mod sequence_labeling;
mod template;
mod text_classification;
mod text_matching;

pub use registry::{get_task, registry, TaskRegistry};
pub use template::{RoleColumns, TaskDef, TaskTemplate, TemplateBuilder};

// =============================================================================
// Task Types
// =============================================================================

/// Task family identifier.
///
/// Serializes as the stable snake_case code (e.g. `"qa_extractive"`) used in
/// dataset-info files; [`std::str::FromStr`] parses the same codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[non_exhaustive]
pub enum TaskType {
    // === Question Answering ===
    /// Question answering over a text context.
    QuestionAnswering,
    /// Extractive QA: answers are spans of the context.
    QuestionAnsweringExtractive,
    /// Abstractive QA: answers are free-form text.
    QuestionAnsweringAbstractive,
    /// Natural Questions style abstractive QA (tokenized HTML context,
    /// long/short answers with byte offsets, yes/no slot).
    QuestionAnsweringAbstractiveNq,
    /// HotpotQA style multi-hop QA with supporting facts.
    QuestionAnsweringHotpot,
    /// DCQA style discourse QA with sentence-id answers.
    QuestionAnsweringDcqa,
    /// Multiple-choice QA over a context.
    QuestionAnsweringMultipleChoice,
    /// QASC style multiple-choice QA with fact-pair context.
    QuestionAnsweringMultipleChoiceQasc,
    /// C3 style multiple-choice QA with multi-segment context.
    QuestionAnsweringMultipleChoiceC3,
    /// Multiple-choice QA without any context.
    QuestionAnsweringMultipleChoiceWithoutContext,
    /// Open-domain QA: question plus retrieval query, free-form answers.
    QuestionAnsweringOpenDomain,

    // === Event Extraction ===
    /// Event extraction from text.
    EventExtraction,
    /// Event entity extraction.
    EventEntityExtraction,
    /// Event argument extraction.
    EventArgumentsExtraction,
    /// Event relation extraction.
    EventRelationExtraction,

    // === Classification ===
    /// Text classification with a categorical label.
    TextClassification,
    /// Sentiment classification.
    SentimentClassification,
    /// Emotion classification.
    EmotionClassification,
    /// Spam identification.
    SpamIdentification,

    // === Sequence Labeling ===
    /// Named entity recognition over token sequences (BIO tags).
    NamedEntityRecognition,

    // === Text Matching ===
    /// Text matching with a categorical label.
    TextMatching,
    /// Text matching against answer options.
    TextMatchingMultipleChoice,

    // === Generation ===
    /// Code generation from natural language.
    CodeGeneration,
    /// Text-to-SQL semantic parsing.
    TextToSql,
}

impl TaskType {
    /// All supported task types.
    pub fn all() -> &'static [TaskType] {
        &[
            TaskType::QuestionAnswering,
            TaskType::QuestionAnsweringExtractive,
            TaskType::QuestionAnsweringAbstractive,
            TaskType::QuestionAnsweringAbstractiveNq,
            TaskType::QuestionAnsweringHotpot,
            TaskType::QuestionAnsweringDcqa,
            TaskType::QuestionAnsweringMultipleChoice,
            TaskType::QuestionAnsweringMultipleChoiceQasc,
            TaskType::QuestionAnsweringMultipleChoiceC3,
            TaskType::QuestionAnsweringMultipleChoiceWithoutContext,
            TaskType::QuestionAnsweringOpenDomain,
            TaskType::EventExtraction,
            TaskType::EventEntityExtraction,
            TaskType::EventArgumentsExtraction,
            TaskType::EventRelationExtraction,
            TaskType::TextClassification,
            TaskType::SentimentClassification,
            TaskType::EmotionClassification,
            TaskType::SpamIdentification,
            TaskType::NamedEntityRecognition,
            TaskType::TextMatching,
            TaskType::TextMatchingMultipleChoice,
            TaskType::CodeGeneration,
            TaskType::TextToSql,
        ]
    }

    /// Stable snake_case code for this task type (serialized form).
    pub fn code(&self) -> &'static str {
        match self {
            TaskType::QuestionAnswering => "qa",
            TaskType::QuestionAnsweringExtractive => "qa_extractive",
            TaskType::QuestionAnsweringAbstractive => "qa_abstractive",
            TaskType::QuestionAnsweringAbstractiveNq => "qa_abstractive_nq",
            TaskType::QuestionAnsweringHotpot => "qa_hotpot",
            TaskType::QuestionAnsweringDcqa => "qa_dcqa",
            TaskType::QuestionAnsweringMultipleChoice => "qa_multiple_choice",
            TaskType::QuestionAnsweringMultipleChoiceQasc => "qa_multiple_choice_qasc",
            TaskType::QuestionAnsweringMultipleChoiceC3 => "qa_multiple_choice_c3",
            TaskType::QuestionAnsweringMultipleChoiceWithoutContext => {
                "qa_multiple_choice_without_context"
            }
            TaskType::QuestionAnsweringOpenDomain => "qa_open_domain",
            TaskType::EventExtraction => "event_extraction",
            TaskType::EventEntityExtraction => "event_entity_extraction",
            TaskType::EventArgumentsExtraction => "event_arguments_extraction",
            TaskType::EventRelationExtraction => "event_relation_extraction",
            TaskType::TextClassification => "text_classification",
            TaskType::SentimentClassification => "sentiment_classification",
            TaskType::EmotionClassification => "emotion_classification",
            TaskType::SpamIdentification => "spam_identification",
            TaskType::NamedEntityRecognition => "named_entity_recognition",
            TaskType::TextMatching => "text_matching",
            TaskType::TextMatchingMultipleChoice => "text_matching_multiple_choice",
            TaskType::CodeGeneration => "code_generation",
            TaskType::TextToSql => "text_to_sql",
        }
    }

    /// Human-readable name for this task type.
    pub fn name(&self) -> &'static str {
        match self {
            TaskType::QuestionAnswering => "Question Answering",
            TaskType::QuestionAnsweringExtractive => "Extractive Question Answering",
            TaskType::QuestionAnsweringAbstractive => "Abstractive Question Answering",
            TaskType::QuestionAnsweringAbstractiveNq => {
                "Abstractive Question Answering (Natural Questions)"
            }
            TaskType::QuestionAnsweringHotpot => "Multi-hop Question Answering (Hotpot)",
            TaskType::QuestionAnsweringDcqa => "Discourse Question Answering (DCQA)",
            TaskType::QuestionAnsweringMultipleChoice => "Multiple-Choice Question Answering",
            TaskType::QuestionAnsweringMultipleChoiceQasc => {
                "Multiple-Choice Question Answering (QASC)"
            }
            TaskType::QuestionAnsweringMultipleChoiceC3 => {
                "Multiple-Choice Question Answering (C3)"
            }
            TaskType::QuestionAnsweringMultipleChoiceWithoutContext => {
                "Multiple-Choice Question Answering without Context"
            }
            TaskType::QuestionAnsweringOpenDomain => "Open-Domain Question Answering",
            TaskType::EventExtraction => "Event Extraction",
            TaskType::EventEntityExtraction => "Event Entity Extraction",
            TaskType::EventArgumentsExtraction => "Event Argument Extraction",
            TaskType::EventRelationExtraction => "Event Relation Extraction",
            TaskType::TextClassification => "Text Classification",
            TaskType::SentimentClassification => "Sentiment Classification",
            TaskType::EmotionClassification => "Emotion Classification",
            TaskType::SpamIdentification => "Spam Identification",
            TaskType::NamedEntityRecognition => "Named Entity Recognition",
            TaskType::TextMatching => "Text Matching",
            TaskType::TextMatchingMultipleChoice => "Multiple-Choice Text Matching",
            TaskType::CodeGeneration => "Code Generation",
            TaskType::TextToSql => "Text-to-SQL",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for TaskType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TaskType::all()
            .iter()
            .copied()
            .find(|task| task.code() == s)
            .ok_or_else(|| Error::unknown_task(s))
    }
}

impl From<TaskType> for String {
    fn from(task: TaskType) -> Self {
        task.code().to_string()
    }
}

impl TryFrom<String> for TaskType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

// =============================================================================
// Column Roles
// =============================================================================

/// Semantic role of a column within a task family.
///
/// The concrete column name bound to a role is configurable per dataset; the
/// role itself is fixed by the family. Roles serialize in dataset-info files
/// as `<key>_column` entries (e.g. `question_column`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColumnRole {
    /// The question text.
    Question,
    /// The context passage(s).
    Context,
    /// The gold answers.
    Answers,
    /// Candidate answer options.
    Options,
    /// Supporting facts for multi-hop QA.
    Supporting,
    /// The input text.
    Text,
    /// The extracted event payload.
    Event,
    /// The categorical label.
    Label,
    /// The input token sequence.
    Tokens,
    /// The per-token tag sequence.
    Tags,
    /// The target query (e.g. SQL).
    Query,
    /// The language-pair translation record.
    Translation,
}

impl ColumnRole {
    /// Stable string key for this role (e.g. `"question"`).
    pub fn key(&self) -> &'static str {
        match self {
            ColumnRole::Question => "question",
            ColumnRole::Context => "context",
            ColumnRole::Answers => "answers",
            ColumnRole::Options => "options",
            ColumnRole::Supporting => "supporting",
            ColumnRole::Text => "text",
            ColumnRole::Event => "event",
            ColumnRole::Label => "label",
            ColumnRole::Tokens => "tokens",
            ColumnRole::Tags => "tags",
            ColumnRole::Query => "query",
            ColumnRole::Translation => "translation",
        }
    }
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for task in TaskType::all() {
            let parsed: TaskType = task.code().parse().unwrap();
            assert_eq!(parsed, *task);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        let result = "does_not_exist".parse::<TaskType>();
        assert!(matches!(result, Err(Error::UnknownTask(_))));
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_value(TaskType::QuestionAnsweringExtractive).unwrap();
        assert_eq!(json, serde_json::json!("qa_extractive"));
        let task: TaskType = serde_json::from_value(serde_json::json!("qa_hotpot")).unwrap();
        assert_eq!(task, TaskType::QuestionAnsweringHotpot);
    }

    #[test]
    fn test_codes_unique() {
        let mut codes: Vec<_> = TaskType::all().iter().map(|t| t.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), TaskType::all().len());
    }
}
