//! # tasklab
//!
//! Task-template schemas for dataset catalogs.
//!
//! - **Schema primitives**: typed column descriptors (scalar, sequence,
//!   struct, class label) with a stable JSON projection
//! - **Task templates**: per-family shape contracts with configurable role
//!   columns and a process-wide registry
//! - **Dataset metadata**: dataset-info records and the processor-facing
//!   output-info view
//!
//! ## Quick Start
//!
//! A dataset adapter looks its task family up, binds its own column names,
//! and attaches the frozen template to its dataset metadata:
//!
//! ```rust
//! use tasklab::{get_task, DatasetInfo, Feature, Features, TaskType};
//!
//! let features = Features::from_pairs([
//!     ("id", Feature::string()),
//!     ("question", Feature::string()),
//!     ("context", Feature::string()),
//! ])?;
//!
//! let info = DatasetInfo::new("ropes")
//!     .with_license("CC BY 4.0")
//!     .with_features(features)
//!     .with_task_template(
//!         get_task(TaskType::QuestionAnsweringExtractive)?
//!             .question_column("question")
//!             .context_column("context")
//!             .answers_column("answers")
//!             .build()?,
//!     );
//!
//! // Downstream consumers read role columns off the template instead of
//! // special-casing the dataset.
//! let template = &info.task_templates()[0];
//! assert_eq!(template.question_column(), Some("question"));
//! # Ok::<(), tasklab::Error>(())
//! ```
//!
//! ## Task Families
//!
//! Families form a shallow specialization lattice. A template's
//! `task_categories` lists the chain most-general-first, so an evaluator
//! that only understands generic QA can still consume a Hotpot template:
//!
//! | Family | Specializes | Role columns |
//! |--------|-------------|--------------|
//! | `qa` | — | question, context, answers |
//! | `qa_extractive` | `qa` | question, context, answers |
//! | `qa_hotpot` | `qa_extractive` | + supporting |
//! | `qa_multiple_choice` | `qa` | + options |
//! | `event_extraction` | — | text, event |
//! | `text_classification` | — | text, label |
//! | `named_entity_recognition` | — | tokens, tags |
//!
//! ## Design Philosophy
//!
//! - **Declare, don't merge**: a specialized family re-declares its complete
//!   schemas; there is no field-level merging with the parent
//! - **Frozen templates**: a template either builds fully and correctly or
//!   not at all, and is read-only afterwards
//! - **Explicit registration**: the registry is one enumerated table built
//!   at startup; duplicate registration fails fast

#![warn(missing_docs)]

mod error;
mod features;
mod info;
mod processor;
mod tasks;

pub use error::{Error, Result};
pub use features::{ClassLabel, Feature, Features, Primitive};
pub use info::{DatasetInfo, Split, SysOutputInfo};
pub use processor::{OutputBuilder, Processor};
pub use tasks::{
    get_task, registry, ColumnRole, RoleColumns, TaskDef, TaskRegistry, TaskTemplate, TaskType,
    TemplateBuilder,
};
