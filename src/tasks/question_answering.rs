//! Question-answering task families.
//!
//! The QA lattice: `qa` is the root; extractive, abstractive, multiple
//! choice, and open domain specialize it; Natural Questions, Hotpot, DCQA,
//! QASC, and C3 specialize those. Each variant declares its complete default
//! schemas — a specialization never merges fields into its parent's shape.

use crate::features::{Feature, Features};
use crate::tasks::template::{RoleColumns, TaskDef};
use crate::tasks::{ColumnRole, TaskType};
use crate::Result;

pub(crate) static DEFS: &[&TaskDef] = &[
    &QA,
    &QA_EXTRACTIVE,
    &QA_ABSTRACTIVE,
    &QA_ABSTRACTIVE_NQ,
    &QA_HOTPOT,
    &QA_DCQA,
    &QA_MULTIPLE_CHOICE,
    &QA_MULTIPLE_CHOICE_QASC,
    &QA_MULTIPLE_CHOICE_C3,
    &QA_MULTIPLE_CHOICE_WITHOUT_CONTEXT,
    &QA_OPEN_DOMAIN,
];

const QA_COLUMNS: &[(ColumnRole, &str)] = &[
    (ColumnRole::Question, "question"),
    (ColumnRole::Context, "context"),
    (ColumnRole::Answers, "answers"),
];
const QA_REQUIRED_INPUT: &[ColumnRole] = &[ColumnRole::Question, ColumnRole::Context];
const QA_REQUIRED_LABEL: &[ColumnRole] = &[ColumnRole::Answers];

const MC_COLUMNS: &[(ColumnRole, &str)] = &[
    (ColumnRole::Question, "question"),
    (ColumnRole::Context, "context"),
    (ColumnRole::Answers, "answers"),
    (ColumnRole::Options, "options"),
];
const MC_REQUIRED_INPUT: &[ColumnRole] =
    &[ColumnRole::Question, ColumnRole::Context, ColumnRole::Options];

static QA: TaskDef = TaskDef {
    task: TaskType::QuestionAnswering,
    parent: None,
    columns: QA_COLUMNS,
    required_input: QA_REQUIRED_INPUT,
    required_label: QA_REQUIRED_LABEL,
    input_schema: question_context_input,
    label_schema: span_answers_label,
};

static QA_EXTRACTIVE: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringExtractive,
    parent: Some(TaskType::QuestionAnswering),
    columns: QA_COLUMNS,
    required_input: QA_REQUIRED_INPUT,
    required_label: QA_REQUIRED_LABEL,
    input_schema: question_context_input,
    label_schema: span_answers_label,
};

static QA_ABSTRACTIVE: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringAbstractive,
    parent: Some(TaskType::QuestionAnswering),
    columns: QA_COLUMNS,
    required_input: QA_REQUIRED_INPUT,
    required_label: QA_REQUIRED_LABEL,
    input_schema: question_context_input,
    label_schema: typed_answers_label,
};

static QA_ABSTRACTIVE_NQ: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringAbstractiveNq,
    parent: Some(TaskType::QuestionAnsweringAbstractive),
    columns: QA_COLUMNS,
    required_input: QA_REQUIRED_INPUT,
    required_label: QA_REQUIRED_LABEL,
    input_schema: nq_input,
    label_schema: nq_label,
};

static QA_HOTPOT: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringHotpot,
    parent: Some(TaskType::QuestionAnsweringExtractive),
    columns: &[
        (ColumnRole::Question, "question"),
        (ColumnRole::Context, "context"),
        (ColumnRole::Answers, "answers"),
        (ColumnRole::Supporting, "supporting_facts"),
    ],
    required_input: QA_REQUIRED_INPUT,
    required_label: &[ColumnRole::Answers, ColumnRole::Supporting],
    input_schema: hotpot_input,
    label_schema: hotpot_label,
};

static QA_DCQA: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringDcqa,
    parent: Some(TaskType::QuestionAnsweringExtractive),
    columns: &[
        (ColumnRole::Question, "question"),
        (ColumnRole::Context, "context"),
        (ColumnRole::Answers, "answer"),
    ],
    required_input: QA_REQUIRED_INPUT,
    required_label: QA_REQUIRED_LABEL,
    input_schema: dcqa_input,
    label_schema: dcqa_label,
};

static QA_MULTIPLE_CHOICE: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringMultipleChoice,
    parent: Some(TaskType::QuestionAnswering),
    columns: MC_COLUMNS,
    required_input: MC_REQUIRED_INPUT,
    required_label: QA_REQUIRED_LABEL,
    input_schema: multiple_choice_input,
    label_schema: option_answers_label,
};

static QA_MULTIPLE_CHOICE_QASC: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringMultipleChoiceQasc,
    parent: Some(TaskType::QuestionAnsweringMultipleChoice),
    columns: MC_COLUMNS,
    required_input: MC_REQUIRED_INPUT,
    required_label: QA_REQUIRED_LABEL,
    input_schema: qasc_input,
    label_schema: option_answers_label,
};

static QA_MULTIPLE_CHOICE_C3: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringMultipleChoiceC3,
    parent: Some(TaskType::QuestionAnsweringMultipleChoice),
    columns: MC_COLUMNS,
    required_input: MC_REQUIRED_INPUT,
    required_label: QA_REQUIRED_LABEL,
    input_schema: c3_input,
    label_schema: option_answers_label,
};

static QA_MULTIPLE_CHOICE_WITHOUT_CONTEXT: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringMultipleChoiceWithoutContext,
    parent: Some(TaskType::QuestionAnsweringMultipleChoice),
    columns: &[
        (ColumnRole::Question, "question"),
        (ColumnRole::Answers, "answers"),
        (ColumnRole::Options, "options"),
    ],
    required_input: &[ColumnRole::Question, ColumnRole::Options],
    required_label: QA_REQUIRED_LABEL,
    input_schema: question_options_input,
    label_schema: option_answers_label,
};

static QA_OPEN_DOMAIN: TaskDef = TaskDef {
    task: TaskType::QuestionAnsweringOpenDomain,
    parent: Some(TaskType::QuestionAnswering),
    columns: &[
        (ColumnRole::Question, "question"),
        (ColumnRole::Context, "query"),
        (ColumnRole::Answers, "answers"),
    ],
    required_input: QA_REQUIRED_INPUT,
    required_label: QA_REQUIRED_LABEL,
    input_schema: question_context_input,
    label_schema: text_answers_label,
};

// =============================================================================
// Default schemas
// =============================================================================

fn question_context_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (cols.name_or_key(ColumnRole::Question), Feature::string()),
        (cols.name_or_key(ColumnRole::Context), Feature::string()),
    ])
}

/// `{answers: [{text, answer_start}]}` — extractive span answers.
fn span_answers_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Answers),
        Feature::sequence(Feature::struct_of([
            ("text", Feature::string()),
            ("answer_start", Feature::int32()),
        ])?),
    )])
}

/// `{answers: [{text, types}]}` — abstractive answers with a type tag.
fn typed_answers_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Answers),
        Feature::sequence(Feature::struct_of([
            ("text", Feature::string()),
            ("types", Feature::string()),
        ])?),
    )])
}

/// `{answers: [string]}` — free-form answer strings.
fn text_answers_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Answers),
        Feature::sequence(Feature::string()),
    )])
}

fn nq_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (
            cols.name_or_key(ColumnRole::Context),
            Feature::struct_of([
                ("title", Feature::string()),
                ("url", Feature::string()),
                ("html", Feature::string()),
                (
                    "tokens",
                    Feature::sequence(Feature::struct_of([
                        ("token", Feature::string()),
                        ("is_html", Feature::boolean()),
                    ])?),
                ),
            ])?,
        ),
        (
            cols.name_or_key(ColumnRole::Question),
            Feature::struct_of([
                ("text", Feature::string()),
                ("tokens", Feature::sequence(Feature::string())),
            ])?,
        ),
    ])
}

fn nq_label(cols: &RoleColumns) -> Result<Features> {
    let byte_span = |extra: Option<(&'static str, Feature)>| -> Result<Feature> {
        let mut fields = vec![
            ("start_token", Feature::int64()),
            ("end_token", Feature::int64()),
            ("start_byte", Feature::int64()),
            ("end_byte", Feature::int64()),
        ];
        if let Some(field) = extra {
            fields.push(field);
        }
        Feature::struct_of(fields)
    };

    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Answers),
        Feature::sequence(Feature::struct_of([
            ("id", Feature::string()),
            ("long_answer", byte_span(None)?),
            (
                "short_answers",
                Feature::sequence(byte_span(Some(("text", Feature::string())))?),
            ),
            // -1 encodes "neither" per the class-label unset convention.
            ("yes_no_answer", Feature::class_label(["NO", "YES"])?),
        ])?),
    )])
}

fn hotpot_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (cols.name_or_key(ColumnRole::Question), Feature::string()),
        (
            cols.name_or_key(ColumnRole::Context),
            Feature::sequence(Feature::struct_of([
                ("text", Feature::string()),
                ("sentences", Feature::string()),
            ])?),
        ),
    ])
}

fn hotpot_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (
            cols.name_or_key(ColumnRole::Answers),
            Feature::sequence(Feature::struct_of([
                ("text", Feature::string()),
                ("answer_start", Feature::int32()),
            ])?),
        ),
        (
            cols.name_or_key(ColumnRole::Supporting),
            Feature::sequence(Feature::struct_of([
                ("title", Feature::string()),
                ("sent_id", Feature::int32()),
            ])?),
        ),
    ])
}

fn dcqa_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (cols.name_or_key(ColumnRole::Question), Feature::string()),
        (
            cols.name_or_key(ColumnRole::Context),
            Feature::struct_of([
                ("SentenceID", Feature::int32()),
                ("text", Feature::string()),
            ])?,
        ),
    ])
}

fn dcqa_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Answers),
        Feature::sequence(Feature::struct_of([
            ("text", Feature::string()),
            ("SentenceID", Feature::int32()),
        ])?),
    )])
}

fn multiple_choice_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (cols.name_or_key(ColumnRole::Question), Feature::string()),
        (cols.name_or_key(ColumnRole::Context), Feature::string()),
        (
            cols.name_or_key(ColumnRole::Options),
            Feature::sequence(Feature::string()),
        ),
    ])
}

/// `{answers: {text, option_index}}` — the chosen option.
fn option_answers_label(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([(
        cols.name_or_key(ColumnRole::Answers),
        Feature::struct_of([
            ("text", Feature::string()),
            ("option_index", Feature::int32()),
        ])?,
    )])
}

fn qasc_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (cols.name_or_key(ColumnRole::Question), Feature::string()),
        (
            cols.name_or_key(ColumnRole::Options),
            Feature::sequence(Feature::string()),
        ),
        (
            cols.name_or_key(ColumnRole::Context),
            Feature::struct_of([
                ("fact1", Feature::string()),
                ("fact2", Feature::string()),
                ("combinedfact", Feature::string()),
            ])?,
        ),
    ])
}

fn c3_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (cols.name_or_key(ColumnRole::Question), Feature::string()),
        (
            cols.name_or_key(ColumnRole::Options),
            Feature::sequence(Feature::string()),
        ),
        (
            cols.name_or_key(ColumnRole::Context),
            Feature::sequence(Feature::string()),
        ),
    ])
}

fn question_options_input(cols: &RoleColumns) -> Result<Features> {
    Features::from_pairs([
        (cols.name_or_key(ColumnRole::Question), Feature::string()),
        (
            cols.name_or_key(ColumnRole::Options),
            Feature::sequence(Feature::string()),
        ),
    ])
}
