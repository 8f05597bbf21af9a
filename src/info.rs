//! Dataset metadata objects.
//!
//! [`DatasetInfo`] is the record a dataset adapter assembles: provenance
//! (description, citation, homepage, license), the full column schema of the
//! raw records, and the task templates binding those columns to task
//! families. Its JSON projection is the dataset-info file consumed by
//! downstream tooling.
//!
//! [`SysOutputInfo`] is the narrower view an evaluation processor works
//! from: the task type, the features the processor declares, and whatever
//! extra metadata the adapter attached.

use crate::features::Features;
use crate::tasks::{TaskTemplate, TaskType};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Splits
// =============================================================================

/// Canonical dataset split names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    /// Training split.
    Train,
    /// Validation (development) split.
    Validation,
    /// Test split.
    Test,
}

impl Split {
    /// All canonical splits.
    pub fn all() -> &'static [Split] {
        &[Split::Train, Split::Validation, Split::Test]
    }

    /// The serialized name of this split.
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "validation",
            Split::Test => "test",
        }
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Split {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "train" => Ok(Split::Train),
            "validation" | "dev" => Ok(Split::Validation),
            "test" => Ok(Split::Test),
            other => Err(Error::schema(format!("unknown split: {other:?}"))),
        }
    }
}

// =============================================================================
// Dataset Info
// =============================================================================

/// Metadata record for one dataset.
///
/// Built by a dataset adapter and serialized into the dataset-info file.
/// The attached task templates tell consumers which columns play which role
/// without per-dataset special-casing.
///
/// # Example
///
/// ```rust
/// use tasklab::{get_task, DatasetInfo, Feature, Features, TaskType};
///
/// let features = Features::from_pairs([
///     ("question", Feature::string()),
///     ("context", Feature::string()),
/// ])?;
/// let info = DatasetInfo::new("ropes")
///     .with_description("Reasoning over paragraph effects in situations.")
///     .with_license("CC BY 4.0")
///     .with_features(features)
///     .with_task_template(
///         get_task(TaskType::QuestionAnsweringExtractive)?
///             .question_column("question")
///             .context_column("context")
///             .build()?,
///     );
/// assert_eq!(info.task_templates().len(), 1);
/// # Ok::<(), tasklab::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DatasetInfo {
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    citation: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    homepage: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    license: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    features: Features,
    #[serde(skip_serializing_if = "Option::is_none")]
    supervised_keys: Option<(String, String)>,
    task_templates: Vec<TaskTemplate>,
}

impl DatasetInfo {
    /// Create an empty record for a named dataset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the citation.
    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = citation.into();
        self
    }

    /// Set the homepage URL.
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = homepage.into();
        self
    }

    /// Set the license name.
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Set the language codes.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Set the dataset version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the raw record schema.
    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// Set the supervised `(input, target)` column pair.
    pub fn with_supervised_keys(
        mut self,
        input: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.supervised_keys = Some((input.into(), target.into()));
        self
    }

    /// Attach a task template.
    pub fn with_task_template(mut self, template: TaskTemplate) -> Self {
        self.task_templates.push(template);
        self
    }

    /// Dataset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// License name.
    pub fn license(&self) -> &str {
        &self.license
    }

    /// Raw record schema.
    pub fn features(&self) -> &Features {
        &self.features
    }

    /// Attached task templates.
    pub fn task_templates(&self) -> &[TaskTemplate] {
        &self.task_templates
    }

    /// JSON projection for the dataset-info file.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

// =============================================================================
// System Output Info
// =============================================================================

/// Metadata view consumed by an evaluation processor.
///
/// Carries the task type, the features the processor declares for its
/// output records, and the adapter-supplied metadata the processor was
/// handed. Declared features win over a `features` entry in the metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SysOutputInfo {
    task: TaskType,
    features: Features,
    #[serde(flatten)]
    metadata: serde_json::Map<String, serde_json::Value>,
}

impl SysOutputInfo {
    /// Create from a task type, declared features, and adapter metadata.
    ///
    /// A `features` or `task` entry in the metadata map is dropped in favor
    /// of the declared values.
    pub fn from_metadata(
        task: TaskType,
        features: Features,
        mut metadata: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        metadata.remove("features");
        metadata.remove("task");
        Self {
            task,
            features,
            metadata,
        }
    }

    /// The task type under evaluation.
    pub fn task(&self) -> TaskType {
        self.task
    }

    /// Features of the system output records.
    pub fn features(&self) -> &Features {
        &self.features
    }

    /// Adapter-supplied metadata entry, if present.
    pub fn metadata(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    /// Dataset name from the metadata, if present.
    pub fn dataset_name(&self) -> Option<&str> {
        self.metadata("dataset_name").and_then(|v| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Feature;
    use crate::get_task;

    #[test]
    fn test_split_roundtrip() {
        for split in Split::all() {
            assert_eq!(split.as_str().parse::<Split>().unwrap(), *split);
        }
        assert_eq!("dev".parse::<Split>().unwrap(), Split::Validation);
        assert!("mined".parse::<Split>().is_err());
    }

    #[test]
    fn test_dataset_info_projection() {
        let features = Features::from_pairs([
            ("text", Feature::string()),
            ("label", Feature::class_label(["legitimate", "spam"]).unwrap()),
        ])
        .unwrap();
        let info = DatasetInfo::new("sms_spam")
            .with_homepage("http://archive.ics.uci.edu/ml/datasets/SMS+Spam+Collection")
            .with_features(features)
            .with_supervised_keys("text", "label")
            .with_task_template(
                get_task(TaskType::SpamIdentification)
                    .unwrap()
                    .text_column("text")
                    .label_column("label")
                    .build()
                    .unwrap(),
            );

        let json = info.to_json().unwrap();
        assert_eq!(json["name"], "sms_spam");
        assert_eq!(json["features"]["label"]["_type"], "ClassLabel");
        assert_eq!(json["task_templates"][0]["task"], "spam_identification");
        assert_eq!(json["task_templates"][0]["text_column"], "text");
        // Empty provenance fields stay out of the projection.
        assert!(json.get("citation").is_none());
    }

    #[test]
    fn test_sys_output_info_merge() {
        let features = Features::from_pairs([("text", Feature::string())]).unwrap();
        let mut metadata = serde_json::Map::new();
        metadata.insert("dataset_name".into(), "emotion".into());
        metadata.insert("features".into(), serde_json::json!({"stale": true}));

        let info = SysOutputInfo::from_metadata(
            TaskType::EmotionClassification,
            features.clone(),
            metadata,
        );
        assert_eq!(info.dataset_name(), Some("emotion"));
        assert_eq!(info.features(), &features);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["task"], "emotion_classification");
        assert_eq!(json["features"]["text"]["_type"], "Value");
    }
}
