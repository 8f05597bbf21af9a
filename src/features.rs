//! Schema primitives for dataset records.
//!
//! A dataset record is described column by column. Each column carries a
//! [`Feature`] descriptor: a scalar [`Value`](Feature::Value), a
//! variable-length [`Sequence`](Feature::Sequence), a fixed-shape
//! [`Struct`](Feature::Struct), or an integer-coded
//! [`ClassLabel`](Feature::ClassLabel). A [`Features`] value is the ordered
//! column-name → descriptor mapping for one side of a task schema.
//!
//! # JSON projection
//!
//! Descriptors serialize to an internally tagged JSON form suitable for a
//! dataset-info file:
//!
//! ```json
//! { "_type": "Sequence", "feature": { "_type": "Value", "dtype": "string" } }
//! ```
//!
//! The `_type` / `dtype` / `feature` / `fields` / `names` keys are a
//! compatibility surface consumed by external tooling; they must not change.
//!
//! # Example
//!
//! ```rust
//! use tasklab::{Feature, Features};
//!
//! let answers = Feature::sequence(Feature::struct_of([
//!     ("text", Feature::string()),
//!     ("answer_start", Feature::int32()),
//! ])?);
//! let schema = Features::from_pairs([("answers", answers)])?;
//! assert!(schema.contains("answers"));
//! # Ok::<(), tasklab::Error>(())
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Primitive Types
// =============================================================================

/// Primitive scalar type of a leaf column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// UTF-8 text.
    String,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Boolean.
    Bool,
    /// Floating-point number.
    Float,
}

impl Primitive {
    /// All primitive types.
    pub fn all() -> &'static [Primitive] {
        &[
            Primitive::String,
            Primitive::Int32,
            Primitive::Int64,
            Primitive::Bool,
            Primitive::Float,
        ]
    }

    /// The serialized name of this primitive (e.g. `"int32"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Int32 => "int32",
            Primitive::Int64 => "int64",
            Primitive::Bool => "bool",
            Primitive::Float => "float",
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Class Labels
// =============================================================================

/// Integer-coded categorical value.
///
/// The integer code of a label is its index into `names`. By convention a
/// code of `-1` means "unset" (e.g. the yes/no slot of a Natural Questions
/// answer that has neither); [`name_of`](ClassLabel::name_of) returns `None`
/// for it.
///
/// # Example
///
/// ```rust
/// use tasklab::ClassLabel;
///
/// let label = ClassLabel::new(["NO", "YES"])?;
/// assert_eq!(label.index_of("YES"), Some(1));
/// assert_eq!(label.name_of(-1), None);
/// # Ok::<(), tasklab::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClassLabelRepr")]
pub struct ClassLabel {
    names: Vec<String>,
}

/// Raw deserialization shape for [`ClassLabel`]; validated on conversion.
#[derive(Deserialize)]
struct ClassLabelRepr {
    names: Vec<String>,
}

impl TryFrom<ClassLabelRepr> for ClassLabel {
    type Error = Error;

    fn try_from(repr: ClassLabelRepr) -> Result<Self> {
        ClassLabel::new(repr.names)
    }
}

impl ClassLabel {
    /// Create a class label from an ordered name list.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Schema`] if a name appears twice.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut seen = std::collections::HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(Error::schema(format!("duplicate class label: {name:?}")));
            }
        }
        Ok(Self { names })
    }

    /// The ordered label names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of classes.
    pub fn num_classes(&self) -> usize {
        self.names.len()
    }

    /// Integer code for a label name, if present.
    pub fn index_of(&self, name: &str) -> Option<i32> {
        self.names.iter().position(|n| n == name).map(|i| i as i32)
    }

    /// Label name for an integer code.
    ///
    /// Returns `None` for out-of-range codes, including the `-1` unset
    /// sentinel.
    pub fn name_of(&self, index: i32) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }
}

// =============================================================================
// Feature Descriptors
// =============================================================================

/// Descriptor for the shape of one column value.
///
/// Descriptors nest: a sequence of structs of scalars is a single
/// descriptor. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Feature {
    /// A scalar leaf value.
    Value {
        /// Primitive type of the value.
        dtype: Primitive,
    },
    /// An ordered, variable-length list of a uniform element type.
    Sequence {
        /// Element descriptor.
        feature: Box<Feature>,
    },
    /// A fixed-shape record of named fields, insertion-ordered.
    Struct {
        /// Field name → descriptor, insertion-ordered.
        fields: IndexMap<String, Feature>,
    },
    /// An integer-coded categorical value.
    ClassLabel(ClassLabel),
}

impl Feature {
    /// Scalar descriptor for a primitive type.
    pub fn value(dtype: Primitive) -> Self {
        Feature::Value { dtype }
    }

    /// Scalar string descriptor.
    pub fn string() -> Self {
        Feature::value(Primitive::String)
    }

    /// Scalar 32-bit integer descriptor.
    pub fn int32() -> Self {
        Feature::value(Primitive::Int32)
    }

    /// Scalar 64-bit integer descriptor.
    pub fn int64() -> Self {
        Feature::value(Primitive::Int64)
    }

    /// Scalar boolean descriptor.
    pub fn boolean() -> Self {
        Feature::value(Primitive::Bool)
    }

    /// Scalar float descriptor.
    pub fn float() -> Self {
        Feature::value(Primitive::Float)
    }

    /// Sequence descriptor over an element type.
    pub fn sequence(element: impl Into<Feature>) -> Self {
        Feature::Sequence {
            feature: Box::new(element.into()),
        }
    }

    /// Struct descriptor from ordered `(name, descriptor)` pairs.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Schema`] if a field name appears twice.
    pub fn struct_of<I, S, F>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, F)>,
        S: Into<String>,
        F: Into<Feature>,
    {
        let mut map = IndexMap::new();
        for (name, feature) in fields {
            let name = name.into();
            if map.insert(name.clone(), feature.into()).is_some() {
                return Err(Error::schema(format!("duplicate struct field: {name:?}")));
            }
        }
        Ok(Feature::Struct { fields: map })
    }

    /// Class-label descriptor from an ordered name list.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Schema`] if a name appears twice.
    pub fn class_label<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Feature::ClassLabel(ClassLabel::new(names)?))
    }

    /// Descriptor kind name, as used in the `_type` projection key.
    pub fn kind(&self) -> &'static str {
        match self {
            Feature::Value { .. } => "Value",
            Feature::Sequence { .. } => "Sequence",
            Feature::Struct { .. } => "Struct",
            Feature::ClassLabel(_) => "ClassLabel",
        }
    }
}

impl From<Primitive> for Feature {
    fn from(dtype: Primitive) -> Self {
        Feature::value(dtype)
    }
}

impl From<ClassLabel> for Feature {
    fn from(label: ClassLabel) -> Self {
        Feature::ClassLabel(label)
    }
}

// =============================================================================
// Features (column schemas)
// =============================================================================

/// Ordered mapping from column name to descriptor.
///
/// Column names are unique; insertion order is preserved and documents the
/// canonical column ordering for display and export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Features(IndexMap<String, Feature>);

impl Features {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema from ordered `(column, descriptor)` pairs.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Schema`] if a column name appears twice.
    pub fn from_pairs<I, S, F>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, F)>,
        S: Into<String>,
        F: Into<Feature>,
    {
        let mut features = Self::new();
        for (name, feature) in pairs {
            features.insert(name, feature)?;
        }
        Ok(features)
    }

    /// Append a column.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Schema`] if the column name is already present.
    pub fn insert(&mut self, name: impl Into<String>, feature: impl Into<Feature>) -> Result<()> {
        let name = name.into();
        if self.0.contains_key(&name) {
            return Err(Error::schema(format!("duplicate column: {name:?}")));
        }
        self.0.insert(name, feature.into());
        Ok(())
    }

    /// Descriptor for a column, if present.
    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.0.get(name)
    }

    /// Whether a column is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate columns in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Feature)> {
        self.0.iter().map(|(name, feature)| (name.as_str(), feature))
    }

    /// Column names in canonical order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// JSON projection of the schema.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Reconstruct a schema from its JSON projection.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl<'a> IntoIterator for &'a Features {
    type Item = (&'a String, &'a Feature);
    type IntoIter = indexmap::map::Iter<'a, String, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_column_rejected() {
        let result = Features::from_pairs([
            ("question", Feature::string()),
            ("question", Feature::string()),
        ]);
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_duplicate_class_label_rejected() {
        let result = ClassLabel::new(["spam", "ham", "spam"]);
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn test_class_label_codes() {
        let label = ClassLabel::new(["sadness", "joy", "love"]).unwrap();
        assert_eq!(label.num_classes(), 3);
        assert_eq!(label.index_of("joy"), Some(1));
        assert_eq!(label.index_of("anger"), None);
        assert_eq!(label.name_of(2), Some("love"));
        assert_eq!(label.name_of(-1), None);
        assert_eq!(label.name_of(3), None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let schema = Features::from_pairs([
            ("question", Feature::string()),
            ("context", Feature::string()),
            ("id", Feature::string()),
        ])
        .unwrap();
        let names: Vec<_> = schema.column_names().collect();
        assert_eq!(names, vec!["question", "context", "id"]);
    }

    #[test]
    fn test_structural_equality() {
        let a = Feature::sequence(Feature::struct_of([("text", Feature::string())]).unwrap());
        let b = Feature::sequence(Feature::struct_of([("text", Feature::string())]).unwrap());
        let c = Feature::sequence(Feature::struct_of([("text", Feature::int32())]).unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_json_projection_keys() {
        let feature = Feature::sequence(Feature::string());
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(json["_type"], "Sequence");
        assert_eq!(json["feature"]["_type"], "Value");
        assert_eq!(json["feature"]["dtype"], "string");
    }

    #[test]
    fn test_roundtrip() {
        let schema = Features::from_pairs([
            ("tokens", Feature::sequence(Feature::string())),
            (
                "tags",
                Feature::sequence(Feature::class_label(["O", "B-PER", "I-PER"]).unwrap()),
            ),
            (
                "answers",
                Feature::struct_of([
                    ("text", Feature::string()),
                    ("answer_start", Feature::int32()),
                ])
                .unwrap(),
            ),
        ])
        .unwrap();

        let json = schema.to_json().unwrap();
        let restored = Features::from_json(json).unwrap();
        assert_eq!(schema, restored);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_label_names() {
        let json = serde_json::json!({
            "_type": "ClassLabel",
            "names": ["YES", "NO", "YES"],
        });
        assert!(serde_json::from_value::<Feature>(json).is_err());
    }

    #[test]
    fn test_primitive_shorthand() {
        let schema = Features::from_pairs([("flag", Primitive::Bool)]).unwrap();
        assert_eq!(schema.get("flag"), Some(&Feature::boolean()));
    }
}
