//! Task-based evaluation processor base.
//!
//! A [`Processor`] owns the [`SysOutputInfo`] describing one system-output
//! file and delegates the actual analysis to a pluggable
//! [`OutputBuilder`]. This crate only defines the seam; builders live with
//! the evaluation harness that hosts them.

use crate::info::SysOutputInfo;
use crate::{Error, Result};

/// Analysis backend a [`Processor`] delegates to.
pub trait OutputBuilder {
    /// Run the analysis and produce the enriched output info.
    fn run(&self) -> Result<SysOutputInfo>;
}

impl<F> OutputBuilder for F
where
    F: Fn() -> Result<SysOutputInfo>,
{
    fn run(&self) -> Result<SysOutputInfo> {
        self()
    }
}

/// Base evaluation processor for one task's system output.
///
/// Constructed by an adapter with the output metadata; an evaluation harness
/// attaches a builder before calling [`process`](Processor::process).
/// Invoking `process` without a builder is a programming error in the
/// adapter layer and surfaces as [`Error::NotConfigured`].
pub struct Processor {
    info: SysOutputInfo,
    builder: Option<Box<dyn OutputBuilder>>,
}

impl Processor {
    /// Create a processor over output metadata, with no builder attached.
    pub fn new(info: SysOutputInfo) -> Self {
        Self {
            info,
            builder: None,
        }
    }

    /// Attach the analysis builder.
    pub fn with_builder(mut self, builder: Box<dyn OutputBuilder>) -> Self {
        self.builder = Some(builder);
        self
    }

    /// The output metadata this processor was constructed with.
    pub fn info(&self) -> &SysOutputInfo {
        &self.info
    }

    /// Run the configured builder.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotConfigured`] if no builder is attached;
    /// otherwise propagates the builder's own result.
    pub fn process(&self) -> Result<SysOutputInfo> {
        match &self.builder {
            Some(builder) => builder.run(),
            None => Err(Error::not_configured(format!(
                "no output builder attached for task {}",
                self.info.task()
            ))),
        }
    }
}

impl std::fmt::Debug for Processor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Processor")
            .field("info", &self.info)
            .field("has_builder", &self.builder.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{Feature, Features};
    use crate::TaskType;

    fn output_info() -> SysOutputInfo {
        let features = Features::from_pairs([("text", Feature::string())]).unwrap();
        SysOutputInfo::from_metadata(
            TaskType::TextClassification,
            features,
            serde_json::Map::new(),
        )
    }

    #[test]
    fn test_process_without_builder_fails() {
        let processor = Processor::new(output_info());
        let result = processor.process();
        assert!(matches!(result, Err(Error::NotConfigured(_))));
    }

    #[test]
    fn test_process_delegates_to_builder() {
        let processor =
            Processor::new(output_info()).with_builder(Box::new(|| Ok(output_info())));
        let info = processor.process().unwrap();
        assert_eq!(info.task(), TaskType::TextClassification);
    }
}
