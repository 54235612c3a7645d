//! Single-story session state over the pipeline.

use crate::pipeline::StoryPipeline;
use fabulist_core::{SectionPath, Story};
use fabulist_error::{FabulistResult, StoryError, StoryErrorKind};
use fabulist_interface::JsonMode;

/// A session owning at most one story and enforcing the
/// one-generation-call-in-flight rule.
///
/// Pipeline operations compute a full replacement story; the session
/// installs it wholesale only on success, so a failed call leaves the
/// session's story byte-for-byte unchanged. A second call while one is
/// in flight fails immediately with `OperationInFlight` instead of
/// queueing.
pub struct StorySession<D> {
    pipeline: StoryPipeline<D>,
    story: Option<Story>,
    in_flight: bool,
}

impl<D: JsonMode> StorySession<D> {
    /// Create an empty session over `pipeline`.
    pub fn new(pipeline: StoryPipeline<D>) -> Self {
        Self {
            pipeline,
            story: None,
            in_flight: false,
        }
    }

    /// The current story, if analysis has succeeded.
    pub fn story(&self) -> Option<&Story> {
        self.story.as_ref()
    }

    /// Whether a generation call is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Analyze a raw story idea, replacing any previous story.
    pub async fn analyze(&mut self, input: &str) -> FabulistResult<&Story> {
        self.begin()?;
        let result = self.pipeline.analyze(input).await;
        self.finish(result)
    }

    /// Expand the current story into its outline.
    pub async fn expand(&mut self) -> FabulistResult<&Story> {
        let story = self.current("structure expansion")?;
        self.begin()?;
        let result = self.pipeline.expand(&story).await;
        self.finish(result)
    }

    /// Author the first draft of the addressed section.
    pub async fn author_section(&mut self, path: &SectionPath) -> FabulistResult<&Story> {
        let story = self.current("section authoring")?;
        self.begin()?;
        let result = self.pipeline.author_section(&story, path).await;
        self.finish(result)
    }

    /// Continue the addressed section's prose.
    pub async fn continue_section(&mut self, path: &SectionPath) -> FabulistResult<&Story> {
        let story = self.current("section continuation")?;
        self.begin()?;
        let result = self.pipeline.continue_section(&story, path).await;
        self.finish(result)
    }

    fn current(&self, operation: &str) -> FabulistResult<Story> {
        self.story.clone().ok_or_else(|| {
            StoryError::new(StoryErrorKind::NoStory(format!(
                "{operation} requires an analyzed story"
            )))
            .into()
        })
    }

    fn begin(&mut self) -> FabulistResult<()> {
        if self.in_flight {
            return Err(StoryError::new(StoryErrorKind::OperationInFlight).into());
        }
        self.in_flight = true;
        Ok(())
    }

    fn finish(&mut self, result: FabulistResult<Story>) -> FabulistResult<&Story> {
        self.in_flight = false;
        let story = result?;
        Ok(self.story.insert(story))
    }
}
