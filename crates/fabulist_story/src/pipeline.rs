//! The stateless three-stage generation pipeline.

use crate::{
    draft::{self, ChapterDraft},
    prompts, schema,
    update::{SectionUpdate, UpdateOutcome, apply_section_update},
};
use fabulist_core::{
    GenerateRequest, Message, ModelPolicy, SectionPath, Story, StoryBible, StoryStatus,
};
use fabulist_error::{FabulistResult, StoryError, StoryErrorKind};
use fabulist_interface::JsonMode;

/// The generation engine: analysis, structure expansion, section
/// authoring, and continuation over a single backend.
///
/// The pipeline holds no story state. Every operation takes the
/// current story by reference and returns a replacement; callers (or
/// [`StorySession`](crate::StorySession)) decide whether to install
/// the result. A failed call therefore leaves the caller's story
/// exactly as it was.
///
/// Model selection follows the [`ModelPolicy`]: the analysis model
/// handles extraction, structuring, and short summaries; the writing
/// model handles prose.
#[derive(Debug, Clone)]
pub struct StoryPipeline<D> {
    driver: D,
    policy: ModelPolicy,
}

impl<D: JsonMode> StoryPipeline<D> {
    /// Create a pipeline over `driver` with the given model policy.
    pub fn new(driver: D, policy: ModelPolicy) -> Self {
        Self { driver, policy }
    }

    /// The model policy this pipeline was built with.
    pub fn policy(&self) -> &ModelPolicy {
        &self.policy
    }

    /// Extract a story bible from a raw story idea.
    ///
    /// Returns a fresh story in `Analyzing` status with no structure.
    /// Empty or whitespace-only input is rejected before any backend
    /// call; a response missing required bible fields is a
    /// `MalformedBible` error.
    pub async fn analyze(&self, input: &str) -> FabulistResult<Story> {
        if input.trim().is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptyInput).into());
        }

        tracing::info!(model = %self.policy.analysis, "extracting story bible");
        let request = self.analysis_request(prompts::analysis(input));
        let value = self
            .driver
            .generate_json(&request, &schema::bible_schema())
            .await?;
        let bible: StoryBible = serde_json::from_value(value)
            .map_err(|e| StoryError::new(StoryErrorKind::MalformedBible(e.to_string())))?;

        Ok(Story::from_bible(bible, input))
    }

    /// Expand an analyzed story into its full chapter/part/section
    /// outline.
    ///
    /// Identifiers are assigned here, exactly once, from zero-based
    /// positional indices. A response that does not match the expected
    /// tree shape fails as `MalformedStructure` and no partial tree is
    /// ever installed.
    pub async fn expand(&self, story: &Story) -> FabulistResult<Story> {
        tracing::info!(model = %self.policy.analysis, "expanding story structure");
        let request = self.analysis_request(prompts::structure(&story.bible));
        let value = self
            .driver
            .generate_json(&request, &schema::structure_schema())
            .await?;
        let drafts: Vec<ChapterDraft> = serde_json::from_value(value)
            .map_err(|e| StoryError::new(StoryErrorKind::MalformedStructure(e.to_string())))?;
        if drafts.is_empty() {
            return Err(StoryError::new(StoryErrorKind::MalformedStructure(
                "structure response contained no chapters".to_string(),
            ))
            .into());
        }

        Ok(Story {
            chapters: draft::into_chapters(drafts),
            status: story.status.max(StoryStatus::Structuring),
            ..story.clone()
        })
    }

    /// Author the first draft of the addressed section.
    ///
    /// The authoring context is the preceding section's short summary
    /// in reading order, or the synopsis for the very first section.
    /// On success the section is marked written, a short summary of
    /// the new prose is derived for the next section's context, and
    /// the story advances to `Writing`. Short-summary derivation is
    /// best-effort: its failure is logged and the summary left empty,
    /// which degrades the next section's context to the synopsis.
    pub async fn author_section(
        &self,
        story: &Story,
        path: &SectionPath,
    ) -> FabulistResult<Story> {
        let (chapter, part, section) = story
            .find(path)
            .ok_or_else(|| StoryError::new(not_found(path)))?;

        let previous_context = story
            .preceding_section(path)
            .filter(|s| !s.short_summary.is_empty())
            .map(|s| s.short_summary.clone())
            .unwrap_or_else(|| story.bible.synopsis.clone());

        tracing::info!(section = %path, model = %self.policy.writing, "authoring section");
        let request = self.writing_request(prompts::section(
            &story.bible,
            chapter,
            part,
            section,
            &previous_context,
        ));
        let content = self.driver.generate(&request).await?.text();

        let short_summary = match self.derive_short_summary(&content).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::warn!(section = %path, error = %e, "short summary derivation failed");
                None
            }
        };

        let update = SectionUpdate {
            content,
            mark_written: true,
            short_summary,
        };
        match apply_section_update(story, path, &update) {
            UpdateOutcome::Applied(next) => Ok(Story {
                status: next.status.max(StoryStatus::Writing),
                ..next
            }),
            UpdateOutcome::NotFound => Err(StoryError::new(not_found(path)).into()),
        }
    }

    /// Continue an already-written section.
    ///
    /// The backend sees only the trailing
    /// [`CONTINUATION_CONTEXT_CHARS`](crate::CONTINUATION_CONTEXT_CHARS)
    /// characters of existing prose; the new prose is appended after a
    /// blank line. Status and the written flag are left untouched. A
    /// failed call is logged and propagated with the story unchanged.
    pub async fn continue_section(
        &self,
        story: &Story,
        path: &SectionPath,
    ) -> FabulistResult<Story> {
        let (_, _, section) = story
            .find(path)
            .ok_or_else(|| StoryError::new(not_found(path)))?;

        let tail = prompts::trailing_window(&section.content, prompts::CONTINUATION_CONTEXT_CHARS);
        tracing::info!(section = %path, model = %self.policy.writing, "continuing section");
        let request = self.writing_request(prompts::continuation(&story.bible, section, tail));
        let added = match self.driver.generate(&request).await {
            Ok(response) => response.text(),
            Err(e) => {
                tracing::warn!(section = %path, error = %e, "continuation failed");
                return Err(e);
            }
        };

        let update = SectionUpdate {
            content: format!("{}\n\n{}", section.content, added),
            mark_written: false,
            short_summary: None,
        };
        match apply_section_update(story, path, &update) {
            UpdateOutcome::Applied(next) => Ok(next),
            UpdateOutcome::NotFound => Err(StoryError::new(not_found(path)).into()),
        }
    }

    async fn derive_short_summary(&self, content: &str) -> FabulistResult<String> {
        let request = self.analysis_request(prompts::short_summary(content));
        Ok(self.driver.generate(&request).await?.text().trim().to_string())
    }

    fn analysis_request(&self, prompt: String) -> GenerateRequest {
        GenerateRequest {
            messages: vec![Message::user(prompt)],
            model: Some(self.policy.analysis.clone()),
            ..Default::default()
        }
    }

    fn writing_request(&self, prompt: String) -> GenerateRequest {
        GenerateRequest {
            messages: vec![Message::user(prompt)],
            model: Some(self.policy.writing.clone()),
            ..Default::default()
        }
    }
}

fn not_found(path: &SectionPath) -> StoryErrorKind {
    StoryErrorKind::SectionNotFound {
        chapter: path.chapter.clone(),
        part: path.part.clone(),
        section: path.section.clone(),
    }
}
