//! Immutable section updates over the outline tree.
//!
//! The tree is never mutated in place. An update rebuilds the chapter,
//! part, and section on the addressed path and clones every sibling
//! unchanged, yielding a fully replaced [`Story`]. An unresolvable
//! path is reported explicitly rather than silently leaving the story
//! untouched.

use fabulist_core::{Chapter, Part, Section, SectionPath, Story};

/// The change to apply to one addressed section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionUpdate {
    /// Replacement content for the section
    pub content: String,
    /// Set `is_written` when true; leave it untouched when false
    pub mark_written: bool,
    /// Replacement short summary, or `None` to leave it untouched
    pub short_summary: Option<String>,
}

/// Result of attempting a section update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The path resolved; here is the replacement story
    Applied(Story),
    /// No node matched the identifier triple; nothing changed
    NotFound,
}

/// Apply `update` to the section addressed by `path`, returning a
/// replacement story with the path rebuilt and all siblings shared
/// structurally unchanged.
///
/// The update is idempotent: applying the same update to its own
/// result yields an equal story.
pub fn apply_section_update(
    story: &Story,
    path: &SectionPath,
    update: &SectionUpdate,
) -> UpdateOutcome {
    if story.find(path).is_none() {
        return UpdateOutcome::NotFound;
    }

    let chapters = story
        .chapters
        .iter()
        .map(|chapter| {
            if chapter.id != path.chapter {
                return chapter.clone();
            }
            Chapter {
                parts: chapter
                    .parts
                    .iter()
                    .map(|part| {
                        if part.id != path.part {
                            return part.clone();
                        }
                        Part {
                            sections: part
                                .sections
                                .iter()
                                .map(|section| {
                                    if section.id != path.section {
                                        return section.clone();
                                    }
                                    rebuild_section(section, update)
                                })
                                .collect(),
                            ..part.clone()
                        }
                    })
                    .collect(),
                ..chapter.clone()
            }
        })
        .collect();

    UpdateOutcome::Applied(Story {
        chapters,
        ..story.clone()
    })
}

fn rebuild_section(section: &Section, update: &SectionUpdate) -> Section {
    Section {
        content: update.content.clone(),
        is_written: section.is_written || update.mark_written,
        short_summary: update
            .short_summary
            .clone()
            .unwrap_or_else(|| section.short_summary.clone()),
        ..section.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabulist_core::{StoryBible, StoryStatus};

    fn story() -> Story {
        let bible = StoryBible {
            title: "T".to_string(),
            genre: vec![],
            setting: "S".to_string(),
            characters: vec![],
            theme: vec![],
            synopsis: "Syn".to_string(),
        };
        let mut story = Story::from_bible(bible, "idea");
        story.status = StoryStatus::Structuring;
        story.chapters = vec![Chapter {
            id: "ch-0".to_string(),
            number: 1,
            title: "One".to_string(),
            summary: "c".to_string(),
            parts: vec![Part {
                id: "ch-0-p-0".to_string(),
                number: 1,
                summary: "p".to_string(),
                sections: vec![
                    Section::new("ch-0-p-0-s-0", 1, "first"),
                    Section::new("ch-0-p-0-s-1", 2, "second"),
                ],
            }],
        }];
        story
    }

    fn update() -> SectionUpdate {
        SectionUpdate {
            content: "Prose.".to_string(),
            mark_written: true,
            short_summary: Some("It happened.".to_string()),
        }
    }

    #[test]
    fn applies_to_the_addressed_section_only() {
        let story = story();
        let path = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-0");
        let UpdateOutcome::Applied(next) = apply_section_update(&story, &path, &update()) else {
            panic!("expected Applied");
        };

        let target = &next.chapters[0].parts[0].sections[0];
        assert_eq!(target.content, "Prose.");
        assert!(target.is_written);
        assert_eq!(target.short_summary, "It happened.");

        let sibling = &next.chapters[0].parts[0].sections[1];
        assert_eq!(sibling, &story.chapters[0].parts[0].sections[1]);
        // Identity and ordinals survive the rebuild.
        assert_eq!(target.id, "ch-0-p-0-s-0");
        assert_eq!(target.number, 1);
    }

    #[test]
    fn original_story_is_untouched() {
        let story = story();
        let path = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-0");
        let _ = apply_section_update(&story, &path, &update());
        assert!(story.chapters[0].parts[0].sections[0].content.is_empty());
        assert!(!story.chapters[0].parts[0].sections[0].is_written);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let story = story();
        let path = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-9");
        assert_eq!(
            apply_section_update(&story, &path, &update()),
            UpdateOutcome::NotFound
        );
    }

    #[test]
    fn mismatched_triple_is_not_found() {
        let story = story();
        // Section exists but under a different part id.
        let path = SectionPath::new("ch-0", "ch-0-p-1", "ch-0-p-0-s-0");
        assert_eq!(
            apply_section_update(&story, &path, &update()),
            UpdateOutcome::NotFound
        );
    }

    #[test]
    fn reapplying_is_idempotent() {
        let story = story();
        let path = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-1");
        let update = update();

        let UpdateOutcome::Applied(once) = apply_section_update(&story, &path, &update) else {
            panic!("expected Applied");
        };
        let UpdateOutcome::Applied(twice) = apply_section_update(&once, &path, &update) else {
            panic!("expected Applied");
        };
        assert_eq!(once, twice);
    }

    #[test]
    fn mark_written_false_leaves_flag_alone() {
        let story = story();
        let path = SectionPath::new("ch-0", "ch-0-p-0", "ch-0-p-0-s-0");
        let first = SectionUpdate {
            content: "Draft.".to_string(),
            mark_written: true,
            short_summary: None,
        };
        let UpdateOutcome::Applied(written) = apply_section_update(&story, &path, &first) else {
            panic!("expected Applied");
        };

        let continuation = SectionUpdate {
            content: "Draft.\n\nMore.".to_string(),
            mark_written: false,
            short_summary: None,
        };
        let UpdateOutcome::Applied(next) = apply_section_update(&written, &path, &continuation)
        else {
            panic!("expected Applied");
        };
        assert!(next.chapters[0].parts[0].sections[0].is_written);
    }
}
