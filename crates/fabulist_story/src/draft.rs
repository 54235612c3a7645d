//! Wire-shaped draft types for the structure expansion response.
//!
//! Drafts carry everything the backend supplies except identifiers.
//! All fields are required at deserialization time, so a response
//! missing any field fails fast as a malformed structure before the
//! tree is built.

use fabulist_core::{Chapter, Part, Section};
use serde::Deserialize;

/// One chapter as returned by structure expansion.
#[derive(Debug, Deserialize)]
pub(crate) struct ChapterDraft {
    pub number: u32,
    pub title: String,
    pub summary: String,
    pub parts: Vec<PartDraft>,
}

/// One part within a chapter draft.
#[derive(Debug, Deserialize)]
pub(crate) struct PartDraft {
    pub number: u32,
    pub summary: String,
    pub sections: Vec<SectionDraft>,
}

/// One section within a part draft.
#[derive(Debug, Deserialize)]
pub(crate) struct SectionDraft {
    pub number: u32,
    pub summary: String,
}

/// Build the outline tree from drafts, assigning identifiers from
/// zero-based positional indices.
///
/// Identity comes from position alone; the backend's `number` ordinals
/// are retained for display but never influence the identifiers, so a
/// backend that numbers from zero, one, or out of order still yields
/// `ch-0`, `ch-0-p-0`, `ch-0-p-0-s-0` and so on.
pub(crate) fn into_chapters(drafts: Vec<ChapterDraft>) -> Vec<Chapter> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, chapter)| {
            let chapter_id = format!("ch-{i}");
            Chapter {
                parts: chapter
                    .parts
                    .into_iter()
                    .enumerate()
                    .map(|(j, part)| {
                        let part_id = format!("{chapter_id}-p-{j}");
                        Part {
                            sections: part
                                .sections
                                .into_iter()
                                .enumerate()
                                .map(|(k, section)| {
                                    Section::new(
                                        format!("{part_id}-s-{k}"),
                                        section.number,
                                        section.summary,
                                    )
                                })
                                .collect(),
                            id: part_id,
                            number: part.number,
                            summary: part.summary,
                        }
                    })
                    .collect(),
                id: chapter_id,
                number: chapter.number,
                title: chapter.title,
                summary: chapter.summary,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_come_from_position_not_numbers() {
        let drafts = vec![ChapterDraft {
            number: 7,
            title: "Seven".to_string(),
            summary: "s".to_string(),
            parts: vec![PartDraft {
                number: 3,
                summary: "p".to_string(),
                sections: vec![
                    SectionDraft {
                        number: 9,
                        summary: "a".to_string(),
                    },
                    SectionDraft {
                        number: 2,
                        summary: "b".to_string(),
                    },
                ],
            }],
        }];

        let chapters = into_chapters(drafts);
        assert_eq!(chapters[0].id, "ch-0");
        assert_eq!(chapters[0].number, 7);
        assert_eq!(chapters[0].parts[0].id, "ch-0-p-0");
        assert_eq!(chapters[0].parts[0].sections[0].id, "ch-0-p-0-s-0");
        assert_eq!(chapters[0].parts[0].sections[1].id, "ch-0-p-0-s-1");
        assert_eq!(chapters[0].parts[0].sections[1].number, 2);
    }

    #[test]
    fn sections_start_unwritten_and_empty() {
        let drafts = vec![ChapterDraft {
            number: 1,
            title: "One".to_string(),
            summary: "s".to_string(),
            parts: vec![PartDraft {
                number: 1,
                summary: "p".to_string(),
                sections: vec![SectionDraft {
                    number: 1,
                    summary: "opening".to_string(),
                }],
            }],
        }];

        let section = &into_chapters(drafts)[0].parts[0].sections[0];
        assert!(section.content.is_empty());
        assert!(section.short_summary.is_empty());
        assert!(!section.is_written);
    }

    #[test]
    fn missing_field_fails_to_parse() {
        let raw = serde_json::json!([
            { "number": 1, "title": "One", "parts": [] }
        ]);
        let parsed: Result<Vec<ChapterDraft>, _> = serde_json::from_value(raw);
        assert!(parsed.is_err());
    }
}
