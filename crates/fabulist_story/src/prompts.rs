//! Prompt construction for every pipeline call.
//!
//! Prompts are plain formatted strings; the structured calls pair them
//! with a schema from [`crate::schema`]. Context threading for
//! authoring and continuation happens here, not in the pipeline.

use fabulist_core::{Chapter, Part, Section, StoryBible};
use std::fmt::Write;

/// How many trailing characters of existing prose a continuation call
/// sees.
pub const CONTINUATION_CONTEXT_CHARS: usize = 2000;

/// Demo-scale outline dimensions requested from structure expansion.
const CHAPTER_COUNT: usize = 3;
const PARTS_PER_CHAPTER: usize = 2;
const SECTIONS_PER_PART: usize = 2;

/// Prompt for bible extraction from the raw story idea.
pub(crate) fn analysis(input: &str) -> String {
    format!(
        "You are a story analyst. Read the story idea below in full and \
         distill it into a story bible.\n\n\
         Extract:\n\
         - title: the story's title; propose a fitting one if the idea has none\n\
         - genre: genre tags\n\
         - setting: where and when the story takes place\n\
         - characters: every named or implied character, with name, role, \
         and a short description\n\
         - theme: thematic tags\n\
         - synopsis: a self-contained summary of the whole story\n\n\
         Story idea:\n{input}"
    )
}

/// Prompt for expanding a bible into the full chapter/part/section
/// outline.
pub(crate) fn structure(bible: &StoryBible) -> String {
    format!(
        "You are a story architect. Expand the story bible below into a \
         complete outline of exactly {CHAPTER_COUNT} chapters, each with \
         {PARTS_PER_CHAPTER} parts, each part with {SECTIONS_PER_PART} \
         sections.\n\n\
         Every chapter needs a number, title, and summary. Every part \
         needs a number and summary. Every section needs a number and a \
         summary concrete enough to write prose from. The outline must \
         cover the whole synopsis with no gaps between sections.\n\n\
         {}",
        render_bible(bible)
    )
}

/// Prompt for authoring the first draft of one section.
///
/// `previous_context` is the preceding section's short summary, or the
/// synopsis for the very first section.
pub(crate) fn section(
    bible: &StoryBible,
    chapter: &Chapter,
    part: &Part,
    section: &Section,
    previous_context: &str,
) -> String {
    format!(
        "You are a novelist writing one scene of a longer work. Write the \
         full prose for the section described below. Write only the prose \
         itself, with no headings, notes, or commentary.\n\n\
         {}\n\
         Chapter {}: {} ({})\n\
         Part {}: {}\n\
         Section {} brief: {}\n\n\
         What came immediately before:\n{previous_context}\n\n\
         Pick up from there and realize the section brief in full.",
        render_bible(bible),
        chapter.number,
        chapter.title,
        chapter.summary,
        part.number,
        part.summary,
        section.number,
        section.summary,
    )
}

/// Prompt for continuing an already-written section.
///
/// Only the trailing window of the existing prose is included; the
/// synopsis and section brief re-anchor the model on where the scene
/// sits in the larger story.
pub(crate) fn continuation(bible: &StoryBible, section: &Section, tail: &str) -> String {
    format!(
        "You are a novelist continuing a scene in progress. Write the next \
         stretch of prose, picking up exactly where the excerpt below \
         leaves off. Write only new prose; do not repeat or rephrase the \
         excerpt, and add no headings or commentary.\n\n\
         Story synopsis: {}\n\
         Section brief: {}\n\n\
         The scene so far (final excerpt):\n{tail}",
        bible.synopsis, section.summary,
    )
}

/// Prompt for compressing freshly authored prose into the short
/// summary threaded to the next section.
pub(crate) fn short_summary(content: &str) -> String {
    format!(
        "Summarize the scene below in at most three sentences. The summary \
         will brief the writer of the next scene, so state what happened \
         and where things stand, nothing else. Return only the summary.\n\n\
         Scene:\n{content}"
    )
}

/// The last `max_chars` characters of `content`, aligned to a char
/// boundary so multibyte text is never split.
pub(crate) fn trailing_window(content: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match content.char_indices().rev().nth(max_chars - 1) {
        Some((idx, _)) => &content[idx..],
        None => content,
    }
}

fn render_bible(bible: &StoryBible) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Title: {}", bible.title);
    if !bible.genre.is_empty() {
        let _ = writeln!(out, "Genre: {}", bible.genre.join(", "));
    }
    let _ = writeln!(out, "Setting: {}", bible.setting);
    if !bible.theme.is_empty() {
        let _ = writeln!(out, "Themes: {}", bible.theme.join(", "));
    }
    if !bible.characters.is_empty() {
        let _ = writeln!(out, "Characters:");
        for character in &bible.characters {
            let _ = writeln!(
                out,
                "- {} ({}): {}",
                character.name, character.role, character.description
            );
        }
    }
    let _ = writeln!(out, "Synopsis: {}", bible.synopsis);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_window_takes_the_tail() {
        assert_eq!(trailing_window("abcdef", 3), "def");
        assert_eq!(trailing_window("abc", 10), "abc");
        assert_eq!(trailing_window("abc", 0), "");
        assert_eq!(trailing_window("", 5), "");
    }

    #[test]
    fn trailing_window_respects_char_boundaries() {
        let text = "príncipe encantado";
        let tail = trailing_window(text, 10);
        assert_eq!(tail.chars().count(), 10);
        assert!(text.ends_with(tail));
    }

    fn bible() -> StoryBible {
        StoryBible {
            title: "T".to_string(),
            genre: vec![],
            setting: "S".to_string(),
            characters: vec![],
            theme: vec![],
            synopsis: "Syn".to_string(),
        }
    }

    #[test]
    fn structure_prompt_names_the_demo_dimensions() {
        let prompt = structure(&bible());
        assert!(prompt.contains("3 chapters"));
        assert!(prompt.contains("Synopsis: Syn"));
    }

    #[test]
    fn section_prompt_carries_display_ordinals() {
        let chapter = Chapter {
            id: "ch-0".to_string(),
            number: 7,
            title: "Descent".to_string(),
            summary: "Mara digs".to_string(),
            parts: vec![],
        };
        let part = Part {
            id: "ch-0-p-0".to_string(),
            number: 4,
            summary: "The archive".to_string(),
            sections: vec![],
        };
        let leaf = Section::new("ch-0-p-0-s-0", 9, "Missing files");

        let prompt = section(&bible(), &chapter, &part, &leaf, "Syn");
        assert!(prompt.contains("Chapter 7: Descent"));
        assert!(prompt.contains("Part 4: The archive"));
        assert!(prompt.contains("Section 9 brief: Missing files"));
    }
}
