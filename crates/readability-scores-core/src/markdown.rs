//! Markdown to prose, so that formatting does not skew the scores.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! stripping. Block-level elements are separated by blank lines, which the
//! sentence splitter treats as boundaries: a list item or table cell without
//! a full stop never runs on into the next one.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// File extensions treated as markdown when no explicit choice is made.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkd"];

/// Whether a file name looks like markdown.
pub fn is_markdown_path(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| MARKDOWN_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Strip markdown formatting, returning plain prose text.
///
/// Removes:
/// - Code blocks (fenced and indented)
/// - Inline code
/// - HTML
/// - YAML frontmatter
/// - Headings (section titles are not prose)
/// - Tables
/// - Image alt text
///
/// Preserves:
/// - Link text (the visible part)
/// - Blockquote text
/// - List item text
/// - Emphasis/strong text (without markers)
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    // pulldown-cmark doesn't know about frontmatter
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            // Block ends become paragraph breaks
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::BlockQuote(_))
                if skip_depth == 0 =>
            {
                push_block_break(&mut result);
            }

            _ => {}
        }
    }

    result.trim_end().to_string()
}

fn push_block_break(result: &mut String) {
    if !result.is_empty() && !result.ends_with("\n\n") {
        result.push_str("\n\n");
    }
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_code_blocks() {
        let input = "Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("let x"));
        assert!(result.contains("Some text."));
        assert!(result.contains("More text."));
    }

    #[test]
    fn strip_removes_frontmatter() {
        let input = "---\nstatus: accepted\ndate: 2026-02-07\n---\n\nSome text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("status"));
        assert_eq!(result, "Some text.");
    }

    #[test]
    fn strip_removes_headings() {
        let input = "# Header\n\nSome text.\n\n## Subheader\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("Header"));
        assert!(!result.contains("Subheader"));
        assert_eq!(result, "Some text.\n\nMore text.");
    }

    #[test]
    fn strip_preserves_link_text() {
        let input = "Check [this link](https://example.com) for details.";
        let result = strip_to_prose(input);
        assert_eq!(result, "Check this link for details.");
    }

    #[test]
    fn strip_removes_inline_code_and_images() {
        let input = "Use `foo()` to do things. ![a diagram](d.png) See above.";
        let result = strip_to_prose(input);
        assert!(!result.contains("foo()"));
        assert!(!result.contains("diagram"));
        assert!(result.contains("to do things."));
        assert!(result.contains("See above."));
    }

    #[test]
    fn strip_removes_emphasis_markers() {
        let input = "This is **bold** and *italic* text.";
        assert_eq!(strip_to_prose(input), "This is bold and italic text.");
    }

    #[test]
    fn strip_removes_tables() {
        let input = "Text before.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nText after.";
        let result = strip_to_prose(input);
        assert_eq!(result, "Text before.\n\nText after.");
    }

    #[test]
    fn list_items_are_separate_blocks() {
        let input = "- first item\n- second item\n";
        let result = strip_to_prose(input);
        assert_eq!(result, "first item\n\nsecond item");
        assert_eq!(crate::text::split_sentences(&result).len(), 2);
    }

    #[test]
    fn strip_preserves_blockquote_text() {
        let input = "> This is a quote.\n\nRegular text.";
        let result = strip_to_prose(input);
        assert!(result.contains("This is a quote."));
        assert!(result.contains("Regular text."));
    }

    #[test]
    fn markdown_paths() {
        assert!(is_markdown_path("README.md"));
        assert!(is_markdown_path("docs/guide.Markdown"));
        assert!(!is_markdown_path("notes.txt"));
        assert!(!is_markdown_path("Makefile"));
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
    }
}
