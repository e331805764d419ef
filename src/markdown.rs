//! Line-oriented markdown to block-sequence transformer.
//!
//! The transformer recognizes the small markdown subset used by the
//! documentation set: `#`/`##`/`###` headers, `-`/`*` bullets, `1.`-style
//! numbered items, fenced code blocks, and plain paragraphs.  It is a total
//! function over arbitrary input; unrecognized lines degrade gracefully into
//! paragraph text.

use crate::model::Block;

/// Converts raw markdown text into an ordered sequence of [`Block`]s.
///
/// Rules are evaluated per line, in this precedence order:
///
/// 1. a trimmed line starting with three backticks toggles code mode (the
///    info string after the backticks is discarded),
/// 2. inside code mode every line is buffered verbatim,
/// 3. a blank line flushes the pending paragraph,
/// 4. `# `, `## ` and `### ` prefixes on the raw line emit title and heading
///    blocks,
/// 5. a trimmed line starting with `- ` or `* ` emits one bullet per line,
/// 6. a trimmed line starting with digits followed by `. ` emits a numbered
///    item with the marker retained,
/// 7. anything else is appended to the pending paragraph, space-joined on
///    flush.
///
/// A paragraph still pending at end of input is flushed, and so is the buffer
/// of an unterminated code fence.
pub fn transform(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut code: Vec<&str> = Vec::new();
    let mut in_code = false;

    for line in source.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            if in_code {
                if !code.is_empty() {
                    blocks.push(Block::Code(code.join("\n")));
                    code.clear();
                }
                in_code = false;
            } else {
                flush_paragraph(&mut paragraph, &mut blocks);
                in_code = true;
            }
            continue;
        }

        if in_code {
            code.push(line);
            continue;
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
        } else if let Some(rest) = line.strip_prefix("# ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Title(rest.trim().to_owned()));
        } else if let Some(rest) = line.strip_prefix("## ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading1(rest.trim().to_owned()));
        } else if let Some(rest) = line.strip_prefix("### ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading2(rest.trim().to_owned()));
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Bullet(rest.trim().to_owned()));
        } else if is_numbered_item(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::NumberedItem(trimmed.to_owned()));
        } else {
            paragraph.push(trimmed);
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    if in_code && !code.is_empty() {
        blocks.push(Block::Code(code.join("\n")));
    }

    blocks
}

/// Closes the pending paragraph accumulation and emits it as a body block.
///
/// Accumulated lines are trimmed and non-empty, so the joined text is never
/// blank.
fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if lines.is_empty() {
        return;
    }
    blocks.push(Block::Body(lines.join(" ")));
    lines.clear();
}

/// Matches lines of the form `1. item`: one or more ASCII digits followed by
/// a dot and a space.  Expects an already-trimmed line.
fn is_numbered_item(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with(". ")
}

#[cfg(test)]
mod tests {
    use super::{is_numbered_item, transform};
    use crate::model::Block;

    #[test]
    fn plain_lines_merge_into_one_body_block() {
        assert_eq!(transform("a\nb\nc"), vec![Block::Body("a b c".into())]);
    }

    #[test]
    fn title_then_body() {
        let blocks = transform("# Title\n\nBody text");
        assert_eq!(
            blocks,
            vec![Block::Title("Title".into()), Block::Body("Body text".into())]
        );
    }

    #[test]
    fn heading_levels_map_to_block_kinds() {
        let blocks = transform("# One\n## Two\n### Three");
        assert_eq!(
            blocks,
            vec![
                Block::Title("One".into()),
                Block::Heading1("Two".into()),
                Block::Heading2("Three".into()),
            ]
        );
    }

    #[test]
    fn bullets_are_never_merged() {
        let blocks = transform("- one\n- two");
        assert_eq!(
            blocks,
            vec![Block::Bullet("one".into()), Block::Bullet("two".into())]
        );
    }

    #[test]
    fn asterisk_bullets_and_indented_bullets() {
        let blocks = transform("* one\n  - two");
        assert_eq!(
            blocks,
            vec![Block::Bullet("one".into()), Block::Bullet("two".into())]
        );
    }

    #[test]
    fn structural_line_flushes_pending_paragraph() {
        let blocks = transform("some text\n## Section");
        assert_eq!(
            blocks,
            vec![
                Block::Body("some text".into()),
                Block::Heading1("Section".into()),
            ]
        );
    }

    #[test]
    fn numbered_items_keep_their_marker() {
        let blocks = transform("1. first\n2. second");
        assert_eq!(
            blocks,
            vec![
                Block::NumberedItem("1. first".into()),
                Block::NumberedItem("2. second".into()),
            ]
        );
    }

    #[test]
    fn numbered_item_detection() {
        assert!(is_numbered_item("1. item"));
        assert!(is_numbered_item("42. item"));
        assert!(!is_numbered_item("1.item"));
        assert!(!is_numbered_item(". item"));
        assert!(!is_numbered_item("1."));
    }

    #[test]
    fn fenced_block_preserves_line_breaks() {
        let blocks = transform("```\nx = 1\ny = 2\n```");
        assert_eq!(blocks, vec![Block::Code("x = 1\ny = 2".into())]);
    }

    #[test]
    fn fence_info_string_is_discarded() {
        let blocks = transform("```rust\nfn main() {}\n```");
        assert_eq!(blocks, vec![Block::Code("fn main() {}".into())]);
    }

    #[test]
    fn blank_lines_inside_fence_are_verbatim() {
        let blocks = transform("```\na\n\nb\n```");
        assert_eq!(blocks, vec![Block::Code("a\n\nb".into())]);
    }

    #[test]
    fn empty_fence_pair_emits_nothing() {
        assert!(transform("```\n```").is_empty());
    }

    #[test]
    fn unterminated_fence_flushes_buffer() {
        let blocks = transform("```\nlost line");
        assert_eq!(blocks, vec![Block::Code("lost line".into())]);
    }

    #[test]
    fn headers_match_on_the_raw_line_only() {
        // An indented hash line is not a header; it accumulates as body text.
        let blocks = transform("  # not a header");
        assert_eq!(blocks, vec![Block::Body("# not a header".into())]);
    }

    #[test]
    fn fence_opening_flushes_pending_paragraph() {
        let blocks = transform("intro\n```\ncode\n```");
        assert_eq!(
            blocks,
            vec![Block::Body("intro".into()), Block::Code("code".into())]
        );
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(transform("").is_empty());
        assert!(transform("\n\n\n").is_empty());
    }

    #[test]
    fn transform_is_idempotent_over_the_same_input() {
        let source = "# T\n\npara one\npara two\n\n- a\n- b\n\n```\ncode\n```";
        assert_eq!(transform(source), transform(source));
    }
}
