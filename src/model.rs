//! Data structures describing the logical content of a converted document.
//!
//! The types in this module form the renderer-agnostic output of the markdown
//! transformer.  They intentionally avoid referencing the rendering crate so
//! the values can be inspected, tested, or consumed by any downstream renderer
//! without pulling in heavy dependencies.

/// One classified unit of renderable content.
///
/// Blocks are produced by [`crate::markdown::transform`] in the same
/// top-to-bottom order as they appear in the source text.  All variants except
/// [`Block::Code`] collapse internal line breaks into single spaces; code
/// blocks keep their interior lines joined with `\n` verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Document title from a `# ` line.
    Title(String),
    /// Top-level section heading from a `## ` line.
    Heading1(String),
    /// Subsection heading from a `### ` line.
    Heading2(String),
    /// A paragraph accumulated from one or more consecutive plain lines.
    /// Never empty.
    Body(String),
    /// One list item from a `- ` or `* ` line, marker stripped.  The bullet
    /// glyph is applied by the renderer, not stored here.
    Bullet(String),
    /// One item from a `1. `-style line, marker retained.
    NumberedItem(String),
    /// Preformatted content between code fences, line breaks preserved.
    Code(String),
}

impl Block {
    /// Returns the literal content string of the block.
    pub fn text(&self) -> &str {
        match self {
            Block::Title(text)
            | Block::Heading1(text)
            | Block::Heading2(text)
            | Block::Body(text)
            | Block::Bullet(text)
            | Block::NumberedItem(text)
            | Block::Code(text) => text,
        }
    }

    /// Returns whether the block preserves interior line breaks.
    pub fn is_preformatted(&self) -> bool {
        matches!(self, Block::Code(_))
    }
}
