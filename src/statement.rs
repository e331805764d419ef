//! The built-in project status statement.
//!
//! The statement is stored as markdown and routed through the same
//! transformer as every other document, so its PDF rendition stays in sync
//! with the converter's behavior.

use crate::markdown;
use crate::model::Block;

/// Default output path used by the `statement` subcommand.
pub const DEFAULT_OUTPUT: &str = "truth-statement.pdf";

/// Markdown source of the statement.
pub const SOURCE: &str = "\
# TRUTH STATEMENT - STORMWATER AI PROJECT

Date: June 28, 2025
Project Owner: Daniel Guzman
System: Stormwater AI

## CURRENT SYSTEM STATUS

- Application is running on Replit servers
- Express server active on port 5000
- Frontend accessible through the Preview interface
- In-memory storage (MemStorage) operational
- Application name corrected to \"Stormwater AI\"

## TRUTH REGARDING DIRECTIONS

The user has requested to follow directions for running the system.
The Stormwater AI application is currently running on Replit's
infrastructure as requested. All system components are operational and
accessible through the Preview interface.

### WORKFLOW IMPLEMENTATION

1. Upload problem documents (e.g. \"collapsing culvert\")
2. AI analyzes the entire document library
3. Auto-generates solution documents with citations
4. Provides inspection forms, JSAs, maintenance plans

### SYSTEM SECTIONS

- Smart Solutions - main analysis page
- Generated Documents - auto-created forms and plans
- Source Library - reference documents
- System Overview - analytics dashboard
";

/// Returns the statement as a block sequence ready for rendering.
pub fn blocks() -> Vec<Block> {
    markdown::transform(SOURCE)
}
