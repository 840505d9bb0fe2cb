//! Token input records.
//!
//! Tokens are produced by the host's tokenizer and consumed read-only by the
//! rewrite buffer. Positions are zero-based indices into the token stream;
//! the stream for one file is contiguous from 0 with no gaps.

use serde::{Deserialize, Serialize};

/// A lexical unit of a source file.
///
/// `content` is the text as lexed. When an earlier pass already rewrote the
/// token (for example a tab-expansion pass), the tokenizer sets
/// `orig_content` to the untouched original text; seeding prefers it so the
/// true source survives repeated passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Zero-based index in the token stream.
    pub position: usize,
    /// Token text as lexed.
    pub content: String,
    /// Original text, when `content` was already rewritten by a prior pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_content: Option<String>,
}

impl Token {
    /// Create a token with no rewritten-content history.
    pub fn new(position: usize, content: impl Into<String>) -> Self {
        Token {
            position,
            content: content.into(),
            orig_content: None,
        }
    }

    /// Attach the pre-rewrite original text.
    pub fn with_orig_content(mut self, orig_content: impl Into<String>) -> Self {
        self.orig_content = Some(orig_content.into());
        self
    }

    /// The text this token contributes at seeding time.
    ///
    /// Prefers `orig_content` when present, else `content`.
    pub fn source_text(&self) -> &str {
        self.orig_content.as_deref().unwrap_or(&self.content)
    }
}
