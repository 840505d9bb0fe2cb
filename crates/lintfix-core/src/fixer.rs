//! The token-addressed rewrite buffer.
//!
//! `Fixer` holds one text fragment per token of the file being fixed. Style
//! rules mutate fragments by token position, in any order and any number of
//! times; the buffer keeps exactly one fragment per position (possibly
//! empty, never absent), so uncoordinated edits compose without losing,
//! duplicating, or reordering text. At the end of a pass the host reads the
//! rewritten file back as the in-order concatenation of all fragments.
//!
//! The buffer lives for one file pass: the host seeds it from a fresh token
//! stream, hands a mutable reference to each rule in turn, reads the result
//! once, then reseeds for the next pass or drops it. It keeps no cross-pass
//! state and no internal locking; one buffer serves one file at a time.

use tracing::{debug, trace};

use crate::error::FixerError;
use crate::text;
use crate::token::Token;

// ============================================================================
// Changeset State
// ============================================================================

/// Whether the buffer is inside a `begin_changeset`/`end_changeset` bracket.
///
/// Schedulers bracket batches of edits with changesets. This buffer applies
/// every write synchronously, so `InChangeset` behaves identically to `Idle`
/// for all reads and writes; the state only records the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ChangesetState {
    #[default]
    Idle,
    InChangeset,
}

// ============================================================================
// Fixer
// ============================================================================

/// Token-addressed source-rewrite buffer.
///
/// Valid positions are exactly `[0, N)` for the N tokens of the current
/// seeding; addressing anything else fails with
/// [`FixerError::OutOfRange`]. Positions are never added or removed by
/// mutation, only their text changes.
#[derive(Debug, Clone, Default)]
pub struct Fixer {
    /// Current fragment text, indexed by token position.
    tokens: Vec<String>,
    changeset: ChangesetState,
}

impl Fixer {
    /// Create an empty buffer. Every position is out of range until
    /// [`seed`](Fixer::seed) is called.
    pub fn new() -> Self {
        Fixer::default()
    }

    /// Create a buffer seeded from the given token stream.
    ///
    /// # Panics
    /// Panics if token positions are not contiguous from 0 (see
    /// [`seed`](Fixer::seed)).
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut fixer = Fixer::new();
        fixer.seed(tokens);
        fixer
    }

    /// Seed the buffer from a fresh token stream, discarding all prior state.
    ///
    /// Each token contributes its original text where a prior pass recorded
    /// one, else its lexed content. A pending changeset is abandoned.
    ///
    /// # Panics
    /// Panics if token positions are not contiguous from 0. A gap or
    /// out-of-order position means the tokenizer and the buffer disagree
    /// about addressing, and every later edit would land on the wrong text.
    pub fn seed(&mut self, tokens: &[Token]) {
        for (index, token) in tokens.iter().enumerate() {
            assert!(
                token.position == index,
                "token positions must be contiguous from 0: expected {}, got {}",
                index,
                token.position
            );
        }

        self.tokens = tokens
            .iter()
            .map(|token| token.source_text().to_string())
            .collect();
        self.changeset = ChangesetState::Idle;

        debug!(token_count = self.tokens.len(), "rewrite buffer seeded");
    }

    /// Number of tokens in the current seeding.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the buffer holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Reconstruct the full file content.
    ///
    /// Concatenates every fragment in position order, with no separators.
    /// Called with no prior mutations this returns exactly the seeded source
    /// text.
    pub fn contents(&self) -> String {
        let contents = self.tokens.concat();
        trace!(
            token_count = self.tokens.len(),
            bytes = contents.len(),
            "file content reconstructed"
        );
        contents
    }

    /// Current fragment text at `position`.
    pub fn token_content(&self, position: usize) -> Result<&str, FixerError> {
        self.tokens
            .get(position)
            .map(String::as_str)
            .ok_or_else(|| FixerError::out_of_range(position, self.tokens.len()))
    }

    /// Overwrite the fragment at `position` unconditionally.
    pub fn replace_token(
        &mut self,
        position: usize,
        content: impl Into<String>,
    ) -> Result<(), FixerError> {
        let token_count = self.tokens.len();
        match self.tokens.get_mut(position) {
            Some(fragment) => {
                *fragment = content.into();
                Ok(())
            }
            None => Err(FixerError::out_of_range(position, token_count)),
        }
    }

    /// Append `content` after the fragment at `position`.
    pub fn add_content(&mut self, position: usize, content: &str) -> Result<(), FixerError> {
        let current = self.token_content(position)?;
        let combined = format!("{}{}", current, content);
        self.replace_token(position, combined)
    }

    /// Insert `content` before the fragment at `position`.
    pub fn add_content_before(&mut self, position: usize, content: &str) -> Result<(), FixerError> {
        let current = self.token_content(position)?;
        let combined = format!("{}{}", content, current);
        self.replace_token(position, combined)
    }

    /// Append the platform line ending after the fragment at `position`.
    pub fn add_newline(&mut self, position: usize) -> Result<(), FixerError> {
        self.add_content(position, text::LINE_ENDING)
    }

    /// Insert the platform line ending before the fragment at `position`.
    pub fn add_newline_before(&mut self, position: usize) -> Result<(), FixerError> {
        self.add_content_before(position, text::LINE_ENDING)
    }

    /// Truncate the fragment at `position` to a substring.
    ///
    /// `start` and `length` follow the clamping rules of
    /// [`text::substr_clamped`]: negative `start` counts from the end,
    /// negative `length` drops chars from the end, and out-of-range values
    /// clamp to an empty result. Only an invalid `position` fails.
    pub fn substr_token(
        &mut self,
        position: usize,
        start: isize,
        length: Option<isize>,
    ) -> Result<(), FixerError> {
        let truncated = text::substr_clamped(self.token_content(position)?, start, length);
        self.replace_token(position, truncated)
    }

    /// Mark the start of a batch of related edits.
    ///
    /// Writes between `begin_changeset` and [`end_changeset`](Fixer::end_changeset)
    /// still apply immediately; reads inside the bracket observe them.
    pub fn begin_changeset(&mut self) {
        self.changeset = ChangesetState::InChangeset;
    }

    /// Mark the end of a batch of related edits.
    pub fn end_changeset(&mut self) {
        self.changeset = ChangesetState::Idle;
    }

    /// Whether a changeset bracket is currently open.
    pub fn in_changeset(&self) -> bool {
        self.changeset == ChangesetState::InChangeset
    }
}

// ============================================================================
// Tests
// ============================================================================
