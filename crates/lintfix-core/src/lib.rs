//! Core infrastructure for lintfix.
//!
//! This crate provides the rewrite machinery shared by all style rules:
//! - Token input records produced by the tokenizer
//! - The `Fixer` buffer for token-addressed source rewriting
//! - Error types
//! - Text utilities (line endings, clamped substrings)
//!
//! Tokenizing, rule scheduling, and file I/O live in the host application;
//! this crate only composes edits and reconstructs file content.

pub mod error;
pub mod fixer;
pub mod text;
pub mod token;

pub use error::FixerError;
pub use fixer::Fixer;
pub use token::Token;
