//! # Error handling
//!
//! One flat error enum (§7), matching the teacher's shape (a single
//! `ErrorKind`-style enum with a human-readable message) but built on
//! `thiserror` rather than a hand-rolled `Display` impl — the one stack
//! addition the teacher itself doesn't make, adopted from the pack's nearest
//! architectural neighbor (`fuel-vm`, which reaches for `thiserror` for the
//! same reason: a combinator-heavy core with many small failure shapes).
//!
//! Every variant names the offending construct or operator so a caller can
//! attach a source location without this crate knowing about spans — those
//! belong to the (out of scope) AST front-end.

use thiserror::Error;

/// A translation-time failure (§7). All errors are fatal to the current
/// translation; none are recoverable within the core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    /// An AST node whose shape or operator is unrecognized.
    #[error("unknown construct: {text}")]
    UnknownConstruct { text: String },

    /// A capture-kind call with wrong arity, unknown kind name, or a
    /// non-string field selector.
    #[error("malformed capture: {detail}")]
    MalformedCapture { detail: String },

    /// An invalid element inside a character-class literal.
    #[error("malformed character class: {detail}")]
    MalformedCharClass { detail: String },

    /// `MaxPattLen` exceeded after an infix composition.
    #[error("pattern too large: {len} instructions exceeds MaxPattLen ({max}); raise CompilerOptions::max_patt_len to allow larger patterns")]
    PatternTooLarge { len: usize, max: usize },
}
