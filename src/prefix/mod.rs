//! # Prefix combinators (component D, §4.D)
//!
//! `optional`, `star`, `plus`, `capture_substring`, `not_`, `and_`, `search`.
//! `star` collapses to a `Span` fast path when its operand is set-reducible
//! (§4.D, §9 "Span fast path"); everything else follows the offset formulas
//! directly.

use crate::capture;
use crate::infix;
use crate::instruction::{CaptureKind, Instruction, Pattern};

/// `?p` — `[Choice(|p|+2), ...p, Commit(1)]`.
pub fn optional(p: Pattern) -> Pattern {
    let len = p.len() as i32;
    let mut result = Vec::with_capacity(p.len() + 2);
    result.push(Instruction::Choice(len + 2));
    result.extend(p.into_inner());
    result.push(Instruction::Commit(1));
    result.into()
}

/// `*p` — zero or more repetitions. When `p` reduces to a set, this
/// collapses to a single `Span` instruction; otherwise
/// `[Choice(|p|+2), ...p, PartCommit(-|p|)]`.
pub fn star(p: Pattern) -> Pattern {
    if let Some(cs) = infix::to_set(&p) {
        tracing::debug!("star: collapsing set-reducible operand to Span fast path");
        return Pattern::single(Instruction::Span(cs));
    }
    let len = p.len() as i32;
    let mut result = Vec::with_capacity(p.len() + 2);
    result.push(Instruction::Choice(len + 2));
    result.extend(p.into_inner());
    result.push(Instruction::PartCommit(-len));
    result.into()
}

/// `+p` — one or more repetitions, lowered as `p ++ *p` (§9 flags this as an
/// Open Question around cloning `p`; we take the straightforward reading and
/// clone the operand rather than invent an alternative lowering).
pub fn plus(p: Pattern) -> Pattern {
    let tail = star(p.clone());
    p.append(tail)
}

/// `>p` — capture the substring `p` consumes, without running any action.
pub fn capture_substring(p: Pattern, id: u32) -> Pattern {
    capture::capture(p, CaptureKind::Str, None, id)
}

/// `!p` — negative lookahead: `[Choice(|p|+3), ...p, Commit(1), Fail]`.
pub fn not_(p: Pattern) -> Pattern {
    let len = p.len() as i32;
    let mut result = Vec::with_capacity(p.len() + 3);
    result.push(Instruction::Choice(len + 3));
    result.extend(p.into_inner());
    result.push(Instruction::Commit(1));
    result.push(Instruction::Fail);
    result.into()
}

/// `&p` — positive lookahead, defined as `!!p`.
pub fn and_(p: Pattern) -> Pattern {
    not_(not_(p))
}

/// `@p` — search: try `p` at the current position, and on failure advance
/// one character and retry, looping until `p` matches or input is exhausted.
/// `[Choice(|p|+2), ...p, Commit(3), Any, Jump(-(|p|+3))]`: on failure of
/// `p` the pushed choice resumes at `Any`; on success, `Commit` skips past
/// the retry machinery to the instruction following this fragment.
pub fn search(p: Pattern) -> Pattern {
    let len = p.len() as i32;
    let mut result = Vec::with_capacity(p.len() + 4);
    result.push(Instruction::Choice(len + 2));
    result.extend(p.into_inner());
    result.push(Instruction::Commit(3));
    result.push(Instruction::Any);
    result.push(Instruction::Jump(None, -(len + 3)));
    result.into()
}

#[cfg(test)]
mod tests;
