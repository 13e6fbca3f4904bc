//! # Capture wrapping (component C, §4.C)
//!
//! Wraps a fragment with paired open/close capture markers. No offset
//! adjustment inside `p` is required: capture markers contain no jumps.

use crate::instruction::{CapAction, CaptureKind, Instruction, Pattern};

/// `capture(p, kind, name?)` → `[CapOpen(kind,name)] ++ p ++ [CapClose(kind)]`.
///
/// `id` uniquely pairs this open/close (§3.1's `id` field); callers own a
/// local, per-translation counter (see `translator::Translator`) rather than
/// this module reaching for a global one (§5, §15: no shared mutable state).
pub fn capture(p: Pattern, kind: CaptureKind, name: Option<String>, id: u32) -> Pattern {
    let open = Pattern::single(Instruction::CapOpen {
        kind,
        action: None,
        name,
        id,
    });
    let close = Pattern::single(Instruction::CapClose { kind, id });
    open.append(p).append(close)
}

/// The `%` operator's lowering: `capture(aux(lhs), Action)` with `action`
/// attached to the open marker (§4.G).
pub fn capture_action(p: Pattern, action: CapAction, id: u32) -> Pattern {
    let open = Pattern::single(Instruction::CapOpen {
        kind: CaptureKind::Action,
        action: Some(action),
        name: None,
        id,
    });
    let close = Pattern::single(Instruction::CapClose {
        kind: CaptureKind::Action,
        id,
    });
    open.append(p).append(close)
}

#[cfg(test)]
mod tests;
