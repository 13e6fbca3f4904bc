//! # Atom constructors (component B, §4.B)
//!
//! Build single-instruction (or tiny) fragments from literals, sets,
//! integers, back-references, errors, calls, and returns.

use crate::charset::CharSet;
use crate::instruction::{Instruction, Pattern};

/// `str(s)` — match literal bytes `s` verbatim.
pub fn str_(s: &[u8]) -> Pattern {
    Pattern::single(Instruction::Str(s.to_vec()))
}

/// `istr(s)` — match literal bytes `s`, ASCII case-insensitive.
pub fn istr(s: &[u8]) -> Pattern {
    Pattern::single(Instruction::IStr(s.to_vec()))
}

/// `any(n)` — match exactly `n` characters. `n <= 0` degenerates to a no-op
/// match, `[Nop]`.
pub fn any(n: i64) -> Pattern {
    if n <= 0 {
        Pattern::single(Instruction::Nop)
    } else {
        (0..n).map(|_| Instruction::Any).collect()
    }
}

/// `set(cs)` — match any single byte in `cs`.
pub fn set(cs: CharSet) -> Pattern {
    Pattern::single(Instruction::Set(cs))
}

/// `call(label)` — push a return address and jump to `label`'s entry point.
/// The offset is a placeholder (`0`), filled in later by the link pass
/// (out of scope here, §1).
pub fn call(label: impl Into<String>) -> Pattern {
    Pattern::single(Instruction::Call(label.into(), 0))
}

/// `backref(name)` — runtime match against the text last captured under
/// `name`.
pub fn backref(name: impl Into<String>) -> Pattern {
    Pattern::single(Instruction::Backref(name.into()))
}

/// `returnInst()` — pop a return address and jump to it.
pub fn return_inst() -> Pattern {
    Pattern::single(Instruction::Return)
}

/// `err(msg)` — unconditional failure emitting `msg`.
pub fn err(msg: impl Into<String>) -> Pattern {
    Pattern::single(Instruction::Err(msg.into()))
}

#[cfg(test)]
mod tests;
