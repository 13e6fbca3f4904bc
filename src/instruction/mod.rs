//! # Instruction model & disassembly
//!
//! [`Instruction`] is the tagged-union opcode set of §3.1. A [`Pattern`] is an
//! ordered, self-contained sequence of instructions (§3.4): every jump-like
//! operand inside a `Pattern` is a signed offset relative to its own index,
//! and every combinator in this crate preserves `0 <= i + offset <= len`.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::ast::Expr;
use crate::charset::{dump_set, CharSet};
use crate::error::TranslateError;
use crate::options::CompilerOptions;

/// Opaque payload for an `%`-action capture's associated code.
///
/// The core never interprets this; it is handed through from the AST
/// unexamined, to be executed by whatever embeds this crate's output. Since
/// the AST front-end is out of scope here, `Expr` itself stands in for
/// "whatever the embedding environment uses to represent user code."
pub type CapAction = Box<Expr>;

/// Closed enumeration of capture kinds (§3.3). The core stores these
/// opaquely — only the AST translator (`translator` module) picks specific
/// kinds when it emits a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    Str,
    Action,
    JString,
    JInt,
    JFloat,
    JArray,
    JObject,
    JFieldFixed,
    JFieldDynamic,
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaptureKind::Str => "Str",
            CaptureKind::Action => "Action",
            CaptureKind::JString => "JString",
            CaptureKind::JInt => "JInt",
            CaptureKind::JFloat => "JFloat",
            CaptureKind::JArray => "JArray",
            CaptureKind::JObject => "JObject",
            CaptureKind::JFieldFixed => "JFieldFixed",
            CaptureKind::JFieldDynamic => "JFieldDynamic",
        };
        write!(f, "{s}")
    }
}

/// One instruction of the pattern-matching machine (§3.1).
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Match literal bytes verbatim.
    Str(Vec<u8>),
    /// Match literal bytes, ASCII case-insensitive.
    IStr(Vec<u8>),
    /// Match any single byte in the set.
    Set(CharSet),
    /// Greedily match zero or more bytes in the set; never backtracks.
    Span(CharSet),
    /// Match any single byte; fails at EOF.
    Any,
    /// Always succeeds, consumes nothing.
    Nop,
    /// Push a backtrack frame targeting `pc + offset`.
    Choice(i32),
    /// Pop a backtrack frame, jump to `pc + offset`.
    Commit(i32),
    /// Update the top frame's subject position, jump to `pc + offset`.
    PartCommit(i32),
    /// Push a return address, jump to `pc + offset`. `label` is retained for
    /// the (external) link pass and for disassembly; unresolved calls carry
    /// `offset == 0` as a placeholder.
    Call(String, i32),
    /// Unconditional jump to `pc + offset`. `label` is `None` for
    /// combinator-internal jumps (e.g. the search loop in `@p`), which never
    /// need cross-fragment resolution.
    Jump(Option<String>, i32),
    /// Pop a return address, jump to it.
    Return,
    /// Force a backtrack to the top frame.
    Fail,
    /// Begin a capture span.
    CapOpen {
        kind: CaptureKind,
        action: Option<CapAction>,
        name: Option<String>,
        id: u32,
    },
    /// End a capture span. Always paired with the `CapOpen` of the same `id`.
    CapClose { kind: CaptureKind, id: u32 },
    /// Runtime: match the text last captured under `name`.
    Backref(String),
    /// Unconditional failure, emitting `message`.
    Err(String),
}

impl Instruction {
    /// The opcode name as printed by the disassembler.
    pub fn opcode_name(&self) -> &'static str {
        match self {
            Instruction::Str(_) => "Str",
            Instruction::IStr(_) => "IStr",
            Instruction::Set(_) => "Set",
            Instruction::Span(_) => "Span",
            Instruction::Any => "Any",
            Instruction::Nop => "Nop",
            Instruction::Choice(_) => "Choice",
            Instruction::Commit(_) => "Commit",
            Instruction::PartCommit(_) => "PartCommit",
            Instruction::Call(..) => "Call",
            Instruction::Jump(..) => "Jump",
            Instruction::Return => "Return",
            Instruction::Fail => "Fail",
            Instruction::CapOpen { .. } => "CapOpen",
            Instruction::CapClose { .. } => "CapClose",
            Instruction::Backref(_) => "Backref",
            Instruction::Err(_) => "Err",
        }
    }

    /// Relative jump/choice/commit/call offset, if this instruction carries
    /// one. Used by combinators and by the invariant checks in tests.
    pub fn offset(&self) -> Option<i32> {
        match self {
            Instruction::Choice(o)
            | Instruction::Commit(o)
            | Instruction::PartCommit(o)
            | Instruction::Call(_, o)
            | Instruction::Jump(_, o) => Some(*o),
            _ => None,
        }
    }

    /// Add `delta` to this instruction's offset in place. No-op for
    /// instructions that don't carry one. Used by the choice-chain flattener
    /// (§4.E), which extends a leading chain's `Commit` offsets in place.
    pub fn bump_offset(&mut self, delta: i32) {
        match self {
            Instruction::Choice(o)
            | Instruction::Commit(o)
            | Instruction::PartCommit(o)
            | Instruction::Call(_, o)
            | Instruction::Jump(_, o) => *o += delta,
            _ => {}
        }
    }
}

fn quote_bytes(s: &[u8]) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for &b in s {
        match b {
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02X}")),
        }
    }
    out.push('"');
    out
}

/// An ordered sequence of instructions (§3.4). Combinators take and return
/// patterns by value; there is no sharing, each combinator produces a fresh
/// `Vec`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pattern(Vec<Instruction>);

impl Pattern {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn single(inst: Instruction) -> Self {
        Self(vec![inst])
    }

    pub fn into_inner(self) -> Vec<Instruction> {
        self.0
    }

    /// Naive buffer append: valid because every combinator only ever emits
    /// offsets inside the window it just produced (§9, "Offset arithmetic").
    pub fn append(mut self, mut other: Pattern) -> Pattern {
        self.0.append(&mut other.0);
        self
    }

    /// Enforce `MaxPattLen` (§3.4, §6, §13). Called by the infix combinators
    /// after composition.
    pub fn check_max_len(&self, opts: &CompilerOptions) -> Result<(), TranslateError> {
        if self.0.len() > opts.max_patt_len {
            tracing::warn!(
                len = self.0.len(),
                max = opts.max_patt_len,
                "pattern exceeds MaxPattLen"
            );
            return Err(TranslateError::PatternTooLarge {
                len: self.0.len(),
                max: opts.max_patt_len,
            });
        }
        Ok(())
    }

    /// One line per instruction, jump-like operands printed as absolute
    /// target indices (§4.A, §6). `labels` optionally maps an index to a
    /// rule name; a header line precedes the first matching instruction.
    pub fn to_string_with_labels(&self, labels: Option<&BTreeMap<usize, String>>) -> String {
        let width = format!("{}", self.0.len().saturating_sub(1)).len().max(1);
        let mut out = String::new();
        for (i, inst) in self.0.iter().enumerate() {
            if let Some(labels) = labels {
                if let Some(name) = labels.get(&i) {
                    out.push_str(&format!("{name}:\n"));
                }
            }
            out.push_str(&format!("{i:0width$}: {}\n", render_instruction(i, inst)));
        }
        out.pop();
        out
    }
}

fn render_instruction(i: usize, inst: &Instruction) -> String {
    let name = inst.opcode_name();
    match inst {
        Instruction::Str(s) => format!("{name} {}", quote_bytes(s)),
        Instruction::IStr(s) => format!("{name} {}", quote_bytes(s)),
        Instruction::Set(cs) => format!("{name} {}", dump_set(cs)),
        Instruction::Span(cs) => format!("{name} {}", dump_set(cs)),
        Instruction::Any | Instruction::Nop | Instruction::Return | Instruction::Fail => {
            name.to_string()
        }
        Instruction::Choice(o) | Instruction::Commit(o) | Instruction::PartCommit(o) => {
            format!("{name} {}", i as i64 + *o as i64)
        }
        Instruction::Call(label, o) => format!("{name} {} {label}", i as i64 + *o as i64),
        Instruction::Jump(label, o) => match label {
            Some(l) => format!("{name} {} {l}", i as i64 + *o as i64),
            None => format!("{name} {}", i as i64 + *o as i64),
        },
        Instruction::CapOpen {
            kind, action, name: nm, ..
        } => {
            let mut s = format!("{name} {kind}");
            if let Some(n) = nm {
                s.push_str(&format!(" \"{n}\""));
            }
            if action.is_some() {
                s.push_str(": <action>");
            }
            s
        }
        Instruction::CapClose { kind, .. } => format!("{name} {kind}"),
        Instruction::Backref(n) => format!("{name} \"{n}\""),
        Instruction::Err(msg) => format!("{name} \"{msg}\""),
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_labels(None))
    }
}

impl Deref for Pattern {
    type Target = [Instruction];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Pattern {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Instruction>> for Pattern {
    fn from(v: Vec<Instruction>) -> Self {
        Self(v)
    }
}

impl FromIterator<Instruction> for Pattern {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Pattern {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests;
