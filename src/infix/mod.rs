//! # Infix combinators (component E, §4.E)
//!
//! Sequence, ordered choice, and set difference. Choice and difference each
//! fold to a bare `Set` when both operands reduce to one (§4.E.1); choice
//! additionally flattens left-associative chains so `(((a|b)|c)|d)` doesn't
//! degenerate into nested `Choice` frames (§9, "Choice-chain flattening").

use crate::charset::CharSet;
use crate::error::TranslateError;
use crate::instruction::{Instruction, Pattern};
use crate::options::CompilerOptions;
use crate::prefix;

/// `toSet` (§4.E.1): a pattern reduces to a set iff it is a single
/// instruction of a set-reducible shape.
pub fn to_set(p: &Pattern) -> Option<CharSet> {
    if p.len() != 1 {
        return None;
    }
    match &p[0] {
        Instruction::Set(cs) => Some(*cs),
        Instruction::Str(s) if s.len() == 1 => Some(CharSet::singleton(s[0])),
        Instruction::IStr(s) if s.len() == 1 => {
            let b = s[0];
            let mut cs = CharSet::singleton(b.to_ascii_lowercase());
            cs.insert(b.to_ascii_uppercase());
            Some(cs)
        }
        Instruction::Any => Some(CharSet::full()),
        _ => None,
    }
}

/// `p1 * p2` — concatenation, `MaxPattLen`-checked (§3.4, §13).
pub fn sequence(
    p1: Pattern,
    p2: Pattern,
    opts: &CompilerOptions,
) -> Result<Pattern, TranslateError> {
    let result = p1.append(p2);
    result.check_max_len(opts)?;
    Ok(result)
}

/// `p1 | p2` — ordered choice, with set-folding and left-assoc flattening
/// applied in priority order (§4.E).
pub fn choice(p1: Pattern, p2: Pattern, opts: &CompilerOptions) -> Result<Pattern, TranslateError> {
    // 1. Set-folding: both operands reduce to a set.
    if let (Some(cs1), Some(cs2)) = (to_set(&p1), to_set(&p2)) {
        tracing::debug!("choice: folding both operands into a single Set");
        let folded = Pattern::single(Instruction::Set(cs1.union(&cs2)));
        folded.check_max_len(opts)?;
        return Ok(folded);
    }

    // 2. Left-assoc flattening: does p1 begin with a Choice→Commit chain
    // whose commits all target the end of p1?
    let len1 = p1.len();
    let len2 = p2.len();
    let mut idx = 0usize;
    while idx < p1.len() {
        let Instruction::Choice(c) = p1[idx] else {
            break;
        };
        let target = idx as i64 + c as i64;
        if target <= 0 {
            break;
        }
        let commit_idx = (target - 1) as usize;
        if commit_idx >= p1.len() {
            break;
        }
        let Instruction::Commit(co) = p1[commit_idx] else {
            break;
        };
        if commit_idx as i64 + co as i64 != len1 as i64 {
            break;
        }
        idx = commit_idx + 1;
        if idx >= p1.len() {
            break;
        }
    }
    let ip = idx;

    if ip > 0 {
        tracing::debug!(ip, "choice: flattening left-associative choice chain");
        let mut instructions = p1.into_inner();
        // Extend every flattened chain's terminal Commit so it skips past
        // the newly appended alternative.
        let mut scan = 0usize;
        loop {
            let Instruction::Choice(c) = instructions[scan] else {
                break;
            };
            let target = scan as i64 + c as i64;
            let commit_idx = (target - 1) as usize;
            if commit_idx >= instructions.len() {
                break;
            }
            let is_terminal_commit = matches!(
                instructions[commit_idx],
                Instruction::Commit(co) if commit_idx as i64 + co as i64 == len1 as i64
            );
            if !is_terminal_commit {
                break;
            }
            instructions[commit_idx].bump_offset(len2 as i32 + 2);
            scan = commit_idx + 1;
            if scan >= instructions.len() || scan >= ip {
                break;
            }
        }

        let tail = instructions.split_off(ip);
        let mut result: Vec<Instruction> = instructions;
        result.push(Instruction::Choice((len1 as i32) - (ip as i32) + 2));
        // (new Choice always targets the start of p2, at absolute index
        // |p1|+2, regardless of where in p1 it's spliced in)
        result.extend(tail);
        result.push(Instruction::Commit(len2 as i32 + 1));
        let result: Pattern = result.into();
        let result = result.append(p2);
        result.check_max_len(opts)?;
        return Ok(result);
    }

    // 3. General case.
    tracing::debug!("choice: emitting general-case Choice/Commit bracket");
    let mut result = Vec::with_capacity(len1 + len2 + 2);
    result.push(Instruction::Choice(len1 as i32 + 2));
    result.extend(p1.into_inner());
    result.push(Instruction::Commit(len2 as i32 + 1));
    let result: Pattern = result.into();
    let result = result.append(p2);
    result.check_max_len(opts)?;
    Ok(result)
}

/// `p1 - p2` — set difference when both sides reduce to sets, otherwise
/// `!p2 ++ p1` (§4.E).
pub fn difference(
    p1: Pattern,
    p2: Pattern,
    opts: &CompilerOptions,
) -> Result<Pattern, TranslateError> {
    if let (Some(cs1), Some(cs2)) = (to_set(&p1), to_set(&p2)) {
        tracing::debug!("difference: folding both operands into a single Set");
        let folded = Pattern::single(Instruction::Set(cs1.difference(&cs2)));
        folded.check_max_len(opts)?;
        return Ok(folded);
    }
    let rejected = prefix::not_(p2);
    sequence(rejected, p1, opts)
}
