//! # Counted repetition (component F, §4.F)
//!
//! `p{n}` and `p{a..b}`. The opcode set (§3.1) has no counted-repeat
//! instruction, so both forms lower to direct unrolling built from the
//! combinators already defined in `infix`/`prefix` rather than a bespoke
//! encoding — see DESIGN.md for the Open Question this resolves.

use crate::error::TranslateError;
use crate::infix::sequence;
use crate::instruction::{Instruction, Pattern};
use crate::options::CompilerOptions;
use crate::prefix::optional;

/// `p{n}` — `p` concatenated with itself `n` times. `p{0}` is `[Nop]`, the
/// always-succeeds, consumes-nothing identity (§8 invariant 4); `p{1}` is
/// `p` unchanged.
pub fn exact(p: Pattern, n: u32, opts: &CompilerOptions) -> Result<Pattern, TranslateError> {
    if n == 0 {
        return Ok(Pattern::single(Instruction::Nop));
    }
    let mut result = p.clone();
    for _ in 1..n {
        result = sequence(result, p.clone(), opts)?;
    }
    result.check_max_len(opts)?;
    Ok(result)
}

/// `p{a..b}` — `a` mandatory copies of `p` followed by `b - a` independently
/// optional copies. Requires `a <= b`; callers (the translator) are expected
/// to have validated this against the AST before calling in.
pub fn range(p: Pattern, a: u32, b: u32, opts: &CompilerOptions) -> Result<Pattern, TranslateError> {
    debug_assert!(a <= b, "range repeat requires a <= b");
    let mandatory = exact(p.clone(), a, opts)?;
    let optional_count = b.saturating_sub(a);
    let mut result = mandatory;
    for _ in 0..optional_count {
        result = sequence(result, optional(p.clone()), opts)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests;
