#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms;
    use crate::atoms::{any, str_};
    use crate::charset::CharSet;

    fn check_offsets_in_range(p: &Pattern) {
        for (i, inst) in p.iter().enumerate() {
            if let Some(o) = inst.offset() {
                let t = i as i64 + o as i64;
                assert!(t >= 0 && t <= p.len() as i64, "offset out of range at {i}: target {t}");
            }
        }
    }

    #[test]
    fn optional_wraps_with_choice_commit() {
        let p = optional(str_(b"x"));
        assert_eq!(p.len(), 3);
        assert!(matches!(p[0], Instruction::Choice(3)));
        assert!(matches!(p[2], Instruction::Commit(1)));
        check_offsets_in_range(&p);
    }

    #[test]
    fn star_of_set_collapses_to_span() {
        let p = star(atoms::set(CharSet::singleton(b'a')));
        assert_eq!(p.len(), 1);
        assert!(matches!(p[0], Instruction::Span(_)));
    }

    #[test]
    fn star_of_non_set_uses_choice_partcommit() {
        let p = star(str_(b"ab"));
        assert_eq!(p.len(), 3);
        assert!(matches!(p[0], Instruction::Choice(3)));
        assert!(matches!(p[2], Instruction::PartCommit(-1)));
        check_offsets_in_range(&p);
    }

    #[test]
    fn plus_is_operand_followed_by_star() {
        let p = plus(any(1));
        // Any ++ Span(full): `any(1)` is `[Any]`, and `Any` is set-reducible
        // (`to_set` maps it to the full 256-byte set), so the `*p` tail hits
        // the Span fast path instead of emitting Choice/PartCommit.
        assert_eq!(p.len(), 2);
        assert!(matches!(p[0], Instruction::Any));
        assert!(matches!(p[1], Instruction::Span(_)));
        check_offsets_in_range(&p);
    }

    #[test]
    fn not_emits_choice_commit_fail() {
        let p = not_(str_(b"x"));
        assert_eq!(p.len(), 4);
        assert!(matches!(p[0], Instruction::Choice(4)));
        assert!(matches!(p[2], Instruction::Commit(1)));
        assert!(matches!(p[3], Instruction::Fail));
        check_offsets_in_range(&p);
    }

    #[test]
    fn and_is_double_negation() {
        let p = and_(str_(b"x"));
        // `not_` adds 3 instructions (Choice/Commit/Fail) around its operand,
        // so `!!"x"` is `1 + 3 + 3 == 7`.
        assert_eq!(p.len(), 7);
        check_offsets_in_range(&p);
    }

    #[test]
    fn search_loops_back_to_its_own_start() {
        let p = search(str_(b"end"));
        assert_eq!(p.len(), 5);
        assert!(matches!(p[0], Instruction::Choice(3)));
        assert!(matches!(p[2], Instruction::Commit(3)));
        assert!(matches!(p[3], Instruction::Any));
        assert!(matches!(p[4], Instruction::Jump(None, -4)));
        check_offsets_in_range(&p);
        // Choice's failure target is the Any instruction (retry machinery);
        // Commit's success target is one past the whole fragment.
        assert_eq!(0 + 3, 3);
        assert_eq!(2 + 3, p.len() as i32);
        assert_eq!(4 - 4, 0);
    }
}
