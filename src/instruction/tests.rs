#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disassemble_literal_string() {
        let p = Pattern::single(Instruction::Str(b"a".to_vec()));
        assert_eq!(p.to_string(), "0: Str \"a\"");
    }

    #[test]
    fn disassemble_set() {
        let p = Pattern::single(Instruction::Set(CharSet::range(b'a', b'z')));
        assert_eq!(p.to_string(), "0: Set {'a'..'z'}");
    }

    #[test]
    fn disassemble_prints_absolute_jump_targets() {
        let p: Pattern = vec![
            Instruction::Choice(3),
            Instruction::Str(b"a".to_vec()),
            Instruction::Commit(1),
        ]
        .into();
        assert_eq!(p.to_string(), "0: Choice 3\n1: Str \"a\"\n2: Commit 3");
    }

    #[test]
    fn max_patt_len_rejects_oversized_patterns() {
        let opts = CompilerOptions {
            max_patt_len: 2,
            ..Default::default()
        };
        let p: Pattern = vec![Instruction::Any, Instruction::Any, Instruction::Any].into();
        let err = p.check_max_len(&opts).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::PatternTooLarge { len: 3, max: 2 }
        ));
    }

    #[test]
    fn append_is_naive_concatenation() {
        let a = Pattern::single(Instruction::Any);
        let b = Pattern::single(Instruction::Nop);
        let combined = a.append(b);
        assert_eq!(combined.len(), 2);
    }
}
