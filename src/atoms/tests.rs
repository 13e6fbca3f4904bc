#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_positive_emits_n_copies() {
        assert_eq!(any(3).len(), 3);
        assert!(any(3).iter().all(|i| matches!(i, Instruction::Any)));
    }

    #[test]
    fn any_non_positive_emits_nop() {
        assert_eq!(any(0).to_vec(), vec![Instruction::Nop]);
        assert_eq!(any(-5).to_vec(), vec![Instruction::Nop]);
    }

    #[test]
    fn str_emits_single_instruction_regardless_of_length() {
        let p = str_(b"hello world");
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn call_offset_is_placeholder_zero() {
        let p = call("Rule");
        assert!(matches!(p[0], Instruction::Call(ref l, 0) if l == "Rule"));
    }
}
