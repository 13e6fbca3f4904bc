#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::str_;

    #[test]
    fn wraps_with_matching_open_close_ids() {
        let p = capture(str_(b"x"), CaptureKind::Str, None, 7);
        assert_eq!(p.len(), 3);
        assert!(matches!(p[0], Instruction::CapOpen { id: 7, kind: CaptureKind::Str, .. }));
        assert!(matches!(p[2], Instruction::CapClose { id: 7, kind: CaptureKind::Str }));
    }

    #[test]
    fn named_capture_carries_name() {
        let p = capture(str_(b"x"), CaptureKind::JFieldFixed, Some("key".to_string()), 1);
        assert!(matches!(&p[0], Instruction::CapOpen { name: Some(n), .. } if n == "key"));
    }
}
