#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_roundtrip() {
        let cs = CharSet::singleton(b'a');
        assert!(cs.contains(b'a'));
        assert_eq!(cs.len(), 1);
        assert_eq!(dump_set(&cs), "{'a'}");
    }

    #[test]
    fn range_renders_as_run() {
        let cs = CharSet::range(b'a', b'z');
        assert_eq!(cs.len(), 26);
        assert_eq!(dump_set(&cs), "{'a'..'z'}");
    }

    #[test]
    fn union_folds_three_singletons_into_one_run_and_gap() {
        let cs = CharSet::singleton(b'a')
            .union(&CharSet::singleton(b'b'))
            .union(&CharSet::singleton(b'c'));
        assert_eq!(dump_set(&cs), "{'a'..'c'}");
    }

    #[test]
    fn non_contiguous_members_render_as_separate_groups() {
        let cs = CharSet::singleton(b'a').union(&CharSet::singleton(b'c'));
        assert_eq!(dump_set(&cs), "{'a','c'}");
    }

    #[test]
    fn difference_removes_members() {
        let cs = CharSet::range(b'a', b'z').difference(&CharSet::singleton(b'x'));
        assert!(!cs.contains(b'x'));
        assert!(cs.contains(b'y'));
        assert_eq!(cs.len(), 25);
    }

    #[test]
    fn escapes_control_and_non_printable_bytes() {
        let cs = CharSet::singleton(b'\n').union(&CharSet::singleton(0xff));
        assert_eq!(dump_set(&cs), "{'\\n','\\xFF'}");
    }

    #[test]
    fn empty_set_renders_as_empty_braces() {
        assert_eq!(dump_set(&CharSet::new()), "{}");
    }

    #[test]
    fn full_set_has_256_members() {
        assert_eq!(CharSet::full().len(), 256);
    }
}
