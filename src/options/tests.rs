#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_patt_len_matches_spec() {
        assert_eq!(CompilerOptions::default().max_patt_len, 4096);
    }
}
