use crate::types::CharCount;

pub const LABEL: &str = "Character Count";

pub fn format(c: &CharCount) -> String {
    use std::fmt::Write as _;
    let mut out = String::new();
    let _ = writeln!(out, "{LABEL}: {c}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_with_trailing_newline() {
        assert_eq!(format(&CharCount::new(5)), "Character Count: 5\n");
    }

    #[test]
    fn zero_is_printed() {
        assert_eq!(format(&CharCount::default()), "Character Count: 0\n");
    }

    #[test]
    fn large_counts_have_no_separators() {
        assert_eq!(format(&CharCount::new(1_000_000)), "Character Count: 1000000\n");
    }
}
