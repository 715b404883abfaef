//! Path-separator flattening for derived filenames.

/// Replaces every `/` and `\` in `name` with `_`.
///
/// Nothing else is touched: runs of separators become runs of underscores,
/// and leading underscores are kept.
pub fn flatten_separators(name: &str) -> String {
    name.chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_slash_and_backslash() {
        assert_eq!(flatten_separators("a/b\\c.txt"), "a_b_c.txt");
    }

    #[test]
    fn does_not_collapse_runs() {
        assert_eq!(flatten_separators("a//b"), "a__b");
        assert_eq!(flatten_separators("/a/"), "_a_");
    }
}
