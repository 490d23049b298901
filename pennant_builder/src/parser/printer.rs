/// The command line, with a caret pointing at the offending token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.tokens.join(" ");
        let total: usize = self.tokens.iter().map(String::len).sum();
        // The offset counts token bytes only; add one for each separating space before it.
        let mut consumed = 0;
        let mut spaces = 0;

        for token in self.tokens.iter().take(self.tokens.len().saturating_sub(1)) {
            consumed += token.len();

            if consumed > self.offset {
                break;
            }

            spaces += 1;
        }

        write!(
            f,
            "{line}\n{:width$}^",
            "",
            width = std::cmp::min(self.offset, total.saturating_sub(1)) + spaces
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], 0, "\n^")]
    #[case(vec!["--bogus"], 0, "--bogus\n^")]
    #[case(vec!["--verbose", "-x"], 9, "--verbose -x\n          ^")]
    #[case(vec!["a", "--flag", "yes"], 7, "a --flag yes\n         ^")]
    #[case(vec!["a", "--flag"], 1, "a --flag\n  ^")]
    #[case(vec!["--flag"], 6, "--flag\n     ^")]
    fn display(#[case] tokens: Vec<&str>, #[case] offset: usize, #[case] expected: &str) {
        let error_context = ErrorContext::new(offset, tokens.as_slice());
        assert_eq!(error_context.to_string(), expected);
    }
}
