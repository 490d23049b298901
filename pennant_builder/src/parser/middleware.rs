use std::env;

use crate::parser::base::*;
use crate::parser::{ConsoleInterface, ErrorContext, UserInterface};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const TERMINATOR: &str = "--";

/// Walks the input tokens, tracking the byte offset of each for error reporting.
struct TokenStream<'t, 's> {
    tokens: &'t [&'s str],
    position: usize,
    offset: usize,
}

impl<'t, 's> TokenStream<'t, 's> {
    fn new(tokens: &'t [&'s str]) -> Self {
        Self {
            tokens,
            position: 0,
            offset: 0,
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'s str)> {
        let token = *self.tokens.get(self.position)?;
        let offset = self.offset;
        self.position += 1;
        self.offset += token.len();
        Some((offset, token))
    }

    fn remaining(&mut self) -> &'t [&'s str] {
        let tokens = self.tokens;
        let start = self.position;
        self.position = tokens.len();
        &tokens[start..]
    }
}

impl<'a> FlagSet<'a> {
    /// Run the flag set against the input tokens.
    ///
    /// Tokens are processed left to right:
    /// * `--NAME=VALUE` or `--NAME VALUE` sets the named flag.
    /// * `-N=VALUE`, `-NVALUE` or `-N VALUE` sets the shorthand flag.
    /// * Flags with an implied value (ex: booleans) may be given without one: `--NAME`, `-N`.
    /// These take a value only via the `=` form (ex: `--verbose=false`).
    /// * Shorthands may be combined: `-abc` is equivalent to `-a -b -c`.
    /// Once a shorthand without an implied value is reached, the remainder of the token is its value.
    /// * `--` ends flag processing; the tokens after it are all positional.
    /// * Any other token (including `-`) is positional, and parsing continues past it.
    ///
    /// Positional tokens are available via [`FlagSet::args`] afterwards.
    /// Flags are set as they are encountered, so an error leaves the preceding flags set.
    ///
    /// ### Example
    /// ```
    /// # use pennant_builder as pennant;
    /// use pennant::FlagSet;
    ///
    /// let mut flags = FlagSet::new("program");
    /// let all = flags.bool_p("all", "a", false, "Show everything.").unwrap();
    /// let long = flags.bool_s("l", false, "Long format.").unwrap();
    ///
    /// flags.parse_tokens(&["-al", "src", "--", "-x"]).unwrap();
    ///
    /// assert!(all.get());
    /// assert!(long.get());
    /// assert_eq!(flags.args(), &["src", "-x"]);
    /// ```
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.parsed = true;
        self.args.clear();
        let mut stream = TokenStream::new(tokens);

        while let Some((offset, token)) = stream.next_token() {
            if token == TERMINATOR {
                let remaining = stream.remaining();
                self.args.extend(remaining.iter().map(|s| s.to_string()));
            } else if let Some(long) = token.strip_prefix("--") {
                self.parse_long(long, offset, &mut stream)?;
            } else if token.len() > 1 && token.starts_with('-') {
                self.parse_short(&token[1..], offset, &mut stream)?;
            } else {
                self.args.push(token.to_string());
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Flag set '{}' parsed {} flag(s) and {} argument(s).",
                self.name(),
                self.n_flag(),
                self.args.len()
            );
        }

        Ok(())
    }

    /// Run the flag set against the Cli [`env::args`] (skipping the program name).
    ///
    /// If an error is encountered, prints it alongside the offending command line context, and then exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(&mut self) {
        let command_input: Vec<String> = env::args().skip(1).collect();

        if let Err(exit_code) = self.parse_tokens_with_interface(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
            &ConsoleInterface::default(),
        ) {
            std::process::exit(exit_code);
        }
    }

    pub(crate) fn parse_tokens_with_interface(
        &mut self,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<(), i32> {
        match self.parse_tokens(tokens) {
            Ok(()) => Ok(()),
            Err(error) => {
                user_interface.print_error(&error);
                user_interface.print_error_context(ErrorContext::new(error.offset(), tokens));
                Err(1)
            }
        }
    }

    fn parse_long(
        &mut self,
        body: &str,
        offset: usize,
        stream: &mut TokenStream,
    ) -> Result<(), ParseError> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        if name.is_empty() || name.starts_with('-') {
            return Err(ParseError::BadSyntax {
                token: format!("--{body}"),
                offset,
            });
        }

        let index = match self.names.get(name) {
            Some(index) => *index,
            None => {
                return Err(ParseError::UnknownFlag {
                    flag: format!("--{name}"),
                    offset,
                });
            }
        };

        let flag = &mut self.flags[index];
        let value = match (inline, flag.implied()) {
            (Some(value), _) => value,
            (None, Some(implied)) => implied,
            (None, None) => match stream.next_token() {
                Some((_, value)) => value,
                None => {
                    return Err(ParseError::MissingValue {
                        flag: format!("--{name}"),
                        offset,
                    });
                }
            },
        };

        flag.assign(value, offset)
    }

    fn parse_short(
        &mut self,
        shorthands: &str,
        offset: usize,
        stream: &mut TokenStream,
    ) -> Result<(), ParseError> {
        let mut rest = shorthands;

        while let Some(shorthand) = rest.chars().next() {
            rest = &rest[shorthand.len_utf8()..];
            let index = match self.shorthands.get(&shorthand) {
                Some(index) => *index,
                None => {
                    return Err(ParseError::UnknownFlag {
                        flag: format!("-{shorthand}"),
                        offset,
                    });
                }
            };

            let flag = &mut self.flags[index];
            let value = if let Some(value) = rest.strip_prefix('=') {
                rest = "";
                value
            } else if let Some(implied) = flag.implied() {
                implied
            } else if !rest.is_empty() {
                let value = rest;
                rest = "";
                value
            } else {
                match stream.next_token() {
                    Some((_, value)) => value,
                    None => {
                        return Err(ParseError::MissingValue {
                            flag: format!("-{shorthand}"),
                            offset,
                        });
                    }
                }
            };

            flag.assign(value, offset)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InvalidValue;
    use crate::parser::base::test::Echo;
    use crate::parser::util::InMemoryInterface;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::cell::Cell;

    fn echo_set() -> FlagSet<'static> {
        let mut flags = FlagSet::new("program");
        flags.var_p(Echo::new("-"), "key", "k", "usage").unwrap();
        flags
            .var_p(Echo::with_implied("-", "on"), "switch", "s", "usage")
            .unwrap();
        flags
            .var_p(Echo::with_implied("-", "on"), "", "x", "usage")
            .unwrap();
        flags
    }

    #[rstest]
    #[case(vec![], "-", "-", "-", vec![])]
    #[case(vec!["--key=abc"], "abc", "-", "-", vec![])]
    #[case(vec!["--key", "abc"], "abc", "-", "-", vec![])]
    #[case(vec!["--key=a=b"], "a=b", "-", "-", vec![])]
    #[case(vec!["--key="], "", "-", "-", vec![])]
    #[case(vec!["--key", "--switch"], "--switch", "-", "-", vec![])]
    #[case(vec!["-k", "abc"], "abc", "-", "-", vec![])]
    #[case(vec!["-k=abc"], "abc", "-", "-", vec![])]
    #[case(vec!["-kabc"], "abc", "-", "-", vec![])]
    #[case(vec!["--switch"], "-", "on", "-", vec![])]
    #[case(vec!["--switch=off"], "-", "off", "-", vec![])]
    #[case(vec!["--switch", "off"], "-", "on", "-", vec!["off"])]
    #[case(vec!["-s"], "-", "on", "-", vec![])]
    #[case(vec!["-s=off"], "-", "off", "-", vec![])]
    #[case(vec!["-sx"], "-", "on", "on", vec![])]
    #[case(vec!["-xsk", "abc"], "abc", "on", "on", vec![])]
    #[case(vec!["-xskabc"], "abc", "on", "on", vec![])]
    #[case(vec!["-xs=off"], "-", "off", "on", vec![])]
    #[case(vec!["-ks"], "s", "-", "-", vec![])]
    #[case(vec!["a", "--switch", "b"], "-", "on", "-", vec!["a", "b"])]
    #[case(vec!["-", "-x"], "-", "-", "on", vec!["-"])]
    #[case(vec!["--", "--switch", "-x"], "-", "-", "-", vec!["--switch", "-x"])]
    #[case(vec!["-x", "--", "--"], "-", "-", "on", vec!["--"])]
    #[case(vec!["--key", "1", "--key", "2"], "2", "-", "-", vec![])]
    fn parse_tokens(
        #[case] tokens: Vec<&str>,
        #[case] key: &str,
        #[case] switch: &str,
        #[case] x: &str,
        #[case] args: Vec<&str>,
    ) {
        // Setup
        let mut flags = echo_set();

        // Execute
        flags.parse_tokens(tokens.as_slice()).unwrap();

        // Verify
        assert!(flags.parsed());
        assert_eq!(flags.lookup("key").unwrap().value(), key);
        assert_eq!(flags.lookup("switch").unwrap().value(), switch);
        assert_eq!(flags.shorthand_lookup('x').unwrap().value(), x);
        assert_eq!(flags.args(), args.as_slice());
        assert_eq!(flags.lookup("key").unwrap().changed(), key != "-");
    }

    #[rstest]
    #[case(vec!["--bogus"], "--bogus", 0)]
    #[case(vec!["--bogus=1"], "--bogus", 0)]
    #[case(vec!["-q"], "-q", 0)]
    #[case(vec!["abc", "-xq"], "-q", 3)]
    #[case(vec!["--switch", "--Switch"], "--Switch", 8)]
    fn parse_unknown(#[case] tokens: Vec<&str>, #[case] flag: &str, #[case] offset: usize) {
        let mut flags = echo_set();
        let result = flags.parse_tokens(tokens.as_slice());
        assert_matches!(result, Err(ParseError::UnknownFlag { flag: f, offset: o }) => {
            assert_eq!(f, flag);
            assert_eq!(o, offset);
        });
    }

    #[rstest]
    #[case(vec!["--key"], "--key", 0)]
    #[case(vec!["-k"], "-k", 0)]
    #[case(vec!["--switch", "-xk"], "-k", 8)]
    fn parse_missing(#[case] tokens: Vec<&str>, #[case] flag: &str, #[case] offset: usize) {
        let mut flags = echo_set();
        let result = flags.parse_tokens(tokens.as_slice());
        assert_matches!(result, Err(ParseError::MissingValue { flag: f, offset: o }) => {
            assert_eq!(f, flag);
            assert_eq!(o, offset);
        });
    }

    #[rstest]
    #[case(vec!["---key"], "---key")]
    #[case(vec!["--=abc"], "--=abc")]
    #[case(vec!["---"], "---")]
    fn parse_bad_syntax(#[case] tokens: Vec<&str>, #[case] token: &str) {
        let mut flags = echo_set();
        let result = flags.parse_tokens(tokens.as_slice());
        assert_matches!(result, Err(ParseError::BadSyntax { token: t, offset: 0 }) => {
            assert_eq!(t, token);
        });
    }

    #[test]
    fn parse_invalid_bool() {
        // Setup
        let verbose: Cell<bool> = Cell::new(false);
        let mut flags = FlagSet::new("program");
        flags
            .bool_var_p(&verbose, "verbose", "v", false, "usage")
            .unwrap();

        // Execute
        let result = flags.parse_tokens(&["--verbose=yes"]);

        // Verify
        assert_eq!(
            result,
            Err(ParseError::InvalidConversion {
                flag: "-v, --verbose".to_string(),
                offset: 0,
                source: InvalidValue::new("yes", "bool"),
            })
        );
        assert!(!verbose.get());
        assert!(!flags.changed("verbose"));
    }

    #[test]
    fn parse_partial() {
        // Setup
        let mut flags = echo_set();

        // Execute
        flags
            .parse_tokens(&["--switch", "--key"])
            .unwrap_err();

        // Verify
        assert!(flags.changed("switch"));
        assert!(!flags.changed("key"));
    }

    #[test]
    fn parse_resets_args() {
        let mut flags = echo_set();
        flags.parse_tokens(&["a", "b"]).unwrap();
        assert_eq!(flags.n_arg(), 2);
        flags.parse_tokens(&["c"]).unwrap();
        assert_eq!(flags.args(), &["c"]);
        assert_eq!(flags.arg(0), Some("c"));
    }

    #[test]
    fn parse_empty() {
        let mut flags = FlagSet::new("program");
        flags.parse_tokens(&[]).unwrap();
        assert!(flags.parsed());
        assert_eq!(flags.n_arg(), 0);
    }

    #[test]
    fn parse_tokens_with_interface() {
        // Setup
        let mut flags = echo_set();
        let interface = InMemoryInterface::default();

        // Execute
        flags
            .parse_tokens_with_interface(&["--key", "1"], &interface)
            .unwrap();

        // Verify
        let (error, error_context) = interface.consume();
        assert_eq!(error, None);
        assert_eq!(error_context, None);
    }

    #[test]
    fn parse_tokens_with_interface_error() {
        // Setup
        let mut flags = FlagSet::new("program");
        flags.bool("verbose", false, "usage").unwrap();
        let interface = InMemoryInterface::default();
        let tokens = vec!["abc", "--verbose=maybe"];

        // Execute
        let exit_code = flags
            .parse_tokens_with_interface(tokens.as_slice(), &interface)
            .unwrap_err();

        // Verify
        assert_eq!(exit_code, 1);
        let (error, error_context) = interface.consume();
        let error = error.unwrap();
        assert_contains!(error, "Parse error: invalid value for flag '--verbose'");
        assert_contains!(error, "cannot convert 'maybe' to bool.");
        assert_eq!(
            error_context.unwrap().to_string(),
            "abc --verbose=maybe\n    ^"
        );
    }
}
