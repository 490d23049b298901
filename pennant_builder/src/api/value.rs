use thiserror::Error;

/// Behaviour to parse a flag's typed value from, and render it back to, text.
///
/// Every flag type in `pennant` is a `Value`, and the [`FlagSet`](crate::FlagSet) holds its flags only through this trait.
/// Implement it to register a custom flag type via [`FlagSet::var_p`](crate::FlagSet::var_p).
///
/// Implementations should uphold the following:
/// * `parse` only writes the underlying storage when it succeeds.
/// * `render` inverts `parse`, at least for the canonical text of the type.
///
/// ### Example
/// ```
/// # use pennant_builder as pennant;
/// use pennant::{Binding, FlagSet, InvalidValue};
/// use pennant::prelude::*;
///
/// struct Level<'a>(Binding<'a, u8>);
///
/// impl<'a> Value for Level<'a> {
///     fn parse(&mut self, token: &str) -> Result<(), InvalidValue> {
///         let level = token
///             .parse::<u8>()
///             .map_err(|_| InvalidValue::new(token, self.type_name()))?;
///         self.0.store(level);
///         Ok(())
///     }
///
///     fn render(&self) -> String {
///         self.0.load().to_string()
///     }
///
///     fn type_name(&self) -> &'static str {
///         "level"
///     }
/// }
///
/// let mut level: u8 = 0;
/// let mut flags = FlagSet::new("program");
/// flags
///     .var_p(Level(Binding::from(&mut level).install(1)), "level", "l", "How loud.")
///     .unwrap();
/// flags.parse_tokens(&["-l", "3"]).unwrap();
/// drop(flags);
///
/// assert_eq!(level, 3);
/// ```
pub trait Value {
    /// Parse `token` into the underlying storage.
    fn parse(&mut self, token: &str) -> Result<(), InvalidValue>;

    /// Render the current value as text.
    fn render(&self) -> String;

    /// The name of the type, used when reporting errors.
    fn type_name(&self) -> &'static str;

    /// The text to parse when the flag is specified without a value (ex: `--verbose`).
    ///
    /// Flags which return `None` always take a value from the command line.
    fn implied(&self) -> Option<&'static str> {
        None
    }
}

/// The token could not be converted into the flag's type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct InvalidValue {
    token: String,
    type_name: &'static str,
}

impl InvalidValue {
    /// Create an invalid value error for `token`.
    pub fn new(token: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            token: token.into(),
            type_name,
        }
    }

    /// The offending text.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The name of the type the text was being converted to.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unit;

    impl Value for Unit {
        fn parse(&mut self, token: &str) -> Result<(), InvalidValue> {
            match token {
                "()" => Ok(()),
                _ => Err(InvalidValue::new(token, self.type_name())),
            }
        }

        fn render(&self) -> String {
            "()".to_string()
        }

        fn type_name(&self) -> &'static str {
            "unit"
        }
    }

    #[test]
    fn implied_default() {
        assert_eq!(Unit.implied(), None);
    }

    #[test]
    fn invalid_value() {
        let error = Unit.parse("abc").unwrap_err();
        assert_eq!(error.token(), "abc");
        assert_eq!(error.type_name(), "unit");
        assert_eq!(error.to_string(), "cannot convert 'abc' to unit.");
    }
}
