use std::collections::HashMap;
use thiserror::Error;

use crate::api::{InvalidValue, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A flag declaration was invalid.
///
/// Detected at registration time; typically fatal to program startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Both the name and the shorthand are empty.
    #[error("Config error: a flag requires a name or a shorthand.")]
    Nameless,

    /// The shorthand is not a single character.
    #[error("Config error: shorthand '{0}' must be precisely one character.")]
    InvalidShorthand(String),

    /// The name is already declared on the flag set.
    #[error("Config error: flag set '{set}' cannot duplicate the flag '--{name}'.")]
    DuplicateName {
        /// The name of the flag set.
        set: String,
        /// The repeated name.
        name: String,
    },

    /// The shorthand is already declared on the flag set.
    #[error("Config error: flag set '{set}' cannot duplicate the shorthand '-{shorthand}' (used by '{existing}').")]
    DuplicateShorthand {
        /// The name of the flag set.
        set: String,
        /// The repeated shorthand.
        shorthand: char,
        /// The flag which already uses the shorthand.
        existing: String,
    },
}

/// The command line tokens could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token names a flag which is not declared.
    #[error("Parse error: unknown flag '{flag}'.")]
    UnknownFlag {
        /// The flag as written on the command line.
        flag: String,
        /// The offset of the offending token.
        offset: usize,
    },

    /// The flag requires a value, but the tokens ran out.
    #[error("Parse error: flag '{flag}' requires a value.")]
    MissingValue {
        /// The flag as written on the command line.
        flag: String,
        /// The offset of the offending token.
        offset: usize,
    },

    /// The token starts with dashes, but does not form a flag.
    #[error("Parse error: bad flag syntax '{token}'.")]
    BadSyntax {
        /// The offending token.
        token: String,
        /// The offset of the offending token.
        offset: usize,
    },

    /// The flag rejected its value.
    #[error("Parse error: invalid value for flag '{flag}': {source}")]
    InvalidConversion {
        /// The flag which rejected the value.
        flag: String,
        /// The offset of the offending token.
        offset: usize,
        /// The rejection from the flag's [`Value`].
        source: InvalidValue,
    },
}

impl ParseError {
    /// The offset of the offending token, counted in bytes over the concatenated input tokens.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnknownFlag { offset, .. }
            | ParseError::MissingValue { offset, .. }
            | ParseError::BadSyntax { offset, .. }
            | ParseError::InvalidConversion { offset, .. } => *offset,
        }
    }
}

/// A flag declared on a [`FlagSet`].
pub struct Flag<'a> {
    name: Option<String>,
    shorthand: Option<char>,
    usage: String,
    default_value: String,
    changed: bool,
    value: Box<dyn Value + 'a>,
}

impl<'a> Flag<'a> {
    /// The long name (used as `--NAME`), if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The shorthand (used as `-N`), if any.
    pub fn shorthand(&self) -> Option<char> {
        self.shorthand
    }

    /// The usage description.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// The rendered value at the time of declaration.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// The rendered current value.
    pub fn value(&self) -> String {
        self.value.render()
    }

    /// The name of the flag's type.
    pub fn type_name(&self) -> &'static str {
        self.value.type_name()
    }

    /// Whether the flag has been set since declaration.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// The flag as it appears on the command line (ex: `-v, --verbose`).
    pub fn label(&self) -> String {
        match (&self.name, &self.shorthand) {
            (Some(name), Some(shorthand)) => format!("-{shorthand}, --{name}"),
            (Some(name), None) => format!("--{name}"),
            (None, Some(shorthand)) => format!("-{shorthand}"),
            (None, None) => {
                unreachable!("internal error - a flag must have a name or a shorthand")
            }
        }
    }

    fn sort_key(&self) -> String {
        match (&self.name, &self.shorthand) {
            (Some(name), _) => name.clone(),
            (None, Some(shorthand)) => shorthand.to_string(),
            (None, None) => {
                unreachable!("internal error - a flag must have a name or a shorthand")
            }
        }
    }

    pub(super) fn assign(&mut self, token: &str, offset: usize) -> Result<(), ParseError> {
        if let Err(source) = self.value.parse(token) {
            return Err(ParseError::InvalidConversion {
                flag: self.label(),
                offset,
                source,
            });
        }

        self.changed = true;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Set '{}' to '{}'.", self.label(), self.value.render());
        }

        Ok(())
    }

    pub(super) fn implied(&self) -> Option<&'static str> {
        self.value.implied()
    }
}

impl<'a> std::fmt::Debug for Flag<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Flag[{t}, {label}, {value}, {usage}]",
            t = self.type_name(),
            label = self.label(),
            value = self.value(),
            usage = self.usage,
        )
    }
}

/// A set of declared flags, and the parser over them.
///
/// Declare flags with the typed declarations (ex: [`FlagSet::bool_var`]), or with [`FlagSet::var_p`] for a custom [`Value`].
/// Then parse the command line via [`FlagSet::parse`] or [`FlagSet::parse_tokens`].
///
/// ### Example
/// ```
/// # use pennant_builder as pennant;
/// use pennant::FlagSet;
///
/// let mut verbose: bool = false;
/// let mut flags = FlagSet::new("program");
/// flags.bool_var_p(&mut verbose, "verbose", "v", false, "Print more.").unwrap();
/// flags.parse_tokens(&["-v", "input.txt"]).unwrap();
/// assert_eq!(flags.args(), &["input.txt"]);
/// drop(flags);
///
/// assert!(verbose);
/// ```
pub struct FlagSet<'a> {
    name: String,
    pub(super) flags: Vec<Flag<'a>>,
    pub(super) names: HashMap<String, usize>,
    pub(super) shorthands: HashMap<char, usize>,
    pub(super) args: Vec<String>,
    pub(super) parsed: bool,
}

impl<'a> std::fmt::Debug for FlagSet<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .finish()
    }
}

impl<'a> FlagSet<'a> {
    /// Create an empty flag set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: Vec::default(),
            names: HashMap::default(),
            shorthands: HashMap::default(),
            args: Vec::default(),
            parsed: false,
        }
    }

    /// The name of this flag set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a flag with a name.
    ///
    /// See [`FlagSet::var_p`].
    pub fn var(
        &mut self,
        value: impl Value + 'a,
        name: &str,
        usage: impl Into<String>,
    ) -> Result<(), ConfigError> {
        self.var_p(value, name, "", usage)
    }

    /// Declare a flag with a name and/or shorthand.
    ///
    /// All the typed declarations on `FlagSet` funnel into this method.
    /// Either `name` or `shorthand` may be empty, but not both.
    /// A non-empty `shorthand` must be precisely one character.
    /// Within a flag set, each name and each shorthand may only be declared once.
    ///
    /// The flag's default is taken as `value` renders at this point.
    /// When declaration fails the flag set is left unchanged.
    pub fn var_p(
        &mut self,
        value: impl Value + 'a,
        name: &str,
        shorthand: &str,
        usage: impl Into<String>,
    ) -> Result<(), ConfigError> {
        let shorthand = single_char(shorthand)?;

        if name.is_empty() && shorthand.is_none() {
            return Err(ConfigError::Nameless);
        }

        if !name.is_empty() && self.names.contains_key(name) {
            return Err(ConfigError::DuplicateName {
                set: self.name.clone(),
                name: name.to_string(),
            });
        }

        if let Some(s) = shorthand {
            if let Some(index) = self.shorthands.get(&s) {
                return Err(ConfigError::DuplicateShorthand {
                    set: self.name.clone(),
                    shorthand: s,
                    existing: self.flags[*index].label(),
                });
            }
        }

        let flag = Flag {
            name: (!name.is_empty()).then(|| name.to_string()),
            shorthand,
            usage: usage.into(),
            default_value: value.render(),
            changed: false,
            value: Box::new(value),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Flag set '{}' declares {flag:?}.", self.name);
        }

        let index = self.flags.len();

        if let Some(name) = &flag.name {
            self.names.insert(name.clone(), index);
        }

        if let Some(s) = shorthand {
            self.shorthands.insert(s, index);
        }

        self.flags.push(flag);
        Ok(())
    }

    /// Find the flag declared with `name`.
    pub fn lookup(&self, name: &str) -> Option<&Flag<'a>> {
        self.names.get(name).map(|index| &self.flags[*index])
    }

    /// Find the flag declared with `shorthand`.
    pub fn shorthand_lookup(&self, shorthand: char) -> Option<&Flag<'a>> {
        self.shorthands.get(&shorthand).map(|index| &self.flags[*index])
    }

    /// Parse `token` into the flag declared with `name`, as if it were specified on the command line.
    pub fn set(&mut self, name: &str, token: &str) -> Result<(), ParseError> {
        match self.names.get(name) {
            Some(index) => self.flags[*index].assign(token, 0),
            None => Err(ParseError::UnknownFlag {
                flag: format!("--{name}"),
                offset: 0,
            }),
        }
    }

    /// Whether the flag declared with `name` has been set.
    pub fn changed(&self, name: &str) -> bool {
        self.lookup(name).map(Flag::changed).unwrap_or(false)
    }

    /// Visit every flag, in lexicographic order of name (or shorthand for shorthand-only flags).
    pub fn visit_all(&self, mut visit_fn: impl FnMut(&Flag<'a>)) {
        for flag in self.sorted() {
            visit_fn(flag);
        }
    }

    /// Visit every flag which has been set, in the same order as [`FlagSet::visit_all`].
    pub fn visit(&self, mut visit_fn: impl FnMut(&Flag<'a>)) {
        for flag in self.sorted().into_iter().filter(|f| f.changed) {
            visit_fn(flag);
        }
    }

    /// Whether any flags are declared.
    pub fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }

    /// The number of flags which have been set.
    pub fn n_flag(&self) -> usize {
        self.flags.iter().filter(|f| f.changed).count()
    }

    /// The positional arguments left over from parsing.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The number of positional arguments left over from parsing.
    pub fn n_arg(&self) -> usize {
        self.args.len()
    }

    /// The `i`th positional argument left over from parsing.
    pub fn arg(&self, i: usize) -> Option<&str> {
        self.args.get(i).map(String::as_str)
    }

    /// Whether the flag set has been parsed.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    fn sorted(&self) -> Vec<&Flag<'a>> {
        let mut flags: Vec<&Flag<'a>> = self.flags.iter().collect();
        flags.sort_by_key(|f| f.sort_key());
        flags
    }
}

fn single_char(shorthand: &str) -> Result<Option<char>, ConfigError> {
    let mut chars = shorthand.chars();

    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        (Some(_), Some(_)) => Err(ConfigError::InvalidShorthand(shorthand.to_string())),
    }
}

#[cfg(test)]
pub(crate) mod test {
    use crate::api::{InvalidValue, Value};

    /// Accepts any token, remembering only the last one.
    pub(crate) struct Echo {
        last: String,
        implied: Option<&'static str>,
    }

    impl Echo {
        pub(crate) fn new(initial: &str) -> Self {
            Self {
                last: initial.to_string(),
                implied: None,
            }
        }

        pub(crate) fn with_implied(initial: &str, implied: &'static str) -> Self {
            Self {
                last: initial.to_string(),
                implied: Some(implied),
            }
        }
    }

    impl Value for Echo {
        fn parse(&mut self, token: &str) -> Result<(), InvalidValue> {
            self.last = token.to_string();
            Ok(())
        }

        fn render(&self) -> String {
            self.last.clone()
        }

        fn type_name(&self) -> &'static str {
            "echo"
        }

        fn implied(&self) -> Option<&'static str> {
            self.implied
        }
    }
}
