use crate::api::{Binding, BoolValue};
use crate::model::Handle;
use crate::parser::{ConfigError, FlagSet};

impl<'a> FlagSet<'a> {
    /// Declare a boolean flag with a name, storing its value in `variable`.
    ///
    /// The default `value` is written into `variable` immediately, before the declaration is validated.
    /// So `variable` holds the default even when the declaration fails with a [`ConfigError`].
    /// `variable` may be a `&mut bool` (readable once the flag set is dropped), a `&Cell<bool>` (readable at any time), or a [`Handle`].
    ///
    /// ### Example
    /// ```
    /// # use pennant_builder as pennant;
    /// use pennant::FlagSet;
    ///
    /// let mut verbose: bool = true;
    /// let mut flags = FlagSet::new("program");
    /// flags.bool_var(&mut verbose, "verbose", false, "Print more.").unwrap();
    /// flags.parse_tokens(&["--verbose"]).unwrap();
    /// drop(flags);
    ///
    /// assert!(verbose);
    /// ```
    pub fn bool_var(
        &mut self,
        variable: impl Into<Binding<'a, bool>>,
        name: &str,
        value: bool,
        usage: impl Into<String>,
    ) -> Result<(), ConfigError> {
        self.var_p(BoolValue::new(value, variable), name, "", usage)
    }

    /// Declare a boolean flag with a name and a shorthand, storing its value in `variable`.
    ///
    /// As with [`FlagSet::bool_var`], the default is written into `variable` even if the declaration fails.
    ///
    /// ### Example
    /// ```
    /// # use pennant_builder as pennant;
    /// use pennant::FlagSet;
    /// use std::cell::Cell;
    ///
    /// let verbose: Cell<bool> = Cell::new(false);
    /// let mut flags = FlagSet::new("program");
    /// flags.bool_var_p(&verbose, "verbose", "v", false, "Print more.").unwrap();
    /// flags.parse_tokens(&["-v"]).unwrap();
    ///
    /// assert!(verbose.get());
    /// ```
    pub fn bool_var_p(
        &mut self,
        variable: impl Into<Binding<'a, bool>>,
        name: &str,
        shorthand: &str,
        value: bool,
        usage: impl Into<String>,
    ) -> Result<(), ConfigError> {
        self.var_p(BoolValue::new(value, variable), name, shorthand, usage)
    }

    /// Declare a boolean flag with only a shorthand, storing its value in `variable`.
    ///
    /// As with [`FlagSet::bool_var`], the default is written into `variable` even if the declaration fails.
    pub fn bool_var_s(
        &mut self,
        variable: impl Into<Binding<'a, bool>>,
        shorthand: &str,
        value: bool,
        usage: impl Into<String>,
    ) -> Result<(), ConfigError> {
        self.var_p(BoolValue::new(value, variable), "", shorthand, usage)
    }

    /// Declare a boolean flag with a name.
    ///
    /// Returns the [`Handle`] through which to read the flag's value.
    ///
    /// ### Example
    /// ```
    /// # use pennant_builder as pennant;
    /// use pennant::FlagSet;
    ///
    /// let mut flags = FlagSet::new("program");
    /// let dry_run = flags.bool("dry-run", true, "Do nothing.").unwrap();
    /// flags.parse_tokens(&["--dry-run=false"]).unwrap();
    ///
    /// assert!(!dry_run.get());
    /// ```
    pub fn bool(
        &mut self,
        name: &str,
        value: bool,
        usage: impl Into<String>,
    ) -> Result<Handle<bool>, ConfigError> {
        self.bool_p(name, "", value, usage)
    }

    /// Declare a boolean flag with a name and a shorthand.
    ///
    /// See [`FlagSet::bool`].
    pub fn bool_p(
        &mut self,
        name: &str,
        shorthand: &str,
        value: bool,
        usage: impl Into<String>,
    ) -> Result<Handle<bool>, ConfigError> {
        let handle: Handle<bool> = Handle::default();
        self.bool_var_p(handle.clone(), name, shorthand, value, usage)?;
        Ok(handle)
    }

    /// Declare a boolean flag with only a shorthand.
    ///
    /// See [`FlagSet::bool`].
    pub fn bool_s(
        &mut self,
        shorthand: &str,
        value: bool,
        usage: impl Into<String>,
    ) -> Result<Handle<bool>, ConfigError> {
        self.bool_p("", shorthand, value, usage)
    }
}
