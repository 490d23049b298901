//! The default [`FlagSet`], used by the crate level declarations (ex: [`bool_var`]).
//!
//! The default flag set is created on first use, named after the running program, and lives for the remainder of the program.
//! It belongs to the thread which uses it: each thread sees its own default flag set.
//! A flag declared on one thread is unknown when parsing on another, so declare and parse flags from the main thread.
use std::cell::RefCell;
use std::env;

use crate::api::{Binding, Value};
use crate::model::Handle;
use crate::parser::{ConfigError, FlagSet, ParseError};

thread_local! {
    static COMMAND_LINE: RefCell<FlagSet<'static>> = RefCell::new(FlagSet::new(program_name()));
}

fn program_name() -> String {
    env::args().next().unwrap_or_default()
}

/// Run `command_line_fn` against the default flag set.
///
/// Use this to hand the default flag set to code written against `&mut FlagSet`.
/// Panics if called from within another `with_command_line`.
///
/// ### Example
/// ```
/// # use pennant_builder as pennant;
/// use pennant::{with_command_line, ConfigError, FlagSet};
///
/// fn declare(flags: &mut FlagSet) -> Result<(), ConfigError> {
///     flags.bool_s("q", false, "Quiet.").map(|_| ())
/// }
///
/// with_command_line(declare).unwrap();
/// with_command_line(|flags| assert!(flags.shorthand_lookup('q').is_some()));
/// ```
pub fn with_command_line<R>(command_line_fn: impl FnOnce(&mut FlagSet<'static>) -> R) -> R {
    COMMAND_LINE.with(|command_line| command_line_fn(&mut command_line.borrow_mut()))
}

/// Declare a boolean flag with a name on the default flag set, storing its value in `variable`.
///
/// See [`FlagSet::bool_var`].
///
/// ### Example
/// ```
/// # use pennant_builder as pennant;
/// use std::cell::Cell;
///
/// let verbose: &'static Cell<bool> = Box::leak(Box::new(Cell::new(false)));
/// pennant::bool_var(verbose, "verbose", false, "Print more.").unwrap();
/// pennant::parse_tokens(&["--verbose"]).unwrap();
///
/// assert!(verbose.get());
/// ```
pub fn bool_var(
    variable: impl Into<Binding<'static, bool>>,
    name: &str,
    value: bool,
    usage: impl Into<String>,
) -> Result<(), ConfigError> {
    with_command_line(|flags| flags.bool_var(variable, name, value, usage))
}

/// Declare a boolean flag with a name and a shorthand on the default flag set, storing its value in `variable`.
///
/// See [`FlagSet::bool_var_p`].
pub fn bool_var_p(
    variable: impl Into<Binding<'static, bool>>,
    name: &str,
    shorthand: &str,
    value: bool,
    usage: impl Into<String>,
) -> Result<(), ConfigError> {
    with_command_line(|flags| flags.bool_var_p(variable, name, shorthand, value, usage))
}

/// Declare a boolean flag with only a shorthand on the default flag set, storing its value in `variable`.
///
/// See [`FlagSet::bool_var_s`].
pub fn bool_var_s(
    variable: impl Into<Binding<'static, bool>>,
    shorthand: &str,
    value: bool,
    usage: impl Into<String>,
) -> Result<(), ConfigError> {
    with_command_line(|flags| flags.bool_var_s(variable, shorthand, value, usage))
}

/// Declare a boolean flag with a name on the default flag set.
///
/// See [`FlagSet::bool`].
///
/// ### Example
/// ```
/// # use pennant_builder as pennant;
/// let verbose = pennant::bool("verbose", false, "Print more.").unwrap();
/// pennant::parse_tokens(&["--verbose", "input.txt"]).unwrap();
///
/// assert!(verbose.get());
/// assert_eq!(pennant::args(), vec!["input.txt"]);
/// ```
pub fn bool(name: &str, value: bool, usage: impl Into<String>) -> Result<Handle<bool>, ConfigError> {
    with_command_line(|flags| flags.bool(name, value, usage))
}

/// Declare a boolean flag with a name and a shorthand on the default flag set.
///
/// See [`FlagSet::bool_p`].
pub fn bool_p(
    name: &str,
    shorthand: &str,
    value: bool,
    usage: impl Into<String>,
) -> Result<Handle<bool>, ConfigError> {
    with_command_line(|flags| flags.bool_p(name, shorthand, value, usage))
}

/// Declare a boolean flag with only a shorthand on the default flag set.
///
/// See [`FlagSet::bool_s`].
pub fn bool_s(
    shorthand: &str,
    value: bool,
    usage: impl Into<String>,
) -> Result<Handle<bool>, ConfigError> {
    with_command_line(|flags| flags.bool_s(shorthand, value, usage))
}

/// Declare a flag with a name and/or shorthand on the default flag set.
///
/// See [`FlagSet::var_p`].
pub fn var_p(
    value: impl Value + 'static,
    name: &str,
    shorthand: &str,
    usage: impl Into<String>,
) -> Result<(), ConfigError> {
    with_command_line(|flags| flags.var_p(value, name, shorthand, usage))
}

/// Run the default flag set against the Cli [`env::args`].
///
/// See [`FlagSet::parse`].
pub fn parse() {
    with_command_line(|flags| flags.parse())
}

/// Run the default flag set against the input tokens.
///
/// See [`FlagSet::parse_tokens`].
pub fn parse_tokens(tokens: &[&str]) -> Result<(), ParseError> {
    with_command_line(|flags| flags.parse_tokens(tokens))
}

/// The positional arguments left over from parsing the default flag set.
pub fn args() -> Vec<String> {
    with_command_line(|flags| flags.args().to_vec())
}

/// Whether the flag declared with `name` on the default flag set has been set.
pub fn changed(name: &str) -> bool {
    with_command_line(|flags| flags.changed(name))
}

/// *Available using 'unit_test' crate feature only.*</br></br>
/// Replace the default flag set with an empty one.
#[cfg(feature = "unit_test")]
pub fn reset_command_line() {
    COMMAND_LINE.with(|command_line| command_line.replace(FlagSet::new(program_name())));
}
