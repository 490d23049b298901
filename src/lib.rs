//! `pennant` is a typed command line flag library for Rust.
//!
//! Declare named (`--verbose`) and shorthand (`-v`) flags, bind each to a strongly typed variable, and let `pennant` convert the command line into those variables.
//! `pennant` prioritizes the following design concerns:
//! * *Typed flags*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Every flag type implements [`Value`], which knows how to parse itself from, and render itself back to, text.
//! * *Caller owned storage*:
//! The value of a flag lives in a variable the caller chooses.
//! Alternatively, `pennant` allocates the storage and hands back a [`Handle`].
//! * *Fail at declaration, not at parse*:
//! Misconfigured flags (ex: a repeated name) are reported when they are declared.
//!
//! # Usage
//! via a [`FlagSet`]:
//! ```no_run
#![doc = include_str!("../demos/verbose.rs")]
//! ```
//! or equivalently via the default flag set:
//! ```no_run
#![doc = include_str!("../demos/shared.rs")]
//! ```
//!
//! ```console
//! $ verbose -v a.txt --dry-run b.txt
//! verbose: true
//! dry-run: true
//! files: ["a.txt", "b.txt"]
//!
//! $ verbose --verbose=maybe
//! Parse error: invalid value for flag '-v, --verbose': cannot convert 'maybe' to bool.
//! --verbose=maybe
//! ^
//! ```
//!
//! # Declarations
//! Each flag type offers six declarations.
//! They differ in how the flag is named, and in who owns the flag's storage.
//!
//! ```console
//! Declaration                                    | Cli         | Storage
//! ---------------------------------------------------------------------------------
//! bool_var(variable, name, value, usage)         | --NAME      | variable
//! bool_var_p(variable, name, short, value, usage)| --NAME, -S  | variable
//! bool_var_s(variable, short, value, usage)      | -S          | variable
//! bool(name, value, usage)                       | --NAME      | Handle (returned)
//! bool_p(name, short, value, usage)              | --NAME, -S  | Handle (returned)
//! bool_s(short, value, usage)                    | -S          | Handle (returned)
//! ```
//!
//! All of these funnel into [`FlagSet::var_p`], which is also how to declare a flag of a custom [`Value`] type.
//! A declaration fails with a [`ConfigError`] when:
//! * Both the name and the shorthand are empty.
//! * The shorthand is longer than one character.
//! * The name, or the shorthand, is already declared on the flag set.
//!
//! ### Defaults
//! Every declaration takes a default `value`, which is written into the storage as part of the declaration.
//! In other words, the variable reflects the default before any parsing happens.
//!
//! ```
//! # use pennant::FlagSet;
//! let mut verbose: bool = true;
//! let mut flags = FlagSet::new("program");
//! flags.bool_var(&mut verbose, "verbose", false, "Print more.").unwrap();
//! drop(flags);
//!
//! assert!(!verbose);
//! ```
//!
//! ### Storage
//! The `variable` of a declaration is anything which converts into a [`Binding`]:
//! * `&mut T`: the variable is borrowed by the `FlagSet`; read it once the `FlagSet` is dropped.
//! * `&Cell<T>`: the variable may be read at any time.
//! * [`Handle<T>`]: storage shared with `pennant`.
//!
//! # Cli Semantics
//! [`FlagSet::parse_tokens`] processes tokens left to right.
//!
//! * `--NAME=VALUE` and `--NAME VALUE` set the named flag.
//! * `-S=VALUE`, `-SVALUE` and `-S VALUE` set the shorthand flag.
//! * A boolean flag may be given without a value, setting it to `true`: `--verbose`, `-v`.
//! To give a boolean flag a value, use `=` (ex: `--verbose=false`).
//! Notice, `-v false` sets `v` to `true`, leaving `false` as a positional argument.
//! * Shorthands may be combined: `-abc` is equivalent to `-a -b -c`.
//! * `--` ends flag processing; every subsequent token is positional.
//! * Any other token is positional (including `-`), and flags may continue after it.
//!
//! Boolean values are case-sensitive:
//! ```console
//! true  | 1, t, T, true, TRUE, True
//! false | 0, f, F, false, FALSE, False
//! ```
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events for declarations and parsing.
pub use pennant_builder::*;
