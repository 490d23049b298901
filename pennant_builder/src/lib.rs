//! Builder module for `pennant`.
//! See [documentation root](https://docs.rs/pennant/latest/pennant/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod command_line;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use command_line::*;
pub use model::*;
pub use parser::{ConfigError, Flag, FlagSet, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
