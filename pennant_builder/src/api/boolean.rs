use crate::api::{Binding, InvalidValue, Value};

const BOOL_TYPE_NAME: &str = "bool";
const BOOL_IMPLIED: &str = "true";

/// A boolean flag value.
///
/// Accepts the following text (case-sensitive):
/// * `true`: `1`, `t`, `T`, `true`, `TRUE`, `True`
/// * `false`: `0`, `f`, `F`, `false`, `FALSE`, `False`
///
/// Renders as `true` or `false`.
/// When specified without a value on the command line (ex: `--verbose`), the flag is set to `true`.
#[derive(Debug)]
pub struct BoolValue<'a> {
    binding: Binding<'a, bool>,
}

impl<'a> BoolValue<'a> {
    /// Create a boolean value, writing the default `value` into `variable`.
    ///
    /// ### Example
    /// ```
    /// # use pennant_builder as pennant;
    /// use pennant::BoolValue;
    /// use pennant::prelude::*;
    ///
    /// let mut verbose: bool = true;
    /// let mut value = BoolValue::new(false, &mut verbose);
    /// assert_eq!(value.render(), "false");
    ///
    /// value.parse("T").unwrap();
    /// assert!(verbose);
    /// ```
    pub fn new(value: bool, variable: impl Into<Binding<'a, bool>>) -> Self {
        Self {
            binding: variable.into().install(value),
        }
    }
}

impl<'a> Value for BoolValue<'a> {
    fn parse(&mut self, token: &str) -> Result<(), InvalidValue> {
        let value = parse_bool(token)?;
        self.binding.store(value);
        Ok(())
    }

    fn render(&self) -> String {
        self.binding.load().to_string()
    }

    fn type_name(&self) -> &'static str {
        BOOL_TYPE_NAME
    }

    fn implied(&self) -> Option<&'static str> {
        Some(BOOL_IMPLIED)
    }
}

fn parse_bool(token: &str) -> Result<bool, InvalidValue> {
    match token {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(InvalidValue::new(token, BOOL_TYPE_NAME)),
    }
}
