use crate::parser::{ErrorContext, ParseError};

pub(crate) trait UserInterface {
    fn print_error(&self, error: &ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, error: &ParseError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}
