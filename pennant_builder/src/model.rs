use std::cell::RefCell;
use std::rc::Rc;

/// Library-owned storage for a flag.
///
/// Returned by the declarations which allocate their own storage (ex: [`FlagSet::bool`](crate::FlagSet::bool)).
/// The registry and the caller share the same underlying value, so anything parsed into the flag is visible through every clone of the handle.
///
/// ### Example
/// ```
/// # use pennant_builder as pennant;
/// use pennant::FlagSet;
///
/// let mut flags = FlagSet::new("program");
/// let verbose = flags.bool("verbose", false, "Print more.").unwrap();
/// assert!(!verbose.get());
///
/// flags.parse_tokens(&["--verbose"]).unwrap();
/// assert!(verbose.get());
/// ```
#[derive(Debug, Default)]
pub struct Handle<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Handle<T> {
    /// Create a handle holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    pub(crate) fn replace(&self, value: T) -> T {
        self.inner.replace(value)
    }
}

impl<T: Clone> Handle<T> {
    /// Get a copy of the current value.
    ///
    /// The handle never lends out its storage, so the value may be read at any point, including in between parses.
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::FlagSet;

    #[test]
    fn clones_share_storage() {
        let handle = Handle::new(false);
        let clone = handle.clone();
        clone.replace(true);
        assert!(handle.get());
    }

    #[test]
    fn read_across_parse() {
        // Setup
        let mut flags = FlagSet::new("program");
        let verbose = flags.bool("verbose", false, "usage").unwrap();
        let before = verbose.get();

        // Execute
        flags.parse_tokens(&["--verbose"]).unwrap();

        // Verify
        assert!(!before);
        assert!(verbose.get());
    }

    #[test]
    fn get_clones() {
        let handle = Handle::new(String::from("a"));
        let value = handle.get();
        handle.replace(String::from("b"));
        assert_eq!(value, "a");
        assert_eq!(handle.get(), "b");
    }

    #[test]
    fn default() {
        let handle: Handle<bool> = Handle::default();
        assert!(!handle.get());
    }
}
