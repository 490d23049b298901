use std::cell::Cell;

use crate::model::Handle;

/// The storage a flag value writes into.
///
/// A binding aliases storage; it never holds a copy of its own.
/// * [`Binding::Exclusive`]: caller-owned storage, borrowed mutably for the life of the [`FlagSet`](crate::FlagSet).
/// The caller reads it once the `FlagSet` has been dropped.
/// * [`Binding::Cell`]: caller-owned storage, shared through a [`Cell`].
/// The caller may read it at any time.
/// * [`Binding::Shared`]: library-owned storage, see [`Handle`].
pub enum Binding<'a, T> {
    /// Mutably borrowed caller storage.
    Exclusive(&'a mut T),
    /// Caller storage shared via interior mutability.
    Cell(&'a Cell<T>),
    /// Library storage.
    Shared(Handle<T>),
}

impl<'a, T> Binding<'a, T> {
    /// Write the default `value` into the storage, returning the binding.
    ///
    /// Declarations call this exactly once, before registering the flag, so the storage holds the default from the outset.
    pub fn install(mut self, value: T) -> Self {
        self.store(value);
        self
    }

    /// Overwrite the storage with `value`.
    pub fn store(&mut self, value: T) {
        match self {
            Binding::Exclusive(variable) => **variable = value,
            Binding::Cell(cell) => cell.set(value),
            Binding::Shared(handle) => {
                handle.replace(value);
            }
        }
    }
}

impl<'a, T: Copy> Binding<'a, T> {
    /// Read the storage.
    pub fn load(&self) -> T {
        match self {
            Binding::Exclusive(variable) => **variable,
            Binding::Cell(cell) => cell.get(),
            Binding::Shared(handle) => handle.get(),
        }
    }
}

impl<'a, T> From<&'a mut T> for Binding<'a, T> {
    fn from(value: &'a mut T) -> Self {
        Binding::Exclusive(value)
    }
}

impl<'a, T> From<&'a Cell<T>> for Binding<'a, T> {
    fn from(value: &'a Cell<T>) -> Self {
        Binding::Cell(value)
    }
}

impl<'a, T> From<Handle<T>> for Binding<'a, T> {
    fn from(value: Handle<T>) -> Self {
        Binding::Shared(value)
    }
}

impl<'a, T> std::fmt::Debug for Binding<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Binding::Exclusive(_) => "Exclusive",
            Binding::Cell(_) => "Cell",
            Binding::Shared(_) => "Shared",
        };

        write!(f, "Binding::{kind}<{t}>", t = std::any::type_name::<T>())
    }
}
