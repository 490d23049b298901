mod binding;
mod boolean;
mod core;
mod value;

pub use binding::*;
pub use boolean::*;
pub use value::*;
