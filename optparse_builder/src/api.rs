mod core;
mod flag;
mod registry;
mod values;

pub use self::core::*;
pub use flag::*;
pub use registry::*;
pub use values::*;
