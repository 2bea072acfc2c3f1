/// Module for managing source code, tokenizing it, and compiling it into words.
#[macro_use]
pub mod lang;

/// Module for the runtime and the data structures used by the interpreter.  As well as the
/// execution environment itself.
#[macro_use]
pub mod runtime;

pub use lang::compilation::execute;
pub use runtime::{
    data_structures::cell::{Cell, Procedure},
    error::{ErrorKind, Result, ScriptError},
    interpreter::Environment,
};
