/// All of the core data structures used by the interpreter.
pub mod data_structures;

/// Module for defining the built-in native words.
pub mod built_ins;

/// Module for defining the error reporting of the interpreter.
pub mod error;

/// The execution environment and the traits used to manage it.
#[macro_use]
pub mod interpreter;
