/// Module for managing the original source code and locations within it.
#[macro_use]
pub mod source_buffer;

/// Module for turning source code into a list of tokens for further processing.
pub mod tokenizing;

/// The compiled form of user defined words.
pub mod code;

/// Module for running a list of tokens against an environment.  Top level code is executed as it
/// is read while colon definitions are compiled into new words, so the two phases are interleaved
/// in a single pass.
pub mod compilation;
