/// The Cell enumeration and the procedures it can hold.  Cells are what the interpreter pushes,
/// pops, and binds names to.
pub mod cell;

/// The data stack of cells.
pub mod cell_stack;

/// The word dictionary used by the interpreter.
pub mod dictionary;
