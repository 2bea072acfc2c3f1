use crate::{
    lang::source_buffer::SourceLocation,
    runtime::{
        data_structures::{
            cell::{Cell, Procedure},
            cell_stack::CellStack,
            dictionary::Dictionary,
        },
        error,
    },
};
use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
};

/// The environment that statements are executed against.
pub mod environment;

pub use environment::Environment;

/// A call stack item is a record of an executing word's name and the location within the source
/// code it was invoked from.  These items are read-only and the fields are accessed by member
/// functions.
#[derive(Clone, Debug)]
pub struct CallItem {
    location: SourceLocation,
    word: String,
}

impl CallItem {
    pub fn new(word: String, location: SourceLocation) -> CallItem {
        CallItem { location, word }
    }

    /// Where the word was invoked from.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// The name of the word being executed.
    pub fn word(&self) -> &str {
        &self.word
    }
}

impl Display for CallItem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.word)
    }
}

/// The stack of words currently being executed, innermost last.  Snapshots of it are attached to
/// errors.
pub type CallStack = Vec<CallItem>;

/// The signature of a native word.  Can be a closure or a plain Rust function.
pub type WordHandler = dyn Fn(&mut Environment) -> error::Result<()>;

/// Trait for managing the data stack.  Intended to be called by native words.
pub trait InterpreterStack {
    /// Examine the full data stack, for example to print it.
    fn stack(&self) -> &CellStack;

    /// Push a cell onto the stack.  Never fails.
    fn push(&mut self, cell: Cell);

    /// Pop the top cell.  If the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<Cell>;

    /// Look at the top cell without removing it.  Fails the same way as pop.
    fn peek(&self) -> error::Result<&Cell>;

    /// Unwrap an integer out of a cell that was already popped.  Any other kind of cell is a type
    /// mismatch.
    fn expect_int(&self, cell: Cell) -> error::Result<i32>;
}

/// Trait for managing and executing the words known to the interpreter.
pub trait WordManagement {
    /// The location of the token or compiled step most recently executed, if any.
    fn current_location(&self) -> &Option<SourceLocation>;

    /// Bind a name in the dictionary, shadowing any earlier binding.
    fn add_word(&mut self, name: String, cell: Cell);

    /// Register a native word.  Use the `add_native_word!` macro so that the word records where
    /// in the Rust sources it was registered from.
    fn add_native_word(&mut self, location: SourceLocation, name: &str, handler: Rc<WordHandler>);

    /// Find a word in the dictionary by name.
    fn find_word(&self, name: &str) -> Option<&Cell>;

    /// The dictionary of words known to the interpreter.
    fn dictionary(&self) -> &Dictionary;

    /// Invoke a procedure.  The location is where the invocation was found, either a top level
    /// token or a step inside a compiled word.  A compiled word runs its steps in order and stops
    /// at the first failure.
    fn execute_procedure(
        &mut self,
        location: &SourceLocation,
        procedure: &Procedure,
    ) -> error::Result<()>;

    /// Find and invoke a word by name.
    fn execute_word_named(&mut self, location: &SourceLocation, name: &str) -> error::Result<()>;

    /// The current word call stack.
    fn call_stack(&self) -> &CallStack;
}

/// Trait for feeding source code through the compiler/executor.
pub trait CodeManagement {
    /// Tokenize and run source text.  The path is used to tag locations in errors, the read loop
    /// uses "\<repl\>".
    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()>;

    /// Read, tokenize, and run a whole source file.
    fn process_source_file(&mut self, path: &str) -> error::Result<()>;
}

/// Simplify registering a native word with the environment.
///
/// Required parameters are the environment to register with, the name of the word, and the
/// handler function to execute for the word.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr
    ) => {{
        use std::rc::Rc;
        use $crate::runtime::interpreter::WordManagement;

        // Record where in the Rust sources the word was registered from.
        $interpreter.add_native_word($crate::location_here!(), $name, Rc::new($function));
    }};
}
