use std::{
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};
use crate::{
    lang::{code::CodeBlock, source_buffer::SourceLocation},
    runtime::{
        error,
        interpreter::{Environment, InterpreterStack, WordHandler},
    },
};

/// The value type of the interpreter.  Everything that lives on the data stack or is bound in the
/// dictionary is one of these.
#[derive(Clone)]
pub enum Cell {
    /// A 32-bit signed integer.  Arithmetic on these wraps on overflow.
    Int(i32),

    /// Something that can be executed.
    Procedure(Procedure),
}

/// An executable word.  The set of shapes is closed, a word is either implemented in Rust or built
/// out of other words.
///
/// Cloning a procedure only clones the reference, the word itself is shared.
#[derive(Clone)]
pub enum Procedure {
    Builtin(Rc<BuiltinWord>),
    Composite(Rc<CompositeWord>),
}

/// A word whose body is a native Rust handler.
pub struct BuiltinWord {
    name: String,
    location: SourceLocation,
    handler: Rc<WordHandler>,
}

/// A user defined word.  The body is resolved when the word is compiled and never changes
/// afterwards, redefining a word that the body refers to doesn't affect it.
pub struct CompositeWord {
    name: String,
    location: SourceLocation,
    body: CodeBlock,
}

impl BuiltinWord {
    pub fn new(name: String, location: SourceLocation, handler: Rc<WordHandler>) -> BuiltinWord {
        BuiltinWord {
            name,
            location,
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the word was registered, for native words this is a location in the Rust sources.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn handler(&self) -> Rc<WordHandler> {
        self.handler.clone()
    }
}

impl CompositeWord {
    pub fn new(name: String, location: SourceLocation, body: CodeBlock) -> CompositeWord {
        CompositeWord {
            name,
            location,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the word's name appeared in the script that defined it.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn body(&self) -> &CodeBlock {
        &self.body
    }
}

/// Releasing the last handle to a word can release the words its body refers to in turn.  Unwind
/// that chain with a work list instead of recursing, the chain can be as long as a session likes.
impl Drop for CompositeWord {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.body);

        while let Some(step) = pending.pop() {
            if let Procedure::Composite(word) = step.into_procedure() {
                if let Ok(mut word) = Rc::try_unwrap(word) {
                    pending.append(&mut word.body);
                }
            }
        }
    }
}

impl Procedure {
    /// Wrap a native handler as a procedure.
    pub fn builtin<F>(name: &str, location: SourceLocation, handler: F) -> Procedure
    where
        F: Fn(&mut Environment) -> error::Result<()> + 'static,
    {
        Procedure::Builtin(Rc::new(BuiltinWord::new(
            name.to_string(),
            location,
            Rc::new(handler),
        )))
    }

    /// A step that pushes a constant integer, used for the literals found in source code.
    pub fn push_literal(value: i32, location: SourceLocation) -> Procedure {
        Procedure::builtin(&value.to_string(), location, move |environment| {
            environment.push(value.into());
            Ok(())
        })
    }

    pub fn composite(name: String, location: SourceLocation, body: CodeBlock) -> Procedure {
        Procedure::Composite(Rc::new(CompositeWord::new(name, location, body)))
    }

    pub fn name(&self) -> &str {
        match self {
            Procedure::Builtin(word) => word.name(),
            Procedure::Composite(word) => word.name(),
        }
    }

    /// Do both handles refer to the very same word?
    pub fn ptr_eq(&self, other: &Procedure) -> bool {
        match (self, other) {
            (Procedure::Builtin(a), Procedure::Builtin(b)) => Rc::ptr_eq(a, b),
            (Procedure::Composite(a), Procedure::Composite(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Cell {
    /// Short name of the cell's variant, used in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Int(_) => "integer",
            Cell::Procedure(_) => "procedure",
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Cell::Int(value) => Some(*value),
            Cell::Procedure(_) => None,
        }
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Cell {
        Cell::Int(value)
    }
}

impl From<Procedure> for Cell {
    fn from(procedure: Procedure) -> Cell {
        Cell::Procedure(procedure)
    }
}

/// Integers compare by value, procedures by identity.
impl PartialEq for Cell {
    fn eq(&self, other: &Cell) -> bool {
        match (self, other) {
            (Cell::Int(a), Cell::Int(b)) => a == b,
            (Cell::Procedure(a), Cell::Procedure(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Display for Procedure {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }
}

impl Debug for Procedure {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Procedure::Builtin(word) => write!(f, "builtin {} at {}", word.name(), word.location()),
            Procedure::Composite(word) => {
                write!(f, "word {} at {} [", word.name(), word.location())?;

                for (index, step) in word.body().iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{}", step.procedure().name())?;
                }

                write!(f, "]")
            }
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Cell::Int(value) => write!(f, "{}", value),
            Cell::Procedure(procedure) => write!(f, "{}", procedure),
        }
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Cell::Int(value) => write!(f, "{}", value),
            Cell::Procedure(procedure) => write!(f, "{:?}", procedure),
        }
    }
}
