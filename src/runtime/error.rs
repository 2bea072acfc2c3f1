use std::fmt::{ self, Debug, Display, Formatter };
use thiserror::Error;
use crate::{ runtime::interpreter::{ CallStack, Environment, WordManagement },
             lang::source_buffer::SourceLocation };



pub type Result<T> = std::result::Result<T, ScriptError>;



/// The kinds of failure a statement can run into.  None of them are fatal to the session, they
/// abort the current statement and are handed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind
{
    /// Popped or peeked at an empty data stack.
    #[error("Stack underflow.")]
    StackUnderflow,

    /// An operand was present but of the wrong kind of cell.
    #[error("Expected {expected} value, found {found}.")]
    TypeMismatch { expected: &'static str, found: String },

    /// The name is not bound in the dictionary.
    #[error("Word {0} not found.")]
    UndefinedWord(String),

    /// The name is bound, but not to a procedure.
    #[error("Word {0} is not invocable.")]
    NotInvocable(String),

    /// The source ended while the named definition was still open.
    #[error("Definition of word {0} is missing a closing ;.")]
    UnterminatedDefinition(String),

    /// The literal looked like a number but doesn't fit in a 32-bit integer.
    #[error("Integer literal {0} is out of range.")]
    InvalidInteger(String),

    /// Reading a source file or the console failed.
    #[error("I/O error: {0}")]
    Io(String)
}



/// Any error that occurs during the execution of a script.
#[derive(Clone)]
pub struct ScriptError
{
    /// The location in the source code the error occurred, if available.
    location: Option<SourceLocation>,

    /// What went wrong.
    kind: ErrorKind,

    /// The word call stack at the time of the error, if available.
    call_stack: Option<CallStack>
}


impl std::error::Error for ScriptError
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        Some(&self.kind)
    }
}


/// Pretty print the error for the user, including the call stack when the failure happened
/// within a user defined word.
impl Display for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match &self.location
        {
            Some(location) => write!(f, "{}: {}", location, self.kind)?,
            None => write!(f, "{}", self.kind)?
        }

        if let Some(call_stack) = &self.call_stack
        {
            if !call_stack.is_empty()
            {
                write!(f, "\n\nCall stack\n")?;

                for item in call_stack.iter().rev()
                {
                    writeln!(f, "  {}", item)?;
                }
            }
        }

        Ok(())
    }
}


/// Debug output is the same as the user facing output so that errors returned from main read
/// well.
impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl ScriptError
{
    pub fn new(location: Option<SourceLocation>,
               kind: ErrorKind,
               call_stack: Option<CallStack>) -> ScriptError
    {
        ScriptError
            {
                location,
                kind,
                call_stack
            }
    }

    /// Create a new ScriptError and wrap it in a Result::Err.
    pub fn new_as_result<T>(location: Option<SourceLocation>,
                            kind: ErrorKind,
                            call_stack: Option<CallStack>) -> Result<T>
    {
        Err(ScriptError::new(location, kind, call_stack))
    }

    /// If available, the location in the source code the error occurred.
    pub fn location(&self) -> &Option<SourceLocation>
    {
        &self.location
    }

    pub fn kind(&self) -> &ErrorKind
    {
        &self.kind
    }

    /// If available, the word call stack at the time of the error.
    pub fn call_stack(&self) -> &Option<CallStack>
    {
        &self.call_stack
    }

    /// Fill in the location and call stack if the error was raised somewhere that didn't know
    /// them, such as the data stack itself.
    pub fn with_context(mut self, location: &Option<SourceLocation>, call_stack: &CallStack) -> Self
    {
        if self.location.is_none()
        {
            self.location = location.clone();
        }

        if self.call_stack.is_none()
        {
            self.call_stack = Some(call_stack.clone());
        }

        self
    }
}


impl From<ErrorKind> for ScriptError
{
    fn from(kind: ErrorKind) -> ScriptError
    {
        ScriptError::new(None, kind, None)
    }
}


impl From<std::io::Error> for ScriptError
{
    fn from(error: std::io::Error) -> ScriptError
    {
        ScriptError::new(None, ErrorKind::Io(error.to_string()), None)
    }
}



/// Create an error stamped with the environment's current location and call stack, wrapped in a
/// Result::Err.
pub fn script_error<T>(environment: &Environment, kind: ErrorKind) -> Result<T>
{
    let location = environment.current_location().clone();
    let call_stack = environment.call_stack().clone();

    ScriptError::new_as_result(location, kind, Some(call_stack))
}
