use std::rc::Rc;
use tracing::trace;
use crate::{ lang::{ compilation::process_source_from_tokens,
                     source_buffer::SourceLocation,
                     tokenizing::{ tokenize_from_file,
                                   tokenize_from_source } },
             runtime::{ built_ins::base_words::register_base_words,
                        data_structures::{ cell::{ BuiltinWord,
                                                   Cell,
                                                   CompositeWord,
                                                   Procedure },
                                           cell_stack::CellStack,
                                           dictionary::Dictionary },
                        error::{ self,
                                 script_error,
                                 ErrorKind },
                        interpreter::{ CallItem,
                                       CallStack,
                                       CodeManagement,
                                       InterpreterStack,
                                       WordHandler,
                                       WordManagement } } };



/// All of the state a session runs against.  The data stack and the dictionary persist from one
/// statement to the next, a failing statement leaves behind whatever it did before it failed.
pub struct Environment
{
    /// The data stack.
    stack: CellStack,

    /// Every word known to the session, built-in and user defined.
    dictionary: Dictionary,

    /// The last known location execution has reached in the source code.
    current_location: Option<SourceLocation>,

    /// The words currently executing, used to give errors some context.
    call_stack: CallStack
}


impl InterpreterStack for Environment
{
    fn stack(&self) -> &CellStack
    {
        &self.stack
    }

    fn push(&mut self, cell: Cell)
    {
        self.stack.push(cell);
    }

    fn pop(&mut self) -> error::Result<Cell>
    {
        match self.stack.pop()
        {
            Ok(cell) => Ok(cell),
            Err(error) => Err(error.with_context(&self.current_location, &self.call_stack))
        }
    }

    fn peek(&self) -> error::Result<&Cell>
    {
        match self.stack.peek()
        {
            Ok(cell) => Ok(cell),
            Err(error) => Err(error.with_context(&self.current_location, &self.call_stack))
        }
    }

    fn expect_int(&self, cell: Cell) -> error::Result<i32>
    {
        match cell
        {
            Cell::Int(value) => Ok(value),
            other => script_error(self,
                                  ErrorKind::TypeMismatch
                                      {
                                          expected: "integer",
                                          found: format!("{} {}", other.type_name(), other)
                                      })
        }
    }
}


impl WordManagement for Environment
{
    fn current_location(&self) -> &Option<SourceLocation>
    {
        &self.current_location
    }

    fn add_word(&mut self, name: String, cell: Cell)
    {
        self.dictionary.add(name, cell);
    }

    fn add_native_word(&mut self, location: SourceLocation, name: &str, handler: Rc<WordHandler>)
    {
        let word = BuiltinWord::new(name.to_string(), location, handler);

        self.dictionary.add(name.to_string(), Procedure::Builtin(Rc::new(word)).into());
    }

    fn find_word(&self, name: &str) -> Option<&Cell>
    {
        self.dictionary.get(name)
    }

    fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    fn execute_procedure(&mut self,
                         location: &SourceLocation,
                         procedure: &Procedure) -> error::Result<()>
    {
        // Compiled words run from an explicit frame stack, so arbitrarily deep chains of words
        // don't grow the native stack.  Every open frame has a matching call stack item.
        let base_depth = self.call_stack.len();
        let mut frames = FrameStack::new();

        let result = self.enter_procedure(location, procedure, &mut frames)
                         .and_then(|()| self.run_frames(&mut frames));

        self.call_stack.truncate(base_depth);

        result
    }

    fn execute_word_named(&mut self, location: &SourceLocation, name: &str) -> error::Result<()>
    {
        self.current_location = Some(location.clone());

        let procedure = match self.dictionary.get(name)
            {
                Some(Cell::Procedure(procedure)) => procedure.clone(),
                Some(_) => return script_error(self, ErrorKind::NotInvocable(name.to_string())),
                None => return script_error(self, ErrorKind::UndefinedWord(name.to_string()))
            };

        self.execute_procedure(location, &procedure)
    }

    fn call_stack(&self) -> &CallStack
    {
        &self.call_stack
    }
}


impl CodeManagement for Environment
{
    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()>
    {
        let tokens = tokenize_from_source(path, source);
        process_source_from_tokens(self, tokens)
    }

    fn process_source_file(&mut self, path: &str) -> error::Result<()>
    {
        let tokens = tokenize_from_file(path)?;
        process_source_from_tokens(self, tokens)
    }
}


/// A compiled word part way through its body.
struct Frame
{
    word: Rc<CompositeWord>,
    next: usize
}


type FrameStack = Vec<Frame>;


impl Environment
{
    /// Start executing a procedure.  Native words run to completion right away, compiled words get
    /// a new frame that run_frames steps through.
    fn enter_procedure(&mut self,
                       location: &SourceLocation,
                       procedure: &Procedure,
                       frames: &mut FrameStack) -> error::Result<()>
    {
        trace!(word = procedure.name(), %location, "invoke");

        self.current_location = Some(location.clone());
        self.call_stack.push(CallItem::new(procedure.name().to_string(), location.clone()));

        match procedure
        {
            Procedure::Builtin(word) =>
                {
                    (*word.handler())(self)?;
                    let _ = self.call_stack.pop();
                }

            Procedure::Composite(word) => frames.push(Frame { word: word.clone(), next: 0 })
        }

        Ok(())
    }

    /// Step through the open frames until every one of them has finished, stopping at the first
    /// failure.
    fn run_frames(&mut self, frames: &mut FrameStack) -> error::Result<()>
    {
        while let Some(frame) = frames.last_mut()
        {
            let word = frame.word.clone();
            let index = frame.next;

            frame.next += 1;

            match word.body().get(index)
            {
                Some(step) => self.enter_procedure(step.location(), step.procedure(), frames)?,

                None =>
                    {
                        let _ = frames.pop();
                        let _ = self.call_stack.pop();
                    }
            }
        }

        Ok(())
    }

    /// Create a new environment with an empty stack and the built-in words registered.
    pub fn new() -> Environment
    {
        let mut environment = Environment::empty();

        register_base_words(&mut environment);

        environment
    }

    /// An environment with nothing at all in its dictionary.
    pub fn empty() -> Environment
    {
        Environment
            {
                stack: CellStack::new(),
                dictionary: Dictionary::new(),
                current_location: None,
                call_stack: CallStack::with_capacity(40)
            }
    }

    /// Record the location of the token being processed, so that errors raised while handling it
    /// point back at it.
    pub fn set_current_location(&mut self, location: &SourceLocation)
    {
        self.current_location = Some(location.clone());
    }
}


impl Default for Environment
{
    fn default() -> Self
    {
        Self::new()
    }
}
