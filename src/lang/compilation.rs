use crate::{
    lang::{
        code::{CodeBlock, Instruction},
        source_buffer::SourceLocation,
        tokenizing::{Token, TokenList},
    },
    runtime::{
        data_structures::cell::{Cell, Procedure},
        error::{self, script_error, ErrorKind},
        interpreter::{CodeManagement, Environment, WordManagement},
    },
};
use tracing::{debug, trace};

/// A word definition that is still being compiled.  One of these is open for every `:` that hasn't
/// seen its `;` yet.
pub struct CodeConstructor {
    /// The name the word will be bound to.
    name: String,

    /// Where the name appeared in the source.
    location: SourceLocation,

    /// The steps accumulated so far.
    code: CodeBlock,
}

/// The open definitions, innermost last.  When this is empty the compiler is at the top level and
/// executes what it reads, otherwise it compiles into the innermost definition.
pub type CodeConstructorList = Vec<CodeConstructor>;

impl CodeConstructor {
    pub fn new(name: String, location: SourceLocation) -> CodeConstructor {
        CodeConstructor {
            name,
            location,
            code: CodeBlock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push_instruction(&mut self, instruction: Instruction) {
        self.code.push(instruction);
    }

    /// Finish the definition, turning it into an immutable word.
    pub fn into_procedure(self) -> Procedure {
        Procedure::composite(self.name, self.location, self.code)
    }
}

/// Does the text look like a decimal integer?  An optional sign followed by at least one digit.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// Turn a token into the procedure it stands for.  Numbers become a push of that number, anything
/// else has to be a procedure in the dictionary.
///
/// A numeric token that doesn't fit in 32 bits is an error, it is not wrapped and it is not looked
/// up as a word.
fn resolve_token(environment: &mut Environment, token: &Token) -> error::Result<Procedure> {
    let text = token.text();

    environment.set_current_location(token.location());

    if is_integer_literal(text) {
        return match text.parse::<i32>() {
            Ok(value) => Ok(Procedure::push_literal(value, token.location().clone())),
            Err(_) => script_error(environment, ErrorKind::InvalidInteger(text.to_string())),
        };
    }

    match environment.find_word(text) {
        Some(Cell::Procedure(procedure)) => Ok(procedure.clone()),
        Some(Cell::Int(_)) => script_error(environment, ErrorKind::NotInvocable(text.to_string())),
        None => script_error(environment, ErrorKind::UndefinedWord(text.to_string())),
    }
}

/// Run a token list against the environment in a single pass.
///
/// At the top level every token is executed as soon as it is resolved.  A `:` takes the next token
/// as the name of a new word and switches to compiling, from then on resolved tokens are appended
/// to the definition instead.  A `;` binds the innermost open definition in the dictionary and
/// resumes whatever was going on before its `:`.
///
/// Definitions nest.  An inner definition is bound as soon as its own `;` is reached and does not
/// become part of the outer word.
///
/// If the tokens run out while a definition is still open the statement fails, the open definition
/// is dropped, and everything that was already executed or bound stays as it is.
pub fn process_source_from_tokens(
    environment: &mut Environment,
    tokens: TokenList,
) -> error::Result<()> {
    let mut constructors = CodeConstructorList::new();
    let mut tokens = tokens.into_iter();

    while let Some(token) = tokens.next() {
        trace!(token = token.text(), compiling = !constructors.is_empty(), "token");

        match token.text() {
            ":" => {
                let Some(name) = tokens.next() else {
                    environment.set_current_location(token.location());
                    return script_error(
                        environment,
                        ErrorKind::UnterminatedDefinition("<unnamed>".to_string()),
                    );
                };

                constructors.push(CodeConstructor::new(
                    name.text().to_string(),
                    name.location().clone(),
                ));
            }

            ";" if !constructors.is_empty() => {
                if let Some(constructor) = constructors.pop() {
                    let name = constructor.name().to_string();
                    let procedure = constructor.into_procedure();

                    debug!(word = %name, "defined {:?}", procedure);
                    environment.add_word(name, procedure.into());
                }
            }

            _ => {
                let procedure = resolve_token(environment, &token)?;

                match constructors.last_mut() {
                    Some(constructor) => {
                        constructor.push_instruction(Instruction::new(
                            token.location().clone(),
                            procedure,
                        ));
                    }

                    None => environment.execute_procedure(token.location(), &procedure)?,
                }
            }
        }
    }

    if let Some(constructor) = constructors.last() {
        environment.set_current_location(&constructor.location);
        return script_error(
            environment,
            ErrorKind::UnterminatedDefinition(constructor.name().to_string()),
        );
    }

    Ok(())
}

/// The entry point used by the read loop: run one line of text against a persistent environment.
pub fn execute(environment: &mut Environment, source: &str) -> error::Result<()> {
    environment.process_source("<repl>", source)
}
