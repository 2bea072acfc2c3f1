use crate::{
    add_native_word,
    runtime::{
        error,
        interpreter::{Environment, InterpreterStack},
    },
};

/// Print the whole data stack, bottom first, without changing it.
///
/// Signature: ` -- `
fn word_print_stack(environment: &mut Environment) -> error::Result<()> {
    println!("{}", environment.stack());
    Ok(())
}

pub fn register_stack_words(environment: &mut Environment) {
    add_native_word!(environment, ".s", word_print_stack);
}
