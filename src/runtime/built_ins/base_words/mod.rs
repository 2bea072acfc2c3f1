/// Integer arithmetic.
mod simple_arithmetic_words;

/// Words that inspect the data stack.
mod stack_words;

use crate::runtime::{
    built_ins::base_words::{
        simple_arithmetic_words::register_simple_arithmetic_words,
        stack_words::register_stack_words,
    },
    interpreter::Environment,
};

/// Called to register all of the core words of the language.
pub fn register_base_words(environment: &mut Environment) {
    register_simple_arithmetic_words(environment);
    register_stack_words(environment);
}
