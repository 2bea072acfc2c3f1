use crate::{
    add_native_word,
    runtime::{
        data_structures::cell::Cell,
        error,
        interpreter::{Environment, InterpreterStack},
    },
};

/// Pop the two operands of a binary operator.  The top of the stack is the right hand operand.
/// Both cells are removed before either is checked to be an integer.
fn pop_operands(environment: &mut Environment) -> error::Result<(i32, i32)> {
    let right = environment.pop()?;
    let left = environment.pop()?;

    Ok((environment.expect_int(left)?, environment.expect_int(right)?))
}

/// Add the top two integers, wrapping on overflow.
///
/// Signature: `a b -- a+b`
fn word_add(environment: &mut Environment) -> error::Result<()> {
    let (left, right) = pop_operands(environment)?;

    environment.push(Cell::Int(left.wrapping_add(right)));
    Ok(())
}

/// Subtract the top integer from the one below it, wrapping on overflow.
///
/// Signature: `a b -- a-b`
fn word_subtract(environment: &mut Environment) -> error::Result<()> {
    let (left, right) = pop_operands(environment)?;

    environment.push(Cell::Int(left.wrapping_sub(right)));
    Ok(())
}

pub fn register_simple_arithmetic_words(environment: &mut Environment) {
    add_native_word!(environment, "+", word_add);
    add_native_word!(environment, "-", word_subtract);
}
