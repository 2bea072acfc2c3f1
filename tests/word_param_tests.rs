// Parameterized language tests using test-case.  Each case runs a statement against a fresh
// environment and checks the resulting data stack, bottom first.

use miniforth::runtime::data_structures::cell::Cell;
use miniforth::runtime::error::{ErrorKind, Result};
use miniforth::runtime::interpreter::{Environment, InterpreterStack, WordManagement};
use miniforth::execute;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn eval_and_stack(code: &str, init_stack: &[i32]) -> Result<Vec<i32>> {
    let mut environment = Environment::new();

    for &value in init_stack {
        environment.push(Cell::Int(value));
    }

    execute(&mut environment, code)?;

    let stack = environment
        .stack()
        .iter()
        .map(|cell| cell.as_int().expect("only integers expected on the stack"))
        .collect();

    Ok(stack)
}

fn eval_error(code: &str) -> ErrorKind {
    let mut environment = Environment::new();

    execute(&mut environment, code)
        .expect_err("statement was expected to fail")
        .kind()
        .clone()
}

#[test_case("", &[], &[]; "empty input")]
#[test_case("42", &[], &[42]; "number")]
#[test_case("100 200 +", &[], &[300]; "simple add")]
#[test_case("+", &[2, 2], &[4]; "add from initial stack")]
#[test_case("5 2 -", &[], &[3]; "subtract is left minus right")]
#[test_case("2 5 -", &[], &[-3]; "subtract to negative")]
#[test_case("1 2 3 + +", &[], &[6]; "chained add")]
#[test_case("1 2 3", &[], &[1, 2, 3]; "literals keep their order")]
#[test_case("2147483647 1 +", &[], &[i32::MIN]; "add wraps")]
#[test_case("0 2147483647 - 2 -", &[], &[i32::MAX]; "subtract wraps")]
#[test_case("1 .s 2", &[], &[1, 2]; "print stack leaves it alone")]
#[test_case(": f 42 ; f", &[], &[42]; "trivial word")]
#[test_case(": f ;", &[], &[]; "empty word is only defined")]
#[test_case(": f ; f", &[7], &[7]; "empty word does nothing")]
#[test_case(": 2+ 2 + ; 10 2+", &[], &[12]; "add two")]
#[test_case(": a 1 ; : a 2 ; a", &[], &[2]; "redefinition shadows")]
#[test_case(": a : b 1 ; b b + ; a", &[], &[2]; "nested definition")]
#[test_case(": a : b 1 ; b b + ; b", &[], &[1]; "nested word is usable on its own")]
#[test_case(": x 1 ; : y x ; : x 2 ; y", &[], &[1]; "early binding")]
#[test_case(": x 1 ; : y x ; : x 2 ; y x", &[], &[1, 2]; "old and new definitions coexist")]
#[test_case(": sub - ; 10 3 sub", &[], &[7]; "word wrapping subtract")]
#[test_case(": a : b : c 3 ; c ; b ; a", &[], &[3]; "three levels of nesting")]
#[test_case(": double : twice ; 2 ; double", &[], &[2]; "nested definition is not part of the outer body")]
#[test_case("1\n: inc\n  1 +\n;\ninc", &[], &[2]; "definitions span lines")]
fn stack_after(code: &str, init_stack: &[i32], expected: &[i32]) {
    let result = eval_and_stack(code, init_stack).unwrap();
    assert_eq!(result, expected.to_vec());
}

#[test_case("+", ErrorKind::StackUnderflow; "add on empty stack")]
#[test_case("1 -", ErrorKind::StackUnderflow; "subtract with one operand")]
#[test_case("foo", ErrorKind::UndefinedWord("foo".to_string()); "undefined word")]
#[test_case("2 3 *", ErrorKind::UndefinedWord("*".to_string()); "star is not a word")]
#[test_case(";", ErrorKind::UndefinedWord(";".to_string()); "semicolon at top level")]
#[test_case(": f nope ;", ErrorKind::UndefinedWord("nope".to_string()); "undefined word while compiling")]
#[test_case(": a 1 2 +", ErrorKind::UnterminatedDefinition("a".to_string()); "missing semicolon")]
#[test_case(":", ErrorKind::UnterminatedDefinition("<unnamed>".to_string()); "colon without a name")]
#[test_case(": a : b 1 ;", ErrorKind::UnterminatedDefinition("a".to_string()); "outer definition left open")]
#[test_case("2147483648", ErrorKind::InvalidInteger("2147483648".to_string()); "literal too wide")]
#[test_case(": f 99999999999 ;", ErrorKind::InvalidInteger("99999999999".to_string()); "literal too wide while compiling")]
fn fails_with(code: &str, expected: ErrorKind) {
    assert_eq!(eval_error(code), expected);
}

#[test_case("+", true; "add with procedure on top")]
#[test_case("+", false; "add with procedure underneath")]
#[test_case("-", true; "subtract with procedure on top")]
#[test_case("-", false; "subtract with procedure underneath")]
fn procedure_operand_is_a_type_mismatch(word: &str, procedure_on_top: bool) {
    let mut environment = Environment::new();

    let Some(Cell::Procedure(procedure)) = environment.find_word(word).cloned() else {
        panic!("{} should be a builtin", word);
    };

    if procedure_on_top {
        environment.push(Cell::Int(1));
        environment.push(procedure.into());
    } else {
        environment.push(procedure.into());
        environment.push(Cell::Int(1));
    }

    let error = execute(&mut environment, word).expect_err("statement was expected to fail");

    assert_eq!(
        error.kind(),
        &ErrorKind::TypeMismatch {
            expected: "integer",
            found: format!("procedure <{}>", word),
        }
    );
    assert!(environment.stack().is_empty());
}
