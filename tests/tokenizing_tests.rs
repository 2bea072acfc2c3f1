use miniforth::lang::tokenizing::tokenize_from_source;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn token_texts(code: &str) -> Vec<String> {
    tokenize_from_source("<test>", code)
        .iter()
        .map(|token| token.text().to_string())
        .collect()
}

#[test_case("", &[]; "empty input")]
#[test_case("   \t\n ", &[]; "only whitespace")]
#[test_case("100 200 +", &["100", "200", "+"]; "add")]
#[test_case("100   200 +", &["100", "200", "+"]; "extra spaces")]
#[test_case("1 2 -", &["1", "2", "-"]; "subtract")]
#[test_case("  foo bar hoge", &["foo", "bar", "hoge"]; "leading whitespace")]
#[test_case("1+2", &["1", "+", "2"]; "plus splits words")]
#[test_case("a-b", &["a", "-", "b"]; "minus splits words")]
#[test_case("++", &["+", "+"]; "each plus is a token")]
#[test_case(": 2+ 2 + ;", &[":", "2", "+", "2", "+", ";"]; "definition")]
#[test_case(".s", &[".s"]; "dot is a word character")]
#[test_case("a:b;c", &["a:b;c"]; "colon and semicolon glue")]
#[test_case("2 3 *", &["2", "3", "*"]; "other symbols stand alone")]
#[test_case("x\r\ny", &["x", "y"]; "crlf separates")]
fn tokens_of(code: &str, expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|text| text.to_string()).collect();
    assert_eq!(token_texts(code), expected);
}

#[test]
fn tokens_record_their_location() {
    let tokens = tokenize_from_source("<test>", "1 2\n  +");

    assert_eq!(tokens.len(), 3);
    assert!(tokens[2] == "+");
    assert_eq!(tokens[2].location().line(), 2);
    assert_eq!(tokens[2].location().column(), 3);
    assert_eq!(tokens[2].location().path(), "<test>");
}

#[test]
fn tokenizing_is_restartable() {
    let first = tokenize_from_source("<test>", ": sq 1 + ;");
    let second = tokenize_from_source("<test>", ": sq 1 + ;");

    assert_eq!(first, second);
}
