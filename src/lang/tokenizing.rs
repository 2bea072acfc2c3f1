use crate::{
    lang::source_buffer::{SourceBuffer, SourceLocation},
    runtime::error::{self, ErrorKind, ScriptError},
};
use std::{
    fmt::{self, Debug, Display, Formatter},
    fs::read_to_string,
};

/// A token is the literal text of one unit of source code.  It is not classified in any way, the
/// compiler decides later whether it is a number, a word, or part of a definition.
///
/// The token also holds the location in the original source code where it was found.  Only the
/// text takes part in comparisons.
#[derive(Clone)]
pub struct Token {
    location: SourceLocation,
    text: String,
}

/// A list of tokens found in the source code.
pub type TokenList = Vec<Token>;

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Token {}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Include the location for debugging purposes.
impl Debug for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.text)
    }
}

impl Token {
    pub fn new(location: SourceLocation, text: String) -> Token {
        Token { location, text }
    }

    /// Get the token's location in the original source text.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Characters that glue together into a single multi-character token.
fn is_word_char(next: char) -> bool {
    next.is_alphanumeric() || next == '.' || next == ':' || next == ';'
}

/// Tokenize the source code from a string.  The path is only used to tag the token locations.
///
/// Runs of word characters, letters, digits, `.`, `:` and `;`, form a single token.  Every other
/// visible character, `+` and `-` included, is a token of its own even when it touches a word, so
/// `2+` is the two tokens `2` and `+`.  Whitespace only separates.
pub fn tokenize_from_source(path: &str, source: &str) -> TokenList {
    let mut buffer = SourceBuffer::new(path, source);
    let mut token_list = TokenList::new();

    while let Some(next) = buffer.peek_next() {
        if next.is_whitespace() {
            let _ = buffer.next_char();
            continue;
        }

        let location = buffer.location().clone();

        let text = if is_word_char(next) {
            buffer.next_while(is_word_char)
        } else {
            let _ = buffer.next_char();
            next.to_string()
        };

        token_list.push(Token::new(location, text));
    }

    token_list
}

/// Load the code from a file and then tokenize it.
pub fn tokenize_from_file(path: &str) -> error::Result<TokenList> {
    match read_to_string(path) {
        Ok(source) => Ok(tokenize_from_source(path, &source)),
        Err(error) => ScriptError::new_as_result(
            None,
            ErrorKind::Io(format!("Could not read file {}: {}", path, error)),
            None,
        ),
    }
}
