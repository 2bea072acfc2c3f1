use core::str::Chars;
use std::fmt::{ self,
                Display,
                Formatter };



/// Where in a piece of source text something was found.  Tokens, user defined words, and errors
/// all carry one of these so that problems can be reported back to the user in terms of the text
/// they typed.
///
/// This is a read-only structure.  Use the field accessor methods to get the values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation
{
    /// Either the path to the file or a tag describing the source.  Lines typed into the read
    /// loop use the tag "\<repl\>".
    path: String,

    /// 1 based line number.
    line: usize,

    /// 1 based column number.
    column: usize
}


/// Rendered as `path (line, column)` in error messages and call stacks.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result
    {
        write!(formatter, "{} ({}, {})", self.path, self.line, self.column)
    }
}


impl SourceLocation
{
    /// Start of the given source.
    pub fn new_from_path(path: &str) -> Self
    {
        SourceLocation { path: path.to_owned(), line: 1, column: 1 }
    }

    /// Create a location with all of the needed information.  Used by the `location_here!` macro.
    pub fn new_from_info(path: &str, line: usize, column: usize) -> Self
    {
        SourceLocation { path: path.to_owned(), line, column }
    }

    pub fn path(&self) -> &str
    {
        &self.path
    }

    pub fn line(&self) -> usize
    {
        self.line
    }

    pub fn column(&self) -> usize
    {
        self.column
    }
}



/// The location of the macro invocation within the Rust sources.  Native words record this as
/// their definition site.
#[macro_export]
macro_rules! location_here
{
    () =>
    {
        $crate::lang::source_buffer::SourceLocation::new_from_info(file!(),
                                                                  line!() as usize,
                                                                  column!() as usize)
    };
}



/// A forward only cursor over source text used by the tokenizer.  As characters are consumed the
/// location of the cursor is kept up to date, so every token can be stamped with where it started.
///
/// The buffer borrows the text, it is never copied.
pub struct SourceBuffer<'a>
{
    chars: Chars<'a>,

    /// Location of the next character to be consumed.
    location: SourceLocation,

    /// One character of look ahead, filled by `peek_next`.
    current: Option<char>
}


impl<'a> SourceBuffer<'a>
{
    pub fn new(path: &str, source: &'a str) -> Self
    {
        SourceBuffer
            {
                chars: source.chars(),
                location: SourceLocation::new_from_path(path),
                current: None
            }
    }

    /// The location of the next character to be consumed.
    pub fn location(&self) -> &SourceLocation
    {
        &self.location
    }

    /// Take a peek at the next character without consuming it.
    pub fn peek_next(&mut self) -> Option<char>
    {
        if self.current.is_none()
        {
            self.current = self.chars.next();
        }

        self.current
    }

    /// Get and consume the next character.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = match self.current.take()
            {
                Some(current) => Some(current),
                None => self.chars.next()
            };

        if let Some(next_char) = next
        {
            self.increment_location(next_char);
        }

        next
    }

    /// Consume characters for as long as the predicate accepts them, returning the consumed text.
    pub fn next_while<F>(&mut self, predicate: F) -> String
        where F: Fn(char) -> bool
    {
        let mut text = String::new();

        while let Some(next) = self.peek_next()
        {
            if !predicate(next)
            {
                break;
            }

            text.push(next);
            let _ = self.next_char();
        }

        text
    }

    /// Advance one column for regular characters.  A new line moves to column 1 of the next line.
    fn increment_location(&mut self, next: char)
    {
        if next == '\n'
        {
            self.location.line += 1;
            self.location.column = 1;
        }
        else
        {
            self.location.column += 1;
        }
    }
}
