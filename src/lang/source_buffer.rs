
use regex::Regex;
use std::fmt::{ self,
                Display,
                Formatter };



/// The location in the source code where a token was found.  Used by the parser to report where a
/// malformed program went wrong.
///
/// This is a read-only structure.  Use the field accessor methods to get the values.
#[derive(Clone, PartialEq, PartialOrd, Eq, Hash, Debug)]
pub struct SourceLocation
{
    /// Either the path to the file or a description of the source code.  For example code handed
    /// to the interpreter directly will have a tag of "\<input\>".
    path: String,

    /// The 1 based line number in the source code where the token was found.
    line: usize,

    /// The 1 based column number in the source code where the token was found.
    column: usize
}


impl Default for SourceLocation
{
    fn default() -> Self
    {
        Self::new()
    }
}


/// Used for error reporting to show where in the source code an error originated.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), fmt::Error>
    {
        write!(formatter, "{} ({}, {})", self.path, self.line, self.column)
    }
}


impl SourceLocation
{
    /// Crate a new SourceLocation with default values.
    pub fn new() -> SourceLocation
    {
        SourceLocation { path: "unspecified".to_string(), line: 1, column: 1 }
    }

    /// Create a new SourceLocation with the path to the source code.
    pub fn new_from_path(path: &str) -> Self
    {
        SourceLocation { path: path.to_owned(), line: 1, column: 1 }
    }

    /// Create a new SourceLocation with all of the needed information.
    pub fn new_from_info(path: &str, line: usize, column: usize) -> Self
    {
        SourceLocation { path: path.to_owned(), line, column }
    }

    /// The path to the source code or a meaningful description of the source code.
    pub fn path(&self) -> &String
    {
        &self.path
    }

    /// The 1 based line number in the source code.
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// The 1 based column number in the source code.
    pub fn column(&self) -> usize
    {
        self.column
    }
}



/// A buffer for processing source code.  The tokenizer pulls pieces off the front of the buffer
/// by matching patterns against the unread text, much like a string scanner.  As text is consumed
/// the location of the cursor in that source is maintained.
///
/// The SourceBuffer only holds a reference to the source code, the code is not copied.
pub struct SourceBuffer<'a>
{
    /// The text that has not been consumed yet.
    rest: &'a str,

    /// The logical location of the cursor in the source code.
    location: SourceLocation
}


impl<'a> SourceBuffer<'a>
{
    /// Create a new SourceBuffer with the path to, or meaningful tag for the source code and the
    /// source code itself.
    pub fn new(path: &str, source: &'a str) -> Self
    {
        SourceBuffer { rest: source, location: SourceLocation::new_from_path(path) }
    }

    /// The location the cursor is at in the source code being processed.
    pub fn location(&self) -> &SourceLocation
    {
        &self.location
    }

    /// Consume and return the text matched by the pattern at the cursor.  The pattern must be
    /// anchored with `^`, a match anywhere else is treated as no match.  Nothing is consumed when
    /// the pattern doesn't match or matches only the empty string.
    pub fn scan(&mut self, pattern: &Regex) -> Option<&'a str>
    {
        let found = pattern.find(self.rest)?;

        if found.start() != 0 || found.end() == 0
        {
            return None;
        }

        let ( matched, rest ) = self.rest.split_at(found.end());

        for next in matched.chars()
        {
            self.increment_location(next);
        }

        self.rest = rest;
        Some(matched)
    }

    /// Consume the pattern if it matches, reporting whether anything was skipped.
    pub fn skip(&mut self, pattern: &Regex) -> bool
    {
        self.scan(pattern).is_some()
    }

    /// Advance one column for regular characters.  Reset the column to 1 and increment the line
    /// for new line characters.
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
