
use std::{ error::Error,
           process::Termination,
           fmt::{ self, Debug, Display, Formatter }, process::ExitCode };
use crate::lang::source_buffer::SourceLocation;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// The family an error belongs to.  Tests and embedders match on this rather than on the message
/// text.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind
{
    /// A `]` with no open quotation to close.
    UnexpectedCloseBracket,

    /// The source ended while a quotation or definition was still open.
    UnexpectedEof,

    /// A `;` with no open definition to close.
    UnexpectedSemicolon,

    /// A definition whose first token is not a plain word.
    InvalidDefinitionName,

    /// A word that is neither built in nor in the dictionary.
    Undefined(String),

    /// Popped from an empty stack.
    StackUnderflow,

    /// Took the head or tail of the empty list.
    EmptyList,

    /// An operand of the wrong type for the word.
    TypeMismatch,

    /// Division by zero, integer overflow and friends.
    Numeric,

    /// Text that could not be converted by `to_i` or `to_f`.
    Conversion,

    /// Something that has no source syntax was handed to the unparser.
    CannotUnparse,

    /// Reading or writing a definition file failed.
    Io
}


/// Any error that occurs while parsing or running a bee program.
#[derive(Clone)]
pub struct ScriptError
{
    /// The location in the source code the error occurred, if available.
    location: Option<SourceLocation>,

    /// What sort of failure this is.
    kind: ErrorKind,

    /// The description of the error.
    error: String
}


impl Error for ScriptError
{
}


/// When returned from main, convert the error result to an operating system exit code.
impl Termination for ScriptError
{
    /// Because this type represents an error, the exit code is always FAILURE.
    fn report(self) -> ExitCode
    {
        eprintln!("Error: {}", self);
        ExitCode::FAILURE
    }
}


impl Display for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match &self.location
        {
            Some(location) => write!(f, "{}: {}", location, self.error),
            None => write!(f, "{}", self.error)
        }
    }
}


impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{:?}: {}", self.kind, self)
    }
}


impl ScriptError
{
    /// Create a new ScriptError.
    pub fn new(location: Option<SourceLocation>, kind: ErrorKind, error: String) -> ScriptError
    {
        ScriptError
            {
                location,
                kind,
                error
            }
    }

    /// Create a new Script Error and wrap it in a Result::Err.
    pub fn new_as_result<T>(location: Option<SourceLocation>,
                            kind: ErrorKind,
                            error: String) -> Result<T>
    {
        Err(ScriptError::new(location, kind, error))
    }

    /// If available, the location in the source code the error occurred.
    pub fn location(&self) -> &Option<SourceLocation>
    {
        &self.location
    }

    /// The family of the error.
    pub fn kind(&self) -> &ErrorKind
    {
        &self.kind
    }

    /// The description of the error.
    pub fn error(&self) -> &String
    {
        &self.error
    }
}


/// Allow for the conversion of a std::io::Error into a ScriptError.
impl From<std::io::Error> for ScriptError
{
    fn from(error: std::io::Error) -> ScriptError
    {
        ScriptError::new(None, ErrorKind::Io, format!("I/O error: {}", error))
    }
}



/// Shorthand for a location-free error wrapped in a Result::Err, used by the runtime where no
/// source position is known.
pub fn script_error<T>(kind: ErrorKind, message: String) -> Result<T>
{
    ScriptError::new_as_result(None, kind, message)
}



pub fn script_error_str<T>(kind: ErrorKind, message: &str) -> Result<T>
{
    script_error(kind, message.to_string())
}



/// The error for a word lookup that found nothing.
pub fn undefined_word<T>(name: &str) -> Result<T>
{
    script_error(ErrorKind::Undefined(name.to_string()), format!("undefined `{}'", name))
}
