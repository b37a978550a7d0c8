use crate::{
    lang::{source_buffer::SourceBuffer, source_buffer::SourceLocation, term::Term},
    runtime::{
        data_structures::value::Value,
        error::{self, ErrorKind, ScriptError},
    },
};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{self, Debug, Display, Formatter};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^\s+").unwrap();

    // Alternatives are tried in order, so a leading quote only starts a string when the closing
    // quote is there.  Otherwise the text is an ordinary run.
    static ref TOKEN: Regex = Regex::new(r#"^(?:\[|\]|"[^"]*"|'[^']*'|[^\s\]]+)"#).unwrap();

    static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref FLOAT: Regex = Regex::new(r"^-?[0-9]*\.[0-9]+$").unwrap();
    static ref CHARACTER: Regex = Regex::new(r"^'[^']'$").unwrap();
    static ref DOUBLE_QUOTED: Regex = Regex::new(r#"^"[^"]*"$"#).unwrap();
    static ref SINGLE_QUOTED: Regex = Regex::new(r"^'[^']*'$").unwrap();
}

/// A token is a simple unit of the language.  Brackets are the only punctuation, everything else
/// is a run of text that the parser either treats specially (`:` and `;`) or classifies into a
/// term.
///
/// The token also holds the location in the original source code where it was found.
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    /// A `[` opening a quotation.
    OpenBracket(SourceLocation),

    /// A `]` closing a quotation.
    CloseBracket(SourceLocation),

    /// Any other run of text, including quoted strings.
    Text(SourceLocation, String),
}

/// A list of tokens found in the source code.
pub type TokenList = Vec<Token>;

/// Make sure that the tokens are nicely printable for debugging purposes.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Token::OpenBracket(_) => write!(f, "["),
            Token::CloseBracket(_) => write!(f, "]"),
            Token::Text(_, text) => write!(f, "{}", text),
        }
    }
}

/// Include the original location when debugging.
impl Debug for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self)
    }
}

impl Token {
    /// Get the token's location in the original source text.
    pub fn location(&self) -> &SourceLocation {
        match self {
            Token::OpenBracket(location) => location,
            Token::CloseBracket(location) => location,
            Token::Text(location, _) => location,
        }
    }

    /// Get the text of a text token.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Text(_, text) => Some(text),
            _ => None,
        }
    }
}

/// Replace the escape sequences allowed inside string literals with the characters they stand for.
fn process_escapes(text: &str) -> String {
    text.replace("\\t", "\t")
        .replace("\\n", "\n")
        .replace("\\r", "\r")
}

/// The text between the first and last characters of a quoted token.
fn unquote(text: &str) -> &str {
    &text[1..text.len() - 1]
}

/// Decide what a piece of source text means.  The first rule that matches wins: integers, floats,
/// characters (plain or one of the four escapes), double then single quoted strings, booleans, and
/// finally a word name for anything else.
///
/// A run of digits too large for 64 bits is an error at the given location.
pub fn classify(location: &SourceLocation, text: &str) -> error::Result<Term> {
    if INTEGER.is_match(text) {
        return match text.parse::<i64>() {
            Ok(number) => Ok(Term::Literal(Value::Int(number))),
            Err(_) => ScriptError::new_as_result(
                Some(location.clone()),
                ErrorKind::Numeric,
                format!("integer literal {} is out of range", text),
            ),
        };
    }

    if FLOAT.is_match(text) {
        if let Ok(number) = text.parse::<f64>() {
            return Ok(Term::Literal(Value::Float(number)));
        }
    }

    if CHARACTER.is_match(text) {
        if let Some(character) = unquote(text).chars().next() {
            return Ok(Term::Literal(Value::Char(character)));
        }
    }

    let term = match text {
        "'\\n'" => Term::Literal(Value::Char('\n')),
        "'\\r'" => Term::Literal(Value::Char('\r')),
        "'\\t'" => Term::Literal(Value::Char('\t')),
        "'\\\\'" => Term::Literal(Value::Char('\\')),
        _ if DOUBLE_QUOTED.is_match(text) || SINGLE_QUOTED.is_match(text) => {
            Term::Literal(Value::string(&process_escapes(unquote(text))))
        }
        "true" => Term::Literal(Value::Bool(true)),
        "false" => Term::Literal(Value::Bool(false)),
        _ => Term::Name(text.to_string()),
    };

    Ok(term)
}

/// Tokenize the source code from a string.  Whitespace separates tokens but is otherwise ignored.
/// Tokenizing can't fail, any text that isn't a bracket or a quoted string is an ordinary run that
/// ends at whitespace or a `]`.
pub fn tokenize_from_source(path: &str, source: &str) -> TokenList {
    let mut buffer = SourceBuffer::new(path, source);
    let mut token_list = TokenList::new();

    let _ = buffer.skip(&WHITESPACE);

    loop {
        let location = buffer.location().clone();

        let Some(text) = buffer.scan(&TOKEN) else {
            break;
        };

        let next_token = match text {
            "[" => Token::OpenBracket(location),
            "]" => Token::CloseBracket(location),
            _ => Token::Text(location, text.to_string()),
        };

        token_list.push(next_token);

        let _ = buffer.skip(&WHITESPACE);
    }

    token_list
}
