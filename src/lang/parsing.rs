use crate::{
    lang::{
        source_buffer::SourceLocation,
        term::{Quotation, Term, TermList},
        tokenizing::{classify, tokenize_from_source, Token},
    },
    runtime::{
        data_structures::{dictionary::Dictionary, value::Value},
        error::{self, script_error, ErrorKind, ScriptError},
    },
};
use std::fs::read_to_string;

/// A word definition, `: name body ;`.  While the parser is filling it in the first term appended
/// becomes the name and every later term joins the body.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Definition {
    name: Option<String>,
    terms: TermList,
}

impl Definition {
    /// A complete definition.
    pub fn new(name: String, terms: TermList) -> Definition {
        Definition {
            name: Some(name),
            terms,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Add the next term.  The name has to be a plain word.
    pub fn append(&mut self, location: &SourceLocation, term: Term) -> error::Result<()> {
        if self.name.is_some() {
            self.terms.push(term);
            return Ok(());
        }

        match term {
            Term::Name(name) => {
                self.name = Some(name);
                Ok(())
            }

            other => ScriptError::new_as_result(
                Some(location.clone()),
                ErrorKind::InvalidDefinitionName,
                format!("{} can not name a word", other),
            ),
        }
    }

    /// Hand over the name and body once the closing `;` is found.
    fn finish(self, location: &SourceLocation) -> error::Result<(String, TermList)> {
        match self.name {
            Some(name) => Ok((name, self.terms)),
            None => ScriptError::new_as_result(
                Some(location.clone()),
                ErrorKind::InvalidDefinitionName,
                "definition has no name".to_string(),
            ),
        }
    }
}

/// Something the parser has opened and not yet closed.
enum Container {
    Quotation(TermList),
    Definition(Definition),
}

/// Turns bee source into the top level terms and the dictionary of words it defines.
///
/// The top level quotation is always open.  Brackets and definitions nest on top of it, and terms
/// always go to the innermost open container.
#[derive(Default)]
pub struct Parser {
    root: TermList,
    open: Vec<Container>,
    dictionary: Dictionary,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    /// Add a term to the innermost open container.
    fn append(&mut self, location: &SourceLocation, term: Term) -> error::Result<()> {
        match self.open.last_mut() {
            Some(Container::Quotation(terms)) => {
                terms.push(term);
                Ok(())
            }

            Some(Container::Definition(definition)) => definition.append(location, term),

            None => {
                self.root.push(term);
                Ok(())
            }
        }
    }

    fn open_quotation(&mut self, location: &SourceLocation) -> error::Result<()> {
        if let Some(Container::Definition(definition)) = self.open.last()
            && definition.name().is_none()
        {
            return ScriptError::new_as_result(
                Some(location.clone()),
                ErrorKind::InvalidDefinitionName,
                "a quotation can not name a word".to_string(),
            );
        }

        self.open.push(Container::Quotation(TermList::new()));
        Ok(())
    }

    fn close_quotation(&mut self, location: &SourceLocation) -> error::Result<()> {
        match self.open.pop() {
            Some(Container::Quotation(terms)) => {
                self.append(location, Term::Quotation(Quotation::new(terms)))
            }

            _ => ScriptError::new_as_result(
                Some(location.clone()),
                ErrorKind::UnexpectedCloseBracket,
                "unexpected ]".to_string(),
            ),
        }
    }

    fn close_definition(&mut self, location: &SourceLocation) -> error::Result<()> {
        match self.open.pop() {
            Some(Container::Definition(definition)) => {
                let (name, terms) = definition.finish(location)?;

                self.dictionary.add(name, terms);
                Ok(())
            }

            _ => ScriptError::new_as_result(
                Some(location.clone()),
                ErrorKind::UnexpectedSemicolon,
                "unexpected ;".to_string(),
            ),
        }
    }

    /// Feed one token to the parser.
    pub fn push_token(&mut self, token: &Token) -> error::Result<()> {
        match token {
            Token::OpenBracket(location) => self.open_quotation(location),
            Token::CloseBracket(location) => self.close_quotation(location),
            Token::Text(_, text) if text == ":" => {
                self.open.push(Container::Definition(Definition::default()));
                Ok(())
            }
            Token::Text(location, text) if text == ";" => self.close_definition(location),
            Token::Text(location, text) => {
                let term = classify(location, text)?;

                self.append(location, term)
            }
        }
    }

    /// Finish parsing, every quotation and definition must have been closed.
    pub fn finish(self) -> error::Result<(TermList, Dictionary)> {
        if !self.open.is_empty() {
            return script_error(ErrorKind::UnexpectedEof, "unexpected EOF".to_string());
        }

        Ok((self.root, self.dictionary))
    }
}

/// Parse bee source code.  The path is only used to describe the source in error messages.
pub fn parse_source(path: &str, source: &str) -> error::Result<(TermList, Dictionary)> {
    let mut parser = Parser::new();

    for token in tokenize_from_source(path, source).iter() {
        parser.push_token(token)?;
    }

    parser.finish()
}

/// Parse bee source code handed over directly rather than read from a file.
pub fn parse(source: &str) -> error::Result<(TermList, Dictionary)> {
    parse_source("<input>", source)
}

/// Load the code from a file and then parse it.
pub fn parse_file(path: &str) -> error::Result<(TermList, Dictionary)> {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            return script_error(
                ErrorKind::Io,
                format!("Could not read file {}: {}", path, error),
            );
        }
    };

    parse_source(path, &source)
}

/// Render something back into bee source syntax, the inverse of parsing.
pub trait Unparse {
    fn unparse(&self) -> error::Result<String>;
}

fn cannot_unparse<T>(what: &dyn std::fmt::Display) -> error::Result<T> {
    script_error(ErrorKind::CannotUnparse, format!("can't unparse {}", what))
}

fn unparse_all(terms: &[Term]) -> error::Result<String> {
    let parts = terms
        .iter()
        .map(|term| term.unparse())
        .collect::<error::Result<Vec<String>>>()?;

    Ok(parts.join(" "))
}

/// A definition unparses into the block format used by definition files.
impl Unparse for Definition {
    fn unparse(&self) -> error::Result<String> {
        match &self.name {
            Some(name) => Ok(format!(": {}\n  {} ;\n\n", name, unparse_all(&self.terms)?)),
            None => cannot_unparse(&"a definition without a name"),
        }
    }
}

impl Unparse for Quotation {
    fn unparse(&self) -> error::Result<String> {
        Ok(format!("[{}]", unparse_all(self.terms())?))
    }
}

impl Unparse for Term {
    fn unparse(&self) -> error::Result<String> {
        match self {
            Term::Name(name) => Ok(name.clone()),
            Term::Literal(value) => value.unparse(),
            Term::Quotation(quotation) => quotation.unparse(),
        }
    }
}

/// Only values with a literal syntax can be unparsed, lists that aren't strings can't.
impl Unparse for Value {
    fn unparse(&self) -> error::Result<String> {
        match self {
            Value::Quotation(quotation) => quotation.unparse(),
            _ => match self.source_text() {
                Some(text) => Ok(text),
                None => cannot_unparse(self),
            },
        }
    }
}
