use crate::runtime::data_structures::value::Value;
use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
};

/// A unit of parsed bee code.  Exactly one of the three forms holds for any term.
#[derive(Clone, PartialEq, Debug)]
pub enum Term {
    /// A reference to a built-in or user defined word, resolved when it is evaluated.
    Name(String),

    /// A value known when the source was parsed.  String literals are already decoded into their
    /// character list form.
    Literal(Value),

    /// A block of code that evaluates to itself.
    Quotation(Quotation),
}

/// Make sure that terms are nicely printable, using the same rendering as the values they push.
impl Display for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Term::Name(name) => write!(f, "{}", name),
            Term::Literal(value) => write!(f, "{}", value),
            Term::Quotation(quotation) => write!(f, "{}", quotation),
        }
    }
}

/// Wrapping a runtime value as a term.  A quotation value becomes a quotation term, anything else
/// becomes a literal that pushes the value back.
impl From<Value> for Term {
    fn from(value: Value) -> Term {
        match value {
            Value::Quotation(quotation) => Term::Quotation(quotation),
            other => Term::Literal(other),
        }
    }
}

impl Term {
    /// Shorthand for building a name term.
    pub fn name(name: &str) -> Term {
        Term::Name(name.to_string())
    }

    /// The word name if this is a name term.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Term::Name(name) => Some(name),
            _ => None,
        }
    }
}

/// A list of terms, as found in quotation bodies and word definitions.
pub type TermList = Vec<Term>;

/// A first-class deferred block of code.  The terms are shared, so copying a quotation around the
/// stack and queue is cheap.  A quotation never changes once built, words like `compose` build new
/// ones.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Quotation {
    terms: Rc<TermList>,
}

/// Print the quotation in bracketed source form.
impl Display for Quotation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[")?;

        for (index, term) in self.terms.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{}", term)?;
        }

        write!(f, "]")
    }
}

impl From<TermList> for Quotation {
    fn from(terms: TermList) -> Quotation {
        Quotation::new(terms)
    }
}

impl Quotation {
    pub fn new(terms: TermList) -> Quotation {
        Quotation {
            terms: Rc::new(terms),
        }
    }

    /// A quotation holding only the one value.
    pub fn wrap(value: Value) -> Quotation {
        Quotation::new(vec![Term::from(value)])
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// A new quotation that runs this one's terms followed by the other's.
    pub fn compose(&self, other: &Quotation) -> Quotation {
        let mut terms = TermList::with_capacity(self.len() + other.len());

        terms.extend_from_slice(&self.terms);
        terms.extend_from_slice(&other.terms);

        Quotation::new(terms)
    }
}
