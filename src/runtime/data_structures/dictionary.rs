use crate::{
    lang::{parsing::Definition, term::TermList},
    runtime::error::{self, undefined_word},
};
use indexmap::IndexMap;

/// The bee dictionary.  Maps word names to the terms that make up their bodies.  Built-in words
/// never appear here, only words defined by bee source code.
///
/// Words are kept in the order they were first defined.  Defining a word again replaces its body
/// but keeps its place, so listing the dictionary is deterministic.
#[derive(Clone, Default, Debug)]
pub struct Dictionary {
    words: IndexMap<String, TermList>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: IndexMap::new(),
        }
    }

    /// Insert a word, replacing any earlier body for the same name.
    pub fn add(&mut self, name: String, terms: TermList) {
        let _ = self.words.insert(name, terms);
    }

    /// Is there a word with this name?
    pub fn is_defined(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    /// Try to get a word's body from the dictionary.
    pub fn try_get(&self, name: &str) -> Option<&TermList> {
        self.words.get(name)
    }

    /// Get a word's body, failing with an undefined word error if there isn't one.
    pub fn lookup(&self, name: &str) -> error::Result<&TermList> {
        match self.words.get(name) {
            Some(terms) => Ok(terms),
            None => undefined_word(name),
        }
    }

    /// Merge every word of the other dictionary into this one.  On a name collision the other
    /// dictionary's body wins.
    pub fn import(&mut self, other: &Dictionary) {
        for (name, terms) in other.words.iter() {
            self.add(name.clone(), terms.clone());
        }
    }

    /// Every word as a definition, in dictionary order.  Unparsing these and parsing the result
    /// rebuilds the dictionary.
    pub fn definitions(&self) -> Vec<Definition> {
        self.words
            .iter()
            .map(|(name, terms)| Definition::new(name.clone(), terms.clone()))
            .collect()
    }

    /// The names of all the words, in dictionary order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.words.keys()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
