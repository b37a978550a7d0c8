use crate::{
    lang::term::{Quotation, Term},
    runtime::{
        data_structures::{
            dictionary::Dictionary,
            value::{Value, ValueList},
        },
        error::{self, script_error_str, ErrorKind},
    },
};
use std::{
    collections::VecDeque,
    fmt::{self, Display, Formatter},
    io::Write,
};

pub mod bee_interpreter;
pub mod trace;

/// A piece of pending work in the continuation queue.  Either code still to be evaluated or a value
/// that was set aside and has to reappear on the stack once the work ahead of it is done.
#[derive(Clone, PartialEq, Debug)]
pub enum Item {
    /// Evaluate the term.
    Eval(Term),

    /// Push the value as it is.
    Value(Value),
}

/// Items print the same way as the terms and values they hold, for the debug trace.
impl Display for Item {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Item::Eval(term) => write!(f, "{}", term),
            Item::Value(value) => write!(f, "{}", value),
        }
    }
}

/// The data stack of values managed by the interpreter.  The top of the stack is the end of the
/// vector.
pub type ValueStack = Vec<Value>;

/// The pending work of the interpreter, the front is processed next.
pub type ContinuationQueue = VecDeque<Item>;

/// Trait for managing the interpreter's data stack.  Intended to be called by the built-in words.
pub trait InterpreterStack {
    /// Use to examine the full data stack when required.
    fn stack(&self) -> &ValueStack;

    /// Push a value onto the stack.  This is the primary way of sending values to words.
    fn push(&mut self, value: Value);

    /// Pop a value from the stack.  This is the primary way of receiving outputs from words.  If
    /// the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<Value>;

    /// Pop the top value and make sure it is a list.
    fn pop_as_list(&mut self) -> error::Result<ValueList> {
        Ok(self.pop()?.as_list()?.clone())
    }

    /// Pop the top value and make sure it is a quotation.
    fn pop_as_quotation(&mut self) -> error::Result<Quotation> {
        Ok(self.pop()?.as_quotation()?.clone())
    }

    /// Pop the top value and take its plain text, for example a file name given as a string.
    fn pop_as_text(&mut self) -> error::Result<String> {
        Ok(self.pop()?.text())
    }
}

/// Trait for managing the continuation queue, used by the words that run code: `apply`, `dip`,
/// `unlist` and `halt`.
pub trait ContinuationManagement {
    /// Examine the pending work.
    fn queue(&self) -> &ContinuationQueue;

    /// Put the terms at the front of the queue so they run next, in order.
    fn schedule_terms(&mut self, terms: &[Term]);

    /// Put a value at the front of the queue so it is pushed back once the work ahead of it is
    /// done.
    fn schedule_value(&mut self, value: Value);

    /// Throw away both the stack and all pending work.
    fn halt(&mut self);
}

/// Trait for reaching the word dictionary.
pub trait WordManagement {
    /// The current word dictionary of words known to the interpreter.
    fn dictionary(&self) -> &Dictionary;

    /// The dictionary, for words that load definitions.
    fn dictionary_mut(&mut self) -> &mut Dictionary;
}

/// Core interpreter trait.
///
/// This trait brings together the traits built-in words are written against: the data stack, the
/// continuation queue and the dictionary, along with the interpreter's output.
pub trait Interpreter: InterpreterStack + ContinuationManagement + WordManagement {
    /// Where `print` and the debug trace write to.
    fn output(&mut self) -> &mut dyn Write;
}

/// The error for popping from an empty stack.
pub fn stack_underflow<T>() -> error::Result<T> {
    script_error_str(ErrorKind::StackUnderflow, "Stack underflow.")
}
