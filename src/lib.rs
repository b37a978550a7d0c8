/// Module for the managing source code, its terms and the parsing and unparsing of them.
pub mod lang;

/// Module for the runtime and the data structures used by the interpreter.  As well as the
/// interpreter itself.
pub mod runtime;

pub use runtime::{
    error::{ErrorKind, Result, ScriptError},
    interpreter::bee_interpreter::BeeInterpreter,
};
