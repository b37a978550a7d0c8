/// All of the core data structures used by the bee interpreter.
pub mod data_structures;

/// Module for defining the built-in words that are available to bee programs.
pub mod built_ins;

/// Module for defining the error reporting of the bee interpreter.
pub mod error;

/// Module for defining the core functionality of the bee interpreter.  This includes the value
/// stack, the continuation queue and the run loop.
pub mod interpreter;
