/// Module contains the Value enumeration and it's implementation.  The value is one of the core
/// data structures of the interpreter.  It is used to represent all data that bee programs can
/// push onto the stack.
pub mod value;

/// The persistent linked list shared by bee lists and strings.
pub mod list;

/// The dictionary module provides the word dictionary used by the bee parser and interpreter.
pub mod dictionary;
