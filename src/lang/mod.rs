/// Module for managing the original source code.
pub mod source_buffer;

/// Module for managing the turning of the source code into a list of tokens for further processing,
/// and for deciding what each piece of text means.
pub mod tokenizing;

/// Module defining the terms that parsed bee code is made of.
pub mod term;

/// Module for turning tokens into terms and word definitions, and for rendering them back into
/// source code.
pub mod parsing;
