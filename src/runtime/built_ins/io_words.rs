use crate::{
    lang::parsing::{parse_file, Unparse},
    runtime::{
        data_structures::dictionary::Dictionary,
        error::{self, script_error, ErrorKind},
        interpreter::Interpreter,
    },
};
use std::fs::write;
use tracing::debug;

/// Print the top value the way it displays, followed by a new line.
///
/// Signature: `value -- `
pub fn word_print(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    writeln!(interpreter.output(), "{}", value)?;
    interpreter.output().flush()?;

    Ok(())
}

/// Render every word of the dictionary as definition source.
fn unparse_dictionary(dictionary: &Dictionary) -> error::Result<String> {
    let mut source = String::new();

    for definition in dictionary.definitions() {
        source.push_str(&definition.unparse()?);
    }

    Ok(source)
}

/// Write every word in the dictionary to a definition file.  Nothing is written if any word can't
/// be unparsed.
///
/// Signature: `path -- `
pub fn word_dump_defs(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let path = interpreter.pop_as_text()?;
    let source = unparse_dictionary(interpreter.dictionary())?;

    if let Err(error) = write(&path, source) {
        return script_error(
            ErrorKind::Io,
            format!("Could not write file {}: {}", path, error),
        );
    }

    debug!(path = %path, words = interpreter.dictionary().len(), "dumped definitions");
    Ok(())
}

/// Read a definition file and add its words to the dictionary.  Top level code in the file is
/// ignored.
///
/// Signature: `path -- `
pub fn word_load_defs(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let path = interpreter.pop_as_text()?;
    let (_, dictionary) = parse_file(&path)?;

    debug!(path = %path, words = dictionary.len(), "loaded definitions");
    interpreter.dictionary_mut().import(&dictionary);

    Ok(())
}
