use crate::runtime::{data_structures::value::Value, error, interpreter::Interpreter};

/// Push the empty list.
///
/// Signature: ` -- null`
pub fn word_null(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.push(Value::null());
    Ok(())
}

/// Put a value on the front of a list.  The original list is left as it was.
///
/// Signature: `list value -- list'`
pub fn word_cons(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;
    let list = interpreter.pop_as_list()?;

    interpreter.push(Value::List(list.cons(value)));
    Ok(())
}

/// Take a list apart.  The empty list runs the null case, otherwise the tail and then the head are
/// pushed, head on top, and the cons case runs.
///
/// Signature: `list [null-case] [cons-case] -- ...`
pub fn word_unlist(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let cons_case = interpreter.pop_as_quotation()?;
    let null_case = interpreter.pop_as_quotation()?;
    let list = interpreter.pop_as_list()?;

    match list.uncons() {
        None => interpreter.schedule_terms(null_case.terms()),
        Some((head, tail)) => {
            let head = head.clone();

            interpreter.push(Value::List(tail));
            interpreter.push(head);
            interpreter.schedule_terms(cons_case.terms());
        }
    }

    Ok(())
}
