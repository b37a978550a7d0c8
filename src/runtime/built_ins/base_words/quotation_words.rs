use crate::{
    lang::term::{Quotation, TermList},
    runtime::{data_structures::value::Value, error, interpreter::Interpreter},
};

/// Run a quotation now by putting its terms at the front of the queue.
///
/// Signature: `quotation -- ...`
pub fn word_apply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let quotation = interpreter.pop_as_quotation()?;

    interpreter.schedule_terms(quotation.terms());
    Ok(())
}

/// Wrap the top value in a quotation of its own.
///
/// Signature: `value -- [value]`
pub fn word_quote(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(Value::Quotation(Quotation::wrap(value)));
    Ok(())
}

/// Join two quotations into one that runs the first then the second.
///
/// Signature: `[a] [b] -- [a b]`
pub fn word_compose(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop_as_quotation()?;
    let a = interpreter.pop_as_quotation()?;

    interpreter.push(Value::Quotation(a.compose(&b)));
    Ok(())
}

/// Run the quotation with the value under it set aside.  The value comes back on top once the
/// quotation has finished.
///
/// Signature: `value quotation -- ... value`
pub fn word_dip(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let quotation = interpreter.pop_as_quotation()?;
    let value = interpreter.pop()?;

    interpreter.schedule_value(value);
    interpreter.schedule_terms(quotation.terms());

    Ok(())
}

/// Pick one of two values.  Neither is run, follow with `apply` to branch on code.
///
/// Signature: `condition then else -- then|else`
pub fn word_if(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let otherwise = interpreter.pop()?;
    let then = interpreter.pop()?;
    let condition = interpreter.pop()?;

    interpreter.push(if condition.is_truthy() { then } else { otherwise });
    Ok(())
}

/// Inline one level of user words.  Every name in the quotation that the dictionary defines is
/// replaced by the word's body, everything else is kept as is.
///
/// Signature: `quotation -- quotation'`
pub fn word_expand_def(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let quotation = interpreter.pop_as_quotation()?;
    let mut expanded = TermList::with_capacity(quotation.len());

    for term in quotation.terms() {
        match term.as_name().and_then(|name| interpreter.dictionary().try_get(name)) {
            Some(body) => expanded.extend_from_slice(body),
            None => expanded.push(term.clone()),
        }
    }

    interpreter.push(Value::Quotation(Quotation::new(expanded)));
    Ok(())
}
