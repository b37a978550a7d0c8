use crate::runtime::{
    data_structures::value::Value,
    error::{self, script_error, ErrorKind},
    interpreter::Interpreter,
};

/// Convert a value to its text, as a string.  A string's text is itself, without the quotes.
///
/// Signature: `value -- string`
pub fn word_to_s(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(Value::string(&value.text()));
    Ok(())
}

/// Convert a value to an integer.  Floats are truncated, anything else has its text parsed.
///
/// Signature: `value -- integer`
pub fn word_to_i(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    let result = match value {
        Value::Int(value) => value,
        Value::Float(value) if value.is_finite() => value.trunc() as i64,
        other => {
            let text = other.text();

            match text.trim().parse::<i64>() {
                Ok(result) => result,
                Err(_) => {
                    return script_error(
                        ErrorKind::Conversion,
                        format!("can't convert {:?} to an integer", text),
                    );
                }
            }
        }
    };

    interpreter.push(Value::Int(result));
    Ok(())
}

/// Convert a value to a float.  Integers are widened, anything else has its text parsed.
///
/// Signature: `value -- float`
pub fn word_to_f(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    let result = match value {
        Value::Int(value) => value as f64,
        Value::Float(value) => value,
        other => {
            let text = other.text();

            match text.trim().parse::<f64>() {
                Ok(result) => result,
                Err(_) => {
                    return script_error(
                        ErrorKind::Conversion,
                        format!("can't convert {:?} to a float", text),
                    );
                }
            }
        }
    };

    interpreter.push(Value::Float(result));
    Ok(())
}
