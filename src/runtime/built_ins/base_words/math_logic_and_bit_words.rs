use crate::runtime::{
    data_structures::value::Value,
    error::{self, script_error, ErrorKind},
    interpreter::Interpreter,
};
use std::cmp::Ordering;

/// The error for an integer operation whose result can't be represented.
fn numeric_error<T>(name: &str, a: i64, b: i64) -> error::Result<T> {
    let message = match name {
        "/" | "%" | "/%" | "%/" if b == 0 => "divided by 0".to_string(),
        _ => format!("integer overflow in {} {} {}", a, b, name),
    };

    script_error(ErrorKind::Numeric, message)
}

fn numeric_mismatch<T>(name: &str, a: &Value, b: &Value) -> error::Result<T> {
    script_error(
        ErrorKind::TypeMismatch,
        format!("{} expects two numbers, found {} and {}", name, a, b),
    )
}

/// Helper function to handle math operations.  Two integers stay integers, checked for overflow,
/// while a float on either side makes the operation a float one.  The stack operations and value
/// conversions are handled here.
fn math_op(
    interpreter: &mut dyn Interpreter,
    name: &str,
    iop: fn(i64, i64) -> Option<i64>,
    fop: fn(f64, f64) -> f64,
) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    let result = match (&a, &b) {
        (Value::Int(a), Value::Int(b)) => match iop(*a, *b) {
            Some(result) => Value::Int(result),
            None => return numeric_error(name, *a, *b),
        },

        _ if a.is_numeric() && b.is_numeric() => Value::Float(fop(a.as_number()?, b.as_number()?)),

        _ => return numeric_mismatch(name, &a, &b),
    };

    interpreter.push(result);
    Ok(())
}

/// Integer division rounding toward negative infinity.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;

    if remainder != 0 && (remainder < 0) != (b < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

/// Integer remainder taking the sign of the divisor, the partner of `floor_div`.
fn floor_mod(a: i64, b: i64) -> Option<i64> {
    let remainder = a.checked_rem(b)?;

    if remainder != 0 && (remainder < 0) != (b < 0) {
        Some(remainder + b)
    } else {
        Some(remainder)
    }
}

/// Float remainder taking the sign of the divisor.
fn float_mod(a: f64, b: f64) -> f64 {
    let remainder = a % b;

    if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
        remainder + b
    } else {
        remainder
    }
}

/// Helper for the words that push both the quotient and the remainder.  The flag says whether the
/// quotient goes on the stack first.
fn quotient_remainder_op(
    interpreter: &mut dyn Interpreter,
    name: &str,
    quotient_first: bool,
) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    let (quotient, remainder) = match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => match (floor_div(*x, *y), floor_mod(*x, *y)) {
            (Some(quotient), Some(remainder)) => (Value::Int(quotient), Value::Int(remainder)),
            _ => return numeric_error(name, *x, *y),
        },

        _ if a.is_numeric() && b.is_numeric() => {
            let x = a.as_number()?;
            let y = b.as_number()?;

            (Value::Float(x / y), Value::Float(float_mod(x, y)))
        }

        _ => return numeric_mismatch(name, &a, &b),
    };

    if quotient_first {
        interpreter.push(quotient);
        interpreter.push(remainder);
    } else {
        interpreter.push(remainder);
        interpreter.push(quotient);
    }

    Ok(())
}

/// Helper function to handle comparisons.  Numbers compare by value, characters by code point.
/// Anything else can't be ordered.
fn compare_op(
    interpreter: &mut dyn Interpreter,
    name: &str,
    test: fn(Ordering) -> bool,
) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    let ordering = match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Char(x), Value::Char(y)) => Some(x.cmp(y)),
        _ if a.is_numeric() && b.is_numeric() => a.as_number()?.partial_cmp(&b.as_number()?),
        _ => {
            return script_error(
                ErrorKind::TypeMismatch,
                format!("{} can't compare {} with {}", name, a, b),
            );
        }
    };

    // NaN is unordered, every comparison with it is false.
    interpreter.push(Value::Bool(ordering.is_some_and(test)));
    Ok(())
}

/// Helper function to handle bit logic operations.  Two integers combine bit by bit, two booleans
/// combine logically.  The stack operations and value conversions are handled here.
fn logic_bit_op(
    interpreter: &mut dyn Interpreter,
    name: &str,
    iop: fn(i64, i64) -> i64,
    bop: fn(bool, bool) -> bool,
) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    let result = match (&a, &b) {
        (Value::Int(x), Value::Int(y)) => Value::Int(iop(*x, *y)),
        (Value::Bool(x), Value::Bool(y)) => Value::Bool(bop(*x, *y)),
        _ => {
            return script_error(
                ErrorKind::TypeMismatch,
                format!("{} expects two integers or two booleans, found {} and {}", name, a, b),
            );
        }
    };

    interpreter.push(result);
    Ok(())
}

/// Helper function to handle shifts.  Both operands have to be integers.
fn shift_op(
    interpreter: &mut dyn Interpreter,
    name: &str,
    op: fn(i64, i64) -> Option<i64>,
) -> error::Result<()> {
    let amount = interpreter.pop()?;
    let value = interpreter.pop()?;

    let (Value::Int(value), Value::Int(amount)) = (&value, &amount) else {
        return script_error(
            ErrorKind::TypeMismatch,
            format!("{} expects two integers, found {} and {}", name, value, amount),
        );
    };

    match op(*value, *amount) {
        Some(result) => {
            interpreter.push(Value::Int(result));
            Ok(())
        }
        None => numeric_error(name, *value, *amount),
    }
}

/// Shift left, a negative amount shifts right instead.  Bits shifted out of a non-zero value are an
/// overflow.
fn shift_left(value: i64, amount: i64) -> Option<i64> {
    if amount < 0 {
        return shift_right(value, amount.checked_neg().unwrap_or(i64::MAX));
    }

    if value == 0 {
        return Some(0);
    }

    if amount >= i64::from(i64::BITS) {
        return None;
    }

    let shifted = value << amount;

    if shifted >> amount == value {
        Some(shifted)
    } else {
        None
    }
}

/// Arithmetic shift right, a negative amount shifts left instead.  Shifting everything out leaves
/// the sign.
fn shift_right(value: i64, amount: i64) -> Option<i64> {
    if amount < 0 {
        return shift_left(value, amount.checked_neg().unwrap_or(i64::MAX));
    }

    if amount >= i64::from(i64::BITS) {
        return Some(if value < 0 { -1 } else { 0 });
    }

    Some(value >> amount)
}

/// Raise an integer to an integer power.  A negative exponent has no integer answer, so that case
/// is handled by the caller as a float.
fn int_power(base: i64, exponent: i64) -> Option<i64> {
    u32::try_from(exponent)
        .ok()
        .and_then(|exponent| base.checked_pow(exponent))
}

/// Are 2 values equal?
///
/// Signature: `a b -- boolean`
pub fn word_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(Value::Bool(a == b));
    Ok(())
}

/// Add 2 numbers.
///
/// Signature: `a b -- result`
pub fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    math_op(interpreter, "+", |a, b| a.checked_add(b), |a, b| a + b)
}

/// Subtract 2 numbers.
///
/// Signature: `a b -- result`
pub fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    math_op(interpreter, "-", |a, b| a.checked_sub(b), |a, b| a - b)
}

/// Multiply 2 numbers.
///
/// Signature: `a b -- result`
pub fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    math_op(interpreter, "*", |a, b| a.checked_mul(b), |a, b| a * b)
}

/// Divide 2 numbers.  Integer division rounds toward negative infinity.
///
/// Signature: `a b -- result`
pub fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    math_op(interpreter, "/", floor_div, |a, b| a / b)
}

/// Mod 2 numbers.  The remainder takes the sign of the divisor.
///
/// Signature: `a b -- result`
pub fn word_mod(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    math_op(interpreter, "%", floor_mod, float_mod)
}

/// Raise a number to a power.
///
/// Signature: `base exponent -- result`
pub fn word_power(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let exponent = interpreter.pop()?;
    let base = interpreter.pop()?;

    if let (Value::Int(b), Value::Int(e)) = (&base, &exponent)
        && *e < 0
    {
        interpreter.push(Value::Float((*b as f64).powf(*e as f64)));
        return Ok(());
    }

    interpreter.push(base);
    interpreter.push(exponent);

    math_op(interpreter, "**", int_power, f64::powf)
}

/// Divide 2 numbers keeping both results.
///
/// Signature: `a b -- quotient remainder`
pub fn word_div_mod(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    quotient_remainder_op(interpreter, "/%", true)
}

/// Divide 2 numbers keeping both results, the other way around.
///
/// Signature: `a b -- remainder quotient`
pub fn word_mod_div(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    quotient_remainder_op(interpreter, "%/", false)
}

/// Is one value less than another?
///
/// Signature: `a b -- boolean`
pub fn word_less(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    compare_op(interpreter, "<", Ordering::is_lt)
}

/// Is one value lesser or equal to another?
///
/// Signature: `a b -- boolean`
pub fn word_less_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    compare_op(interpreter, "<=", Ordering::is_le)
}

/// Is one value greater or equal to another?
///
/// Signature: `a b -- boolean`
pub fn word_greater_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    compare_op(interpreter, ">=", Ordering::is_ge)
}

/// Is one value greater than another?
///
/// Signature: `a b -- boolean`
pub fn word_greater(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    compare_op(interpreter, ">", Ordering::is_gt)
}

/// Shift a number of bits to the right.
///
/// Signature: `a count -- result`
pub fn word_shift_right(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    shift_op(interpreter, ">>", shift_right)
}

/// Shift a number of bits to the left.
///
/// Signature: `a count -- result`
pub fn word_shift_left(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    shift_op(interpreter, "<<", shift_left)
}

/// Bitwise AND two numbers together.
///
/// Signature: `a b -- result`
pub fn word_bit_and(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    logic_bit_op(interpreter, "&", |a, b| a & b, |a, b| a & b)
}

/// Bitwise OR two numbers together.
///
/// Signature: `a b -- result`
pub fn word_bit_or(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    logic_bit_op(interpreter, "|", |a, b| a | b, |a, b| a | b)
}

/// Bitwise XOR two numbers together.
///
/// Signature: `a b -- result`
pub fn word_bit_xor(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    logic_bit_op(interpreter, "^", |a, b| a ^ b, |a, b| a ^ b)
}

/// Helper function to handle logic operations.  Any value but `false` counts as true.
fn logic_op(interpreter: &mut dyn Interpreter, bop: fn(bool, bool) -> bool) -> error::Result<()> {
    let b = interpreter.pop()?.is_truthy();
    let a = interpreter.pop()?.is_truthy();

    interpreter.push(Value::Bool(bop(a, b)));
    Ok(())
}

/// Logically and 2 values.
///
/// Signature: `a b -- boolean`
pub fn word_logic_and(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    logic_op(interpreter, |a, b| a && b)
}

/// Logically or 2 values.
///
/// Signature: `a b -- boolean`
pub fn word_logic_or(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    logic_op(interpreter, |a, b| a || b)
}

/// Logically xor 2 values.
///
/// Signature: `a b -- boolean`
pub fn word_logic_xor(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    logic_op(interpreter, |a, b| a ^ b)
}

/// Logically invert a value.
///
/// Signature: `a -- boolean`
pub fn word_logic_not(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let a = interpreter.pop()?.is_truthy();

    interpreter.push(Value::Bool(!a));
    Ok(())
}
