// Table driven tests of the arithmetic, comparison, bit, logic and conversion words.

use bee::BeeInterpreter;
use bee::runtime::error::{ErrorKind, Result};
use std::io;
use test_case::test_case;

fn eval_and_stack(source: &str) -> Result<Vec<String>> {
    let mut interpreter = BeeInterpreter::with_output(Box::new(io::sink()));
    let stack = interpreter.evaluate(source, false)?;

    Ok(stack.iter().map(|value| value.to_string()).collect())
}

fn eval_one(source: &str) -> String {
    let stack = eval_and_stack(source).unwrap();

    assert_eq!(stack.len(), 1, "{:?} left {:?}", source, stack);
    stack[0].clone()
}

#[test_case("2 3 +", "5"; "add")]
#[test_case("5 2 -", "3"; "subtract")]
#[test_case("2 5 -", "-3"; "subtract below zero")]
#[test_case("6 7 *", "42"; "multiply")]
#[test_case("7 2 /", "3"; "integer divide")]
#[test_case("-7 2 /", "-4"; "integer divide rounds down")]
#[test_case("7 -2 /", "-4"; "integer divide by a negative rounds down")]
#[test_case("-8 2 /", "-4"; "exact negative divide")]
#[test_case("7 2 %", "1"; "modulo")]
#[test_case("-7 2 %", "1"; "modulo takes the divisor's sign")]
#[test_case("7 -2 %", "-1"; "modulo by a negative")]
#[test_case("-7 -2 %", "-1"; "modulo of two negatives")]
#[test_case("-7.0 2 %", "1.0"; "float modulo takes the divisor's sign")]
#[test_case("7.5 -2 %", "-0.5"; "float modulo by a negative")]
#[test_case("2 10 **", "1024"; "integer power")]
#[test_case("2 -1 **", "0.5"; "negative exponent")]
#[test_case("2.0 3 **", "8.0"; "float power")]
#[test_case("2.5 1 +", "3.5"; "float and integer")]
#[test_case("1.5 1.5 +", "3.0"; "floats keep a decimal point")]
#[test_case("7.0 2 /", "3.5"; "float divide")]
#[test_case("1 2.0 *", "2.0"; "integer times float")]
#[test_case(".5 .25 -", "0.25"; "leading point floats")]
fn arithmetic(source: &str, expected: &str) {
    assert_eq!(eval_one(source), expected);
}

#[test_case("7 2 /%", &["3", "1"]; "quotient then remainder")]
#[test_case("7 2 %/", &["1", "3"]; "remainder then quotient")]
#[test_case("7.0 2 /%", &["3.5", "1.0"]; "float quotient and remainder")]
#[test_case("-7 2 /%", &["-4", "1"]; "negative quotient then remainder")]
#[test_case("-7 2 %/", &["1", "-4"]; "negative remainder then quotient")]
fn both_results(source: &str, expected: &[&str]) {
    assert_eq!(eval_and_stack(source).unwrap(), expected);
}

#[test_case("1 2 <", "true"; "less")]
#[test_case("2 1 <", "false"; "not less")]
#[test_case("2 2 <=", "true"; "less equal")]
#[test_case("3 2 >=", "true"; "greater equal")]
#[test_case("1 2 >", "false"; "greater")]
#[test_case("1 1.5 <", "true"; "integer and float")]
#[test_case("'a' 'b' <", "true"; "characters")]
#[test_case("1 1 =", "true"; "equal")]
#[test_case("1 2 ==", "false"; "double equals")]
#[test_case("1 1.0 =", "true"; "integers and floats compare by value")]
#[test_case("'ab' \"ab\" =", "true"; "strings")]
#[test_case("'ab' 'ba' =", "false"; "different strings")]
#[test_case("null null =", "true"; "null")]
#[test_case("[1 2] [1 2] =", "true"; "quotations")]
#[test_case("[1 2] [2 1] =", "false"; "different quotations")]
#[test_case("1 true =", "false"; "different types")]
#[test_case("'a' \"a\" =", "false"; "character and string")]
fn comparison(source: &str, expected: &str) {
    assert_eq!(eval_one(source), expected);
}

#[test_case("6 3 &", "2"; "and")]
#[test_case("6 3 |", "7"; "or")]
#[test_case("6 3 ^", "5"; "xor")]
#[test_case("true false &", "false"; "boolean and")]
#[test_case("true false |", "true"; "boolean or")]
#[test_case("true true ^", "false"; "boolean xor")]
#[test_case("1 4 <<", "16"; "shift left")]
#[test_case("16 2 >>", "4"; "shift right")]
#[test_case("-16 2 >>", "-4"; "shift right keeps the sign")]
#[test_case("1 -1 <<", "0"; "negative left shift")]
#[test_case("16 -2 >>", "64"; "negative right shift")]
#[test_case("-1 64 >>", "-1"; "shift out a negative")]
#[test_case("5 64 >>", "0"; "shift out a positive")]
#[test_case("0 100 <<", "0"; "shift zero")]
fn bits(source: &str, expected: &str) {
    assert_eq!(eval_one(source), expected);
}

#[test_case("true false and", "false"; "and")]
#[test_case("true true and", "true"; "and both")]
#[test_case("false true or", "true"; "or")]
#[test_case("false false or", "false"; "or neither")]
#[test_case("true false xor", "true"; "xor")]
#[test_case("true true xor", "false"; "xor both")]
#[test_case("false not", "true"; "not false")]
#[test_case("true not", "false"; "not true")]
#[test_case("0 not", "false"; "zero is true")]
#[test_case("null not", "false"; "null is true")]
#[test_case("1 false and", "false"; "any value is true")]
fn logic(source: &str, expected: &str) {
    assert_eq!(eval_one(source), expected);
}

#[test_case("42 to_s", "\"42\""; "integer to string")]
#[test_case("1.5 to_s", "\"1.5\""; "float to string")]
#[test_case("true to_s", "\"true\""; "boolean to string")]
#[test_case("'x' to_s", "\"x\""; "character to string")]
#[test_case("'hi' to_s", "\"hi\""; "string to string")]
#[test_case("[1 2] to_s", "\"[1 2]\""; "quotation to string")]
#[test_case("'42' to_i", "42"; "string to integer")]
#[test_case("' -7 ' to_i", "-7"; "surrounding space is ignored")]
#[test_case("3.9 to_i", "3"; "float to integer")]
#[test_case("5 to_i", "5"; "integer to integer")]
#[test_case("'3.5' to_f", "3.5"; "string to float")]
#[test_case("4 to_f", "4.0"; "integer to float")]
#[test_case("'2' to_f", "2.0"; "integer text to float")]
#[test_case("12 to_s to_i", "12"; "round trip through text")]
fn conversion(source: &str, expected: &str) {
    assert_eq!(eval_one(source), expected);
}

#[test_case("1 0 /", ErrorKind::Numeric; "divide by zero")]
#[test_case("1 0 %", ErrorKind::Numeric; "modulo by zero")]
#[test_case("1 0 /%", ErrorKind::Numeric; "divmod by zero")]
#[test_case("9223372036854775807 1 +", ErrorKind::Numeric; "overflow")]
#[test_case("-9223372036854775807 2 *", ErrorKind::Numeric; "multiply overflow")]
#[test_case("-9223372036854775808 -1 /", ErrorKind::Numeric; "divide overflow")]
#[test_case("1 64 <<", ErrorKind::Numeric; "shift out a one")]
#[test_case("10 100 **", ErrorKind::Numeric; "power overflow")]
#[test_case("'abc' to_i", ErrorKind::Conversion; "bad integer text")]
#[test_case("'1.5' to_i", ErrorKind::Conversion; "float text to integer")]
#[test_case("'x' to_f", ErrorKind::Conversion; "bad float text")]
#[test_case("1 'a' +", ErrorKind::TypeMismatch; "add a character")]
#[test_case("null 1 -", ErrorKind::TypeMismatch; "subtract from a list")]
#[test_case("true 1 &", ErrorKind::TypeMismatch; "boolean and integer")]
#[test_case("1.0 1 <<", ErrorKind::TypeMismatch; "shift a float")]
#[test_case("'a' 1 <", ErrorKind::TypeMismatch; "compare a character and a number")]
#[test_case("[1] [1] <", ErrorKind::TypeMismatch; "compare quotations")]
fn failures(source: &str, kind: ErrorKind) {
    match eval_and_stack(source) {
        Ok(stack) => panic!("expected {:?} to fail, got {:?}", source, stack),
        Err(error) => assert_eq!(error.kind(), &kind),
    }
}
