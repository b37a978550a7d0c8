// Tests of the standard words defined in runtime.bee, loaded the way the binary loads them.

use bee::BeeInterpreter;
use bee::runtime::interpreter::{InterpreterStack, WordManagement};
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;
use test_case::test_case;

#[derive(Clone, Default)]
struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn runtime_path() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("runtime.bee")
        .display()
        .to_string()
}

fn bootstrapped(output: Box<dyn Write>) -> BeeInterpreter {
    let mut interpreter = BeeInterpreter::with_output(output);

    interpreter.bootstrap(&runtime_path()).unwrap();
    interpreter
}

fn eval_and_stack(source: &str) -> Vec<String> {
    let mut interpreter = bootstrapped(Box::new(io::sink()));

    interpreter
        .evaluate(source, false)
        .unwrap()
        .iter()
        .map(|value| value.to_string())
        .collect()
}

#[test]
fn bootstrap_defines_words_and_leaves_the_stack_empty() {
    let interpreter = bootstrapped(Box::new(io::sink()));

    assert!(interpreter.stack().is_empty());

    for name in ["twice", "dip2", "map", "length", "sum", "reverse", "append", "bottles"] {
        assert!(interpreter.dictionary().is_defined(name), "{} is missing", name);
    }
}

#[test]
fn missing_bootstrap_file_is_not_an_error() {
    let mut interpreter = BeeInterpreter::with_output(Box::new(io::sink()));

    interpreter.bootstrap("no/such/runtime.bee").unwrap();
    assert!(interpreter.dictionary().is_empty());
}

#[test_case("3 4 5 [+] twice", &["12"]; "twice")]
#[test_case("1 2 3 4 [+] dip2", &["3", "3", "4"]; "dip2")]
#[test_case("1 2 over", &["1", "2", "1"]; "over")]
#[test_case("1 2 nip", &["2"]; "nip")]
#[test_case("4 [dup *] keep", &["16", "4"]; "keep")]
#[test_case("true [1] [2] branch", &["1"]; "branch")]
#[test_case("true [5] when", &["5"]; "when true")]
#[test_case("false [5] when", &[]; "when false")]
#[test_case("false [5] unless", &["5"]; "unless false")]
#[test_case("3 square", &["9"]; "square")]
#[test_case("3 7 max", &["7"]; "max")]
#[test_case("3 7 min", &["3"]; "min")]
#[test_case("'bebe' length", &["4"]; "length of a string")]
#[test_case("null length", &["0"]; "length of null")]
#[test_case("null 3 cons 2 cons 1 cons sum", &["6"]; "sum")]
#[test_case("null 3 cons 2 cons 1 cons [dup *] map", &["(1 4 9)"]; "map")]
#[test_case("null [dup *] map", &["null"]; "map null")]
#[test_case("'abc' reverse", &["\"cba\""]; "reverse")]
#[test_case("'ab' 'cd' append", &["\"abcd\""]; "append")]
#[test_case("'ab' null append", &["\"ab\""]; "append null")]
#[test_case("3 to_s ' bottles' append", &["\"3 bottles\""]; "append to text")]
fn standard_words(source: &str, expected: &[&str]) {
    assert_eq!(eval_and_stack(source), expected);
}

#[test]
fn map_keeps_the_rest_of_the_stack() {
    let source = ": xs null 3 cons 2 cons 1 cons ; xs sum xs [dup *] map";

    assert_eq!(eval_and_stack(source), ["6", "(1 4 9)"]);
}

#[test]
fn map_handles_long_lists() {
    let source = ": upto dup 0 > [dup [cons] dip 1 - upto] [pop] if apply ; \
                  null 20000 upto [1 +] map length";

    assert_eq!(eval_and_stack(source), ["20000"]);
}

#[test]
fn bottles_counts_down() {
    let output = SharedOutput::default();
    let mut interpreter = bootstrapped(Box::new(output.clone()));

    interpreter.evaluate("3 bottles", false).unwrap();

    assert!(interpreter.stack().is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.0.borrow()),
        "\"3 bottles\"\n\"2 bottles\"\n\"1 bottles\"\n\"0 bottles\"\n"
    );
}
