// Tests of dump-defs, load-defs and expand-def.

use bee::BeeInterpreter;
use bee::lang::term::Term;
use bee::runtime::data_structures::value::Value;
use bee::runtime::error::ErrorKind;
use bee::runtime::interpreter::{InterpreterStack, WordManagement};
use std::env::temp_dir;
use std::fs;
use std::io;
use std::path::PathBuf;

/// A scratch file path unique to the test.
fn scratch_file(name: &str) -> PathBuf {
    let directory = temp_dir().join(format!("bee-tests-{}", std::process::id()));

    fs::create_dir_all(&directory).unwrap();
    directory.join(name)
}

fn quiet_interpreter() -> BeeInterpreter {
    BeeInterpreter::with_output(Box::new(io::sink()))
}

fn stack_text(interpreter: &BeeInterpreter) -> Vec<String> {
    interpreter.stack().iter().map(|value| value.to_string()).collect()
}

#[test]
fn dump_writes_every_definition_in_order() {
    let path = scratch_file("dump.bee");
    let mut interpreter = quiet_interpreter();

    interpreter
        .evaluate(": sq dup * ; : greet \"hi\" print ; : sq dup dup * * ;", false)
        .unwrap();
    interpreter
        .evaluate(&format!("'{}' dump-defs", path.display()), false)
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();

    assert_eq!(
        contents,
        ": sq\n  dup dup * * ;\n\n: greet\n  \"hi\" print ;\n\n"
    );
    assert!(interpreter.stack().is_empty());
}

#[test]
fn load_brings_back_what_was_dumped() {
    let path = scratch_file("round-trip.bee");
    let mut first = quiet_interpreter();

    first
        .evaluate(
            ": cube dup dup * * ; : pick-one true [1 'a'] [\"b\"] if ; : nothing ;",
            false,
        )
        .unwrap();
    first
        .evaluate(&format!("'{}' dump-defs", path.display()), false)
        .unwrap();

    let mut second = quiet_interpreter();

    second
        .evaluate(&format!("\"{}\" load-defs", path.display()), false)
        .unwrap();

    assert_eq!(
        second.dictionary().definitions(),
        first.dictionary().definitions()
    );

    second.evaluate("3 cube pick-one nothing", false).unwrap();
    assert_eq!(stack_text(&second), ["27", "[1 'a']"]);
}

#[test]
fn load_ignores_top_level_code() {
    let path = scratch_file("with-code.bee");

    fs::write(&path, "1 2 3\n: four 4 ;\nprint\n").unwrap();

    let mut interpreter = quiet_interpreter();

    interpreter
        .evaluate(&format!("'{}' load-defs four", path.display()), false)
        .unwrap();

    assert_eq!(stack_text(&interpreter), ["4"]);
}

#[test]
fn loaded_words_replace_existing_ones() {
    let path = scratch_file("replace.bee");

    fs::write(&path, ": answer 42 ;\n").unwrap();

    let mut interpreter = quiet_interpreter();

    interpreter.evaluate(": answer 0 ;", false).unwrap();
    interpreter
        .evaluate(&format!("'{}' load-defs answer", path.display()), false)
        .unwrap();

    assert_eq!(stack_text(&interpreter), ["42"]);
}

#[test]
fn loading_a_missing_file_fails() {
    let path = scratch_file("does-not-exist.bee");
    let mut interpreter = quiet_interpreter();
    let error = interpreter
        .evaluate(&format!("'{}' load-defs", path.display()), false)
        .unwrap_err();

    assert_eq!(error.kind(), &ErrorKind::Io);
}

#[test]
fn loading_a_broken_file_fails() {
    let path = scratch_file("broken.bee");

    fs::write(&path, ": oops [1 ;\n").unwrap();

    let mut interpreter = quiet_interpreter();
    let error = interpreter
        .evaluate(&format!("'{}' load-defs", path.display()), false)
        .unwrap_err();

    assert_eq!(error.kind(), &ErrorKind::UnexpectedSemicolon);
    assert!(!interpreter.dictionary().is_defined("oops"));
}

#[test]
fn dump_refuses_values_without_source_syntax() {
    let path = scratch_file("cannot.bee");
    let _ = fs::remove_file(&path);

    // A list of numbers has no literal syntax, so it can only get into a definition from outside
    // the parser.
    let numbers = Value::null().as_list().unwrap().cons(Value::Int(1));
    let mut interpreter = quiet_interpreter();

    interpreter.evaluate(": fine 1 ;", false).unwrap();
    interpreter
        .dictionary_mut()
        .add("numbers".to_string(), vec![Term::Literal(Value::List(numbers))]);

    let error = interpreter
        .evaluate(&format!("'{}' dump-defs", path.display()), false)
        .unwrap_err();

    assert_eq!(error.kind(), &ErrorKind::CannotUnparse);
    assert!(!path.exists());
}

#[test]
fn expand_def_inlines_one_level() {
    let mut interpreter = quiet_interpreter();

    interpreter
        .evaluate(": sq dup * ; : quad sq sq ; [quad 1 + [sq] unknown] expand-def", false)
        .unwrap();

    assert_eq!(stack_text(&interpreter), ["[sq sq 1 + [sq] unknown]"]);

    interpreter.evaluate("expand-def", false).unwrap();
    assert_eq!(stack_text(&interpreter), ["[dup * dup * 1 + [sq] unknown]"]);

    interpreter.evaluate("pop 3 [quad] expand-def apply", false).unwrap();
    assert_eq!(stack_text(&interpreter), ["81"]);
}

#[test]
fn expand_def_only_replaces_defined_names() {
    let mut interpreter = quiet_interpreter();

    interpreter
        .evaluate(": sq dup * ; [\"sq\" [sq] dup missing sq] expand-def", false)
        .unwrap();

    assert_eq!(
        stack_text(&interpreter),
        ["[\"sq\" [sq] dup missing dup *]"]
    );
}
