use bee::{
    BeeInterpreter,
    runtime::{error, interpreter::InterpreterStack},
};
use std::{
    env::{args, var},
    io::{BufRead, Write, stdin, stdout},
};
use tracing_subscriber::{EnvFilter, fmt};

/// The standard word file loaded before anything else runs.
const DEFAULT_RUNTIME: &str = "runtime.bee";

/// Get the path of the standard word file.  This is either runtime.bee in the current directory or
/// the file named by the environment variable BEE_RUNTIME.
fn runtime_path() -> String {
    var("BEE_RUNTIME").unwrap_or_else(|_| DEFAULT_RUNTIME.to_string())
}

/// Send log output to stderr, filtered by RUST_LOG.  Only warnings and errors show by default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Evaluate standard input a line at a time, showing the stack after each line.  Errors are
/// reported and the session carries on.
fn repl(interpreter: &mut BeeInterpreter, debug: bool) -> error::Result<()> {
    let input = stdin();

    for line in input.lock().lines() {
        let line = line?;

        if interpreter.evaluate(&line, debug).is_ok() {
            let stack: Vec<String> = interpreter.stack().iter().map(|value| value.to_string()).collect();

            println!("=> [{}]", stack.join(", "));
        }

        stdout().flush()?;
    }

    Ok(())
}

fn main() -> error::Result<()> {
    init_logging();

    // Gather the arguments.  Anything that isn't the debug flag is a script to run, in order.
    let mut debug = false;
    let mut scripts = Vec::new();

    for arg in args().skip(1) {
        match arg.as_str() {
            "--debug" | "-d" => debug = true,
            _ => scripts.push(arg),
        }
    }

    let mut interpreter = BeeInterpreter::new();

    interpreter.bootstrap(&runtime_path())?;

    if scripts.is_empty() {
        return repl(&mut interpreter, debug);
    }

    for script in &scripts {
        interpreter.evaluate_file(script, debug)?;
    }

    Ok(())
}
