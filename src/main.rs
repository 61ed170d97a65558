use std::fs;

use clap::Parser;
use quill::{Environment, get_result, interpreter::value::core::Value, run_source};
use rustyline::{DefaultEditor, error::ReadlineError};

/// quill is a small, dynamically typed, expression-oriented scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the value of the last statement of
    /// a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Inline source text, or a path when --file is given. Omit it to start
    /// the interactive session.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        repl();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
    }
}

/// Runs the interactive session.
///
/// One global environment lives for the whole session, so bindings persist
/// from line to line. Parse errors are listed without evaluating the line;
/// runtime errors print as `ERROR: <message>`; `null` results are not
/// echoed.
fn repl() {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to initialize the line editor: {e}");
            std::process::exit(1);
        },
    };

    println!("quill {} — interactive session", env!("CARGO_PKG_VERSION"));
    println!("Feel free to type in commands.");

    let env = Environment::new();

    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                match run_source(&line, &env) {
                    Ok(Value::Null) => {},
                    Ok(value) => println!("{value}"),
                    Err(error) => println!("{error}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error:?}");
                break;
            },
        }
    }
}
