use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use shunt::{Interpreter, run_script};

/// shunt is an easy to use command line calculator for single-line
/// arithmetic expressions with variables and assignment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shunt to look at a file instead of an expression.
    #[arg(short, long)]
    file: bool,

    /// One expression, or a script with one expression per line.
    /// Without it, shunt starts an interactive session on stdin.
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
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &contents);
            std::process::exit(1);
        })
    } else {
        contents
    };

    match run_script(&script) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Reads expressions from stdin one line at a time and prints each
/// result. Variables persist for the whole session; an error only fails
/// the line that caused it.
fn repl() {
    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }

        match interpreter.evaluate(expression) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
