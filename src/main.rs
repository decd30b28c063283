use std::{
    fs,
    io::{self, Write},
};

use clap::Parser;
use numscript::{interpreter::evaluator::core::Context, run_line, run_script};

/// numscript is a small, easy to read scripting language for numeric
/// programs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numscript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Starts an interactive session that evaluates one statement per line.
    #[arg(short, long)]
    interactive: bool,

    /// The script to run, or a path to it when --file is set.
    #[arg(required_unless_present = "interactive")]
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.interactive {
        repl();
        return;
    }

    let Some(contents) = args.contents else {
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

    if let Err(e) = run_script(&script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the interactive loop.
///
/// Reads one line at a time from standard input and evaluates it as a single
/// statement against a persistent context, echoing the computed value as
/// `= <value>`. Errors are printed and the loop keeps accepting input. The
/// session ends on `quit`, `exit`, or end of input.
fn repl() {
    let mut context = Context::new();
    let mut input = String::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        input.clear();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match run_line(&mut context, line) {
            Ok(value) => println!("= {value:.2}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
