use std::{fs, io, process};

use clap::Parser;
use minipy::run;

/// minipy is an interpreter for a small indentation-sensitive,
/// object-oriented scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a path to a script file instead of inline source.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let mut stdout = io::stdout();
    if let Err(e) = run(&source, &mut stdout) {
        eprintln!("{e}");
        process::exit(1);
    }
}
