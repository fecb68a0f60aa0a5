use clap::Parser;
use loxlex::{Reporter, Scanner, Token, TokenType};
use std::{
    error::Error,
    fs,
    io::{self, Write},
    process,
};

/// Exit status for a script that failed to scan (sysexits EX_DATAERR).
const EXIT_DATA_ERROR: i32 = 65;

#[derive(Parser, Debug)]
struct Args {
    filename: Option<String>,

    /// Print the kind and literal of every token, not just its lexeme.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.filename {
        Some(filename) => run_script(&filename, args.debug),
        None => repl(args.debug),
    }?;

    Ok(())
}

fn run_script(filename: &str, debug: bool) -> Result<(), Box<dyn Error>> {
    let mut reporter = Reporter::new();
    let source = String::from_utf8(fs::read(filename)?)?;
    run(&source, &mut reporter, debug);

    if reporter.had_error() {
        process::exit(EXIT_DATA_ERROR);
    }

    Ok(())
}

fn repl(debug: bool) -> Result<(), Box<dyn Error>> {
    let mut reporter = Reporter::new();
    loop {
        let mut buf = String::new();
        io::stdout().write_all(b"> ")?;
        io::stdout().flush()?;
        if io::stdin().read_line(&mut buf)? == 0 {
            return Ok(());
        }

        let line = buf.trim_end_matches(['\n', '\r']);
        if line == "exit" {
            return Ok(());
        }

        run(line, &mut reporter, debug);
        reporter.reset();
    }
}

fn run(source: &str, reporter: &mut Reporter, debug: bool) {
    let tokens = Scanner::new(source).scan_all(reporter);

    for diagnostic in reporter.diagnostics() {
        println!("{}", diagnostic);
    }
    for token in tokens {
        print_token(&token, debug);
    }
}

fn print_token(token: &Token, debug: bool) {
    if debug {
        println!("{}", token);
    } else if token.t != TokenType::Eof {
        println!("{}", token.lexeme);
    }
}
