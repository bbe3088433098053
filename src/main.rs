#![allow(nonstandard_style)]

mod error_handling;
mod evaluating;
mod formatting;
mod parsing;
mod repl;
mod scanning;

use clap::Parser;
use repl::*;

/// Interactive calculator for `+`, `-` and `*` over non-negative integers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the syntax tree of each expression before its value.
    #[arg(short, long)]
    tree: bool,

    /// Evaluate this expression once instead of starting the prompt.
    expression: Option<String>,
}

fn main() -> rustyline::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match respond(&expression, args.tree) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error, {}", e);
                std::process::exit(1);
            },
        }
        return Ok(());
    }

    Repl::new(args.tree)?.run()
}
