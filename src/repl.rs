use crate::error_handling::*;
use crate::evaluating::*;
use crate::formatting::format;
use crate::parsing::*;
use crate::scanning::*;
use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = ">>> ";

fn build_tree(source: &str) -> Result<Node> {
    let tokens = scan(source)?;
    debug!("tokens: {:?}", tokens.iter().map(Token::to_string).collect::<Vec<_>>());
    let tree = parse(&tokens)?;
    debug!("tree: {}", format(&tree));
    Ok(tree)
}

/// Runs one line of text through scanning, parsing and evaluation.
pub fn calculate(source: &str) -> Result<i64> {
    evaluate(&build_tree(source)?)
}

/// The text printed for one line: the value, preceded by the tree when asked.
pub fn respond(source: &str, show_tree: bool) -> Result<String> {
    if !show_tree {
        return calculate(source).map(|value| value.to_string());
    }
    let tree = build_tree(source)?;
    let value = evaluate(&tree)?;
    Ok(format!("{}\n{}", format(&tree), value))
}

pub struct Repl {
    editor: DefaultEditor,
    show_tree: bool,
}

impl Repl {
    pub fn new(show_tree: bool) -> rustyline::Result<Self> {
        Ok(Self{editor: DefaultEditor::new()?, show_tree})
    }

    /// Prompts until interrupted or out of input. A failing line is
    /// reported and the next one is read.
    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("Simple arithmetic");

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }

                    match respond(&line, self.show_tree) {
                        Ok(output) => println!("{}", output),
                        Err(e) => {
                            warn!("{:?} rejected: {:?}", line, e);
                            println!("Error, {}", e);
                        },
                    }
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    return Ok(());
                },
                Err(e) => return Err(e),
            }
        }
    }
}
