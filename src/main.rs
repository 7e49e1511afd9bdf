use clap::Parser;
use parith::{
    evaluate_line,
    interpreter::{evaluator::core::VariableStore, registry::Registries},
};
use rustyline::{error::ReadlineError, DefaultEditor};

/// parith is an easy to use interactive evaluator for arithmetic expressions
/// with variables and builtin functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression and exits instead of starting the shell.
    #[arg(short, long)]
    command: Option<String>,
}

fn main() {
    let args = Args::parse();

    let registries = Registries::new();
    let mut store = VariableStore::new();

    if let Some(source) = args.command {
        match evaluate_line(&source, &registries, &mut store) {
            Ok(result) => println!("{} = {}", result.rendered, result.value),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run_shell(&registries, &mut store) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the interactive read-evaluate-print loop.
///
/// Each non-empty line is evaluated against the shared registries and store,
/// so variables persist across lines. `exit`, Ctrl-C, and Ctrl-D all leave
/// the shell; an evaluation error is reported and the loop continues.
fn run_shell(registries: &Registries, store: &mut VariableStore) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" {
                    break;
                }
                rl.add_history_entry(line)?;

                match evaluate_line(line, registries, store) {
                    Ok(result) => println!("{} = {}", result.rendered, result.value),
                    Err(e) => println!("Error: {e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
