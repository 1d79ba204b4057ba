use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use lispy::*;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LISPY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = App::parse();

    match app.command.unwrap_or(Command::Repl) {
        Command::Repl => repl(&app.prompt, app.quiet),
        Command::Run { path } => {
            let input = std::fs::read_to_string(&path)
                .with_context(|| format!("Unable to read {}", path.display()))?;
            for line in input.lines().filter(|line| !line.trim().is_empty()) {
                println!("{}", run_line(line));
            }
            Ok(())
        }
        Command::Eval { expr } => {
            println!("{}", run_line(&expr));
            Ok(())
        }
    }
}

#[derive(Parser)]
#[clap(about = "A tiny lisp with S-expressions and Q-expressions")]
struct App {
    /// Don't print the banner
    #[clap(short, long)]
    quiet: bool,
    #[clap(long, default_value = "lispy> ")]
    prompt: String,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive prompt (the default)
    #[clap(alias = "r")]
    Repl,
    /// Evaluate each line of a file
    #[clap(alias = "x")]
    Run { path: PathBuf },
    /// Evaluate a single expression
    #[clap(alias = "e")]
    Eval { expr: String },
}

/// Evaluate one line, rendering either its value or its syntax error
fn run_line(line: &str) -> String {
    match parse(line) {
        Ok(root) => {
            #[cfg(feature = "debug")]
            {
                print!("{}", parse::dump(root.clone()));
                println!("{} nodes", parse::node_count(root.clone()));
            }
            render(&evaluate_program(root))
        }
        Err(e) => e.to_string(),
    }
}

fn repl(prompt: &str, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("Lispy Version 0.0.0.0.1");
        println!("Press Ctrl+c to Exit\n");
    }
    let mut rl = DefaultEditor::new().context("Unable to start line editor")?;
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    warn!(error = %e, "unable to add history entry");
                }
                println!("{}", run_line(&line));
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Unable to read input"),
        }
    }
    Ok(())
}
