mod repl;

use anyhow::{Context, Result};
use calcforge::{engine::format_value, new_engine, EvalConfig, Evaluator, Lexer, ParenMode};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// ignore a `)` that has no matching `(`
    #[arg(long, global = true)]
    lenient_parens: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// evaluate a single expression
    Eval {
        #[arg(name = "EXPR")]
        expression: String,

        /// value substituted for `M`
        #[arg(short, long, allow_negative_numbers = true)]
        memory: Option<f64>,
    },
    /// run every line of a file through the calculator
    Run {
        #[arg(name = "FILE")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EvalConfig {
        parens: if cli.lenient_parens {
            ParenMode::Lenient
        } else {
            ParenMode::Strict
        },
    };

    match cli.command {
        Some(Commands::Eval { expression, memory }) => {
            let tokens = Lexer::new(&expression).tokenize()?;
            let value = Evaluator::new(config).evaluate(&tokens, memory)?;
            println!("{}", format_value(value));
        }
        Some(Commands::Run { file }) => {
            let source = fs::read_to_string(&file)
                .with_context(|| format!("could not read {}", file.display()))?;
            let mut engine = new_engine(config);
            for (number, line) in source.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let output = engine
                    .run(line)
                    .with_context(|| format!("line {}: {}", number + 1, line.trim()))?;
                println!("{}", output);
            }
        }
        None => {
            repl::start(config);
        }
    }

    Ok(())
}
