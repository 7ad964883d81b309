// ABOUTME: Process entry point: file execution and the interactive prompt

use clap::Parser;
use coiz::config;
use coiz::error::CoizError;
use coiz::highlighter::CoizHelper;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use std::process::ExitCode;

/// Interpreter for the Coiz scripting language
#[derive(Parser, Debug)]
#[command(name = "coiz")]
#[command(version = config::VERSION)]
#[command(about = "A tree-walking interpreter for the Coiz scripting language")]
struct CliArgs {
    /// Script file to execute (omit to start the interactive prompt)
    #[arg(value_name = "SCRIPT")]
    scripts: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match args.scripts.as_slice() {
        [] => run_prompt(),
        [script] => run_file(script),
        _ => {
            println!("{}", config::USAGE);
            ExitCode::from(64)
        }
    }
}

/// Execute a script file. Any failure exits with status 65; diagnostics for
/// lexical errors were already printed during the scan.
fn run_file(path: &PathBuf) -> ExitCode {
    let filename = path.display().to_string();
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            println!("Cannot read script file {}: {}", filename, e);
            return ExitCode::from(65);
        }
    };

    match coiz::run(&source, &filename) {
        Ok(_) => ExitCode::SUCCESS,
        Err(CoizError::ScanFailed) => ExitCode::from(65),
        Err(e) => {
            println!("{}", e);
            ExitCode::from(65)
        }
    }
}

/// Read-evaluate loop. Each line runs through a fresh pipeline; errors are
/// printed and the prompt continues.
fn run_prompt() -> ExitCode {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl = match Editor::with_config(config) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to initialize prompt: {}", e);
            return ExitCode::FAILURE;
        }
    };
    rl.set_helper(Some(CoizHelper::new()));

    let _ = rl.load_history(config::HISTORY_FILE);

    println!("{}", config::WELCOME_MESSAGE);
    println!("{}", config::WELCOME_SUBTITLE);

    loop {
        match rl.readline(config::PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match coiz::run(&line, "") {
                    Ok(_) => {}
                    // The scanner already reported its diagnostics.
                    Err(CoizError::ScanFailed) => {}
                    Err(e) => println!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(config::HISTORY_FILE);
    ExitCode::SUCCESS
}
