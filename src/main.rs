mod cli;

use std::{path::Path, process};

use clap::Parser;
use cli::{Cli, Command};
use postfix::Strictness;

const DEMO_EXPRESSION: &str = "a+b*(c^d-e)^(f+g*h)-i";

fn main() {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(output) => print!("{output}"),
        Err(why) => {
            eprintln!("{why}");
            process::exit(1);
        }
    }
}

/// Produces everything the command prints to stdout, or the message for stderr.
fn run(cli: Cli) -> Result<String, String> {
    let strictness = Strictness::from(cli.mode);

    match cli.command {
        None => render_conversion(DEMO_EXPRESSION, strictness),
        Some(Command::Convert { expression }) => render_conversion(&expression, strictness),
        Some(Command::File { file }) => convert_file(&file, strictness),
    }
}

fn render_conversion(expression: &str, strictness: Strictness) -> Result<String, String> {
    let postfix = postfix::convert_with(expression, strictness).map_err(|why| why.to_string())?;
    Ok(format!(
        "Infix Expression: {expression}\nPostfix Expression: {postfix}\n"
    ))
}

fn convert_file(file_path: &Path, strictness: Strictness) -> Result<String, String> {
    let src = std::fs::read_to_string(file_path)
        .map_err(|why| format!("Failed to read {file_path:?}: {why}"))?;

    let mut output = String::new();
    for (number, line) in src.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        log::debug!("line {}: `{line}`", number + 1);
        let postfix = postfix::convert_with(line, strictness)
            .map_err(|why| format!("Line {}: {why}", number + 1))?;
        output.push_str(&postfix);
        output.push('\n');
    }
    Ok(output)
}
