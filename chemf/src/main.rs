mod error;

use chemf_parser::{catalog, parse_composition, Composition, Order, ParseMode};
use clap::Parser;
use error::ReplError;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};

#[derive(Parser)]
#[command(name = "chemf")]
#[command(version)]
#[command(about = "Converts linear chemical formulas, such as (CH3)2C[C6H2(Br)2OH]2, into empirical formulas", long_about = None)]
struct Args {
    /// Skip or repair malformed parts of a formula instead of rejecting it. Each one is still
    /// reported as a warning
    #[arg(short, long)]
    lenient: bool,

    /// Write carbon first, then hydrogen, then every other element alphabetically
    #[arg(long)]
    hill: bool,

    /// Print the result as a JSON object
    #[arg(long, conflicts_with = "names")]
    json: bool,

    /// Print one row per element with its symbol, name, and count
    #[arg(short, long)]
    names: bool,

    /// Formulas to convert (if not provided, reads one formula per line from stdin, or starts a
    /// REPL in a terminal)
    #[arg(value_name = "FORMULA")]
    formulas: Vec<String>,
}

impl Args {
    fn mode(&self) -> ParseMode {
        if self.lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        }
    }

    fn order(&self) -> Order {
        if self.hill {
            Order::Hill
        } else {
            Order::Alphabetical
        }
    }

    /// Renders a composition in the format the user asked for.
    fn render(&self, composition: &Composition) -> String {
        let order = self.order();
        if self.json {
            serde_json::json!({
                "formula": composition.display(order).to_string(),
                "composition": composition,
            }).to_string()
        } else if self.names {
            composition.iter_in(order)
                .map(|(symbol, count)| {
                    format!("{}\t{}\t{}", symbol, catalog::name(symbol).unwrap_or_default(), count)
                })
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            composition.display(order).to_string()
        }
    }
}

/// Prints the reports to stderr. Failing to write to stderr leaves nowhere else to report to, so
/// the failure is ignored.
fn report(err: ReplError, input: &str) {
    let _ = err.report_to_stderr("input", input);
}

/// Converts the given formula, printing the result to stdout and any diagnostics to stderr.
fn convert(input: &str, args: &Args) -> Result<(), ReplError> {
    let parsed = parse_composition(input, args.mode())?;
    for warning in &parsed.warnings {
        let _ = warning.warn_to_stderr("input", input);
    }

    println!("{}", args.render(&parsed.composition));
    Ok(())
}

/// Converts every non-empty line of stdin. Returns true if every line was converted.
fn convert_lines(args: &Args) -> bool {
    let mut ok = true;
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                report(err.into(), "");
                return false;
            },
        };
        if line.trim().is_empty() {
            continue;
        }

        if let Err(err) = convert(&line, args) {
            report(err, &line);
            ok = false;
        }
    }
    ok
}

/// Runs the REPL until the user exits with Ctrl-D or Ctrl-C.
fn repl(args: &Args) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        if let Err(err) = convert(&input, args) {
            report(err, &input);
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let ok = if !args.formulas.is_empty() {
        let mut ok = true;
        for formula in &args.formulas {
            if let Err(err) = convert(formula, &args) {
                report(err, formula);
                ok = false;
            }
        }
        ok
    } else if !io::stdin().is_terminal() {
        convert_lines(&args)
    } else {
        match repl(&args) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("{}", err);
                false
            },
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
