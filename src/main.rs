//! algotrace: step-by-step execution traces of textbook algorithms.
//!
//! `algotrace <id> [input]` opens the trace in the terminal player,
//! `--json` prints it instead and `--list` shows every registered algorithm.

use std::io;
use std::process;

use clap::{ArgAction, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::Level;

use algotrace::registry::{self, Family};
use algotrace::ui::App;
use algotrace::{GeneratorConfig, Trace, TraceGenerator};

/// Generate and play execution traces of classic algorithms.
#[derive(Parser)]
#[command(name = "algotrace", version, about)]
struct Cli {
    /// Algorithm identifier, e.g. `merge-sort` (see --list).
    #[arg(required_unless_present = "list", value_parser = known_algorithm)]
    algorithm: Option<String>,

    /// Primary input text (default: the algorithm's example input).
    input: Option<String>,

    /// Secondary operand: search target, start node, capacity or amount.
    #[arg(short, long)]
    target: Option<String>,

    /// Print the trace as JSON instead of opening the player.
    #[arg(long)]
    json: bool,

    /// List registered algorithms and exit.
    #[arg(long)]
    list: bool,

    /// Maximum number of values in a list operand.
    #[arg(long, default_value_t = GeneratorConfig::default().max_values)]
    max_values: usize,

    /// Maximum capacity, amount or sequence length for table algorithms.
    #[arg(long, default_value_t = GeneratorConfig::default().max_table_extent)]
    max_table_extent: usize,

    /// Maximum number of cells in a dynamic-programming table.
    #[arg(long, default_value_t = GeneratorConfig::default().max_table_cells)]
    max_table_cells: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if cli.list {
        print_listing();
        return;
    }

    let Some(id) = cli.algorithm.as_deref() else {
        eprintln!("Error: no algorithm given (try --list)");
        process::exit(1);
    };
    let primary = match cli.input.as_deref() {
        Some(text) => text,
        None => registry::lookup(id).map_or("", |d| d.default_input),
    };

    let generator = TraceGenerator::new(GeneratorConfig {
        max_values: cli.max_values,
        max_table_extent: cli.max_table_extent,
        max_table_cells: cli.max_table_cells,
    });
    let trace = match generator.generate(id, primary, cli.target.as_deref()) {
        Ok(trace) => trace,
        Err(e) if e.is_user_error() => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Internal error: {}", e);
            process::exit(2);
        }
    };
    tracing::info!(algorithm = id, steps = trace.len(), "trace ready");

    let result = if cli.json {
        print_json(&trace)
    } else {
        play(trace)
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Rejects unregistered ids as a usage error before any input is parsed
fn known_algorithm(id: &str) -> Result<String, String> {
    match registry::lookup(id) {
        Some(_) => Ok(id.to_string()),
        None => Err(format!(
            "unknown algorithm '{}' (run `algotrace --list` to see the available algorithms)",
            id
        )),
    }
}

fn print_listing() {
    let mut family: Option<Family> = None;
    for d in registry::all() {
        if family != Some(d.family) {
            println!("{}:", d.family);
            family = Some(d.family);
        }
        let hint = d
            .shape
            .secondary_hint()
            .map(|h| format!("  [--target: {}]", h))
            .unwrap_or_default();
        println!("  {:<16} {:<28} {}{}", d.id, d.name, d.default_input, hint);
    }
}

fn print_json(trace: &Trace) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(trace)?);
    Ok(())
}

fn play(trace: Trace) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(trace);
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_is_a_usage_error() {
        let err = Cli::try_parse_from(["algotrace", "bogo-sort"])
            .err()
            .expect("unknown id rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("--list"));

        let cli = Cli::try_parse_from(["algotrace", "merge-sort", "3,1,2"]).unwrap();
        assert_eq!(cli.algorithm.as_deref(), Some("merge-sort"));
        assert_eq!(cli.max_table_cells, GeneratorConfig::default().max_table_cells);
        assert!(Cli::try_parse_from(["algotrace", "--list"]).is_ok());
    }
}
