// automatty: classical automata over binary strings with a step-trace TUI

mod automata;
mod ui;

use std::io;
use std::process::ExitCode;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use automata::{Machine, Verdict};
use ui::App;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        // No arguments: interactive TUI.
        1 => match run_tui() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },
        // Machine only: print the canned battery table.
        2 => match parse_machine(&args[1]) {
            Some(machine) => run_battery(machine),
            None => usage(&args[0]),
        },
        // Machine plus input: one-shot console run with trace.
        3 => match parse_machine(&args[1]) {
            Some(machine) => run_once(machine, &args[2]),
            None => usage(&args[0]),
        },
        _ => usage(&args[0]),
    }
}

fn parse_machine(name: &str) -> Option<Machine> {
    match name.to_ascii_lowercase().as_str() {
        "dfa" => Some(Machine::Dfa),
        "pda" => Some(Machine::Pda),
        "npda" => Some(Machine::Npda),
        _ => None,
    }
}

fn usage(program_name: &str) -> ExitCode {
    eprintln!("Usage: {} [dfa|pda|npda] [input]", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {}                # interactive TUI", program_name);
    eprintln!("  {} npda           # print the NPDA self-test table", program_name);
    eprintln!("  {} npda 1001      # run one string, print the trace", program_name);
    ExitCode::from(2)
}

/// Run one string through one machine and print the trace, dfa.c style
fn run_once(machine: Machine, input: &str) -> ExitCode {
    let report = match machine.run(input) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    println!("{} | language: {}", machine.name(), machine.language());
    println!("input: {:?}", input);
    println!();
    for step in &report.steps {
        let read = step
            .read
            .map(|s| s.to_string())
            .unwrap_or_else(|| "ε".to_string());
        match &step.stack {
            Some(stack) => println!(
                "gen {:>3} | read {} | state {:<8} | cursor {:>3} | stack {}",
                step.generation, read, step.state, step.cursor, stack
            ),
            None => println!(
                "gen {:>3} | read {} | state {:<8} | cursor {:>3}",
                step.generation, read, step.state, step.cursor
            ),
        }
    }
    println!();
    println!("verdict: {}", report.verdict);

    match report.verdict {
        Verdict::Accepted => ExitCode::SUCCESS,
        Verdict::Rejected | Verdict::Invalid => ExitCode::FAILURE,
    }
}

/// Print a machine's canned self-test table
fn run_battery(machine: Machine) -> ExitCode {
    let entries = match machine.battery() {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    println!("{} | language: {}", machine.name(), machine.language());
    println!();
    for (i, entry) in entries.iter().enumerate() {
        let input = if entry.input.is_empty() {
            "(empty)"
        } else {
            entry.input
        };
        println!("Test {:>2}: {:<12} -> {}", i + 1, input, entry.verdict);
    }
    ExitCode::SUCCESS
}

fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
