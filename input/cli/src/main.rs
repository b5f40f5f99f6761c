use clap::{Parser as ClapParser, Subcommand};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use doomweb_common::error::ShellError;
use doomweb_common::event::TransitionKind;
use doomweb_common::music::MusicConfig;
use doomweb_common::touch::TOUCH_CONTROLS;
use doomweb_gamepad::ACTIONS;
use doomweb_trace::{ReplayEntry, ReplayEvent};
use log::debug;
use std::fs;
use std::process;

#[derive(ClapParser)]
#[command(name = "doomweb")]
#[command(version)]
#[command(about = "Developer tools for the doomweb browser shell", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a gamepad trace (.pad) through the translator
    Replay {
        file: String,

        /// Hide cycles that ran with no gamepad tracked
        #[arg(long)]
        quiet_idle: bool,
    },
    /// Print the gamepad and touch key mappings
    Keymap,
    /// Write the music substitution config loaded into the runtime
    MusicCfg {
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn print_error(filename: &str, source: &str, err: &ShellError) {
    let mut files = SimpleFiles::new();
    let file_id = files.add(filename, source);

    let diagnostic = match err {
        ShellError::TraceSyntax { message, span } => Diagnostic::error()
            .with_message("Trace error")
            .with_labels(vec![
                Label::primary(file_id, span.range()).with_message(message),
            ]),
        other => Diagnostic::error().with_message(other.to_string()),
    };

    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = term::Config::default();
    let _ = term::emit(&mut writer.lock(), &config, &files, &diagnostic);
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", "error".red().bold(), message);
    process::exit(1);
}

fn print_entry(entry: &ReplayEntry) {
    let line = format!("{:>4}", entry.line).dimmed();
    match entry.event {
        ReplayEvent::Transition(transition) => {
            let kind = match transition.kind {
                TransitionKind::Down => "down".green().bold(),
                TransitionKind::Up => "up".yellow().bold(),
            };
            println!("{line}: {kind} {}", transition.key);
        }
        other => println!("{line}: {}", other.to_string().cyan()),
    }
}

fn replay(file: &str, quiet_idle: bool) {
    let source = match fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => fail(format!("{file}: {e}")),
    };

    let trace = match doomweb_trace::parse(&source) {
        Ok(t) => t,
        Err(errors) => {
            for err in &errors {
                print_error(file, &source, err);
            }
            process::exit(1);
        }
    };
    debug!("parsed {} steps from {file}", trace.steps.len());

    let entries = doomweb_trace::replay(&trace);
    let mut transitions = 0;
    for entry in &entries {
        if matches!(entry.event, ReplayEvent::Transition(_)) {
            transitions += 1;
        }
        if quiet_idle && entry.event == ReplayEvent::Idle {
            continue;
        }
        print_entry(entry);
    }

    println!(
        "{}: replayed {} steps, {} transitions",
        "ok".green().bold(),
        trace.steps.len(),
        transitions
    );
}

fn keymap() {
    println!("{}", "gamepad".bold());
    for (slot, action) in ACTIONS.iter().enumerate() {
        println!("  {slot:>2}  {:<18} {}", action.input, action.key);
    }
    println!("{}", "touch".bold());
    for control in TOUCH_CONTROLS {
        println!("      {:<18} {}", control.element_id, control.key);
    }
}

fn music_cfg(output: Option<&str>) {
    let rendered = MusicConfig::doom1().render();
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                fail(ShellError::from(e));
            }
            println!("{}: wrote {}", "ok".green().bold(), path);
        }
        None => println!("{rendered}"),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Replay { file, quiet_idle } => replay(&file, quiet_idle),
        Command::Keymap => keymap(),
        Command::MusicCfg { output } => music_cfg(output.as_deref()),
    }
}
