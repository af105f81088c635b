//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{Command, LineageArgs, ProfileAction, ProfileArgs, RelativesArgs, ResolveArgs, ViewerArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Run the interactive REPL.
///
/// `dataset` pins the dataset for the whole session; without it the active
/// profile's dataset is reloaded whenever the profile changes.
pub fn run_repl(config: &mut Config, dataset: Option<&Path>, formatter: &Formatter) -> Result<()> {
    let mut session = Session::open(dataset, config)?;

    println!("{}", formatter.info("Kinship REPL - Type 'help' for commands, 'exit' to quit"));
    println!(
        "{}",
        formatter.info(&format!(
            "Loaded {} members from {}",
            session.graph().len(),
            session.origin().describe()
        ))
    );
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("kinship> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                // Parse command
                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, &mut session, config, dataset, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some((&head, args)) = parts.split_first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match head {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "resolve" => parse_resolve_command(args),
        "viewer" => parse_viewer_command(args),
        "relatives" => parse_relatives_command(args),
        "lineage" => parse_lineage_command(args),
        "profile" => parse_profile_command(args),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            head
        ))),
    }
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: Command,
    session: &mut Session,
    config: &mut Config,
    dataset: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        Command::Resolve(args) => commands::execute_resolve(args, session, formatter)?,
        Command::Viewer(args) => commands::execute_viewer(args, session, formatter)?,
        Command::Relatives(args) => commands::execute_relatives(args, session, formatter)?,
        Command::Lineage(args) => commands::execute_lineage(args, session, formatter)?,
        Command::Profile(args) => {
            let changes_profile = matches!(args.action, ProfileAction::Switch { .. } | ProfileAction::Set { .. });
            commands::execute_profile(args, config, formatter)?;
            if changes_profile {
                debug!(profile = %config.active_profile, "reloading session");
                *session = Session::open(dataset, config)?;
            }
        }
        Command::Repl => {
            println!("{}", formatter.info("Already in REPL mode"));
        }
    }

    Ok(())
}

// Simple command parsers for REPL (minimal argument parsing)

fn parse_resolve_command(args: &[&str]) -> Result<ReplCommand> {
    let [from, to] = args else {
        return Err(CliError::InvalidInput("Usage: resolve <from> <to>".to_string()));
    };

    Ok(ReplCommand::Command(Command::Resolve(ResolveArgs {
        from: from.to_string(),
        to: to.to_string(),
    })))
}

fn parse_viewer_command(args: &[&str]) -> Result<ReplCommand> {
    let Some(member) = args.first() else {
        return Err(CliError::InvalidInput("Usage: viewer <member> [identity]".to_string()));
    };

    Ok(ReplCommand::Command(Command::Viewer(ViewerArgs {
        member: member.to_string(),
        identity: args.get(1).map(|s| s.to_string()),
    })))
}

fn parse_relatives_command(args: &[&str]) -> Result<ReplCommand> {
    let Some(member) = args.first() else {
        return Err(CliError::InvalidInput("Usage: relatives <member>".to_string()));
    };

    Ok(ReplCommand::Command(Command::Relatives(RelativesArgs {
        member: member.to_string(),
    })))
}

fn parse_lineage_command(args: &[&str]) -> Result<ReplCommand> {
    let Some(member) = args.first() else {
        return Err(CliError::InvalidInput("Usage: lineage <member> [--descendants]".to_string()));
    };

    let descendants = args[1..].iter().any(|a| matches!(*a, "-d" | "--descendants" | "down"));
    Ok(ReplCommand::Command(Command::Lineage(LineageArgs {
        member: member.to_string(),
        descendants,
    })))
}

fn parse_profile_command(args: &[&str]) -> Result<ReplCommand> {
    let Some(action) = args.first() else {
        return Ok(ReplCommand::Command(Command::Profile(ProfileArgs {
            action: ProfileAction::Show,
        })));
    };

    let action = match *action {
        "list" => ProfileAction::List,
        "show" => ProfileAction::Show,
        "switch" => {
            let Some(name) = args.get(1) else {
                return Err(CliError::InvalidInput("Usage: profile switch <name>".to_string()));
            };
            ProfileAction::Switch {
                name: name.to_string(),
            }
        }
        other => return Err(CliError::InvalidInput(format!("Unknown profile action: {}", other))),
    };

    Ok(ReplCommand::Command(Command::Profile(ProfileArgs { action })))
}

fn editor_error(err: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", err)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  resolve <from> <to>            - How <to> is related to <from>");
    println!("  viewer <member> [identity]     - Card label for a signed-in viewer");
    println!("  relatives <member>             - Everyone, from <member>'s point of view");
    println!("  lineage <member> [-d]          - Ancestors, or descendants with -d");
    println!("  profile [list|show|switch]     - Manage profiles");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
    println!("  Members can be given by id or by login identity.");
    println!();
}
