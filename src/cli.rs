//! Command dispatch for the charmfinder binary.

use crate::config::{ServerConfig, SourceMode};
use crate::data::snapshot::{load_snapshot, DEFAULT_SNAPSHOT_PATH};
use crate::data::validate::validate_snapshot;
use crate::server;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve { live: bool },
    Validate { path: String },
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve {
            live: args.iter().any(|arg| arg == "--live"),
        }),
        Some("validate") => Some(Command::Validate {
            path: args
                .get(2)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string()),
        }),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> u8 {
    match parse_command(args) {
        Some(Command::Serve { live }) => handle_serve(live),
        Some(Command::Validate { path }) => handle_validate(&path),
        None => {
            eprintln!("usage: charmfinder <serve [--live]|validate [snapshot-path]>");
            2
        }
    }
}

fn handle_serve(live: bool) -> u8 {
    let mut config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return 1;
        }
    };
    if live {
        config.mode = SourceMode::Live;
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            return 1;
        }
    };

    match runtime.block_on(server::run_server(&config)) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_validate(path: &str) -> u8 {
    let snapshot = match load_snapshot(path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };

    let report = validate_snapshot(&snapshot);
    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    if report.is_ok() {
        println!(
            "validation passed: {path} ({} zones, {} npcs)",
            snapshot.zones.len(),
            snapshot.npc_count()
        );
        0
    } else {
        eprintln!("validation failed: {} issue(s)", report.errors.len());
        for error in &report.errors {
            eprintln!("- {error}");
        }
        1
    }
}
