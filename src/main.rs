use clap::{Arg, ArgAction, Command};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use syspeek::commands;

fn build_cli() -> Command {
    Command::new("syspeek")
        .about("SysPeek: a simple system monitoring CLI tool 🖥️")
        .disable_version_flag(true)
        .after_help("Examples:\n  syspeek --all\n  syspeek --cpu --refresh=2")
        .arg(
            Arg::new("cpu")
                .long("cpu")
                .help("Show CPU usage")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mem")
                .long("mem")
                .help("Show memory usage")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("net")
                .long("net")
                .help("Show network usage")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("disk")
                .long("disk")
                .help("Show disk usage")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .help("Show all information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("refresh")
                .long("refresh")
                .value_name("N")
                .help("Refresh every N seconds (e.g. --refresh=2)")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .value_name("PATH")
                .help("Also append plain-text output to this file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print the version number and exit")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> ExitCode {
    syspeek::init_logging();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let matches = build_cli().get_matches();

    let result = if matches.get_flag("version") {
        commands::version()
    } else {
        commands::monitor::execute(&matches)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // stdout may already be closed
            let _ = writeln!(std::io::stdout(), "⚠️ {}", e);
            ExitCode::FAILURE
        }
    }
}
