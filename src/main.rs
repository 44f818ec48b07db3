//! netbios-conf: NetBIOS-over-TCP/IP configurator
//!
//! Entry point for the netbios-conf application.

use netbios_conf::config::{Cli, Command, ValidatedConfig, write_default_config};
use netbios_conf::netbios::reboot::reboot_witnessed;
use netbios_conf::netbios::{Availability, SetResponse};
use netbios_conf::render::Report;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};
use run::{Operation, RunError};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let operation = match &cli.command {
        Command::Init { output } => return handle_init(output),
        Command::Get { interface } => Operation::Get {
            interface: interface.as_deref(),
        },
        Command::Set { setting, interface } => Operation::Set {
            setting: setting.as_str(),
            interface: interface.as_deref(),
        },
        Command::Interfaces => Operation::Interfaces,
    };

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    // Capability gate, checked once before any operation
    let availability = Availability::detect();
    if !availability.is_available() {
        eprintln!("{availability}");
        return exit_code::unavailable();
    }

    run_operation(&config, operation)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs one operation and prints its report.
#[cfg(not(tarpaulin_include))]
fn run_operation(config: &ValidatedConfig, operation: Operation<'_>) -> ExitCode {
    let result = run::execute(config, operation)
        .and_then(|report| Ok((report.render(config.format)?, report)));

    match result {
        Ok((rendered, report)) => {
            println!("{rendered}");
            if reboot_witnessed() {
                tracing::warn!("A reboot is required for the new NetBIOS setting to take effect");
            }
            if matches!(report, Report::Set(SetResponse::Rejected)) {
                exit_code::CONFIG_ERROR
            } else {
                exit_code::SUCCESS
            }
        }
        #[cfg(not(all(windows, feature = "wmi")))]
        Err(RunError::Unavailable(reason)) => {
            eprintln!("{reason}");
            exit_code::unavailable()
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
