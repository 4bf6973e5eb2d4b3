// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::ffi::OsString;
use std::io::IsTerminal as _;
use std::path::PathBuf;

use chrono::Local;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use huddle_core::{APP_NAME, CalendarController};
use tracing_subscriber::EnvFilter;

use crate::cmd_event::{CmdEventAdd, CmdEventRemove, CmdEventRsvp};
use crate::cmd_show::CmdShow;
use crate::config::Config;
use crate::storage::FileStorage;

/// The controller over the local zone and on-disk storage, as every
/// command uses it.
pub type Controller = CalendarController<Local, FileStorage>;

/// Run the Huddle command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run() {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A personal and shared event calendar with month, week and day views.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // no subcommand shows the calendar
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/huddle/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/huddle/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdShow::command())
            .subcommand(CmdEventAdd::command())
            .subcommand(CmdEventRemove::command())
            .subcommand(CmdEventRsvp::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let command = Self::command();
        let matches = command.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = Self::command();
        let matches = command.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)?),
            Some((CmdEventAdd::NAME, matches)) => Add(CmdEventAdd::from(matches)),
            Some((CmdEventRemove::NAME, matches)) => Remove(CmdEventRemove::from(matches)),
            Some((CmdEventRsvp::NAME, matches)) => Rsvp(CmdEventRsvp::from(matches)?),
            None => Show(CmdShow::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let config = Config::parse(self.config)?;
        let storage = FileStorage::new(config.data_dir()?)?;
        let mut controller = Controller::new(Local::now(), config.user(), storage);
        self.command.run(&mut controller)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Render the calendar
    Show(CmdShow),

    /// Add a new event
    Add(CmdEventAdd),

    /// Remove an event
    Remove(CmdEventRemove),

    /// Set or clear an RSVP
    Rsvp(CmdEventRsvp),
}

impl Commands {
    pub fn run(self, controller: &mut Controller) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::Show(cmd) => cmd.run(controller),
            Commands::Add(cmd) => cmd.run(controller),
            Commands::Remove(cmd) => cmd.run(controller),
            Commands::Rsvp(cmd) => cmd.run(controller),
        }
    }
}
