//! Command-line surface: `drillkit <exercise> [--sentinel q]
//! [--max-line-bytes N] [-v...]`.
use clap::{Arg, ArgAction, ArgMatches, Command, builder::NonEmptyStringValueParser};
use drillkit::InputOptions;
use log::LevelFilter;

use crate::exercises::{DEFAULT_SPARSE_ENTRIES, DEFAULT_STACK_CAPACITY, Exercise};

/// Environment variable read by the logger, e.g. `DRILLKIT_LOG=debug`.
pub const LOG_ENV: &str = "DRILLKIT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub exercise: Exercise,
    pub options: InputOptions,
    pub verbosity: u8,
}

impl Settings {
    /// # Panics
    ///
    /// If `matches` did not come from [`command`].
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mut options = InputOptions::default();
        if let Some(sentinel) = matches.get_one::<String>("sentinel") {
            options.sentinel.clone_from(sentinel);
        }
        options.max_line_bytes = matches.get_one::<usize>("max_line_bytes").copied();

        let exercise = match matches.subcommand() {
            Some(("stack", sub)) => Exercise::Stack {
                capacity: sub
                    .get_one::<usize>("capacity")
                    .copied()
                    .unwrap_or(DEFAULT_STACK_CAPACITY),
            },
            Some(("list", _)) => Exercise::List,
            Some(("collect", _)) => Exercise::Collect,
            Some(("search", _)) => Exercise::Search,
            Some(("mat-add", _)) => Exercise::MatAdd,
            Some(("mat-mult", _)) => Exercise::MatMult,
            Some(("sparse", sub)) => Exercise::Sparse {
                max_entries: sub
                    .get_one::<usize>("max_entries")
                    .copied()
                    .unwrap_or(DEFAULT_SPARSE_ENTRIES),
            },
            _ => unreachable!("subcommand is required by CLI configuration"),
        };

        Self {
            exercise,
            options,
            verbosity: matches.get_count("verbose"),
        }
    }

    /// Default log filter for the chosen verbosity; `DRILLKIT_LOG` overrides it.
    pub fn log_filter(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Error,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn command() -> Command {
    Command::new("drillkit")
        .version(clap::crate_version!())
        .about("Interactive data-structure drills over a strict integer prompt")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("sentinel")
                .long("sentinel")
                .global(true)
                .value_name("WORD")
                .help("Line that stops input (default: q)")
                .value_parser(NonEmptyStringValueParser::new()),
        )
        .arg(
            Arg::new("max_line_bytes")
                .long("max-line-bytes")
                .global(true)
                .value_name("N")
                .help("Refuse input lines longer than N bytes, ending the exercise")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Log more to stderr (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("stack")
                .about("Push, pop and peek on an array-backed stack")
                .arg(
                    Arg::new("capacity")
                        .long("capacity")
                        .value_name("N")
                        .help("Initial stack capacity")
                        .default_value("5")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(Command::new("list").about("Insert into and delete from a singly linked list"))
        .subcommand(Command::new("collect").about("Collect integers until stopped, then echo them"))
        .subcommand(Command::new("search").about("Collect integers, then look values up by position"))
        .subcommand(Command::new("mat-add").about("Add two matrices"))
        .subcommand(Command::new("mat-mult").about("Multiply two matrices"))
        .subcommand(
            Command::new("sparse")
                .about("Store a matrix in coordinate-list form")
                .arg(
                    Arg::new("max_entries")
                        .long("max-entries")
                        .value_name("N")
                        .help("Initial capacity of the entry list")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}
