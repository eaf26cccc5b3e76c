//! Command-line interface definition.
//!
//! This module declares the arguments accepted by the binary and converts
//! parsed matches into a `Command` for the application to run.

use crate::error::{AppError, AppResult};
use crate::state::FieldName;
use clap::{crate_version, App as ClapApp, AppSettings, Arg, ArgMatches, SubCommand};

/// Long flag names for each form field, in form order.
const FIELD_FLAGS: [(&str, FieldName); 7] = [
    ("first-name", FieldName::FirstName),
    ("last-name", FieldName::LastName),
    ("address-line1", FieldName::AddressLine1),
    ("country", FieldName::Country),
    ("city", FieldName::City),
    ("email", FieldName::Email),
    ("phone", FieldName::PhoneNumber),
];

/// Specifying the action requested on the command line.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    List { page: usize },
    Show { id: String },
    Add { fields: Vec<(FieldName, String)> },
}

/// Options shared by every command.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Options {
    pub config_dir: Option<String>,
    pub verbosity: u64,
    pub command: Command,
}

/// Build the argument parser.
///
pub fn build() -> ClapApp<'static, 'static> {
    let add = FIELD_FLAGS.iter().fold(
        SubCommand::with_name("add")
            .about("Add an employee to the directory")
            .arg(
                Arg::with_name("set")
                    .long("set")
                    .value_name("FIELD=VALUE")
                    .help("Set a field by its form key, e.g. phoneNumber=5551234")
                    .takes_value(true)
                    .multiple(true)
                    .number_of_values(1),
            ),
        |cmd, &(flag, name)| {
            cmd.arg(
                Arg::with_name(flag)
                    .long(flag)
                    .value_name("TEXT")
                    .help(name.label())
                    .takes_value(true),
            )
        },
    );

    ClapApp::new("employee-directory")
        .version(crate_version!())
        .about("Browse and extend a hosted employee directory")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true)
                .global(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .help("Increase log verbosity")
                .multiple(true)
                .global(true),
        )
        .subcommand(
            SubCommand::with_name("list")
                .about("List one page of employees")
                .arg(
                    Arg::with_name("page")
                        .long("page")
                        .value_name("N")
                        .help("Page to fetch, starting at 1")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("show")
                .about("Show the details of one employee")
                .arg(Arg::with_name("id").required(true).index(1)),
        )
        .subcommand(add)
}

/// Convert parsed matches into options, rejecting malformed values.
///
pub fn parse(matches: &ArgMatches) -> AppResult<Options> {
    let (name, sub) = matches.subcommand();
    let sub = sub.ok_or_else(|| AppError::InvalidArgument("missing command".to_string()))?;

    // Global arguments may be given before or after the subcommand
    let config_dir = matches
        .value_of("config")
        .or_else(|| sub.value_of("config"))
        .map(str::to_owned);
    let verbosity = matches
        .occurrences_of("verbose")
        .max(sub.occurrences_of("verbose"));

    let command = match name {
        "list" => Command::List {
            page: parse_page(sub.value_of("page"))?,
        },
        "show" => Command::Show {
            id: sub.value_of("id").unwrap_or_default().to_owned(),
        },
        "add" => Command::Add {
            fields: parse_fields(sub)?,
        },
        other => {
            return Err(AppError::InvalidArgument(format!(
                "unknown command '{}'",
                other
            )))
        }
    };

    Ok(Options {
        config_dir,
        verbosity,
        command,
    })
}

fn parse_page(value: Option<&str>) -> AppResult<usize> {
    match value {
        None => Ok(1),
        Some(text) => match text.parse::<usize>() {
            Ok(page) if page > 0 => Ok(page),
            _ => Err(AppError::InvalidArgument(format!(
                "page must be a positive number, got '{}'",
                text
            ))),
        },
    }
}

fn parse_fields(sub: &ArgMatches) -> AppResult<Vec<(FieldName, String)>> {
    let mut fields: Vec<(FieldName, String)> = FIELD_FLAGS
        .iter()
        .filter_map(|&(flag, name)| sub.value_of(flag).map(|v| (name, v.to_owned())))
        .collect();

    if let Some(values) = sub.values_of("set") {
        for pair in values {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                AppError::InvalidArgument(format!("expected FIELD=VALUE, got '{}'", pair))
            })?;
            fields.push((key.parse::<FieldName>()?, value.to_owned()));
        }
    }
    Ok(fields)
}
