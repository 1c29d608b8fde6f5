// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgMatches, Command, command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    ]
}

pub fn build_cli() -> Command {
    command!()
        .name("smartspend")
        .about("Track income and expenses, see trends, and get budgeting advice")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .help("Path to the SQLite database (overrides SMARTSPEND_DB)"),
        )
        .arg(
            Arg::new("as_of")
                .long("as-of")
                .global(true)
                .help("Reference date YYYY-MM-DD for seed data and the monthly trend (default: today)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("init").about("Create the database (seeding sample data on first run)"))
        .subcommand(
            Command::new("overview")
                .about("Totals, 6-month trend, expense structure and recent transactions")
                .args(json_args()),
        )
        .subcommand(
            Command::new("tx")
                .about("Add, list and delete transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD (default: reference date)"))
                        .arg(
                            Arg::new("suggest")
                                .long("suggest")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("category")
                                .help("Ask the advice service to pick the category"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("limit").long("limit").value_parser(value_parser!(usize)))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Individual analytics views")
                .subcommand_required(true)
                .subcommand(Command::new("summary").args(json_args()))
                .subcommand(Command::new("categories").args(json_args()))
                .subcommand(Command::new("trend").args(json_args())),
        )
        .subcommand(Command::new("categories").about("List canonical categories"))
        .subcommand(
            Command::new("advise")
                .about("Budgeting advice for the 50 most recent transactions")
                .args(json_args()),
        )
        .subcommand(
            Command::new("suggest")
                .about("Suggest a category for a description")
                .arg(Arg::new("description").long("description").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Write all transactions to a file")
                .arg(Arg::new("format").long("format").required(true).help("csv|json"))
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}

/// Whether the chosen subcommand reads or writes the database. Help,
/// `categories` and `suggest` never touch it.
pub fn needs_storage(matches: &ArgMatches) -> bool {
    !matches!(matches.subcommand_name(), None | Some("categories") | Some("suggest"))
}
