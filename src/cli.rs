// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .short('p')
        .default_value("month")
        .help("Report period: week|month|3m|6m|year")
}

pub fn build_cli() -> Command {
    Command::new("spendsight")
        .about("Personal finance reports: summaries, category breakdowns, monthly trends, smart insights")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("user")
                .about("Manage the current user")
                .subcommand(
                    Command::new("set")
                        .about("Set the current user id")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(Command::new("show").about("Show the current user id")),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Non-negative integer in the smallest currency unit"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("income")
                                .long("income")
                                .action(ArgAction::SetTrue)
                                .help("Record as income instead of expense"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions in a period")
                        .arg(period_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Category catalog")
                .subcommand(json_flags(
                    Command::new("list").about("List the category catalog"),
                ))
                .subcommand(
                    Command::new("resolve")
                        .about("Resolve color and icon for a category name")
                        .arg(Arg::new("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Period reports over the ledger")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Total income, expense and balance")
                        .arg(period_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Expense breakdown by category")
                        .arg(period_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("trends")
                        .about("Income/expense/balance per calendar month")
                        .arg(period_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("insights")
                        .about("Rule-generated observations")
                        .arg(period_arg()),
                )),
        )
        .subcommand(
            Command::new("seed").about("Insert deterministic sample data for the current user"),
        )
        .subcommand(
            Command::new("export")
                .about("Export raw data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export all transactions of the current user")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for inconsistencies"))
}
