// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("budgetwise")
        .version(crate_version!())
        .about("BudgetWise: personal budgeting with budget alerts, rule-based insights, and monthly reports")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("category")
                .about("Manage spending categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("color")
                                .long("color")
                                .help("Display color token; a free base hue is picked when omitted"),
                        )
                        .arg(
                            Arg::new("budget")
                                .long("budget")
                                .help("Monthly budget amount"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List categories")))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a category (its transactions become uncategorized)")
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(
                    Command::new("set-budget")
                        .about("Set a category's monthly budget (0 clears it)")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Add a transaction (negative amount = expense)")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("merchant").long("merchant").required(true))
                        .arg(Arg::new("amount").long("amount").required(true).allow_hyphen_values(true))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("recur")
                                .long("recur")
                                .help("none|daily|weekly|monthly|yearly; expands into 12 future occurrences"),
                        ),
                )
                .subcommand(
                    json_flags(
                        Command::new("list")
                            .about("List transactions")
                            .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                            .arg(Arg::new("category").long("category"))
                            .arg(
                                Arg::new("limit")
                                    .long("limit")
                                    .value_parser(clap::value_parser!(usize)),
                            ),
                    ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("reset")
                        .about("Delete all transactions")
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Confirm the reset"),
                        ),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Budget progress and overspend alerts")
                .subcommand(
                    json_flags(
                        Command::new("status")
                            .about("Spend-vs-budget for the budget period (current month by default)")
                            .arg(Arg::new("month").long("month").help("Budget period as YYYY-MM")),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Financial summaries and monthly reports")
                .subcommand(
                    json_flags(
                        Command::new("summary")
                            .about("Income, expenses, net, and top spending categories")
                            .arg(
                                Arg::new("limit")
                                    .long("limit")
                                    .value_parser(clap::value_parser!(usize))
                                    .default_value("3"),
                            ),
                    ),
                )
                .subcommand(
                    json_flags(
                        Command::new("spend")
                            .about("Per-category spending with share of total")
                            .arg(Arg::new("month").long("month").help("Filter by YYYY-MM")),
                    ),
                )
                .subcommand(
                    json_flags(
                        Command::new("monthly")
                            .about("Full monthly report over a date range")
                            .arg(Arg::new("month").long("month").help("Report month as YYYY-MM"))
                            .arg(Arg::new("start").long("start").help("Start date YYYY-MM-DD"))
                            .arg(Arg::new("end").long("end").help("End date YYYY-MM-DD (inclusive)")),
                    ),
                ),
        )
        .subcommand(
            json_flags(
                Command::new("insights")
                    .about("Evaluate the rule battery against the ledger")
                    .subcommand(Command::new("rules").about("List the available insight rules")),
            ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to CSV or JSON")
                .subcommand(
                    Command::new("transactions")
                        .about("Export transactions over a date range")
                        .arg(Arg::new("start").long("start").required(true))
                        .arg(Arg::new("end").long("end").required(true))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("report")
                        .about("Export a monthly report")
                        .arg(Arg::new("month").long("month"))
                        .arg(Arg::new("start").long("start"))
                        .arg(Arg::new("end").long("end"))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("audit")
                .about("Inspect the audit log")
                .subcommand(
                    json_flags(
                        Command::new("list").about("List audit entries, newest first").arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                    ),
                ),
        )
}
