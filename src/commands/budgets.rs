// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::analytics::{budget, metrics};
use crate::db::{load_categories, load_transactions};
use crate::utils::{
    current_month, fmt_money, maybe_print_json, month_end, month_start, parse_month, pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("status", sub)) => status(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn status(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => current_month(),
    };
    let start = month_start(&month)?;
    let end = month_end(&month)?;

    let transactions = load_transactions(conn)?;
    let categories = load_categories(conn)?;
    let scoped = metrics::aggregate_range(&transactions, start, end);
    let overview = budget::evaluate(&categories, &scoped.category_totals);

    if maybe_print_json(json_flag, jsonl_flag, &overview)? {
        return Ok(());
    }

    if overview.statuses.is_empty() {
        println!("No budgets set for {}", month);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = overview
        .statuses
        .iter()
        .map(|s| {
            vec![
                s.category.clone(),
                fmt_money(&s.budget),
                fmt_money(&s.spent),
                fmt_money(&s.remaining),
                format!("{:.0}%", s.percentage),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Category", "Budget", "Spent", "Remaining", "% Spent"],
            rows,
        )
    );

    for alert in &overview.alerts {
        println!("! {}", alert.message);
    }
    Ok(())
}
