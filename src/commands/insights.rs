// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::analytics::insights::{generate, RULES};
use crate::db::{load_categories, load_transactions};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("rules", _)) = m.subcommand() {
        return rules();
    }
    run(conn, m)
}

fn run(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let transactions = load_transactions(conn)?;
    let categories = load_categories(conn)?;
    let insights = generate(&transactions, &categories);

    if maybe_print_json(json_flag, jsonl_flag, &insights)? {
        return Ok(());
    }

    if insights.is_empty() {
        println!("No insights for the current ledger");
        return Ok(());
    }
    for insight in &insights {
        println!("[{}] {}", insight.kind, insight.title);
        println!("  {}", insight.message);
    }
    Ok(())
}

fn rules() -> Result<()> {
    let rows: Vec<Vec<String>> = RULES
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.to_string(),
                r.kind.to_string(),
                r.description.to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Name", "Kind", "Description"], rows));
    Ok(())
}
