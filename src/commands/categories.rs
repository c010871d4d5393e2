// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use crate::db::{load_categories, record_audit};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pick_unique_color, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("set-budget", sub)) => set_budget(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    if name.is_empty() {
        return Err(anyhow::anyhow!("Category name must not be empty"));
    }
    let color = match sub.get_one::<String>("color") {
        Some(c) => c.to_string(),
        None => {
            let existing: Vec<String> = load_categories(conn)?
                .into_iter()
                .map(|c| c.color)
                .collect();
            pick_unique_color(&existing)
        }
    };
    let budget = match sub.get_one::<String>("budget") {
        Some(s) => Some(parse_decimal(s)?),
        None => None,
    };

    conn.execute(
        "INSERT INTO categories(name, color, budget) VALUES (?1, ?2, ?3)",
        params![name, color, budget.map(|b| b.to_string())],
    )
    .with_context(|| format!("Add category '{}'", name))?;
    let id = conn.last_insert_rowid();
    record_audit(conn, "CREATE", "CATEGORY", &id.to_string())?;
    println!("Added category '{}' ({})", name, color);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let categories = load_categories(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &categories)? {
        let rows: Vec<Vec<String>> = categories
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    c.color.clone(),
                    c.effective_budget()
                        .map(|b| fmt_money(&b))
                        .unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Color", "Budget"], rows));
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let id: i64 = conn
        .query_row(
            "SELECT id FROM categories WHERE name=?1",
            params![name],
            |r| r.get(0),
        )
        .with_context(|| format!("Category '{}' not found", name))?;
    // The ledger references categories by name; deleting one leaves its
    // transactions uncategorized rather than dangling.
    conn.execute(
        "UPDATE transactions SET category=NULL WHERE category=?1",
        params![name],
    )?;
    conn.execute("DELETE FROM categories WHERE id=?1", params![id])?;
    record_audit(conn, "DELETE_CATEGORY", "CATEGORY", &id.to_string())?;
    println!("Removed category '{}'", name);
    Ok(())
}

fn set_budget(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let id: i64 = conn
        .query_row(
            "SELECT id FROM categories WHERE name=?1",
            params![name],
            |r| r.get(0),
        )
        .with_context(|| format!("Category '{}' not found", name))?;

    if amount <= Decimal::ZERO {
        conn.execute("UPDATE categories SET budget=NULL WHERE id=?1", params![id])?;
        record_audit(conn, "UPDATE", "BUDGET", &id.to_string())?;
        println!("Cleared budget for '{}'", name);
    } else {
        conn.execute(
            "UPDATE categories SET budget=?1 WHERE id=?2",
            params![amount.to_string(), id],
        )?;
        record_audit(conn, "UPDATE", "BUDGET", &id.to_string())?;
        println!("Budget for '{}' set to {}", name, fmt_money(&amount));
    }
    Ok(())
}
