// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{params, Connection};
use serde::Serialize;

use crate::analytics::recurrence::expand_occurrences;
use crate::db::{insert_transaction, record_audit};
use crate::models::{Recurrence, Transaction};
use crate::utils::{
    maybe_print_json, new_transaction_id, parse_date, parse_decimal, parse_recurrence,
    pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("reset", sub)) => reset(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let merchant = sub.get_one::<String>("merchant").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").map(|s| s.to_string());
    let description = sub.get_one::<String>("description").map(|s| s.to_string());
    let recurrence = match sub.get_one::<String>("recur") {
        Some(s) => parse_recurrence(s)?,
        None => Recurrence::None,
    };

    let tx = Transaction {
        id: new_transaction_id(),
        date,
        merchant,
        amount,
        category,
        description,
        recurrence,
        next_occurrence: None,
    };

    if recurrence == Recurrence::None {
        insert_transaction(conn, &tx)?;
        record_audit(conn, "CREATE", "TRANSACTION", &tx.id)?;
        println!("Recorded {} on {} at '{}'", tx.amount, tx.date, tx.merchant);
    } else {
        // A committed recurring transaction is its expansion: the generated
        // occurrences are persisted in place of the original record, all or
        // nothing.
        let occurrences = expand_occurrences(&tx);
        let db_tx = conn.unchecked_transaction()?;
        for occurrence in &occurrences {
            insert_transaction(&db_tx, occurrence)?;
        }
        record_audit(&db_tx, "CREATE", "TRANSACTION", &tx.id)?;
        db_tx.commit()?;
        println!(
            "Recorded {} {} occurrences of {} at '{}' starting {}",
            occurrences.len(),
            recurrence,
            tx.amount,
            tx.merchant,
            occurrences
                .first()
                .map(|o| o.date.to_string())
                .unwrap_or_default()
        );
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.merchant.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.recurrence.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Merchant", "Amount", "Category", "Recurrence", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub merchant: String,
    pub amount: String,
    pub category: String,
    pub recurrence: String,
    pub description: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut sql = String::from(
        "SELECT id, date, merchant, amount, category, recurrence, description
         FROM transactions WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(date,1,7)=?");
        params_vec.push(month.into());
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        sql.push_str(" AND category=?");
        params_vec.push(cat.into());
    }
    sql.push_str(" ORDER BY date DESC, id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: String = r.get(0)?;
        let date: String = r.get(1)?;
        let merchant: String = r.get(2)?;
        let amount: String = r.get(3)?;
        let category: Option<String> = r.get(4)?;
        let recurrence: String = r.get(5)?;
        let description: Option<String> = r.get(6)?;
        data.push(TransactionRow {
            id,
            date,
            merchant,
            amount,
            category: category.unwrap_or_default(),
            recurrence,
            description: description.unwrap_or_default(),
        });
    }
    Ok(data)
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let affected = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if affected == 0 {
        println!("No transaction with id '{}'", id);
    } else {
        record_audit(conn, "DELETE", "TRANSACTION", id)?;
        println!("Removed transaction '{}'", id);
    }
    Ok(())
}

fn reset(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        println!("This deletes every transaction. Re-run with --yes to confirm.");
        return Ok(());
    }
    let affected = conn.execute("DELETE FROM transactions", [])?;
    record_audit(conn, "RESET", "ALL_TRANSACTIONS", "RESET")?;
    println!("Removed {} transactions", affected);
    Ok(())
}
