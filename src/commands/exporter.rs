// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::analytics::report::build_monthly_report;
use crate::db::{load_categories, load_transactions};
use crate::models::Transaction;
use crate::utils::parse_date;

use super::reports::resolve_range;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        Some(("report", sub)) => export_report(conn, sub),
        _ => Ok(()),
    }
}

fn tx_kind(tx: &Transaction) -> &'static str {
    if tx.amount >= Decimal::ZERO {
        "Income"
    } else {
        "Expense"
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let start = parse_date(sub.get_one::<String>("start").unwrap())?;
    let end = parse_date(sub.get_one::<String>("end").unwrap())?;

    let transactions: Vec<Transaction> = load_transactions(conn)?
        .into_iter()
        .filter(|tx| tx.date >= start && tx.date <= end)
        .collect();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["Date", "Merchant", "Amount", "Category", "Description", "Type"])?;
            for tx in &transactions {
                wtr.write_record([
                    tx.date.to_string(),
                    tx.merchant.clone(),
                    tx.amount.to_string(),
                    tx.category.clone().unwrap_or_else(|| "Uncategorized".into()),
                    tx.description.clone().unwrap_or_default(),
                    tx_kind(tx).to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&transactions)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}

fn export_report(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let (start, end) = resolve_range(sub)?;

    let transactions = load_transactions(conn)?;
    let categories = load_categories(conn)?;
    let report = build_monthly_report(&transactions, &categories, start, end)?;

    match fmt.as_str() {
        "csv" => {
            // Sectioned rows of uneven width, so the writer must be flexible.
            let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(out)?;
            wtr.write_record(["Period", "Start", "End", "Income", "Expenses", "Net"])?;
            wtr.write_record([
                report.period.clone(),
                report.start_date.to_string(),
                report.end_date.to_string(),
                format!("{:.2}", report.income),
                format!("{:.2}", report.expenses),
                format!("{:.2}", report.net),
            ])?;
            wtr.write_record(["Category", "Budget", "Spent", "Remaining", "% Spent"])?;
            for b in &report.categories {
                let pct = if b.budget > Decimal::ZERO {
                    format!("{:.0}%", b.spent / b.budget * Decimal::from(100))
                } else {
                    "N/A".to_string()
                };
                wtr.write_record([
                    b.category.clone(),
                    format!("{:.2}", b.budget),
                    format!("{:.2}", b.spent),
                    format!("{:.2}", b.budget - b.spent),
                    pct,
                ])?;
            }
            wtr.write_record(["Date", "Merchant", "Amount", "Category", "Description", "Type"])?;
            for tx in &report.transactions {
                wtr.write_record([
                    tx.date.to_string(),
                    tx.merchant.clone(),
                    tx.amount.to_string(),
                    tx.category.clone().unwrap_or_else(|| "Uncategorized".into()),
                    tx.description.clone().unwrap_or_default(),
                    tx_kind(tx).to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&report)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} report to {}", report.period, out);
    Ok(())
}
