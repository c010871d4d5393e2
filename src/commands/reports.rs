// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::metrics::{self, CategoryTotal};
use crate::analytics::rank::top_categories;
use crate::analytics::report::build_monthly_report;
use crate::db::{load_categories, load_transactions};
use crate::utils::{
    current_month, fmt_money, maybe_print_json, month_end, month_start, parse_date, parse_month,
    pretty_table,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("spend", sub)) => spend(conn, sub)?,
        Some(("monthly", sub)) => monthly(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct Summary {
    income: Decimal,
    expenses: Decimal,
    net: Decimal,
    top_categories: Vec<CategoryTotal>,
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = *sub.get_one::<usize>("limit").unwrap_or(&3);

    let transactions = load_transactions(conn)?;
    let m = metrics::aggregate(&transactions);
    let top = top_categories(&m.category_totals, limit);
    let out = Summary {
        income: m.income,
        expenses: m.expenses,
        net: m.net,
        top_categories: top,
    };

    if maybe_print_json(json_flag, jsonl_flag, &out)? {
        return Ok(());
    }

    println!("Income:   {}", fmt_money(&out.income));
    println!("Expenses: {}", fmt_money(&out.expenses));
    println!("Net:      {}", fmt_money(&out.net));
    if out.top_categories.is_empty() {
        println!("No spending data yet");
    } else {
        let rows: Vec<Vec<String>> = out
            .top_categories
            .iter()
            .map(|t| vec![t.name.clone(), fmt_money(&t.amount)])
            .collect();
        println!("{}", pretty_table(&["Top Category", "Spent"], rows));
    }
    Ok(())
}

fn spend(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let transactions = load_transactions(conn)?;
    let m = match sub.get_one::<String>("month") {
        Some(raw) => {
            let month = parse_month(raw)?;
            metrics::aggregate_range(&transactions, month_start(&month)?, month_end(&month)?)
        }
        None => metrics::aggregate(&transactions),
    };

    let ranked = top_categories(&m.category_totals, m.category_totals.len());
    if maybe_print_json(json_flag, jsonl_flag, &ranked)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = ranked
        .iter()
        .map(|t| {
            let share = if m.expenses.is_zero() {
                Decimal::ZERO
            } else {
                t.amount / m.expenses * Decimal::from(100)
            };
            vec![t.name.clone(), fmt_money(&t.amount), format!("{:.0}%", share)]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    Ok(())
}

/// Resolve the report range from --month or --start/--end; defaults to the
/// current calendar month.
pub fn resolve_range(sub: &clap::ArgMatches) -> Result<(NaiveDate, NaiveDate)> {
    if let Some(raw) = sub.get_one::<String>("month") {
        let month = parse_month(raw)?;
        return Ok((month_start(&month)?, month_end(&month)?));
    }
    match (sub.get_one::<String>("start"), sub.get_one::<String>("end")) {
        (Some(s), Some(e)) => Ok((parse_date(s)?, parse_date(e)?)),
        (None, None) => {
            let month = current_month();
            Ok((month_start(&month)?, month_end(&month)?))
        }
        _ => Err(anyhow::anyhow!("Provide both --start and --end, or --month")),
    }
}

fn monthly(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (start, end) = resolve_range(sub)?;

    let transactions = load_transactions(conn)?;
    let categories = load_categories(conn)?;
    let report = build_monthly_report(&transactions, &categories, start, end)?;

    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    println!("{} ({} - {})", report.period, report.start_date, report.end_date);
    println!("Income:   {}", fmt_money(&report.income));
    println!("Expenses: {}", fmt_money(&report.expenses));
    println!("Net:      {}", fmt_money(&report.net));

    let rows: Vec<Vec<String>> = report
        .categories
        .iter()
        .map(|b| {
            let remaining = b.budget - b.spent;
            let pct = if b.budget > Decimal::ZERO {
                format!("{:.0}%", b.spent / b.budget * Decimal::from(100))
            } else {
                "N/A".to_string()
            };
            vec![
                b.category.clone(),
                fmt_money(&b.budget),
                fmt_money(&b.spent),
                fmt_money(&remaining),
                pct,
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
    println!("{} transactions in period", report.transactions.len());
    Ok(())
}
