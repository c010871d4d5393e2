// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetwise::analytics::metrics::{aggregate, aggregate_range};
use budgetwise::models::{Recurrence, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn tx(id: &str, date: &str, amount: &str, category: Option<&str>) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        merchant: "Acme".to_string(),
        amount: amount.parse::<Decimal>().unwrap(),
        category: category.map(|c| c.to_string()),
        description: None,
        recurrence: Recurrence::None,
        next_occurrence: None,
    }
}

#[test]
fn partitions_by_sign_and_nets_out() {
    let txs = vec![
        tx("1", "2024-03-01", "500", None),
        tx("2", "2024-03-02", "-600", Some("Food")),
    ];
    let m = aggregate(&txs);
    assert_eq!(m.income, Decimal::from(500));
    assert_eq!(m.expenses, Decimal::from(600));
    assert_eq!(m.net, Decimal::from(-100));
    assert_eq!(m.category_totals.len(), 1);
    assert_eq!(m.category_totals.amount_for("Food"), Decimal::from(600));
}

#[test]
fn income_minus_expenses_equals_net() {
    let txs = vec![
        tx("1", "2024-01-05", "1200.45", None),
        tx("2", "2024-01-06", "-33.10", Some("Food")),
        tx("3", "2024-01-07", "-0.01", None),
        tx("4", "2024-01-08", "19.99", Some("Income")),
    ];
    let m = aggregate(&txs);
    assert_eq!(m.net, m.income - m.expenses);
}

#[test]
fn category_totals_sum_to_expenses() {
    let txs = vec![
        tx("1", "2024-02-01", "-10.25", Some("Food")),
        tx("2", "2024-02-02", "-20.50", None),
        tx("3", "2024-02-03", "-30.25", Some("Transport")),
        tx("4", "2024-02-04", "99.00", None),
    ];
    let m = aggregate(&txs);
    assert_eq!(m.category_totals.sum(), m.expenses);
    assert_eq!(
        m.category_totals.amount_for("Uncategorized"),
        "20.50".parse::<Decimal>().unwrap()
    );
}

#[test]
fn zero_amount_counts_as_income() {
    let txs = vec![tx("1", "2024-02-01", "0", Some("Food"))];
    let m = aggregate(&txs);
    assert_eq!(m.income, Decimal::ZERO);
    assert_eq!(m.expenses, Decimal::ZERO);
    assert!(m.category_totals.is_empty());
}

#[test]
fn income_never_contributes_to_category_totals() {
    let txs = vec![
        tx("1", "2024-02-01", "100", Some("Food")),
        tx("2", "2024-02-02", "-40", Some("Food")),
    ];
    let m = aggregate(&txs);
    assert_eq!(m.category_totals.amount_for("Food"), Decimal::from(40));
}

#[test]
fn empty_input_yields_zeroes() {
    let m = aggregate(&[]);
    assert_eq!(m.income, Decimal::ZERO);
    assert_eq!(m.expenses, Decimal::ZERO);
    assert_eq!(m.net, Decimal::ZERO);
    assert!(m.category_totals.is_empty());
}

#[test]
fn range_filter_is_inclusive_on_both_ends() {
    let txs = vec![
        tx("1", "2024-03-01", "-10", Some("Food")),
        tx("2", "2024-03-15", "-20", Some("Food")),
        tx("3", "2024-03-31", "-30", Some("Food")),
        tx("4", "2024-04-01", "-40", Some("Food")),
        tx("5", "2024-02-29", "-50", Some("Food")),
    ];
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let m = aggregate_range(&txs, start, end);
    assert_eq!(m.expenses, Decimal::from(60));
}

#[test]
fn decimal_accumulation_has_no_cent_drift() {
    // 0.10 a hundred times is exactly 10.00 in decimal arithmetic.
    let txs: Vec<Transaction> = (0..100)
        .map(|i| tx(&i.to_string(), "2024-05-01", "-0.10", Some("Food")))
        .collect();
    let m = aggregate(&txs);
    assert_eq!(m.expenses, "10.00".parse::<Decimal>().unwrap());
    assert_eq!(m.category_totals.amount_for("Food"), "10.00".parse::<Decimal>().unwrap());
}

#[test]
fn totals_keep_first_seen_order() {
    let txs = vec![
        tx("1", "2024-03-01", "-5", Some("Zoo")),
        tx("2", "2024-03-02", "-5", Some("Aquarium")),
        tx("3", "2024-03-03", "-5", Some("Zoo")),
    ];
    let m = aggregate(&txs);
    let names: Vec<&str> = m.category_totals.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Zoo", "Aquarium"]);
}
