// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetwise::analytics::insights::{generate, RULES};
use budgetwise::models::{Category, InsightKind, Recurrence, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn tx(id: &str, merchant: &str, amount: &str, category: Option<&str>) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        merchant: merchant.to_string(),
        amount: amount.parse::<Decimal>().unwrap(),
        category: category.map(|c| c.to_string()),
        description: None,
        recurrence: Recurrence::None,
        next_occurrence: None,
    }
}

fn category(id: i64, name: &str, budget: Option<&str>) -> Category {
    Category {
        id,
        name: name.to_string(),
        color: "red".to_string(),
        budget: budget.map(|b| b.parse::<Decimal>().unwrap()),
    }
}

fn ids(insights: &[budgetwise::models::RuleBasedInsight]) -> Vec<&str> {
    insights.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn battery_has_five_rules_in_fixed_order() {
    let rule_ids: Vec<&str> = RULES.iter().map(|r| r.id).collect();
    assert_eq!(
        rule_ids,
        vec![
            "high-spending-category",
            "budget-exceeded",
            "recurring-expense-detected",
            "savings-opportunity",
            "positive-net-flow",
        ]
    );
}

#[test]
fn high_spending_fires_above_500() {
    let txs = vec![tx("1", "Grocer", "-600", Some("Food"))];
    let insights = generate(&txs, &[]);
    assert!(ids(&insights).contains(&"high-spending-category"));
    let insight = insights.iter().find(|i| i.id == "high-spending-category").unwrap();
    assert_eq!(insight.kind, InsightKind::Warning);
    assert_eq!(
        insight.message,
        "High spending detected in: Food ($600.00). Consider reviewing these categories."
    );
}

#[test]
fn high_spending_quiet_at_exactly_500() {
    let txs = vec![tx("1", "Grocer", "-500", Some("Food"))];
    let insights = generate(&txs, &[]);
    assert!(!ids(&insights).contains(&"high-spending-category"));
}

#[test]
fn budget_exceeded_lists_spent_over_budget() {
    let txs = vec![tx("1", "Grocer", "-450", Some("Food"))];
    let cats = vec![category(1, "Food", Some("400"))];
    let insights = generate(&txs, &cats);
    let insight = insights.iter().find(|i| i.id == "budget-exceeded").unwrap();
    assert_eq!(
        insight.message,
        "Budget exceeded in: Food ($450.00 / $400.00). Consider adjusting your spending or budget."
    );
}

#[test]
fn budget_exceeded_ignores_unbudgeted_categories() {
    let txs = vec![tx("1", "Grocer", "-450", Some("Food"))];
    let cats = vec![category(1, "Food", None)];
    let insights = generate(&txs, &cats);
    assert!(!ids(&insights).contains(&"budget-exceeded"));
}

#[test]
fn recurring_merchant_counts_expense_transactions() {
    let txs: Vec<Transaction> = (0..5)
        .map(|i| tx(&i.to_string(), "Netflix", "-15.99", Some("Entertainment")))
        .collect();
    let insights = generate(&txs, &[]);
    let insight = insights
        .iter()
        .find(|i| i.id == "recurring-expense-detected")
        .unwrap();
    assert_eq!(insight.kind, InsightKind::Info);
    assert_eq!(
        insight.message,
        "Potential recurring expenses detected: Netflix (5 transactions). Consider setting up a budget for these."
    );
}

#[test]
fn two_visits_are_not_recurring() {
    let txs = vec![
        tx("1", "Cafe", "-4", None),
        tx("2", "Cafe", "-4", None),
    ];
    let insights = generate(&txs, &[]);
    assert!(!ids(&insights).contains(&"recurring-expense-detected"));
}

#[test]
fn savings_opportunity_watches_discretionary_categories() {
    let txs = vec![
        tx("1", "Steakhouse", "-350", Some("Dining")),
        tx("2", "Grocer", "-350", Some("Food")),
    ];
    let insights = generate(&txs, &[]);
    let insight = insights.iter().find(|i| i.id == "savings-opportunity").unwrap();
    assert_eq!(
        insight.message,
        "Savings opportunity: High spending in discretionary categories: Dining ($350.00). Consider reducing these expenses."
    );
}

#[test]
fn positive_net_flow_celebrates_surplus() {
    let txs = vec![
        tx("1", "Employer", "1000", None),
        tx("2", "Grocer", "-300", Some("Food")),
    ];
    let insights = generate(&txs, &[]);
    let insight = insights.iter().find(|i| i.id == "positive-net-flow").unwrap();
    assert_eq!(insight.kind, InsightKind::Success);
    assert_eq!(
        insight.message,
        "Great job! You have a positive net cash flow of $700.00 this month."
    );
}

#[test]
fn net_deficit_does_not_fire_positive_flow() {
    let txs = vec![
        tx("1", "Employer", "500", None),
        tx("2", "Grocer", "-600", Some("Food")),
    ];
    let insights = generate(&txs, &[]);
    assert!(!ids(&insights).contains(&"positive-net-flow"));
    // 600 > 500, so the high-spending rule still fires on the same input.
    assert!(ids(&insights).contains(&"high-spending-category"));
}

#[test]
fn evaluation_is_idempotent_modulo_timestamps() {
    let txs = vec![
        tx("1", "Employer", "1000", None),
        tx("2", "Netflix", "-15.99", Some("Entertainment")),
        tx("3", "Netflix", "-15.99", Some("Entertainment")),
        tx("4", "Netflix", "-15.99", Some("Entertainment")),
        tx("5", "Grocer", "-700", Some("Food")),
    ];
    let cats = vec![category(1, "Food", Some("400"))];
    let a = generate(&txs, &cats);
    let b = generate(&txs, &cats);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.kind, y.kind);
        assert_eq!(x.message, y.message);
    }
}

#[test]
fn empty_ledger_produces_no_insights() {
    assert!(generate(&[], &[]).is_empty());
}

#[test]
fn insights_come_out_in_battery_order() {
    let txs = vec![
        tx("1", "Employer", "5000", None),
        tx("2", "Mall", "-600", Some("Shopping")),
    ];
    let insights = generate(&txs, &[]);
    assert_eq!(
        ids(&insights),
        vec!["high-spending-category", "savings-opportunity", "positive-net-flow"]
    );
}

#[test]
fn uncategorized_spending_is_invisible_to_category_rules() {
    let txs = vec![tx("1", "Mystery", "-900", None)];
    let insights = generate(&txs, &[]);
    assert!(!ids(&insights).contains(&"high-spending-category"));
}
