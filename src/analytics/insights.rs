// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! A fixed battery of named rules, each a predicate plus a message
//! generator, evaluated uniformly and in order against the full snapshot.
//! Rules are independent; none short-circuits another. Adding a rule means
//! adding a table entry, never touching the evaluation loop.

use chrono::Utc;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::models::{Category, InsightKind, RuleBasedInsight, Transaction};
use crate::utils::fmt_money;

use super::metrics::CategoryTotals;

/// Per-category spend above this amount is flagged as high.
static HIGH_SPENDING_THRESHOLD: Lazy<Decimal> = Lazy::new(|| Decimal::from(500));
/// Discretionary spend above this amount is a savings opportunity.
static SAVINGS_THRESHOLD: Lazy<Decimal> = Lazy::new(|| Decimal::from(300));
/// A merchant seen in at least this many expense transactions looks recurring.
const RECURRING_MERCHANT_MIN: usize = 3;

const DISCRETIONARY_CATEGORIES: [&str; 3] = ["Dining", "Entertainment", "Shopping"];

pub struct InsightRule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: InsightKind,
    pub condition: fn(&[Transaction], &[Category]) -> bool,
    pub generate_message: fn(&[Transaction], &[Category]) -> String,
}

/// The battery, in evaluation order. Closed by design.
pub static RULES: &[InsightRule] = &[
    InsightRule {
        id: "high-spending-category",
        name: "High Spending in Category",
        description: "Warn when spending in a category exceeds a threshold",
        kind: InsightKind::Warning,
        condition: high_spending_condition,
        generate_message: high_spending_message,
    },
    InsightRule {
        id: "budget-exceeded",
        name: "Budget Exceeded",
        description: "Alert when spending exceeds budget in any category",
        kind: InsightKind::Warning,
        condition: budget_exceeded_condition,
        generate_message: budget_exceeded_message,
    },
    InsightRule {
        id: "recurring-expense-detected",
        name: "Recurring Expense Detected",
        description: "Identify potential recurring expenses",
        kind: InsightKind::Info,
        condition: recurring_expense_condition,
        generate_message: recurring_expense_message,
    },
    InsightRule {
        id: "savings-opportunity",
        name: "Savings Opportunity",
        description: "Identify areas where you can save money",
        kind: InsightKind::Info,
        condition: savings_opportunity_condition,
        generate_message: savings_opportunity_message,
    },
    InsightRule {
        id: "positive-net-flow",
        name: "Positive Cash Flow",
        description: "Celebrate positive net cash flow",
        kind: InsightKind::Success,
        condition: positive_net_flow_condition,
        generate_message: positive_net_flow_message,
    },
];

/// Run every rule against the snapshot and collect one insight per rule
/// whose predicate holds. Re-running over the same inputs yields identical
/// ids, kinds, and messages; only the timestamps move.
pub fn generate(transactions: &[Transaction], categories: &[Category]) -> Vec<RuleBasedInsight> {
    let now = Utc::now();
    RULES
        .iter()
        .filter(|rule| (rule.condition)(transactions, categories))
        .map(|rule| RuleBasedInsight {
            id: rule.id.to_string(),
            title: rule.name.to_string(),
            message: (rule.generate_message)(transactions, categories),
            kind: rule.kind,
            date: now,
        })
        .collect()
}

/// Expense totals per named category, in first-seen order. Unlike the
/// aggregator, rules ignore uncategorized expenses entirely.
fn category_spending(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for tx in transactions {
        if tx.amount < Decimal::ZERO {
            if let Some(name) = tx.category.as_deref() {
                totals.add(name, tx.amount.abs());
            }
        }
    }
    totals
}

/// Expense transaction counts per merchant, in first-seen order.
fn merchant_counts(transactions: &[Transaction]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for tx in transactions {
        if tx.amount < Decimal::ZERO {
            if let Some(entry) = counts.iter_mut().find(|(m, _)| *m == tx.merchant) {
                entry.1 += 1;
            } else {
                counts.push((tx.merchant.clone(), 1));
            }
        }
    }
    counts
}

fn income_and_expenses(transactions: &[Transaction]) -> (Decimal, Decimal) {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for tx in transactions {
        if tx.amount > Decimal::ZERO {
            income += tx.amount;
        } else if tx.amount < Decimal::ZERO {
            expenses += tx.amount.abs();
        }
    }
    (income, expenses)
}

fn high_spending_condition(transactions: &[Transaction], _categories: &[Category]) -> bool {
    category_spending(transactions)
        .iter()
        .any(|t| t.amount > *HIGH_SPENDING_THRESHOLD)
}

fn high_spending_message(transactions: &[Transaction], _categories: &[Category]) -> String {
    let flagged: Vec<String> = category_spending(transactions)
        .iter()
        .filter(|t| t.amount > *HIGH_SPENDING_THRESHOLD)
        .map(|t| format!("{} ({})", t.name, fmt_money(&t.amount)))
        .collect();
    format!(
        "High spending detected in: {}. Consider reviewing these categories.",
        flagged.join(", ")
    )
}

fn budget_exceeded_condition(transactions: &[Transaction], categories: &[Category]) -> bool {
    let spending = category_spending(transactions);
    categories.iter().any(|cat| {
        cat.effective_budget()
            .is_some_and(|budget| spending.amount_for(&cat.name) > budget)
    })
}

fn budget_exceeded_message(transactions: &[Transaction], categories: &[Category]) -> String {
    let spending = category_spending(transactions);
    let exceeded: Vec<String> = categories
        .iter()
        .filter_map(|cat| {
            let budget = cat.effective_budget()?;
            let spent = spending.amount_for(&cat.name);
            (spent > budget).then(|| {
                format!("{} ({} / {})", cat.name, fmt_money(&spent), fmt_money(&budget))
            })
        })
        .collect();
    format!(
        "Budget exceeded in: {}. Consider adjusting your spending or budget.",
        exceeded.join(", ")
    )
}

fn recurring_expense_condition(transactions: &[Transaction], _categories: &[Category]) -> bool {
    merchant_counts(transactions)
        .iter()
        .any(|(_, count)| *count >= RECURRING_MERCHANT_MIN)
}

fn recurring_expense_message(transactions: &[Transaction], _categories: &[Category]) -> String {
    let recurring: Vec<String> = merchant_counts(transactions)
        .iter()
        .filter(|(_, count)| *count >= RECURRING_MERCHANT_MIN)
        .map(|(merchant, count)| format!("{} ({} transactions)", merchant, count))
        .collect();
    format!(
        "Potential recurring expenses detected: {}. Consider setting up a budget for these.",
        recurring.join(", ")
    )
}

fn savings_opportunity_condition(transactions: &[Transaction], _categories: &[Category]) -> bool {
    let spending = category_spending(transactions);
    DISCRETIONARY_CATEGORIES
        .iter()
        .any(|name| spending.amount_for(name) > *SAVINGS_THRESHOLD)
}

fn savings_opportunity_message(transactions: &[Transaction], _categories: &[Category]) -> String {
    let spending = category_spending(transactions);
    let flagged: Vec<String> = spending
        .iter()
        .filter(|t| {
            DISCRETIONARY_CATEGORIES.contains(&t.name.as_str())
                && t.amount > *SAVINGS_THRESHOLD
        })
        .map(|t| format!("{} ({})", t.name, fmt_money(&t.amount)))
        .collect();
    format!(
        "Savings opportunity: High spending in discretionary categories: {}. Consider reducing these expenses.",
        flagged.join(", ")
    )
}

fn positive_net_flow_condition(transactions: &[Transaction], _categories: &[Category]) -> bool {
    let (income, expenses) = income_and_expenses(transactions);
    income > expenses
}

fn positive_net_flow_message(transactions: &[Transaction], _categories: &[Category]) -> String {
    let (income, expenses) = income_and_expenses(transactions);
    format!(
        "Great job! You have a positive net cash flow of {} this month.",
        fmt_money(&(income - expenses))
    )
}
