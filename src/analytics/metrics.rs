// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Transaction;

/// Label for expense transactions that name no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: Decimal,
}

/// Per-category expense totals in first-seen order. Insertion order is part
/// of the contract: the ranker's tie-break and every rendered breakdown
/// depend on it being stable across runs over the same input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
}

impl CategoryTotals {
    pub fn add(&mut self, name: &str, amount: Decimal) {
        if let Some(e) = self.entries.iter_mut().find(|e| e.name == name) {
            e.amount += amount;
        } else {
            self.entries.push(CategoryTotal {
                name: name.to_string(),
                amount,
            });
        }
    }

    /// Total for a category name; zero when the category never appears.
    pub fn amount_for(&self, name: &str) -> Decimal {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.amount)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialMetrics {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    pub category_totals: CategoryTotals,
}

/// Aggregate the full snapshot: income is the sum of non-negative amounts
/// (zero counts as income by sign convention), expenses the sum of absolute
/// negative amounts, and category totals accumulate expenses only, under
/// "Uncategorized" when no category is named.
pub fn aggregate(transactions: &[Transaction]) -> FinancialMetrics {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    let mut category_totals = CategoryTotals::default();

    for tx in transactions {
        if tx.amount >= Decimal::ZERO {
            income += tx.amount;
        } else {
            let magnitude = tx.amount.abs();
            expenses += magnitude;
            let name = tx.category.as_deref().unwrap_or(UNCATEGORIZED);
            category_totals.add(name, magnitude);
        }
    }

    FinancialMetrics {
        income,
        expenses,
        net: income - expenses,
        category_totals,
    }
}

/// Same aggregation restricted to `start..=end` (inclusive on both ends;
/// dates carry no time-of-day).
pub fn aggregate_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> FinancialMetrics {
    let filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| tx.date >= start && tx.date <= end)
        .cloned()
        .collect();
    aggregate(&filtered)
}
