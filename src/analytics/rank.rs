// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::metrics::{CategoryTotal, CategoryTotals};

/// Top spending categories, largest first, truncated to `limit`. The sort
/// is stable: equal amounts keep their first-seen order from the totals.
pub fn top_categories(totals: &CategoryTotals, limit: usize) -> Vec<CategoryTotal> {
    let mut ranked: Vec<CategoryTotal> = totals.iter().cloned().collect();
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    ranked.truncate(limit);
    ranked
}
