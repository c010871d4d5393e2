// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, Months, NaiveDate};

use crate::models::{Recurrence, Transaction};

/// How many future occurrences a recurring transaction expands into.
pub const OCCURRENCE_COUNT: u32 = 12;

/// Materialize the future occurrences of a recurring transaction: twelve
/// copies at dates advanced by 1..=12 recurrence steps, with derived ids
/// `"{id}-{i}"`. Only the first occurrence carries `next_occurrence` (its
/// own date). The original record itself is not part of the output; the
/// caller persists the generated set in its place.
///
/// Month and year steps clamp to the last valid day of the target month
/// (2024-01-31 monthly: 2024-02-29, 2024-03-31, 2024-04-30, ...).
pub fn expand_occurrences(tx: &Transaction) -> Vec<Transaction> {
    if tx.recurrence == Recurrence::None {
        return Vec::new();
    }

    let mut occurrences = Vec::with_capacity(OCCURRENCE_COUNT as usize);
    for i in 1..=OCCURRENCE_COUNT {
        let Some(date) = step(tx.date, tx.recurrence, i) else {
            // Out of chrono's representable range; nothing sensible to emit.
            break;
        };
        occurrences.push(Transaction {
            id: format!("{}-{}", tx.id, i),
            date,
            next_occurrence: if i == 1 { Some(date) } else { None },
            ..tx.clone()
        });
    }
    occurrences
}

fn step(date: NaiveDate, recurrence: Recurrence, i: u32) -> Option<NaiveDate> {
    match recurrence {
        Recurrence::None => None,
        Recurrence::Daily => date.checked_add_days(Days::new(u64::from(i))),
        Recurrence::Weekly => date.checked_add_days(Days::new(u64::from(7 * i))),
        Recurrence::Monthly => date.checked_add_months(Months::new(i)),
        Recurrence::Yearly => date.checked_add_months(Months::new(12 * i)),
    }
}
