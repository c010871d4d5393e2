// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection};
use std::fs;
use std::path::PathBuf;

use crate::models::{Category, Transaction};
use crate::utils::{parse_date, parse_decimal, parse_recurrence};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.budgetwise", "BudgetWise", "budgetwise"));

/// The seven starter categories shipped with a fresh ledger.
const DEFAULT_CATEGORIES: [(&str, &str); 7] = [
    ("Housing", "blue"),
    ("Food", "green"),
    ("Transportation", "yellow"),
    ("Entertainment", "purple"),
    ("Utilities", "red"),
    ("Healthcare", "pink"),
    ("Income", "emerald"),
];

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("budgetwise.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    seed_default_categories(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE COLLATE NOCASE,
        color TEXT NOT NULL,
        budget TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id TEXT PRIMARY KEY,
        date TEXT NOT NULL,
        merchant TEXT NOT NULL,
        amount TEXT NOT NULL,
        category TEXT, -- denormalized category name
        description TEXT,
        recurrence TEXT NOT NULL DEFAULT 'none',
        next_occurrence TEXT,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category);

    CREATE TABLE IF NOT EXISTS audit_log(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp TEXT NOT NULL DEFAULT (datetime('now')),
        action TEXT NOT NULL,
        entity_type TEXT NOT NULL,
        entity_id TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

/// Seed the starter categories into an empty ledger.
pub fn seed_default_categories(conn: &Connection) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |r| r.get(0))?;
    if count > 0 {
        return Ok(());
    }
    for (name, color) in DEFAULT_CATEGORIES {
        conn.execute(
            "INSERT INTO categories(name, color) VALUES (?1, ?2)",
            params![name, color],
        )?;
    }
    Ok(())
}

pub fn load_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, color, budget FROM categories ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, Option<String>>(3)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, name, color, budget_s) = row?;
        let budget = match budget_s {
            Some(s) => Some(
                parse_decimal(&s)
                    .with_context(|| format!("Invalid budget for category '{}'", name))?,
            ),
            None => None,
        };
        out.push(Category {
            id,
            name,
            color,
            budget,
        });
    }
    Ok(out)
}

pub fn load_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, merchant, amount, category, description, recurrence, next_occurrence
         FROM transactions ORDER BY date, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, Option<String>>(4)?,
            r.get::<_, Option<String>>(5)?,
            r.get::<_, String>(6)?,
            r.get::<_, Option<String>>(7)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let (id, date_s, merchant, amount_s, category, description, recur_s, next_s) = row?;
        let date = parse_date(&date_s).with_context(|| format!("Transaction '{}'", id))?;
        let amount =
            parse_decimal(&amount_s).with_context(|| format!("Transaction '{}'", id))?;
        let recurrence =
            parse_recurrence(&recur_s).with_context(|| format!("Transaction '{}'", id))?;
        let next_occurrence = match next_s {
            Some(s) => Some(parse_date(&s).with_context(|| format!("Transaction '{}'", id))?),
            None => None,
        };
        out.push(Transaction {
            id,
            date,
            merchant,
            amount,
            category,
            description,
            recurrence,
            next_occurrence,
        });
    }
    Ok(out)
}

pub fn insert_transaction(conn: &Connection, tx: &Transaction) -> Result<()> {
    conn.execute(
        "INSERT INTO transactions(id, date, merchant, amount, category, description, recurrence, next_occurrence)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            tx.id,
            tx.date.to_string(),
            tx.merchant,
            tx.amount.to_string(),
            tx.category,
            tx.description,
            tx.recurrence.as_str(),
            tx.next_occurrence.map(|d| d.to_string()),
        ],
    )
    .with_context(|| format!("Insert transaction '{}'", tx.id))?;
    Ok(())
}

pub fn record_audit(conn: &Connection, action: &str, entity_type: &str, entity_id: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO audit_log(action, entity_type, entity_id) VALUES (?1, ?2, ?3)",
        params![action, entity_type, entity_id],
    )?;
    Ok(())
}
