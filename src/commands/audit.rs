// Copyright (c) 2025 BudgetWise Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct AuditRow {
    id: i64,
    timestamp: String,
    action: String,
    entity_type: String,
    entity_id: String,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut sql = String::from(
        "SELECT id, timestamp, action, entity_type, entity_id FROM audit_log ORDER BY id DESC",
    );
    if sub.get_one::<usize>("limit").is_some() {
        sql.push_str(" LIMIT ?1");
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if let Some(limit) = sub.get_one::<usize>("limit") {
        stmt.query(rusqlite::params![*limit as i64])?
    } else {
        stmt.query([])?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(AuditRow {
            id: r.get(0)?,
            timestamp: r.get(1)?,
            action: r.get(2)?,
            entity_type: r.get(3)?,
            entity_id: r.get(4)?,
        });
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|a| {
                vec![
                    a.id.to_string(),
                    a.timestamp.clone(),
                    a.action.clone(),
                    a.entity_type.clone(),
                    a.entity_id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Timestamp", "Action", "Entity", "Entity Id"], rows)
        );
    }
    Ok(())
}
