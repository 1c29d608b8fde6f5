// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::models::Transaction;

pub fn handle(snapshot: &[Transaction], m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "type", "amount", "category", "description"])?;
            for t in snapshot {
                let date = t.date.to_string();
                let amount = t.amount.normalize().to_string();
                wtr.write_record([
                    t.id.as_str(),
                    date.as_str(),
                    t.r#type.as_str(),
                    amount.as_str(),
                    t.category.as_str(),
                    t.description.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(snapshot)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", snapshot.len(), out);
    Ok(())
}
