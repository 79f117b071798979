// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::catalog;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let entries: Vec<_> = catalog::all()
                .iter()
                .map(|c| {
                    json!({
                        "name": c.name,
                        "synonyms": c.synonyms,
                        "color": c.color,
                        "icon": c.icon,
                    })
                })
                .collect();
            if !maybe_print_json(json_flag, jsonl_flag, &entries)? {
                let rows = catalog::all()
                    .iter()
                    .map(|c| {
                        vec![
                            c.name.to_string(),
                            c.synonyms.join(", "),
                            c.color.to_string(),
                            c.icon.to_string(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Category", "Synonyms", "Color", "Icon"], rows)
                );
            }
        }
        Some(("resolve", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            println!(
                "{} -> color {}, icon {}",
                name,
                catalog::color_for(name),
                catalog::icon_for(name)
            );
        }
        _ => {}
    }
    Ok(())
}
