// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendsight::{cli, commands, db, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("user", sub)) => match sub.subcommand() {
            Some(("set", set_m)) => {
                let id = set_m.get_one::<String>("id").unwrap().trim().to_string();
                utils::set_current_user(&conn, &id)?;
                println!("Current user set to '{}'", id);
            }
            Some(("show", _)) => match utils::get_current_user(&conn)? {
                Some(id) => println!("{}", id),
                None => println!("(no user set)"),
            },
            _ => {}
        },
        Some(("tx", sub)) => commands::transactions::handle(&conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("seed", _)) => commands::seed::handle(&conn)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
