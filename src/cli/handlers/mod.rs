use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::list_io::{self, resolve_store_dir};
use crate::model::ROOT_LIST;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = store_dir(cli.dir.as_deref())?;

    match cli.command {
        // No subcommand → TUI, handled in main.rs
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Show(args) => cmd_show(&dir, args, json),
            Commands::Add(args) => cmd_add(&dir, args),
            Commands::Rm(args) => cmd_rm(&dir, args),
            Commands::All => cmd_all(&dir, json),
        },
    }
}

fn store_dir(override_dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(resolve_store_dir(override_dir.map(Path::new))?)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_show(dir: &Path, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.list.as_deref().unwrap_or(ROOT_LIST);
    let items = list_io::load_list(dir, name);

    if json {
        let output = ListJson {
            name: name.to_string(),
            items,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_items(name, &items);
    }
    Ok(())
}

fn cmd_add(dir: &Path, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.list.as_deref().unwrap_or(ROOT_LIST);
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err("nothing to add".into());
    }

    let mut items = list_io::load_list(dir, name);
    items.push(text.clone());
    list_io::save_list(dir, name, &items)?;

    println!("added to {name}: {text}");
    Ok(())
}

fn cmd_rm(dir: &Path, args: RmArgs) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.list.as_deref().unwrap_or(ROOT_LIST);
    let mut items = list_io::load_list(dir, name);

    if args.index == 0 || args.index > items.len() {
        return Err(format!("no item {} in {} ({} items)", args.index, name, items.len()).into());
    }
    let removed = items.remove(args.index - 1);

    // Removing an item also removes the nested list it headed
    list_io::delete_list(dir, &removed)?;
    list_io::save_list(dir, name, &items)?;

    println!("deleted from {name}: {removed}");
    Ok(())
}

fn cmd_all(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let names = list_io::list_names(dir);

    if json {
        let infos: Vec<ListInfoJson> = names
            .iter()
            .map(|name| ListInfoJson {
                name: name.clone(),
                count: list_io::load_list(dir, name).len(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else if names.is_empty() {
        println!("no lists stored");
    } else {
        for name in &names {
            let count = list_io::load_list(dir, name).len();
            println!("{name} ({count})");
        }
    }
    Ok(())
}
