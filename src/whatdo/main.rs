use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use whatdo::api::{NewItem, WhatdoApi};
use whatdo::config::WhatdoConfig;
use whatdo::error::{Result, WhatdoError};
use whatdo::model::{parse_due_date, parse_tags};
use whatdo::store::fs::FileStore;

mod cli;
use cli::args::{Cli, Commands};
use cli::print::{print_config, print_flat, print_messages, print_selected, print_tree};

const HOME_ENV: &str = "WHATDO_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: WhatdoApi<FileStore>,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            item,
            due_date,
            priority,
            estimated_time,
            tags,
            parent_id,
        }) => {
            let new_item = NewItem {
                item,
                due_date: due_date.as_deref().map(parse_due_date).transpose()?,
                priority,
                estimated_time,
                tags: tags.as_deref().and_then(parse_tags),
                parent_id,
            };
            handle_add(&mut ctx, new_item)
        }
        Some(Commands::Remove { item_id }) => handle_remove(&mut ctx, &item_id),
        Some(Commands::Complete { item_id }) => handle_complete(&mut ctx, &item_id),
        Some(Commands::Update) => handle_update(&mut ctx),
        Some(Commands::List { archived, flat }) => handle_list(&ctx, archived, flat),
        Some(Commands::Next) => handle_next(&ctx),
        Some(Commands::Import { file, daily, date }) => {
            handle_import(&mut ctx, file, daily, date)
        }
        Some(Commands::Config) => handle_config(&ctx),
        None => handle_list(&ctx, false, false),
    }
}

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "whatdo=debug" } else { "whatdo=warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os(HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "whatdo", "whatdo")
            .ok_or_else(|| WhatdoError::Config("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = WhatdoConfig::load(&data_dir)?;
    let store = FileStore::from_config(&config, &data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "initialized context");

    Ok(AppContext {
        api: WhatdoApi::new(store, config),
        data_dir,
    })
}

fn handle_add(ctx: &mut AppContext, new_item: NewItem) -> Result<()> {
    let result = ctx.api.add_item(new_item)?;
    print_messages(&result.messages);
    for item in &result.affected_items {
        println!("ID: {}", item.item_id);
    }
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, item_id: &str) -> Result<()> {
    let result = ctx.api.remove_item(item_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_complete(ctx: &mut AppContext, item_id: &str) -> Result<()> {
    let result = ctx.api.complete_item(item_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.update()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, archived: bool, flat: bool) -> Result<()> {
    let result = ctx.api.list_items(archived)?;
    if flat {
        print_flat(&result.listed_items);
    } else {
        print_tree(&result.listed_items);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_next(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.next_item()?;
    if let Some(item) = &result.selected {
        print_selected(item);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(
    ctx: &mut AppContext,
    file: Option<PathBuf>,
    daily: bool,
    date: Option<String>,
) -> Result<()> {
    let result = match (file, daily) {
        (Some(path), false) => ctx.api.import_file(&path)?,
        (_, true) => {
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Local::now().date_naive(),
            };
            ctx.api.import_daily_note(date)?
        }
        (None, false) => {
            return Err(WhatdoError::Api(
                "Nothing to import: give a file or --daily".into(),
            ))
        }
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    print_config(ctx.api.config(), &ctx.data_dir);
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| WhatdoError::Api(format!("Invalid date: {}", raw)))
}
