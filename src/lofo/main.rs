use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use lofo::api::{CmdMessage, ConfigAction, LofoApi, MessageLevel, SessionAction};
use lofo::config::LofoConfig;
use lofo::error::{LofoError, Result};
use lofo::filter::ItemFilter;
use lofo::model::{Category, Item, ItemDraft, ItemStatus, Location, Zone};
use lofo::search::SearchHit;
use lofo::store::fs::FileStore;
use std::path::PathBuf;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LofoApi<FileStore>,
    config: LofoConfig,
    verbose: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Login { reg_no }) => handle_session(&mut ctx, SessionAction::Login(reg_no)),
        Some(Commands::Logout) => handle_session(&mut ctx, SessionAction::Logout),
        Some(Commands::Whoami) => handle_whoami(&mut ctx),
        Some(Commands::Add {
            title,
            description,
            category,
            location,
            status,
            phone,
            image,
        }) => handle_add(&mut ctx, title, description, category, location, status, phone, image),
        Some(Commands::List {
            status,
            category,
            location,
            search,
        }) => handle_list(&ctx, status, category, location, search),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Recent { limit }) => handle_recent(&ctx, limit),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::Categories) => handle_categories(),
        Some(Commands::Locations) => handle_locations(),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None, None, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // LOFO_DATA_DIR overrides the platform data dir (used by e2e tests).
    let data_dir = match std::env::var_os("LOFO_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "lofo", "lofo").ok_or_else(|| {
                    LofoError::Store("Could not determine data directory".to_string())
                })?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = LofoConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = LofoApi::new(store, data_dir);

    Ok(AppContext {
        api,
        config,
        verbose: cli.verbose,
    })
}

fn handle_session(ctx: &mut AppContext, action: SessionAction) -> Result<()> {
    let result = ctx.api.session(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_whoami(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.session(SessionAction::Show)?;
    if let Some(reg_no) = &result.session {
        println!("{}", reg_no);
    }
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    title: String,
    description: String,
    category: String,
    location: String,
    status: String,
    phone: String,
    image: Option<String>,
) -> Result<()> {
    let draft = ItemDraft {
        title,
        description,
        category: parse_arg::<Category>(&category)?,
        location: parse_arg::<Location>(&location)?,
        status: parse_arg::<ItemStatus>(&status)?,
        phone,
        image,
    };
    let result = ctx.api.add_item(draft)?;
    if let Some(item) = result.items.first() {
        println!("id: {}", item.id);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    status: Option<String>,
    category: Option<String>,
    location: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let mut filter = ItemFilter::default();
    if let Some(s) = status {
        filter = filter.with_status(parse_arg::<ItemStatus>(&s)?);
    }
    if let Some(c) = category {
        filter = filter.with_category(parse_arg::<Category>(&c)?);
    }
    if let Some(l) = location {
        filter = filter.with_location(parse_arg::<Location>(&l)?);
    }
    if let Some(term) = search {
        filter = filter.with_term(term);
    }

    let result = ctx.api.list_items(&filter)?;
    print_items(&result.items, ctx.verbose);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search(&term)?;
    print_hits(&result.hits, ctx.verbose);
    print_messages(&result.messages);
    Ok(())
}

fn handle_recent(ctx: &AppContext, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(ctx.config.recent_limit);
    let result = ctx.api.recent_items(limit)?;
    print_items(&result.items, ctx.verbose);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: String) -> Result<()> {
    let id = resolve_id(&ctx.api, &id)?;
    let result = ctx.api.delete_item(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories() -> Result<()> {
    for category in Category::ALL {
        println!("{}", category.name());
    }
    Ok(())
}

fn handle_locations() -> Result<()> {
    for zone in Zone::ALL {
        println!("{}", zone.label().bold());
        for location in Location::ALL {
            if location.zone() == zone {
                println!("  {}", location.name());
            }
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("recent-limit = {}", config.recent_limit);
    }
    print_messages(&result.messages);
    Ok(())
}

fn parse_arg<T: FromStr<Err = String>>(s: &str) -> Result<T> {
    T::from_str(s).map_err(LofoError::Api)
}

/// Accepts a full UUID or an unambiguous prefix of one (listings show the
/// first 8 characters).
fn resolve_id(api: &LofoApi<FileStore>, input: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }

    let input = input.to_lowercase();
    let items = api.list_items(&ItemFilter::default())?.items;
    let mut matches = items
        .iter()
        .filter(|i| i.id.to_string().starts_with(&input));

    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item.id),
        (Some(_), Some(_)) => Err(LofoError::Api(format!("Ambiguous item id: {}", input))),
        (None, _) => Err(LofoError::Api(format!("No item with id: {}", input))),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_items(items: &[Item], verbose: bool) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    for item in items {
        print_item_line(item, None, verbose);
    }
}

fn print_hits(hits: &[SearchHit], verbose: bool) {
    for hit in hits {
        match hit {
            SearchHit::Category {
                category,
                relevance,
            } => {
                println!(
                    "  {} {}  {}",
                    "»".cyan(),
                    format!("{} (category)", category.name()).bold(),
                    format!("{}", relevance).dimmed()
                );
            }
            SearchHit::Item { item, relevance } => {
                print_item_line(item, Some(*relevance), verbose);
            }
        }
    }
}

fn print_item_line(item: &Item, relevance: Option<u8>, verbose: bool) {
    let id_str = item.id.to_string();
    let short_id = &id_str[..8];
    let tag = match item.status {
        ItemStatus::Lost => "[lost] ".red(),
        ItemStatus::Found => "[found]".green(),
    };

    let place = format!("{} · {}", item.category.name(), item.location.name());
    let time_ago = format_time_ago(item.created_at);

    let left = format!("  {} {} ", short_id, tag);
    // tag renders 7 cells; colored's escape codes have zero width on screen
    let left_width = 2 + short_id.width() + 1 + 7 + 1;
    let right = match relevance {
        Some(r) => format!(" {:>3}", r),
        None => String::new(),
    };

    let fixed = left_width + place.width() + 2 + right.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let title_display = truncate_to_width(&item.title, available);
    let padding = available.saturating_sub(title_display.width());

    println!(
        "{}{}{}  {}{}{}",
        left,
        title_display,
        " ".repeat(padding),
        place.dimmed(),
        right.dimmed(),
        time_ago.dimmed()
    );

    if verbose {
        println!("           {}", item.description.dimmed());
        println!(
            "           {} · {} {}",
            item.phone.dimmed(),
            "posted by".dimmed(),
            item.reg_no.dimmed()
        );
        if let Some(image) = &item.image {
            println!("           {}", image.dimmed());
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
