use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use log::warn;
use notez::api::{self, CmdMessage, ConfigAction, MessageLevel, NotezApi, NotezPaths};
use notez::config::NotezConfig;
use notez::editor::edit_buffers;
use notez::error::{NotezError, Result};
use notez::id::RandomTokens;
use notez::model::{InputBuffers, Note};
use notez::store::fs::FileSlots;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "NOTEZ_HOME";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Per-invocation state. The notes slot is opened on first use, so commands
/// that only touch config run even when the slot is malformed.
struct AppContext {
    paths: NotezPaths,
    config: NotezConfig,
    api: Option<NotezApi<FileSlots>>,
}

impl AppContext {
    fn new(data_dir: PathBuf) -> Self {
        let config = NotezConfig::load(&data_dir).unwrap_or_else(|e| {
            warn!("ignoring unreadable config: {}", e);
            NotezConfig::default()
        });
        Self {
            paths: NotezPaths { data_dir },
            config,
            api: None,
        }
    }

    fn api(&mut self) -> Result<&mut NotezApi<FileSlots>> {
        let api = match self.api.take() {
            Some(api) => api,
            None => {
                let storage = FileSlots::new(self.paths.data_dir.clone());
                let ids = RandomTokens::new(self.config.id_length);
                NotezApi::open(storage, ids, &self.config)?
            }
        };
        Ok(self.api.insert(api))
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(&cli)?;
    let mut ctx = AppContext::new(data_dir);

    match cli.command {
        Some(Commands::New { title, content }) => handle_new(&mut ctx, title, content),
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::View { id }) => handle_view(&mut ctx, &id),
        Some(Commands::Update { id, title, content }) => {
            handle_update(&mut ctx, &id, title, content)
        }
        Some(Commands::Edit { id }) => handle_edit(&mut ctx, &id),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Path) => handle_path(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(home) = std::env::var(HOME_ENV)
        && !home.is_empty()
    {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "notez", "notez")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NotezError::Config("Could not determine data directory".to_string()))
}

fn handle_new(ctx: &mut AppContext, title: Option<String>, content: Option<String>) -> Result<()> {
    let result = ctx.api()?.create_note(title, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api()?.list_notes()?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api()?.view_note(id)?;
    if let Some(active) = &result.active {
        print_full_note(&active.id, &active.buffers);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    if title.is_none() && content.is_none() {
        return Err(NotezError::Api(
            "Nothing to update: pass --title and/or --content".into(),
        ));
    }
    let result = ctx.api()?.update_note(id, title, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str) -> Result<()> {
    let viewed = ctx.api()?.view_note(id)?;
    let Some(active) = viewed.active else {
        return Ok(());
    };

    let edited = edit_buffers(&active.buffers)?;
    if edited == active.buffers {
        println!("{}", "No changes.".dimmed());
        return Ok(());
    }
    if edited.is_empty() {
        println!("{}", "Empty buffer, edit aborted.".yellow());
        return Ok(());
    }

    let result = ctx
        .api()?
        .update_note(id, Some(edited.title), Some(edited.content))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api()?.delete_notes(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api()?.slot_path()?;
    if let Some(path) = &result.slot_path {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = api::config(&ctx.paths, action)?;
    if show_all && let Some(config) = &result.config {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_full_note(id: &str, buffers: &InputBuffers) {
    println!("{} {}", id.yellow(), buffers.title.bold());
    println!("--------------------------------");
    println!("{}", buffers.content);
}

const LINE_WIDTH: usize = 100;
const PREVIEW_CHARS: usize = 50;

fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes yet. Create one with `notez new`.");
        return;
    }

    let id_width = notes.iter().map(|n| n.id.width()).max().unwrap_or(0);

    for note in notes {
        let preview: String = note
            .content
            .chars()
            .take(PREVIEW_CHARS)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = if preview.is_empty() {
            note.title.clone()
        } else {
            format!("{} {}", note.title, preview)
        };

        let available = LINE_WIDTH.saturating_sub(id_width + 4);
        let id_col = format!("{:<width$}", note.id, width = id_width);
        println!("  {}  {}", id_col.yellow(), truncate_to_width(&line, available));
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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
