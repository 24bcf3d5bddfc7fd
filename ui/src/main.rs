use anyhow::{Context, anyhow};
use clap::Parser;
use docnav::app::{Model, ModelSettings, Notice};
use docnav::cli::{Cli, Command, parse_interactive_line};
use docnav::clipboard::SystemClipboard;
use docnav::components::common::{CopyActivityMsg, Msg};
use docnav::config::{AppConfig, init_config};
use docnav::error::{AppError, report_startup_failure};
use docnav::logger::setup_logger;
use docnav::page::PageDocument;
use docnav::theme::FileThemeStore;
use engine::clipboard::ClipboardService;
use engine::theme::ThemeStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = init_config(cli.config.as_deref())
        .as_result()
        .map_err(|e| {
            anyhow!(report_startup_failure(
                AppError::Config(e),
                "load_config",
                "The configuration could not be loaded"
            ))
        })?;

    if let Err(e) = setup_logger(app_config.logging()) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let page_path = page_path(&cli, app_config)?;
    let page = PageDocument::load(&page_path).map_err(|e| {
        anyhow!(report_startup_failure(
            e,
            "load_page",
            "The page document could not be loaded"
        ))
    })?;
    let settings = ModelSettings::from_config(app_config).map_err(|e| {
        anyhow!(report_startup_failure(
            e,
            "apply_config",
            "The configuration contains settings the page cannot use"
        ))
    })?;

    let store = match &app_config.theme().storage_file {
        Some(file) => FileThemeStore::new(file),
        None => FileThemeStore::in_config_dir(),
    };

    let mut model = Model::new(page, settings, store, SystemClipboard::new());

    match &cli.command {
        Command::Interactive => run_interactive(&mut model)?,
        command => {
            if let Some(msg) = command.to_msg() {
                model.process(msg);
            }
            print_result(&mut model, command, cli.json)?;
        }
    }

    print_notices(model.take_notices());
    Ok(())
}

fn page_path(cli: &Cli, app_config: &AppConfig) -> anyhow::Result<PathBuf> {
    cli.page
        .clone()
        .or_else(|| app_config.page().map(PathBuf::from))
        .context("No page document given; pass --page or set `page` in docnav.toml")
}

fn print_result<S, C>(model: &mut Model<S, C>, command: &Command, json: bool) -> anyhow::Result<()>
where
    S: ThemeStore,
    C: ClipboardService,
{
    if !json {
        match command {
            Command::Theme { .. } => println!("{}", model.theme.theme()),
            _ => println!("{}", model.view()),
        }
        return Ok(());
    }

    let active: Vec<&str> = model
        .tree
        .active_entries()
        .into_iter()
        .filter_map(|id| model.tree.entries().get(id.0))
        .map(|entry| entry.target.as_str())
        .collect();
    let copy = match command {
        Command::Copy { block } => model.tree.copy_indicator(block),
        _ => None,
    };

    let report = serde_json::json!({
        "plan": &model.plan,
        "active": active,
        "scrolled_to": model.tree.scrolled_to(),
        "theme": model.theme.theme(),
        "copy": copy,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_interactive<S, C>(model: &mut Model<S, C>) -> anyhow::Result<()>
where
    S: ThemeStore,
    C: ClipboardService,
{
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", model.view());
    while !model.quit {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        model.process(Msg::CopyActivity(CopyActivityMsg::Tick(Instant::now())));
        match parse_interactive_line(&line) {
            Some(msg) => model.process(msg),
            None => {
                if !line.trim().is_empty() {
                    eprintln!("Unknown command: {}", line.trim());
                }
                continue;
            }
        }

        print_notices(model.take_notices());
        if model.redraw && !model.quit {
            println!("{}", model.view());
            model.redraw = false;
        }
    }
    Ok(())
}

fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        match notice {
            Notice::Warning(message) => eprintln!("warning: {message}"),
            Notice::Error(error) => eprintln!("error: {error}"),
        }
    }
}
