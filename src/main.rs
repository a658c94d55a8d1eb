use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

/// picganize - terminal catalogue for photographed personal items
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the system temp directory
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, /)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Import items from a JSON array file before starting
    #[arg(long)]
    import: Option<PathBuf>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod app;
mod config;
mod handlers;
mod services;
mod ui;

use config::Config;
use picganize::logic::{self, sections::ListEntry};
use picganize::model;
use picganize::store::StoreDb;
use services::store::{spawn_store_service, StoreRequest, StoreResponse};

fn debug_log_path() -> PathBuf {
    std::env::temp_dir().join("picganize-debug.log")
}

pub fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Current wall clock as epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Photo decode state for the detail screen, keyed by photo path
pub enum PhotoPreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
    },
    Failed {
        reason: String,
    },
}

impl std::fmt::Debug for PhotoPreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhotoPreviewState::Loading => write!(f, "PhotoPreviewState::Loading"),
            PhotoPreviewState::Ready { .. } => f
                .debug_struct("PhotoPreviewState::Ready")
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            PhotoPreviewState::Failed { reason } => f
                .debug_struct("PhotoPreviewState::Failed")
                .field("reason", reason)
                .finish(),
        }
    }
}

pub struct App {
    pub model: model::Model,

    store_tx: tokio::sync::mpsc::UnboundedSender<StoreRequest>,
    store_rx: tokio::sync::mpsc::UnboundedReceiver<StoreResponse>,

    image_picker: Option<ratatui_image::picker::Picker>,
    preview_tx: tokio::sync::mpsc::UnboundedSender<(String, PhotoPreviewState)>,
    preview_rx: tokio::sync::mpsc::UnboundedReceiver<(String, PhotoPreviewState)>,

    /// Maps photo paths to their preview states
    pub photo_states: HashMap<String, PhotoPreviewState>,

    // Monotonic guard for preference loads: only the latest request's
    // response is applied, stale ones are dropped
    pref_request_seq: u64,
    latest_pref_request: u64,
}

impl App {
    pub fn new(config: Config, import: Option<PathBuf>) -> Result<Self> {
        let mut db = StoreDb::new().context("Failed to open picganize database")?;

        // Optional bulk import before the UI comes up
        if let Some(path) = import {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read import file {:?}", path))?;
            let items: Vec<model::Item> = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid item JSON in {:?}", path))?;
            let count = db.import_items(&items)?;
            log_debug(&format!("Imported {} items from {:?}", count, path));
        }

        let (store_tx, store_rx) = spawn_store_service(db);
        let (preview_tx, preview_rx) = tokio::sync::mpsc::unbounded_channel();

        // Initialize photo preview protocol picker
        let image_picker = if config.photo_preview_enabled {
            let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    log_debug(&format!("Photo preview: failed to detect terminal: {}", e));
                    ratatui_image::picker::Picker::from_fontsize((8, 16)) // Fallback font size
                }
            };

            match config.photo_protocol.to_lowercase().as_str() {
                "auto" => {
                    // Protocol already auto-detected by from_query_stdio()
                }
                "iterm2" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2);
                }
                "kitty" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty);
                }
                "sixel" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel);
                }
                "halfblocks" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks);
                }
                other => {
                    log_debug(&format!("Unknown photo protocol '{}', using auto", other));
                }
            }

            Some(picker)
        } else {
            None
        };

        let mut app = App {
            model: model::Model::new(config.vim_mode),
            store_tx,
            store_rx,
            image_picker,
            preview_tx,
            preview_rx,
            photo_states: HashMap::new(),
            pref_request_seq: 0,
            latest_pref_request: 0,
        };

        // Kick off the initial snapshot and preference loads; the library
        // renders its loading state until both have answered once
        app.reload_items();
        app.request_sort_pref();

        Ok(app)
    }

    /// Run the sectioning pipeline over the current inputs.
    ///
    /// Recomputed on demand; the pipeline is cheap relative to rendering.
    pub fn current_list_entries(&self) -> Vec<ListEntry> {
        let today_start = logic::time::start_of_local_day_ms(now_ms());
        logic::sections::library_list(
            &self.model.catalog.items,
            &self.model.ui.search_query,
            self.model.ui.sort_mode,
            today_start,
        )
    }
}

fn get_config_path(cli_path: Option<String>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("picganize").join("config.yaml"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration; a missing file just means defaults
    let mut config = match get_config_path(args.config) {
        Some(path) if path.exists() => {
            let config_str = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {:?}", path))?;
            serde_yaml::from_str(&config_str)
                .with_context(|| format!("Invalid config {:?}", path))?
        }
        _ => Config::default(),
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    // Initialize app
    let mut app = App::new(config, args.import)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if let Some((_, timestamp)) = app.model.ui.toast_message {
            if logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis()) {
                app.model.ui.toast_message = None;
            }
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process store responses (non-blocking)
        while let Ok(response) = app.store_rx.try_recv() {
            app.handle_store_response(response);
        }

        // Process photo decode results from background tasks (non-blocking)
        while let Ok((photo_path, state)) = app.preview_rx.try_recv() {
            app.photo_states.insert(photo_path, state);
        }

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
