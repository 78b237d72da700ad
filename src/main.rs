use fexplorer::async_listing::SyncListingManager;
use fexplorer::cli::{AppConfig, Args};
use fexplorer::config::UserConfig;
use fexplorer::domain::{list_common_directories, list_directory, Item, NavigationState};
use fexplorer::logging::{self, LogSink};
use fexplorer::tui::{handle_key_event, item_label, render, BrowserView, Focus, KeyAction, ViewState};
use fexplorer::Result;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};

fn main() {
    // Parse command line arguments
    let args = Args::parse_args();

    let sink = match (&args.log_file, args.list) {
        (Some(path), _) => LogSink::File(path),
        (None, true) => LogSink::Stderr,
        (None, false) => LogSink::Disabled,
    };
    if let Err(e) = logging::init(sink) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Load user configuration
    let user_config = UserConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load user config: {}", e);
        UserConfig::default()
    });

    let config = AppConfig::resolve(args, &user_config);

    let result = if config.list_only {
        print_listing(&config)
    } else {
        run_app_with_config(&config)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Prints one listing to stdout and exits
fn print_listing(config: &AppConfig) -> Result<()> {
    use std::io::Write;

    let items = list_directory(&config.start_directory, config.filter);
    let mut stdout = io::stdout().lock();
    for item in &items {
        writeln!(stdout, "{}", item_label(item))?;
    }
    Ok(())
}

/// Runs the TUI application with configuration
pub fn run_app_with_config(config: &AppConfig) -> Result<()> {
    let shortcuts = if config.show_common_directories {
        list_common_directories()
    } else {
        Vec::new()
    };

    // Two-phase start: build the state, then submit its initial listing
    let mut state = NavigationState::new(
        config.start_directory.clone(),
        config.filter,
        config.policy,
    );
    let mut lister = SyncListingManager::new()?;
    lister.submit(state.request())?;
    info!("Browsing {}", state.current_path().display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_loop(&mut terminal, &mut state, &mut lister, &shortcuts);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    lister.shutdown();
    result
}

/// Main application loop
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut NavigationState,
    lister: &mut SyncListingManager,
    shortcuts: &[Item],
) -> Result<()> {
    let mut view = BrowserView::new();

    loop {
        if lister.drain_into(state) {
            view.clamp(state.items().len(), shortcuts.len());
        }

        terminal.draw(|frame| render(frame, state, shortcuts, &view))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        // Any key closes help
        if view.view_state == ViewState::Help {
            view.view_state = ViewState::Browsing;
            continue;
        }

        match handle_key_event(key) {
            KeyAction::Quit => break,
            KeyAction::Help => view.view_state = ViewState::Help,
            KeyAction::Up => view.move_up(),
            KeyAction::Down => view.move_down(state.items().len(), shortcuts.len()),
            KeyAction::ToggleFocus => view.toggle_focus(!shortcuts.is_empty()),
            KeyAction::Filter(filter) => {
                lister.submit(state.request_filter(filter))?;
                view.cursor = 0;
            }
            KeyAction::Open => {
                let request = match view.focus {
                    Focus::Listing => view
                        .selected(state)
                        .cloned()
                        .and_then(|item| state.request_item(&item)),
                    Focus::Shortcuts => shortcuts
                        .get(view.shortcut_cursor)
                        .map(|item| state.request_directory(item.path.clone())),
                };
                if let Some(request) = request {
                    lister.submit(request)?;
                    view.entered_directory();
                }
            }
            KeyAction::Parent => {
                if let Some(request) = state.request_parent() {
                    lister.submit(request)?;
                    view.entered_directory();
                }
            }
            KeyAction::Home => {
                lister.submit(state.request_home())?;
                view.entered_directory();
            }
            KeyAction::Refresh => lister.submit(state.request_refresh())?,
            KeyAction::None => {}
        }
    }

    Ok(())
}
