use anyhow::{Context, Result};
use imagene::actions::{Action, GlobalAction};
use imagene::middleware::{KeyboardMiddleware, LoggingMiddleware, ValidationMiddleware};
use imagene::{views, AppState, RawAction, Store};
use imagene_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::cell::Cell;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

mod logger;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting imagene, logging to {}", log_file.display());

    let config = AppConfig::load();
    let mut store = Store::new(AppState::from_config(&config));

    // Middleware executes in this order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(ValidationMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));

    // Redraw only when the store published a new snapshot
    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    store.subscribe(Box::new(move |state: &Arc<AppState>| {
        log::trace!("State: {:?}", state);
        flag.set(true);
    }));

    // Optional script of raw actions to replay before handing over to the user
    if let Some(script) = std::env::args().nth(1) {
        replay_script(&mut store, Path::new(&script))?;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store, &dirty);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Error: {:#}", err);
    }

    log::info!("Exiting imagene");
    result
}

/// Dispatch one raw action per non-empty line; rejected lines are logged
/// and skipped
fn replay_script(store: &mut Store, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;

    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let outcome = line
            .parse::<RawAction>()
            .and_then(|raw| store.dispatch_raw(&raw));
        if let Err(e) = outcome {
            log::warn!("{}:{}: {}", path.display(), number + 1, e);
        }
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    dirty: &Cell<bool>,
) -> Result<()> {
    loop {
        if dirty.replace(false) {
            terminal.draw(|frame| {
                let area = frame.area();
                views::render(store.state(), area, frame);
            })?;
        }

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Resize(_, _) => dirty.set(true),
                _ => {}
            }
        }
    }

    Ok(())
}
